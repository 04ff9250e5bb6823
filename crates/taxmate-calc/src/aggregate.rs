//! # Income Aggregation
//!
//! Folds verified documents into per-category accumulators. Dispatch is an
//! exhaustive `match` on `FormType`, so a new form type cannot be added
//! without deciding what it contributes.
//!
//! Field names are the labels the analysis collaborator extracts:
//!
//! | Form | Income field(s) | Withholding field |
//! |------|-----------------|-------------------|
//! | W-2 | `Wages, Tips` | `Fed Income Tax` |
//! | 1099-NEC | `Nonemployee Comp` | `Fed Tax Withheld` |
//! | 1099-DIV | `Total Ordinary Dividends` | `Federal Income Tax Withheld` |
//! | 1099-INT | `Interest Income` | `Federal Income Tax Withheld` |
//! | Schedule K-1 | `Ordinary Business Income` + `Net Rental Real Estate Income` | none |
//!
//! Receipts add `Amount` to itemized deductions and never touch income.

use taxmate_core::{FormType, TaxDocument};

pub const FIELD_W2_WAGES: &str = "Wages, Tips";
pub const FIELD_W2_WITHHELD: &str = "Fed Income Tax";
pub const FIELD_NEC_COMPENSATION: &str = "Nonemployee Comp";
pub const FIELD_NEC_WITHHELD: &str = "Fed Tax Withheld";
pub const FIELD_DIV_ORDINARY: &str = "Total Ordinary Dividends";
pub const FIELD_INT_INTEREST: &str = "Interest Income";
pub const FIELD_1099_WITHHELD: &str = "Federal Income Tax Withheld";
pub const FIELD_K1_BUSINESS: &str = "Ordinary Business Income";
pub const FIELD_K1_RENTAL: &str = "Net Rental Real Estate Income";
pub const FIELD_RECEIPT_AMOUNT: &str = "Amount";

/// Accumulated amounts from all aggregatable documents.
///
/// `total_income` is accumulated in document order alongside the
/// per-category subtotals rather than re-summed from them, so the total is
/// independent of how the subtotals are grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IncomeTotals {
    /// Sum over all income-bearing documents.
    pub total_income: f64,
    /// W-2 wages.
    pub w2: f64,
    /// 1099-NEC nonemployee compensation.
    pub nec: f64,
    /// 1099-DIV ordinary dividends.
    pub dividends: f64,
    /// 1099-INT interest.
    pub interest: f64,
    /// Schedule K-1 business + rental income.
    pub k1: f64,
    /// Federal tax already withheld.
    pub withheld: f64,
    /// Sum of receipt amounts.
    pub itemized_deductions: f64,
}

impl IncomeTotals {
    /// Aggregate a document collection.
    pub fn from_documents(documents: &[TaxDocument]) -> Self {
        let mut totals = Self::default();
        for document in documents {
            totals.add(document);
        }
        totals
    }

    /// Fold one document in. Documents that are not verified or carry no
    /// extracted data contribute nothing.
    pub fn add(&mut self, document: &TaxDocument) {
        if !document.is_aggregatable() {
            return;
        }
        let Some(data) = document.extracted_data.as_ref() else {
            return;
        };

        match document.form_type {
            FormType::W2 => {
                let wages = data.amount(FIELD_W2_WAGES);
                self.total_income += wages;
                self.w2 += wages;
                self.withheld += data.amount(FIELD_W2_WITHHELD);
            }
            FormType::Form1099Nec => {
                let compensation = data.amount(FIELD_NEC_COMPENSATION);
                self.total_income += compensation;
                self.nec += compensation;
                self.withheld += data.amount(FIELD_NEC_WITHHELD);
            }
            FormType::Form1099Div => {
                let dividends = data.amount(FIELD_DIV_ORDINARY);
                self.total_income += dividends;
                self.dividends += dividends;
                self.withheld += data.amount(FIELD_1099_WITHHELD);
            }
            FormType::Form1099Int => {
                let interest = data.amount(FIELD_INT_INTEREST);
                self.total_income += interest;
                self.interest += interest;
                self.withheld += data.amount(FIELD_1099_WITHHELD);
            }
            FormType::ScheduleK1 => {
                let k1 = data.amount(FIELD_K1_BUSINESS) + data.amount(FIELD_K1_RENTAL);
                self.total_income += k1;
                self.k1 += k1;
            }
            FormType::Receipt => {
                self.itemized_deductions += data.amount(FIELD_RECEIPT_AMOUNT);
            }
            FormType::Form1040 | FormType::Unknown => {}
        }
    }
}
