//! # Tax Summary
//!
//! `TaxCalculator::summarize()` is the pure projection from a document
//! collection to a `TaxSummary`:
//!
//! 1. aggregate income, withholding, and receipts ([`IncomeTotals`]);
//! 2. deductions = `max(standard, itemized)`;
//! 3. taxable income = `max(0, income − deductions)`;
//! 4. progressive tax under the policy's bracket table;
//! 5. refund = `withheld − tax` (negative means owed);
//! 6. derive readiness and the compliance score;
//! 7. build the chart breakdowns.
//!
//! Tax and refund are rounded once, at output; every intermediate figure
//! stays unrounded.

use serde::{Deserialize, Serialize};
use taxmate_core::{DocumentStatus, TaxDocument};

use crate::aggregate::IncomeTotals;
use crate::breakdown::{deduction_breakdown, income_breakdown, BreakdownEntry};
use crate::compliance::compliance_score;
use crate::policy::TaxPolicy;

/// Readiness of the return, derived from the document collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    /// No documents uploaded.
    #[serde(rename = "Not Started")]
    NotStarted,
    /// At least one document is still uploading, analyzing, or failed.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Every document is verified.
    #[serde(rename = "Review Ready")]
    ReviewReady,
    /// Submitted through the external submission action (terminal).
    #[serde(rename = "Filed")]
    Filed,
}

impl FilingStatus {
    /// Derive readiness from the documents. Never returns `Filed`.
    pub fn derive(documents: &[TaxDocument]) -> Self {
        if documents.is_empty() {
            Self::NotStarted
        } else if documents
            .iter()
            .all(|d| d.status == DocumentStatus::Verified)
        {
            Self::ReviewReady
        } else {
            Self::InProgress
        }
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::ReviewReady => "Review Ready",
            Self::Filed => "Filed",
        }
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Financial summary of the current document collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSummary {
    /// Sum across all income-bearing documents.
    pub total_income: f64,
    /// The larger of the standard deduction and itemized receipts.
    pub deductions: f64,
    /// Progressive tax on taxable income, rounded to whole units.
    pub estimated_tax: i64,
    /// Withheld minus estimated tax, rounded; negative means owed.
    pub estimated_refund: i64,
    /// Derived readiness.
    pub filing_status: FilingStatus,
    /// Document-quality heuristic in `[0, 100]`.
    pub compliance_score: u8,
    /// Income chart series.
    pub income_breakdown: Vec<BreakdownEntry>,
    /// Deduction chart series (single entry).
    pub deduction_breakdown: Vec<BreakdownEntry>,
}

impl TaxSummary {
    /// Income remaining after deductions, floored at zero.
    pub fn taxable_income(&self) -> f64 {
        (self.total_income - self.deductions).max(0.0)
    }

    /// Tax already withheld, as reconstructed from the rounded figures.
    ///
    /// Saturates at the `i64` bounds, like the rounded figures themselves.
    pub fn withheld_tax(&self) -> i64 {
        self.estimated_tax.saturating_add(self.estimated_refund)
    }

    /// Whether the filer is owed money back.
    pub fn is_refund(&self) -> bool {
        self.estimated_refund >= 0
    }
}

/// Applies a [`TaxPolicy`] to document collections.
#[derive(Debug, Clone, Default)]
pub struct TaxCalculator {
    policy: TaxPolicy,
}

impl TaxCalculator {
    /// Create a calculator for the given policy.
    pub fn new(policy: TaxPolicy) -> Self {
        Self { policy }
    }

    /// The policy in effect.
    pub fn policy(&self) -> &TaxPolicy {
        &self.policy
    }

    /// Compute the summary for `documents`. Total: never fails, never panics.
    pub fn summarize(&self, documents: &[TaxDocument]) -> TaxSummary {
        let totals = IncomeTotals::from_documents(documents);
        let standard = self.policy.standard_deduction;

        let deductions = standard.max(totals.itemized_deductions);
        let taxable_income = (totals.total_income - deductions).max(0.0);
        let tax = self.policy.tax_on(taxable_income);
        let refund = totals.withheld - tax;

        let summary = TaxSummary {
            total_income: totals.total_income,
            deductions,
            estimated_tax: round_half_up(tax),
            estimated_refund: round_half_up(refund),
            filing_status: FilingStatus::derive(documents),
            compliance_score: compliance_score(documents),
            income_breakdown: income_breakdown(&totals),
            deduction_breakdown: deduction_breakdown(standard, totals.itemized_deductions),
        };

        tracing::debug!(
            documents = documents.len(),
            total_income = summary.total_income,
            deductions = summary.deductions,
            taxable_income,
            estimated_tax = summary.estimated_tax,
            estimated_refund = summary.estimated_refund,
            filing_status = %summary.filing_status,
            "computed tax summary"
        );

        summary
    }
}

/// Compute the summary under the default (2024 single filer) policy.
pub fn calculate_tax_summary(documents: &[TaxDocument]) -> TaxSummary {
    TaxCalculator::default().summarize(documents)
}

/// Round to the nearest whole unit, halves toward positive infinity
/// (`2.5 → 3`, `-2.5 → -2`).
///
/// Values beyond the `i64` range clamp to `i64::MIN`/`i64::MAX`; NaN maps
/// to 0 (the semantics of an `as` cast from `f64`).
fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
