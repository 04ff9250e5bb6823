//! # Assistant Context Snapshot
//!
//! The conversational assistant is grounded with a short plain-text
//! snapshot of the current summary, appended to its system instruction:
//!
//! ```text
//! Total Income: $85000
//! Deductions: $14600
//! Taxable Income: $70400
//! Estimated Tax: $10541
//! Current Refund Status: $1959
//! Filing Status: Review Ready
//! ```
//!
//! Rebuilding the assistant session discards the conversation, so the
//! context is refreshed only when total income or the estimated refund
//! change; other summary changes do not warrant a reset.

use serde::{Deserialize, Serialize};
use taxmate_calc::{FilingStatus, TaxSummary};

/// Standing instruction for the tax assistant, before any user data.
pub const BASE_INSTRUCTION: &str = "\
You are Taxmate, a tax preparation assistant.
Help the user file an accurate return, find deductions they qualify for, and stay compliant with IRS rules.
Be precise, professional, and concise.

You can:
1. Explain tax concepts in plain language.
2. Discuss the documents the user has uploaded.
3. Suggest deductions based on what the user tells you.
4. Point out audit risks.

When a question depends on an unusual provision of tax law, recommend that the user confirm it with a CPA.";

const USER_DATA_HEADER: &str = "CURRENT USER TAX DATA:";

/// The summary figures the assistant is grounded on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSnapshot {
    /// Total income.
    pub total_income: f64,
    /// Deductions taken.
    pub deductions: f64,
    /// Income after deductions, floored at zero.
    pub taxable_income: f64,
    /// Estimated tax.
    pub estimated_tax: i64,
    /// Refund (positive) or amount owed (negative).
    pub estimated_refund: i64,
    /// Readiness label.
    pub filing_status: FilingStatus,
}

impl ContextSnapshot {
    /// Capture the figures from a summary.
    pub fn from_summary(summary: &TaxSummary) -> Self {
        Self {
            total_income: summary.total_income,
            deductions: summary.deductions,
            taxable_income: summary.taxable_income(),
            estimated_tax: summary.estimated_tax,
            estimated_refund: summary.estimated_refund,
            filing_status: summary.filing_status,
        }
    }

    /// Whether the assistant should be re-grounded on `self` after having
    /// been grounded on `previous`.
    pub fn needs_refresh(&self, previous: &ContextSnapshot) -> bool {
        self.total_income != previous.total_income
            || self.estimated_refund != previous.estimated_refund
    }
}

impl std::fmt::Display for ContextSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Income: ${}", self.total_income)?;
        writeln!(f, "Deductions: ${}", self.deductions)?;
        writeln!(f, "Taxable Income: ${}", self.taxable_income)?;
        writeln!(f, "Estimated Tax: ${}", self.estimated_tax)?;
        writeln!(f, "Current Refund Status: ${}", self.estimated_refund)?;
        write!(f, "Filing Status: {}", self.filing_status)
    }
}

/// The full system instruction, with the user's figures appended when
/// available.
pub fn system_instruction(context: Option<&ContextSnapshot>) -> String {
    match context {
        Some(snapshot) => format!("{BASE_INSTRUCTION}\n\n{USER_DATA_HEADER}\n{snapshot}"),
        None => BASE_INSTRUCTION.to_string(),
    }
}
