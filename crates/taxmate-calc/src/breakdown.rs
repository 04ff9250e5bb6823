//! # Chart Breakdowns
//!
//! Presentation-ready series for the dashboard charts. Each entry carries
//! a label, an amount, and a fixed display color. Consumers never receive
//! an empty income series: with no income, a single `No Income` placeholder
//! of value 1 is emitted.

use serde::{Deserialize, Serialize};

use crate::aggregate::IncomeTotals;

pub const COLOR_W2: &str = "#3b82f6";
pub const COLOR_NEC: &str = "#8b5cf6";
pub const COLOR_DIVIDENDS: &str = "#0ea5e9";
pub const COLOR_INTEREST: &str = "#14b8a6";
pub const COLOR_K1: &str = "#f43f5e";
pub const COLOR_NO_INCOME: &str = "#e2e8f0";
pub const COLOR_STANDARD_DEDUCTION: &str = "#10b981";
pub const COLOR_BUSINESS_EXPENSES: &str = "#f59e0b";

/// One slice of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    /// Display label.
    pub name: String,
    /// Amount for this slice.
    pub value: f64,
    /// Hex display color.
    pub color: String,
}

impl BreakdownEntry {
    fn new(name: &str, value: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

/// Income series: every positive subtotal in fixed category order, or the
/// `No Income` placeholder.
pub fn income_breakdown(totals: &IncomeTotals) -> Vec<BreakdownEntry> {
    let mut entries: Vec<BreakdownEntry> = [
        ("W-2 Wages", totals.w2, COLOR_W2),
        ("1099-NEC", totals.nec, COLOR_NEC),
        ("Dividends", totals.dividends, COLOR_DIVIDENDS),
        ("Interest", totals.interest, COLOR_INTEREST),
        ("K-1 Income", totals.k1, COLOR_K1),
    ]
    .into_iter()
    .filter(|(_, value, _)| *value > 0.0)
    .map(|(name, value, color)| BreakdownEntry::new(name, value, color))
    .collect();

    if entries.is_empty() {
        entries.push(BreakdownEntry::new("No Income", 1.0, COLOR_NO_INCOME));
    }
    entries
}

/// Deduction series: exactly one entry naming the strategy that was chosen.
///
/// Itemizing is chosen only when itemized deductions strictly exceed the
/// standard deduction.
pub fn deduction_breakdown(standard_deduction: f64, itemized: f64) -> Vec<BreakdownEntry> {
    if itemized > standard_deduction {
        vec![BreakdownEntry::new(
            "Business Expenses",
            itemized,
            COLOR_BUSINESS_EXPENSES,
        )]
    } else {
        vec![BreakdownEntry::new(
            "Standard Deduction",
            standard_deduction,
            COLOR_STANDARD_DEDUCTION,
        )]
    }
}
