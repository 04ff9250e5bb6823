//! # taxmate-calc — Tax Summary Calculator
//!
//! The computational core of Taxmate: a pure, stateless projection
//! `documents[] → TaxSummary`.
//!
//! - **Aggregation** (`aggregate.rs`): per-form income, withholding, and
//!   itemized deduction accumulators over verified documents.
//! - **Policy** (`policy.rs`): standard deduction and progressive bracket
//!   table, defaulting to the 2024 single-filer schedule.
//! - **Compliance** (`compliance.rs`): the 0–100 document-quality heuristic.
//! - **Breakdown** (`breakdown.rs`): chart-ready income and deduction series.
//! - **Summary** (`summary.rs`): `TaxSummary`, `FilingStatus`, and the
//!   `TaxCalculator` that ties the pieces together.
//!
//! ## Invariants
//!
//! - Same documents + same policy ⇒ bit-identical summary. There is no
//!   hidden state; every call recomputes from scratch.
//! - Total over its input: malformed or missing fields degrade to zero,
//!   an empty collection yields the all-zero `Not Started` summary.
//! - The calculator never reports `Filed`; that status belongs to the
//!   external submission action.

pub mod aggregate;
pub mod breakdown;
pub mod compliance;
pub mod policy;
pub mod summary;

pub use aggregate::IncomeTotals;
pub use breakdown::BreakdownEntry;
pub use compliance::compliance_score;
pub use policy::{PolicyError, TaxBracket, TaxPolicy, STANDARD_DEDUCTION_2024_SINGLE};
pub use summary::{calculate_tax_summary, FilingStatus, TaxCalculator, TaxSummary};
