//! # Compliance Score
//!
//! A 0–100 document-quality heuristic. Starts at 100 and only decreases:
//!
//! - −20 if any document failed (`error`);
//! - −10 if any verified document could not be classified (`Unknown`);
//! - exactly 0 when there are no documents at all.
//!
//! The result is clamped to `[0, 100]`, so stacking further penalties can
//! never push it below zero.

use taxmate_core::{DocumentStatus, FormType, TaxDocument};

/// Perfect score before penalties.
pub const MAX_SCORE: u8 = 100;
/// Penalty when any document is in the `error` state.
pub const ERROR_PENALTY: u8 = 20;
/// Penalty when any verified document is `Unknown`.
pub const UNKNOWN_FORM_PENALTY: u8 = 10;

/// Compute the compliance score for a document collection.
pub fn compliance_score(documents: &[TaxDocument]) -> u8 {
    if documents.is_empty() {
        return 0;
    }

    let mut score = MAX_SCORE;
    if documents.iter().any(|d| d.status == DocumentStatus::Error) {
        score = score.saturating_sub(ERROR_PENALTY);
    }
    if documents
        .iter()
        .any(|d| d.status == DocumentStatus::Verified && d.form_type == FormType::Unknown)
    {
        score = score.saturating_sub(UNKNOWN_FORM_PENALTY);
    }
    score
}
