//! # Review Subcommand
//!
//! `taxmate review <DOCUMENTS_JSON>`
//!
//! Prints the Form 1040 review for the documents. A return that is not yet
//! `Review Ready` is still printed, with a warning, since the figures are
//! useful while documents are pending.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use taxmate_assist::ReturnReview;
use taxmate_calc::{FilingStatus, TaxPolicy};

use crate::input::open_session;

/// Arguments for the `taxmate review` subcommand.
#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Path to the documents JSON file.
    pub documents: PathBuf,
}

/// Execute the review subcommand.
pub fn run_review(args: &ReviewArgs, policy: &TaxPolicy) -> Result<u8> {
    let session = open_session(&args.documents, policy)?;
    let summary = session.summary();
    if summary.filing_status != FilingStatus::ReviewReady {
        tracing::warn!(
            status = %summary.filing_status,
            "return is not ready for review; figures are provisional"
        );
    }
    print!("{}", ReturnReview::from_summary(summary));
    Ok(0)
}
