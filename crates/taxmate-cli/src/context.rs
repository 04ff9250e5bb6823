//! # Context Subcommand
//!
//! `taxmate context <DOCUMENTS_JSON> [--instruction]`
//!
//! Prints the grounding snapshot the conversational assistant receives for
//! the documents, or with `--instruction` the complete system instruction.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use taxmate_assist::{system_instruction, ContextSnapshot};
use taxmate_calc::TaxPolicy;

use crate::input::open_session;

/// Arguments for the `taxmate context` subcommand.
#[derive(Args, Debug)]
pub struct ContextArgs {
    /// Path to the documents JSON file.
    pub documents: PathBuf,

    /// Print the full system instruction instead of the snapshot alone.
    #[arg(long)]
    pub instruction: bool,
}

/// Execute the context subcommand.
pub fn run_context(args: &ContextArgs, policy: &TaxPolicy) -> Result<u8> {
    let session = open_session(&args.documents, policy)?;
    let snapshot = ContextSnapshot::from_summary(session.summary());
    println!("{}", render_context(&snapshot, args.instruction));
    Ok(0)
}

/// The snapshot text, optionally embedded in the system instruction.
pub fn render_context(snapshot: &ContextSnapshot, instruction: bool) -> String {
    if instruction {
        system_instruction(Some(snapshot))
    } else {
        snapshot.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxmate_assist::BASE_INSTRUCTION;
    use taxmate_calc::calculate_tax_summary;

    #[test]
    fn test_snapshot_only() {
        let snapshot = ContextSnapshot::from_summary(&calculate_tax_summary(&[]));
        let text = render_context(&snapshot, false);
        assert!(text.starts_with("Total Income: $0\n"));
        assert!(!text.contains(BASE_INSTRUCTION));
    }

    #[test]
    fn test_full_instruction() {
        let snapshot = ContextSnapshot::from_summary(&calculate_tax_summary(&[]));
        let text = render_context(&snapshot, true);
        assert!(text.starts_with(BASE_INSTRUCTION));
        assert!(text.ends_with("Filing Status: Not Started"));
    }
}
