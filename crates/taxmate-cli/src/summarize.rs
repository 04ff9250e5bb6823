//! # Summarize Subcommand
//!
//! `taxmate summarize <DOCUMENTS_JSON> [--format text|json]`
//!
//! Loads the documents into a filing session and prints the derived tax
//! summary. The JSON form is the camelCase `TaxSummary` the dashboard
//! consumes; the text form is a human-readable digest.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use taxmate_assist::format_dollars;
use taxmate_calc::{TaxPolicy, TaxSummary};

use crate::input::open_session;

/// Arguments for the `taxmate summarize` subcommand.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Path to the documents JSON file.
    pub documents: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub format: SummaryFormat,
}

/// Output formats for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable digest.
    Text,
    /// Pretty-printed `TaxSummary` JSON.
    Json,
}

/// Execute the summarize subcommand.
pub fn run_summarize(args: &SummarizeArgs, policy: &TaxPolicy) -> Result<u8> {
    let session = open_session(&args.documents, policy)?;
    print!("{}", render_summary(session.summary(), policy, args.format)?);
    Ok(0)
}

/// Render a summary in the requested format. The text form also reports
/// the marginal rate under `policy`.
pub fn render_summary(
    summary: &TaxSummary,
    policy: &TaxPolicy,
    format: SummaryFormat,
) -> Result<String> {
    match format {
        SummaryFormat::Json => {
            let mut out = serde_json::to_string_pretty(summary)?;
            out.push('\n');
            Ok(out)
        }
        SummaryFormat::Text => Ok(render_text(summary, policy)),
    }
}

fn render_text(summary: &TaxSummary, policy: &TaxPolicy) -> String {
    let mut out = String::new();
    let outcome = if summary.is_refund() {
        "Estimated refund"
    } else {
        "Amount owed"
    };

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Filing status:     {}", summary.filing_status);
    let _ = writeln!(out, "Total income:      {}", format_dollars(summary.total_income));
    let _ = writeln!(out, "Deductions:        {}", format_dollars(summary.deductions));
    let _ = writeln!(
        out,
        "Taxable income:    {}",
        format_dollars(summary.taxable_income())
    );
    let _ = writeln!(
        out,
        "Estimated tax:     {}",
        format_dollars(summary.estimated_tax as f64)
    );
    // Basis points, so 0.22 prints as 22 rather than 22.000000000000004.
    let marginal = (policy.marginal_rate(summary.taxable_income()) * 10_000.0).round() / 100.0;
    let _ = writeln!(out, "Marginal rate:     {marginal}%");
    let _ = writeln!(
        out,
        "{:<19}{}",
        format!("{outcome}:"),
        format_dollars(summary.estimated_refund.unsigned_abs() as f64)
    );
    let _ = writeln!(out, "Compliance score:  {}/100", summary.compliance_score);

    let _ = writeln!(out, "\nIncome breakdown:");
    for entry in &summary.income_breakdown {
        let _ = writeln!(out, "  {:<20}{:>12}", entry.name, format_dollars(entry.value));
    }
    let _ = writeln!(out, "Deduction breakdown:");
    for entry in &summary.deduction_breakdown {
        let _ = writeln!(out, "  {:<20}{:>12}", entry.name, format_dollars(entry.value));
    }
    out
}
