//! # taxmate CLI entry point
//!
//! Parses command-line arguments, initializes logging, loads the active tax
//! policy, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taxmate_cli::context::{run_context, ContextArgs};
use taxmate_cli::load_policy;
use taxmate_cli::policy::{run_policy, PolicyArgs};
use taxmate_cli::review::{run_review, ReviewArgs};
use taxmate_cli::summarize::{run_summarize, SummarizeArgs};

/// Taxmate tax summary toolkit
///
/// Computes the federal tax summary for a collection of analyzed tax
/// documents, renders the Form 1040 review and the assistant context, and
/// manages the bracket policy the calculation runs under.
#[derive(Parser, Debug)]
#[command(name = "taxmate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Tax policy file (.yaml, .yml or .json). Defaults to 2024 single filer.
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the tax summary for a documents file.
    Summarize(SummarizeArgs),

    /// Print the Form 1040 review for a documents file.
    Review(ReviewArgs),

    /// Print the assistant grounding context for a documents file.
    Context(ContextArgs),

    /// Show the active policy or check a policy file.
    Policy(PolicyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!("taxmate CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = load_policy(cli.policy.as_deref()).and_then(|policy| match &cli.command {
        Commands::Summarize(args) => run_summarize(args, &policy),
        Commands::Review(args) => run_review(args, &policy),
        Commands::Context(args) => run_context(args, &policy),
        Commands::Policy(args) => run_policy(args, &policy),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise verbosity picks the level.
fn log_filter(verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(verbose: u8, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
