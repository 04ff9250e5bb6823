//! # Policy Subcommand
//!
//! Inspect and check tax policy files.
//!
//! ## Commands
//!
//! - `taxmate policy show [--format yaml|json]`: Print the active policy
//!   (the `--policy` file, or the compiled-in 2024 single-filer schedule).
//! - `taxmate policy check <POLICY_FILE>`: Parse and validate a policy file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use taxmate_calc::TaxPolicy;

use crate::input::load_policy;

/// Arguments for the `taxmate policy` subcommand.
#[derive(Args, Debug)]
pub struct PolicyArgs {
    #[command(subcommand)]
    pub command: PolicyCommand,
}

/// Policy subcommands.
#[derive(Subcommand, Debug)]
pub enum PolicyCommand {
    /// Print the active policy.
    Show {
        /// Output format.
        #[arg(long, value_enum, default_value_t = PolicyFormat::Yaml)]
        format: PolicyFormat,
    },

    /// Validate a policy file.
    Check {
        /// Path to the policy file (.yaml, .yml or .json).
        file: PathBuf,
    },
}

/// Serialization formats for `policy show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyFormat {
    /// YAML document.
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Execute the policy subcommand.
pub fn run_policy(args: &PolicyArgs, policy: &TaxPolicy) -> Result<u8> {
    match &args.command {
        PolicyCommand::Show { format } => {
            print!("{}", render_policy(policy, *format)?);
            Ok(0)
        }
        PolicyCommand::Check { file } => {
            let checked = load_policy(Some(file.as_path()))?;
            println!("{}", check_report(&checked));
            Ok(0)
        }
    }
}

/// Serialize a policy.
pub fn render_policy(policy: &TaxPolicy, format: PolicyFormat) -> Result<String> {
    let out = match format {
        PolicyFormat::Yaml => serde_yaml::to_string(policy)?,
        PolicyFormat::Json => {
            let mut json = serde_json::to_string_pretty(policy)?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

/// One-line confirmation for a valid policy.
pub fn check_report(policy: &TaxPolicy) -> String {
    format!(
        "OK: policy '{}' is valid ({} brackets, standard deduction {})",
        policy.name,
        policy.brackets.len(),
        policy.standard_deduction
    )
}
