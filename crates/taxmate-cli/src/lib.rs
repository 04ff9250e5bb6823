//! # taxmate-cli — Command-line Front End
//!
//! Provides the `taxmate` binary over the calculator, the filing session,
//! and the assistant projections.
//!
//! ## Subcommands
//!
//! - `taxmate summarize`: Tax summary of a document collection (text or JSON).
//! - `taxmate review`: Form 1040 review lines.
//! - `taxmate context`: Assistant grounding snapshot or full instruction.
//! - `taxmate policy`: Print the active policy or check a policy file.
//!
//! ```bash
//! taxmate summarize documents.json --format json
//! taxmate --policy policy-2024.yaml review documents.json
//! taxmate policy check policy-2024.yaml
//! ```
//!
//! Results go to stdout; diagnostics go to stderr through `tracing`.

pub mod context;
pub mod input;
pub mod policy;
pub mod review;
pub mod summarize;

pub use input::{load_documents, load_policy, parse_documents, parse_policy};
