//! # Input Loading
//!
//! Reads the two files the CLI accepts:
//!
//! - a documents file: a JSON array of documents, or an object whose
//!   `documents` key holds that array;
//! - a policy file: YAML (`.yaml`, `.yml`) or JSON (`.json`), chosen by
//!   extension and validated before use.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use taxmate_calc::TaxPolicy;
use taxmate_core::TaxDocument;
use taxmate_state::FilingSession;

/// Parse a documents file body.
pub fn parse_documents(content: &str) -> Result<Vec<TaxDocument>> {
    let value: Value = serde_json::from_str(content).context("documents file is not valid JSON")?;
    let list = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("documents") {
            Some(list @ Value::Array(_)) => list,
            Some(_) => bail!("`documents` must be an array"),
            None => bail!("expected a JSON array or an object with a `documents` array"),
        },
        _ => bail!("expected a JSON array or an object with a `documents` array"),
    };
    serde_json::from_value(list).context("invalid document entry")
}

/// Read and parse a documents file.
pub fn load_documents(path: &Path) -> Result<Vec<TaxDocument>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read documents file: {}", path.display()))?;
    let documents = parse_documents(&content)
        .with_context(|| format!("failed to parse documents file: {}", path.display()))?;
    tracing::info!(path = %path.display(), documents = documents.len(), "loaded documents");
    Ok(documents)
}

/// Parse a policy body in the format implied by `path`'s extension.
pub fn parse_policy(path: &Path, content: &str) -> Result<TaxPolicy> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let policy = match extension.as_deref() {
        Some("yaml") | Some("yml") => TaxPolicy::from_yaml_str(content)?,
        Some("json") => TaxPolicy::from_json_str(content)?,
        _ => bail!(
            "unsupported policy file extension (expected .yaml, .yml or .json): {}",
            path.display()
        ),
    };
    Ok(policy)
}

/// Load the policy named by `--policy`, or the compiled-in default.
pub fn load_policy(path: Option<&Path>) -> Result<TaxPolicy> {
    let Some(path) = path else {
        return Ok(TaxPolicy::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file: {}", path.display()))?;
    let policy = parse_policy(path, &content)
        .with_context(|| format!("invalid policy file: {}", path.display()))?;
    tracing::info!(path = %path.display(), policy = %policy.name, "loaded tax policy");
    Ok(policy)
}

/// Open a filing session over the documents in `path`.
pub(crate) fn open_session(path: &Path, policy: &TaxPolicy) -> Result<FilingSession> {
    let documents = load_documents(path)?;
    FilingSession::from_documents(policy.clone(), documents)
        .with_context(|| format!("rejected documents file: {}", path.display()))
}
