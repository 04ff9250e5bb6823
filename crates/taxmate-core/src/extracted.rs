//! # Extracted Field Values
//!
//! The analysis collaborator returns an open, form-specific set of fields
//! (`"Wages, Tips"`, `"Employer EIN"`, `"State"`, ...) whose values are
//! either numbers or text. `ExtractedData` keeps that open shape and offers
//! numeric lookup with a zero default:
//!
//! - missing field → 0
//! - number that is NaN or infinite → 0
//! - text that is empty, or does not parse as a finite number → 0
//!
//! Loading is total as well: JSON `null`, booleans, arrays and objects are
//! kept as text rather than rejecting the whole document.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A single extracted value: numeric or free text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A numeric amount as reported by the collaborator.
    Number(f64),
    /// Any textual value (identifiers, state codes, or numbers sent as text).
    Text(String),
}

impl FieldValue {
    /// Coerce to a finite amount, degrading to zero.
    pub fn as_amount(&self) -> f64 {
        match self {
            Self::Number(n) if n.is_finite() => *n,
            Self::Number(_) => 0.0,
            Self::Text(s) => parse_amount(s),
        }
    }

    /// The textual form, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

fn parse_amount(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => Self::Number(f),
                None => Self::Text(n.to_string()),
            },
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Null => Self::Text(String::new()),
            other => Self::Text(other.to_string()),
        })
    }
}

/// Field name → value mapping extracted from one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedData(BTreeMap<String, FieldValue>);

impl ExtractedData {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Raw access to a field.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Numeric value of `field`, or 0 when missing or malformed.
    pub fn amount(&self, field: &str) -> f64 {
        self.0.get(field).map(FieldValue::as_amount).unwrap_or(0.0)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields were extracted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for ExtractedData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
