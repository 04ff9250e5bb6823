//! # Tax Documents
//!
//! A `TaxDocument` is the record the upload and analysis collaborators
//! produce: a file name, its lifecycle status, the form type assigned by
//! classification, and (once verified) the extracted field values.
//!
//! The serialized shape uses camelCase keys (`extractedData`, `uploadedAt`)
//! and the `type` key for the form. The front end's `uploadDate` key is
//! accepted as an alias and may carry a locale date (`2/1/2024`); an upload
//! date that parses as neither RFC 3339 nor that form is dropped.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::error::CoreError;
use crate::extracted::ExtractedData;
use crate::form::FormType;
use crate::identity::DocumentId;
use crate::temporal::Timestamp;

/// Lifecycle status of a document.
///
/// ```text
/// uploading ──▶ analyzing ──▶ verified (terminal)
///     │             │
///     └─────────────┴───────▶ error (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// File transfer in progress.
    Uploading,
    /// Classification and field extraction in progress.
    Analyzing,
    /// Analysis succeeded; extracted data is available.
    Verified,
    /// Upload or analysis failed.
    Error,
}

impl DocumentStatus {
    /// Returns the lowercase wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uploading => "uploading",
            Self::Analyzing => "analyzing",
            Self::Verified => "verified",
            Self::Error => "error",
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified | Self::Error)
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uploading" => Ok(Self::Uploading),
            "analyzing" => Ok(Self::Analyzing),
            "verified" => Ok(Self::Verified),
            "error" => Ok(Self::Error),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

/// A tax document as supplied by the ingestion/classification collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDocument {
    /// Opaque unique identifier.
    pub id: DocumentId,
    /// Original file name.
    #[serde(default)]
    pub name: String,
    /// Classified form type.
    #[serde(rename = "type", default)]
    pub form_type: FormType,
    /// Lifecycle status.
    pub status: DocumentStatus,
    /// Classification confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,
    /// When the upload started.
    #[serde(
        default,
        alias = "uploadDate",
        deserialize_with = "lenient_upload_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub uploaded_at: Option<Timestamp>,
    /// Extracted field values, present once verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<ExtractedData>,
}

impl TaxDocument {
    /// A freshly uploaded document: status `uploading`, type `Unknown`.
    pub fn uploading(name: impl Into<String>) -> Self {
        Self {
            id: DocumentId::new(),
            name: name.into(),
            form_type: FormType::Unknown,
            status: DocumentStatus::Uploading,
            confidence: 0.0,
            uploaded_at: Some(Timestamp::now()),
            extracted_data: None,
        }
    }

    /// A verified document with the given type and fields.
    pub fn verified(form_type: FormType, extracted: ExtractedData) -> Self {
        Self {
            id: DocumentId::new(),
            name: String::new(),
            form_type,
            status: DocumentStatus::Verified,
            confidence: 1.0,
            uploaded_at: None,
            extracted_data: Some(extracted),
        }
    }

    /// Builder-style status override.
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this document contributes to the financial summary:
    /// verified, with non-empty extracted data.
    pub fn is_aggregatable(&self) -> bool {
        self.status == DocumentStatus::Verified
            && self
                .extracted_data
                .as_ref()
                .is_some_and(|data| !data.is_empty())
    }
}

fn lenient_upload_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error> {
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Timestamp::parse_lenient(&s),
        _ => None,
    })
}
