//! # Document Identity
//!
//! Documents arrive with an opaque identifier assigned by the upload layer.
//! The identifier is kept as an opaque string so ids minted elsewhere load
//! unchanged; ids minted here are UUID v4 strings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an uploaded tax document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// Generate a new random document identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an identifier supplied by an external collaborator.
    pub fn from_external(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "document:{}", self.0)
    }
}
