//! # Document Lifecycle State Machine
//!
//! ```text
//! Uploading ──▶ Analyzing ──▶ Verified (terminal)
//!     │             │
//!     └─────────────┴───────▶ Error (terminal)
//! ```
//!
//! A document is created `uploading` with type `Unknown`. Analysis assigns
//! the form type, confidence, and extracted fields in the same transition
//! that marks it `verified`, so a verified document always carries the
//! result of its analysis. Terminal documents are immutable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use taxmate_core::{DocumentId, DocumentStatus, ExtractedData, FormType, TaxDocument, Timestamp};

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors that can occur during document lifecycle transitions.
#[derive(Error, Debug, PartialEq)]
pub enum DocumentError {
    /// Attempted transition is not valid from the current state.
    #[error("invalid document transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: DocumentStatus,
        /// Attempted target status.
        to: DocumentStatus,
    },

    /// Document has reached a terminal status.
    #[error("{id} is {status} and cannot transition")]
    Terminal {
        /// The document identifier.
        id: DocumentId,
        /// The terminal status.
        status: DocumentStatus,
    },

    /// Classification confidence outside `[0, 1]`.
    #[error("confidence {0} is outside [0, 1]")]
    InvalidConfidence(f64),
}

// ─── Transition Log ──────────────────────────────────────────────────

/// Record of a document status transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTransitionRecord {
    /// Status before the transition.
    pub from_status: DocumentStatus,
    /// Status after the transition.
    pub to_status: DocumentStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
    /// Reason for the transition.
    pub reason: String,
}

// ─── Document Record ─────────────────────────────────────────────────

/// A document with its transition history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// The document as seen by the calculator.
    pub document: TaxDocument,
    /// Ordered log of all status transitions.
    pub transitions: Vec<DocumentTransitionRecord>,
}

impl DocumentRecord {
    /// Start tracking a freshly uploaded file.
    pub fn upload(name: impl Into<String>) -> Self {
        Self {
            document: TaxDocument::uploading(name),
            transitions: Vec::new(),
        }
    }

    /// Wrap an existing document, e.g. one restored from storage.
    pub fn from_document(document: TaxDocument) -> Self {
        Self {
            document,
            transitions: Vec::new(),
        }
    }

    /// The document identifier.
    pub fn id(&self) -> &DocumentId {
        &self.document.id
    }

    /// The current status.
    pub fn status(&self) -> DocumentStatus {
        self.document.status
    }

    /// Upload finished, analysis started (UPLOADING → ANALYZING).
    pub fn begin_analysis(&mut self) -> Result<(), DocumentError> {
        self.require(DocumentStatus::Uploading, DocumentStatus::Analyzing)?;
        self.do_transition(DocumentStatus::Analyzing, "upload complete");
        Ok(())
    }

    /// Analysis succeeded (ANALYZING → VERIFIED).
    ///
    /// Records the classified form type, the classification confidence,
    /// and the extracted fields.
    pub fn verify(
        &mut self,
        form_type: FormType,
        extracted: ExtractedData,
        confidence: f64,
    ) -> Result<(), DocumentError> {
        self.require(DocumentStatus::Analyzing, DocumentStatus::Verified)?;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(DocumentError::InvalidConfidence(confidence));
        }
        self.document.form_type = form_type;
        self.document.confidence = confidence;
        self.document.extracted_data = Some(extracted);
        self.do_transition(
            DocumentStatus::Verified,
            &format!("classified as {form_type}"),
        );
        Ok(())
    }

    /// Upload or analysis failed (UPLOADING | ANALYZING → ERROR).
    pub fn fail(&mut self, reason: &str) -> Result<(), DocumentError> {
        if self.document.status.is_terminal() {
            return Err(self.terminal_error());
        }
        self.do_transition(DocumentStatus::Error, reason);
        Ok(())
    }

    fn require(&self, expected: DocumentStatus, target: DocumentStatus) -> Result<(), DocumentError> {
        if self.document.status.is_terminal() {
            return Err(self.terminal_error());
        }
        if self.document.status != expected {
            return Err(DocumentError::InvalidTransition {
                from: self.document.status,
                to: target,
            });
        }
        Ok(())
    }

    fn terminal_error(&self) -> DocumentError {
        DocumentError::Terminal {
            id: self.document.id.clone(),
            status: self.document.status,
        }
    }

    fn do_transition(&mut self, to: DocumentStatus, reason: &str) {
        tracing::info!(
            document = %self.document.id,
            from = %self.document.status,
            to = %to,
            "document transition"
        );
        self.transitions.push(DocumentTransitionRecord {
            from_status: self.document.status,
            to_status: to,
            timestamp: Timestamp::now(),
            reason: reason.to_string(),
        });
        self.document.status = to;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
