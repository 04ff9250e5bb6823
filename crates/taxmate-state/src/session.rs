//! # Filing Session
//!
//! The state container for one return: the ordered document collection,
//! the active tax policy, and the summary derived from them. The session
//! is owned by its caller; it holds no shared state and does no locking.
//!
//! Every successful mutation re-runs the pure calculator over the whole
//! collection, so [`FilingSession::summary()`] always equals
//! `TaxCalculator::summarize(session.documents())` (with `Filed` once
//! submitted).
//!
//! ```text
//! Open ──submit()──▶ Filed (terminal, rejects all mutations)
//! ```
//!
//! Submission is accepted only when the derived status is `Review Ready`.

use thiserror::Error;

use taxmate_calc::{FilingStatus, TaxCalculator, TaxPolicy, TaxSummary};
use taxmate_core::{DocumentId, ExtractedData, FormType, TaxDocument};

use crate::document::{DocumentError, DocumentRecord};

/// Errors returned by session operations.
#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    /// No document with this id is in the session.
    #[error("{0} not found in session")]
    DocumentNotFound(DocumentId),

    /// A document with this id is already in the session.
    #[error("{0} already exists in session")]
    DuplicateDocument(DocumentId),

    /// The return has been submitted; the session is read-only.
    #[error("return already filed; session is read-only")]
    AlreadyFiled,

    /// Submission requires every document to be verified.
    #[error("cannot submit while filing status is {0}")]
    NotReady(FilingStatus),

    /// A document lifecycle transition was rejected.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// One return in progress.
#[derive(Debug, Clone)]
pub struct FilingSession {
    calculator: TaxCalculator,
    records: Vec<DocumentRecord>,
    documents: Vec<TaxDocument>,
    summary: TaxSummary,
    filed: bool,
}

impl FilingSession {
    /// Open an empty session under the default policy.
    pub fn new() -> Self {
        Self::with_policy(TaxPolicy::default())
    }

    /// Open an empty session under `policy`.
    pub fn with_policy(policy: TaxPolicy) -> Self {
        let calculator = TaxCalculator::new(policy);
        let summary = calculator.summarize(&[]);
        Self {
            calculator,
            records: Vec::new(),
            documents: Vec::new(),
            summary,
            filed: false,
        }
    }

    /// Open a session over documents that already exist (e.g., restored
    /// from a file). Duplicate ids are rejected.
    pub fn from_documents(
        policy: TaxPolicy,
        documents: impl IntoIterator<Item = TaxDocument>,
    ) -> Result<Self, SessionError> {
        let mut session = Self::with_policy(policy);
        for document in documents {
            if session.position(&document.id).is_some() {
                return Err(SessionError::DuplicateDocument(document.id));
            }
            session.records.push(DocumentRecord::from_document(document));
        }
        session.recompute();
        Ok(session)
    }

    /// The current derived summary.
    pub fn summary(&self) -> &TaxSummary {
        &self.summary
    }

    /// Stable snapshot of the documents, in upload order.
    pub fn documents(&self) -> &[TaxDocument] {
        &self.documents
    }

    /// Look up a document record with its transition history.
    pub fn record(&self, id: &DocumentId) -> Option<&DocumentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// The policy in effect.
    pub fn policy(&self) -> &TaxPolicy {
        self.calculator.policy()
    }

    /// Whether the return has been submitted.
    pub fn is_filed(&self) -> bool {
        self.filed
    }

    /// Register a new upload. Returns the id of the new document.
    pub fn upload(&mut self, name: impl Into<String>) -> Result<DocumentId, SessionError> {
        self.require_open()?;
        let record = DocumentRecord::upload(name);
        let id = record.id().clone();
        self.records.push(record);
        self.recompute();
        Ok(id)
    }

    /// Upload finished, analysis started.
    pub fn begin_analysis(&mut self, id: &DocumentId) -> Result<(), SessionError> {
        self.mutate(id, DocumentRecord::begin_analysis)
    }

    /// Analysis succeeded with the given classification and fields.
    pub fn verify(
        &mut self,
        id: &DocumentId,
        form_type: FormType,
        extracted: ExtractedData,
        confidence: f64,
    ) -> Result<(), SessionError> {
        self.mutate(id, |record| record.verify(form_type, extracted, confidence))
    }

    /// Upload or analysis failed.
    pub fn fail(&mut self, id: &DocumentId, reason: &str) -> Result<(), SessionError> {
        self.mutate(id, |record| record.fail(reason))
    }

    /// Remove a document from the return.
    pub fn remove(&mut self, id: &DocumentId) -> Result<TaxDocument, SessionError> {
        self.require_open()?;
        let index = self
            .position(id)
            .ok_or_else(|| SessionError::DocumentNotFound(id.clone()))?;
        let record = self.records.remove(index);
        self.recompute();
        Ok(record.document)
    }

    /// Submit the return. Only a `Review Ready` session can be filed.
    pub fn submit(&mut self) -> Result<&TaxSummary, SessionError> {
        self.require_open()?;
        if self.summary.filing_status != FilingStatus::ReviewReady {
            tracing::warn!(status = %self.summary.filing_status, "submission rejected");
            return Err(SessionError::NotReady(self.summary.filing_status));
        }
        self.filed = true;
        self.summary.filing_status = FilingStatus::Filed;
        tracing::info!(
            documents = self.documents.len(),
            estimated_refund = self.summary.estimated_refund,
            "return filed"
        );
        Ok(&self.summary)
    }

    fn mutate<F>(&mut self, id: &DocumentId, transition: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut DocumentRecord) -> Result<(), DocumentError>,
    {
        self.require_open()?;
        let index = self
            .position(id)
            .ok_or_else(|| SessionError::DocumentNotFound(id.clone()))?;
        if let Err(e) = transition(&mut self.records[index]) {
            tracing::warn!(document = %id, error = %e, "transition rejected");
            return Err(e.into());
        }
        self.recompute();
        Ok(())
    }

    fn require_open(&self) -> Result<(), SessionError> {
        if self.filed {
            return Err(SessionError::AlreadyFiled);
        }
        Ok(())
    }

    fn position(&self, id: &DocumentId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn recompute(&mut self) {
        self.documents = self.records.iter().map(|r| r.document.clone()).collect();
        self.summary = self.calculator.summarize(&self.documents);
    }
}

impl Default for FilingSession {
    fn default() -> Self {
        Self::new()
    }
}
