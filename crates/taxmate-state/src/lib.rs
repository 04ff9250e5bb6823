//! # taxmate-state — Document Lifecycle and Filing Session
//!
//! ## State Machines
//!
//! - **Document** (`document.rs`): `uploading → analyzing → verified | error`
//!   with validated transitions and a timestamped transition log.
//!
//! - **Session** (`session.rs`): the explicit, externally-owned state
//!   container holding the document collection and the active tax policy.
//!   Every mutation re-derives the `TaxSummary` from scratch through the
//!   pure calculator; submission moves the session to the terminal `Filed`
//!   state.
//!
//! ## Design
//!
//! The document lifecycle is driven by the `DocumentStatus` enum; each
//! transition returns `Result` with the current state and attempted target
//! on rejection. The session is a struct whose `filed` flag gates every
//! mutation once the return is submitted.

pub mod document;
pub mod session;

pub use document::{DocumentError, DocumentRecord, DocumentTransitionRecord};
pub use session::{FilingSession, SessionError};
