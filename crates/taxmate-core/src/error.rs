//! # Error Types
//!
//! Errors raised while parsing the core data model from external input.
//! The tax calculator itself is total and has no error type; these errors
//! only surface at the boundary where labels and timestamps arrive as text.

use thiserror::Error;

/// Top-level error type for `taxmate-core`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A form type label outside the closed set.
    #[error("unknown form type: {0:?}")]
    UnknownFormType(String),

    /// A document status label outside the lifecycle states.
    #[error("unknown document status: {0:?}")]
    UnknownStatus(String),

    /// A timestamp that is not valid RFC 3339.
    #[error("invalid timestamp {input:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}
