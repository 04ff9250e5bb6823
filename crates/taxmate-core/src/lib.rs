//! # taxmate-core — Foundational Types for Taxmate
//!
//! Defines the data model shared by every other crate in the workspace:
//! the tax documents produced by the external document-analysis
//! collaborator, their form types and lifecycle statuses, and the open
//! mapping of extracted field values. Every other crate depends on
//! `taxmate-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for closed sets.** `FormType` and `DocumentStatus` are
//!    exhaustive enums serialized with the exact labels used on the wire
//!    (`"W-2"`, `"1099-NEC"`, `"verified"`, ...). Adding a form type forces
//!    every `match` in the calculator to handle it.
//!
//! 2. **Typed-with-fallback extracted data.** `ExtractedData` maps field
//!    names to `FieldValue::{Number, Text}`. Numeric access through
//!    [`ExtractedData::amount()`] degrades to zero for missing or malformed
//!    values and never fails.
//!
//! 3. **UTC-only timestamps.** Upload and transition times use `Timestamp`,
//!    truncated to seconds.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `taxmate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod extracted;
pub mod form;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use document::{DocumentStatus, TaxDocument};
pub use error::CoreError;
pub use extracted::{ExtractedData, FieldValue};
pub use form::{FormType, FORM_TYPE_COUNT};
pub use identity::DocumentId;
pub use temporal::Timestamp;
