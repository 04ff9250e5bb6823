//! # taxmate-assist — Summary Projections for the Assistant and Review
//!
//! Consumers of `TaxSummary` that turn it into text:
//!
//! - **Context** (`context.rs`): the grounding snapshot handed to the
//!   external conversational assistant, the system instruction it is
//!   embedded in, and the rule deciding when the assistant's context must
//!   be rebuilt.
//! - **Review** (`review.rs`): the Form 1040 review lines shown before
//!   submission.
//! - **Money** (`money.rs`): dollar formatting shared by both.
//!
//! Nothing here talks to the assistant service; callers send the text.

pub mod context;
pub mod money;
pub mod review;

pub use context::{system_instruction, ContextSnapshot, BASE_INSTRUCTION};
pub use money::format_dollars;
pub use review::{ReturnReview, ReviewLine};
