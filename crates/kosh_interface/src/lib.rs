//! Trait definitions for the Kosh budget assistant.
//!
//! This crate defines the two seams of the question-answering pipeline:
//! [`KoshDriver`] for text-completion model backends and [`QueryBackend`]
//! for relational-store access. Both are trait objects so the pipeline can
//! take test doubles.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{KoshDriver, QueryBackend};
pub use types::StatementResult;
