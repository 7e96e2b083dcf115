//! Natural-language question answering over the budget database.
//!
//! This crate implements the three-stage pipeline at the heart of Kosh:
//!
//! 1. [`QuerySynthesizer`] turns a question plus the live database schema
//!    into a candidate SQL statement, using a fixed few-shot prompt.
//! 2. [`QueryExecutor`] runs the candidate against the relational store and
//!    normalizes every outcome, errors included, into an
//!    [`ExecutionOutcome`].
//! 3. [`ResponseComposer`] turns the outcome back into a plain-language
//!    answer with a second fixed prompt.
//!
//! The [`Assistant`] orchestrates the stages and guarantees total
//! availability: `answer` always returns a string, never an error.
//!
//! Control flows strictly synthesizer → executor → composer; there is no
//! feedback loop, no retry, and no state shared between invocations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assistant;
mod candidate;
mod composer;
mod config;
mod executor;
mod outcome;
mod prompt;
pub mod sentinel;
mod synthesizer;

pub use assistant::Assistant;
pub use candidate::CandidateQuery;
pub use composer::ResponseComposer;
pub use config::AssistantConfig;
pub use executor::QueryExecutor;
pub use outcome::ExecutionOutcome;
pub use prompt::{composition_prompt, synthesis_prompt};
pub use synthesizer::QuerySynthesizer;
