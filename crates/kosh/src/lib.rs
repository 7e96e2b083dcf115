//! Kosh - Natural-language assistant for government budget and staffing data
//!
//! Kosh answers free-text questions about post allocations, salaries, and
//! expenditures by synthesizing SQL against a live PostgreSQL schema with a
//! text-completion model, executing it, and composing a plain-language
//! answer from the result.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use kosh::{Assistant, AssistantConfig, DatabaseConfig, OpenAiClient, PgQueryBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = OpenAiClient::new("gpt-4o-mini".to_string())?;
//!     let backend = PgQueryBackend::new(DatabaseConfig::from_env()?);
//!     let assistant = Assistant::new(driver, backend, AssistantConfig::default());
//!
//!     let answer = assistant
//!         .answer("What is the basic pay for the Collector in Mumbai City?")
//!         .await;
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Kosh is organized as a workspace with focused crates:
//!
//! - `kosh_error` - Error types
//! - `kosh_core` - Core data types (Message, GenerateRequest, etc.)
//! - `kosh_interface` - KoshDriver and QueryBackend trait definitions
//! - `kosh_models` - Model provider implementations
//! - `kosh_database` - PostgreSQL integration
//! - `kosh_assistant` - The question-answering pipeline
//!
//! This crate (`kosh`) re-exports everything for convenience and ships the
//! command-line binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use kosh_assistant::{
    Assistant, AssistantConfig, CandidateQuery, ExecutionOutcome, QueryExecutor,
    QuerySynthesizer, ResponseComposer, sentinel,
};
pub use kosh_core::{GenerateRequest, GenerateResponse, Message, Output, Role};
pub use kosh_database::{DatabaseConfig, PgQueryBackend, establish_connection};
pub use kosh_error::{
    ConfigError, DatabaseError, DatabaseErrorKind, KoshError, KoshErrorKind, KoshResult,
    ModelError, ModelErrorKind,
};
pub use kosh_interface::{KoshDriver, QueryBackend, StatementResult};
pub use kosh_models::OpenAiClient;
