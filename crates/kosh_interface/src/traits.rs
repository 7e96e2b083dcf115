//! Trait definitions for model backends and the relational store.

use crate::StatementResult;
use async_trait::async_trait;
use kosh_core::{GenerateRequest, GenerateResponse};
use kosh_error::{DatabaseError, KoshResult};

/// Core trait that all text-completion model backends must implement.
///
/// This provides the minimal interface for synchronous text generation.
#[async_trait]
pub trait KoshDriver: Send + Sync {
    /// Generate model output given a conversation request.
    async fn generate(&self, req: &GenerateRequest) -> KoshResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Access to the relational store backing the assistant.
///
/// Implementations open their own connection per call; the pipeline holds no
/// connection state between invocations. Calls are blocking and run on the
/// calling worker.
pub trait QueryBackend: Send + Sync {
    /// Execute a single SQL statement and return its result.
    fn execute(&self, sql: &str) -> Result<StatementResult, DatabaseError>;

    /// Describe the current schema as prompt-ready text: every table with
    /// its column names and types.
    fn schema_description(&self) -> Result<String, DatabaseError>;
}
