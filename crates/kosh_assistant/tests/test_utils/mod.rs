//! Shared test doubles for pipeline tests.

use async_trait::async_trait;
use kosh_core::{GenerateRequest, GenerateResponse, Output};
use kosh_error::{DatabaseError, DatabaseErrorKind, KoshResult, ModelError, ModelErrorKind};
use kosh_interface::{KoshDriver, QueryBackend, StatementResult};
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One scripted model turn.
#[derive(Debug, Clone)]
pub enum ScriptedTurn {
    /// Respond with this text.
    Text(String),
    /// Fail with an API error carrying this message.
    Fail(String),
}

/// Model driver that replays a scripted sequence of turns and records
/// every prompt it receives.
#[derive(Debug, Clone)]
pub struct MockDriver {
    script: Arc<Mutex<VecDeque<ScriptedTurn>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockDriver {
    pub fn new(turns: Vec<ScriptedTurn>) -> Self {
        Self {
            script: Arc::new(Mutex::new(turns.into())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Convenience constructor: every turn succeeds with the given text.
    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| ScriptedTurn::Text(t.to_string())).collect())
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl KoshDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> KoshResult<GenerateResponse> {
        let prompt = req
            .messages
            .iter()
            .map(|m| m.content.clone())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);

        let turn = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock driver script exhausted");

        match turn {
            ScriptedTurn::Text(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
            }),
            ScriptedTurn::Fail(message) => Err(ModelError::new(ModelErrorKind::Api {
                status: 500,
                message,
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// What the mock backend should do when a statement reaches it.
#[derive(Debug, Clone)]
pub enum ScriptedExecution {
    Rows(Vec<JsonValue>),
    Affected(usize),
    BackendError { code: String, message: String },
    ConnectError(String),
}

/// Query backend double with a connection-attempt counter.
#[derive(Debug, Clone)]
pub struct MockBackend {
    execution: ScriptedExecution,
    schema: String,
    execute_calls: Arc<AtomicUsize>,
}

impl MockBackend {
    pub fn new(execution: ScriptedExecution) -> Self {
        Self {
            execution,
            schema: "CREATE TABLE budget_post_details (\n    \"District\" text,\n    \"BasicPay\" integer\n)"
                .to_string(),
            execute_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many statements were sent to the database.
    pub fn execute_calls(&self) -> usize {
        self.execute_calls.load(Ordering::SeqCst)
    }
}

impl QueryBackend for MockBackend {
    fn execute(&self, _sql: &str) -> Result<StatementResult, DatabaseError> {
        self.execute_calls.fetch_add(1, Ordering::SeqCst);
        match &self.execution {
            ScriptedExecution::Rows(rows) => Ok(StatementResult::Rows(rows.clone())),
            ScriptedExecution::Affected(count) => Ok(StatementResult::Affected(*count)),
            ScriptedExecution::BackendError { code, message } => {
                Err(DatabaseError::new(DatabaseErrorKind::Backend {
                    code: code.clone(),
                    message: message.clone(),
                }))
            }
            ScriptedExecution::ConnectError(message) => {
                Err(DatabaseError::new(DatabaseErrorKind::Connection(message.clone())))
            }
        }
    }

    fn schema_description(&self) -> Result<String, DatabaseError> {
        Ok(self.schema.clone())
    }
}

/// Extract the results text embedded in a composition prompt.
///
/// The composition template places it between the retrieval preamble and
/// the step list.
pub fn results_text_of(composition_prompt: &str) -> String {
    let start_marker = "(or status message):\n";
    let end_marker = "\n\nFollow these steps";

    let start = composition_prompt
        .find(start_marker)
        .expect("prompt is missing the results preamble")
        + start_marker.len();
    let end = composition_prompt[start..]
        .find(end_marker)
        .expect("prompt is missing the step list")
        + start;

    composition_prompt[start..end].to_string()
}
