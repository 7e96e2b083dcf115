//! Request and response types for model generation.

use crate::{Message, Output};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Generic text-generation request.
///
/// # Examples
///
/// ```
/// use kosh_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::new(Role::User, "Hello!")])
///     .temperature(Some(0.0))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.temperature, Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use, overriding the client default
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Create a new request from a list of messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Default::default()
        }
    }

    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use kosh_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("SELECT 1;".to_string())],
/// };
///
/// assert_eq!(response.text(), "SELECT 1;");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The generated outputs from the model
    pub outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Concatenate all text outputs into a single string.
    ///
    /// Non-text outputs are skipped.
    pub fn text(&self) -> String {
        self.outputs
            .iter()
            .filter_map(Output::as_text)
            .collect::<Vec<_>>()
            .join("")
    }
}
