//! OpenAI chat-completions API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// OpenAI message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// OpenAI message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Message role
    role: ChatRole,
    /// Message content
    content: String,
}

impl ChatMessage {
    /// Creates a new chat message.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// OpenAI chat-completions request parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Temperature for sampling
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl ChatRequest {
    /// Creates a new builder for `ChatRequest`.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}

/// A single completion choice from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatChoice {
    /// Choice index
    #[serde(default)]
    index: usize,
    /// The generated message
    message: ChatMessage,
    /// Why generation stopped, if reported
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token usage statistics from OpenAI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ChatUsage {
    /// Input tokens consumed
    #[serde(default)]
    prompt_tokens: usize,
    /// Output tokens generated
    #[serde(default)]
    completion_tokens: usize,
    /// Total tokens billed
    #[serde(default)]
    total_tokens: usize,
}

/// OpenAI chat-completions API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatResponse {
    /// Response identifier
    #[serde(default)]
    id: String,
    /// Completion choices (one unless `n` was set)
    choices: Vec<ChatChoice>,
    /// Token usage statistics (if available)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    usage: Option<ChatUsage>,
}
