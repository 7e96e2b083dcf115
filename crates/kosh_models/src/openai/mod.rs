//! OpenAI chat-completions API implementation.

mod client;
mod conversion;
mod dto;

pub use client::OpenAiClient;
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatRole, ChatUsage,
};
