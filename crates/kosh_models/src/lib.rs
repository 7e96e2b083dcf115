//! Model provider integrations for the Kosh budget assistant.
//!
//! This crate provides client implementations of the
//! [`KoshDriver`](kosh_interface::KoshDriver) trait.
//!
//! # Available Providers
//!
//! - **OpenAI** - chat-completions API, the provider the assistant runs
//!   against in production
//!
//! # Example
//!
//! ```no_run
//! use kosh_models::OpenAiClient;
//! use kosh_interface::KoshDriver;
//! use kosh_core::{GenerateRequest, Message, Role};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new("gpt-4o-mini".to_string())?;
//! let request = GenerateRequest::new(vec![Message::new(Role::User, "Hello")]);
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatRole, ChatUsage,
    OpenAiClient,
};
