//! Core data types for the Kosh budget assistant.
//!
//! This crate provides the foundation data types shared by the model clients
//! and the question-answering pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod output;
mod request;
mod role;

pub use message::Message;
pub use output::Output;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use role::Role;
