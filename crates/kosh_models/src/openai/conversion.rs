//! Conversions between Kosh core types and the OpenAI wire format.

use super::dto::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
use kosh_core::{GenerateRequest, GenerateResponse, Output, Role};
use kosh_error::{ModelError, ModelErrorKind};

/// Convert a [`GenerateRequest`] to an OpenAI chat request.
///
/// The request's `model` field, when set, overrides `default_model`.
pub fn to_chat_request(
    req: &GenerateRequest,
    default_model: &str,
) -> Result<ChatRequest, ModelError> {
    let messages: Vec<ChatMessage> = req
        .messages
        .iter()
        .map(|msg| {
            let role = match msg.role {
                Role::System => ChatRole::System,
                Role::User => ChatRole::User,
                Role::Assistant => ChatRole::Assistant,
            };
            ChatMessage::new(role, msg.content.clone())
        })
        .collect();

    if messages.is_empty() {
        return Err(ModelError::new(ModelErrorKind::Conversion(
            "Request must contain at least one message".to_string(),
        )));
    }

    let model = req
        .model
        .clone()
        .unwrap_or_else(|| default_model.to_string());

    let mut builder = ChatRequest::builder();
    builder.model(model).messages(messages);
    if let Some(max_tokens) = req.max_tokens {
        builder.max_tokens(Some(max_tokens));
    }
    if let Some(temperature) = req.temperature {
        builder.temperature(Some(temperature));
    }

    builder
        .build()
        .map_err(|e| ModelError::new(ModelErrorKind::Conversion(e.to_string())))
}

/// Convert an OpenAI chat response to a [`GenerateResponse`].
///
/// Only the first choice is used; the client never requests more than one.
pub fn from_chat_response(response: &ChatResponse) -> Result<GenerateResponse, ModelError> {
    let choice = response
        .choices()
        .first()
        .ok_or_else(|| ModelError::new(ModelErrorKind::EmptyResponse))?;

    Ok(GenerateResponse {
        outputs: vec![Output::Text(choice.message().content().clone())],
    })
}
