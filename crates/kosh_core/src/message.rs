//! Message types for model conversations.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A text message in a model conversation.
///
/// # Examples
///
/// ```
/// use kosh_core::{Message, Role};
///
/// let message = Message::new(Role::User, "What is the basic pay for the Collector?");
///
/// assert_eq!(message.role, Role::User);
/// assert!(message.content.contains("Collector"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a new message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
