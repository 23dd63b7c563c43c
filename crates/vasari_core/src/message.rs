//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single turn in a generation conversation.
///
/// # Examples
///
/// ```
/// use vasari_core::{Message, Role};
///
/// let message = Message::user("Write the introduction.");
///
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Write the introduction.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message carrying an instruction.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message carrying generated output.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
