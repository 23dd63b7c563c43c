//! Per-run conversation history.

use uuid::Uuid;
use vasari_core::Message;
use vasari_error::{PipelineError, PipelineErrorKind, VasariResult};

/// Default upper bound on total context size, in characters.
///
/// The full history is re-sent on every stage call, so the bound caps the
/// worst-case request size for the longest article the pipeline produces.
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 240_000;

/// Ordered, append-only log of instruction/response exchanges for one
/// generation run.
///
/// A session is created fresh for every run and carries a unique id; it is
/// never persisted, never shared between runs, and dropped when the run
/// ends.
///
/// # Examples
///
/// ```
/// use vasari_pipeline::ConversationSession;
///
/// let mut session = ConversationSession::new();
/// session.append_exchange("Write the introduction.", "<h1>Bees</h1>").unwrap();
/// assert_eq!(session.messages().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ConversationSession {
    id: Uuid,
    turns: Vec<Message>,
    max_context_chars: usize,
    context_chars: usize,
}

impl ConversationSession {
    /// Create an empty session with a fresh id and the default bound.
    pub fn new() -> Self {
        Self::with_context_limit(DEFAULT_MAX_CONTEXT_CHARS)
    }

    /// Create an empty session with an explicit context bound.
    pub fn with_context_limit(max_context_chars: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
            max_context_chars,
            context_chars: 0,
        }
    }

    /// Unique identifier of this run's session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The exchanges so far, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.turns
    }

    /// Record one completed exchange.
    ///
    /// # Errors
    ///
    /// Fails with a context-overflow pipeline error when the bound would be
    /// exceeded; the exchange is not recorded in that case.
    pub fn append_exchange(&mut self, instruction: &str, response: &str) -> VasariResult<()> {
        let attempted = self.context_chars + instruction.len() + response.len();
        if attempted > self.max_context_chars {
            return Err(PipelineError::new(PipelineErrorKind::ContextOverflow {
                limit: self.max_context_chars,
                attempted,
            })
            .into());
        }
        self.turns.push(Message::user(instruction));
        self.turns.push(Message::assistant(response));
        self.context_chars = attempted;
        Ok(())
    }

    /// The message list for the next stage call: every prior exchange
    /// followed by the new instruction.
    pub fn request_messages(&self, instruction: &str) -> Vec<Message> {
        let mut messages = self.turns.clone();
        messages.push(Message::user(instruction));
        messages
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vasari_core::Role;

    #[test]
    fn exchanges_preserve_insertion_order() {
        let mut session = ConversationSession::new();
        session.append_exchange("first", "one").unwrap();
        session.append_exchange("second", "two").unwrap();

        let contents: Vec<&str> = session
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["first", "one", "second", "two"]);

        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
    }

    #[test]
    fn request_messages_append_the_new_instruction() {
        let mut session = ConversationSession::new();
        session.append_exchange("first", "one").unwrap();

        let messages = session.request_messages("second");
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].content, "second");
        // The session itself is untouched.
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = ConversationSession::new();
        let b = ConversationSession::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn overflow_fails_without_recording() {
        let mut session = ConversationSession::with_context_limit(16);
        session.append_exchange("12345678", "1234567").unwrap();
        assert!(session.append_exchange("x", "y").is_err());
        assert_eq!(session.messages().len(), 2);
    }
}
