//! SendMessage command handler.
//!
//! Forwards a user message to the session's conversation and returns the
//! model's reply.

use std::sync::Arc;

use crate::domain::chat::ChatError;
use crate::domain::foundation::SessionId;

use super::router::SessionRouter;

/// Command to send a message in a chat session.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    /// Session the message belongs to.
    pub session_id: SessionId,
    /// The message content, passed through unmodified.
    pub message: String,
}

impl SendMessageCommand {
    /// Creates a new send message command.
    pub fn new(session_id: SessionId, message: impl Into<String>) -> Self {
        Self {
            session_id,
            message: message.into(),
        }
    }
}

/// Result of sending a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageResult {
    /// The model's reply.
    pub response: String,
}

/// Handler for sending chat messages.
pub struct SendMessageHandler {
    router: Arc<SessionRouter>,
}

impl SendMessageHandler {
    pub fn new(router: Arc<SessionRouter>) -> Self {
        Self { router }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, ChatError> {
        tracing::info!(
            session_id = %cmd.session_id,
            message_len = cmd.message.len(),
            "Received chat message"
        );

        let response = self.router.forward(&cmd.session_id, &cmd.message).await?;

        Ok(SendMessageResult { response })
    }
}
