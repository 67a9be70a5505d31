//! Conversation - ordered message history bound to a remote provider.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{AIError, AIProvider, CompletionRequest, Message, MessageRole, RequestMetadata};

/// Generation settings applied to every request of a conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConversationOptions {
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

/// A stateful exchange with the remote model.
///
/// The provider itself is stateless; the conversation replays its full
/// history on every send and appends the exchange once the provider answers.
pub struct Conversation {
    session_id: SessionId,
    provider: Arc<dyn AIProvider>,
    options: ConversationOptions,
    history: Vec<Message>,
    created_at: Timestamp,
    last_active_at: Timestamp,
}

impl Conversation {
    /// Starts a conversation with the given initial history.
    pub fn start(
        session_id: SessionId,
        provider: Arc<dyn AIProvider>,
        history: Vec<Message>,
        options: ConversationOptions,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            session_id,
            provider,
            options,
            history,
            created_at: now,
            last_active_at: now,
        }
    }

    /// Sends a user message and returns the model's reply.
    ///
    /// On success the user message and the reply are appended to the
    /// history. On failure the history is left untouched.
    pub async fn send(&mut self, text: impl Into<String>) -> Result<String, AIError> {
        self.last_active_at = Timestamp::now();

        let mut messages = self.history.clone();
        messages.push(Message::user(text));

        let mut request = CompletionRequest::new(RequestMetadata::new(self.session_id.clone()))
            .with_messages(messages);
        if let Some(temperature) = self.options.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.options.max_output_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let response = self.provider.complete(request.clone()).await?;

        self.history = request.messages;
        self.history.push(Message::assistant(response.content.clone()));
        self.last_active_at = Timestamp::now();

        Ok(response.content)
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Ordered history of completed exchanges.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Number of completed user/model exchanges.
    pub fn exchange_count(&self) -> usize {
        self.history
            .iter()
            .filter(|m| m.role == MessageRole::Assistant)
            .count()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_active_at(&self) -> Timestamp {
        self.last_active_at
    }
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("session_id", &self.session_id)
            .field("provider", &self.provider.provider_info().name)
            .field("history_len", &self.history.len())
            .field("last_active_at", &self.last_active_at)
            .finish()
    }
}
