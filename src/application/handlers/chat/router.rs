//! SessionRouter - routes messages to per-session conversations.

use std::sync::Arc;

use crate::domain::chat::{
    truncate_chars, ChatError, Conversation, ConversationHandle, ConversationOptions,
    SessionRegistry, MAX_DETAIL_CHARS,
};
use crate::domain::foundation::SessionId;
use crate::ports::AIProvider;

/// Maps session ids to conversations and forwards messages through them.
///
/// The registry is injected so tests and background tasks can share it.
pub struct SessionRouter {
    provider: Arc<dyn AIProvider>,
    registry: Arc<SessionRegistry>,
    options: ConversationOptions,
}

impl SessionRouter {
    pub fn new(provider: Arc<dyn AIProvider>, registry: Arc<SessionRegistry>) -> Self {
        Self {
            provider,
            registry,
            options: ConversationOptions::default(),
        }
    }

    /// Sets the generation options for conversations created from now on.
    pub fn with_options(mut self, options: ConversationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Returns the conversation for `session_id`, starting an empty one if
    /// none exists. Existing conversations are returned untouched.
    pub async fn get_or_create(&self, session_id: &SessionId) -> ConversationHandle {
        let (handle, created) = self
            .registry
            .get_or_insert_with(session_id, || {
                Conversation::start(
                    session_id.clone(),
                    self.provider.clone(),
                    Vec::new(),
                    self.options,
                )
            })
            .await;

        if created {
            tracing::debug!(session_id = %session_id, "Created new chat session");
        }

        handle
    }

    /// Forwards `message` through the session's conversation.
    ///
    /// Calls for the same session run one at a time in arrival order.
    pub async fn forward(&self, session_id: &SessionId, message: &str) -> Result<String, ChatError> {
        let handle = self.get_or_create(session_id).await;
        let mut conversation = handle.lock().await;

        tracing::debug!(
            session_id = %session_id,
            history_len = conversation.history().len(),
            "Sending message to provider"
        );

        match conversation.send(message).await {
            Ok(response) => {
                tracing::debug!(
                    session_id = %session_id,
                    preview = truncate_chars(&response, MAX_DETAIL_CHARS),
                    "Received provider response"
                );
                Ok(response)
            }
            Err(err) => {
                let text = err.to_string();
                let classified = ChatError::classify(&text);
                if classified.is_rate_limited() {
                    tracing::warn!(session_id = %session_id, error = %text, "Provider quota exceeded");
                } else {
                    tracing::error!(session_id = %session_id, error = %text, "Provider request failed");
                }
                Err(classified)
            }
        }
    }

    /// Discards the session's conversation. Returns true if one existed.
    pub async fn clear(&self, session_id: &SessionId) -> bool {
        let removed = self.registry.remove(session_id).await.is_some();
        if removed {
            tracing::info!(session_id = %session_id, "Cleared chat session");
        }
        removed
    }
}
