//! ClearSession - Command handler for discarding a chat session's history.

use std::sync::Arc;

use crate::domain::foundation::SessionId;

use super::router::SessionRouter;

/// Command to clear a chat session.
#[derive(Debug, Clone)]
pub struct ClearSessionCommand {
    pub session_id: SessionId,
}

/// Result of clearing a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearSessionResult {
    /// False when the session did not exist. Not an error.
    pub cleared: bool,
}

/// Handler for clearing sessions.
pub struct ClearSessionHandler {
    router: Arc<SessionRouter>,
}

impl ClearSessionHandler {
    pub fn new(router: Arc<SessionRouter>) -> Self {
        Self { router }
    }

    pub async fn handle(&self, cmd: ClearSessionCommand) -> ClearSessionResult {
        ClearSessionResult {
            cleared: self.router.clear(&cmd.session_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::chat::SessionRegistry;

    #[tokio::test]
    async fn clears_existing_then_reports_missing() {
        let router = Arc::new(SessionRouter::new(
            Arc::new(MockAIProvider::new()),
            Arc::new(SessionRegistry::new()),
        ));
        router.forward(&SessionId::default(), "hi").await.unwrap();
        let handler = ClearSessionHandler::new(router.clone());
        let cmd = ClearSessionCommand {
            session_id: SessionId::default(),
        };

        assert!(handler.handle(cmd.clone()).await.cleared);
        assert!(!handler.handle(cmd).await.cleared);
        assert!(router.registry().is_empty().await);
    }
}
