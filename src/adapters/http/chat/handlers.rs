//! HTTP handlers for the chat endpoints.
//!
//! These handlers connect Axum routes to the chat command handlers.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::handlers::chat::{
    ClearSessionCommand, ClearSessionHandler, SendMessageCommand, SendMessageHandler,
    SessionRouter,
};
use crate::domain::chat::ChatError;
use crate::domain::foundation::SessionId;

use super::dto::{
    ErrorResponse, HealthResponse, MessageResponse, SendMessageRequest, SendMessageResponse,
};

/// Detail returned when the provider reports quota exhaustion.
pub const RATE_LIMITED_DETAIL: &str = "API quota exceeded. Please wait a moment and try again.";

/// Prefix of the detail returned for any other provider failure.
pub const UPSTREAM_DETAIL_PREFIX: &str = "Sorry, something went wrong: ";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the chat routes.
#[derive(Clone)]
pub struct ChatAppState {
    pub router: Arc<SessionRouter>,
    pub index_path: Arc<PathBuf>,
}

impl ChatAppState {
    pub fn new(router: Arc<SessionRouter>, index_path: impl Into<PathBuf>) -> Self {
        Self {
            router,
            index_path: Arc::new(index_path.into()),
        }
    }

    /// Create handlers on demand from the shared state.
    pub fn send_message_handler(&self) -> SendMessageHandler {
        SendMessageHandler::new(self.router.clone())
    }

    pub fn clear_session_handler(&self) -> ClearSessionHandler {
        ClearSessionHandler::new(self.router.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// HTTP Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET / - Serve the front-end page
pub async fn home(State(state): State<ChatAppState>) -> Response {
    match tokio::fs::read_to_string(state.index_path.as_path()).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            tracing::warn!(
                path = %state.index_path.display(),
                error = %err,
                "Front-end page unavailable"
            );
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Front-end page not found")),
            )
                .into_response()
        }
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// POST /chat - Forward a message to the session's conversation
pub async fn chat(
    State(state): State<ChatAppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ChatApiError> {
    let handler = state.send_message_handler();
    let cmd = SendMessageCommand::new(request.session_id, request.message);

    let result = handler.handle(cmd).await?;

    Ok(Json(SendMessageResponse {
        response: result.response,
    }))
}

/// DELETE /chat/:session_id - Discard a session's history
pub async fn clear_chat(
    State(state): State<ChatAppState>,
    Path(session_id): Path<String>,
) -> Json<MessageResponse> {
    let handler = state.clear_session_handler();
    let result = handler
        .handle(ClearSessionCommand {
            session_id: SessionId::new(session_id),
        })
        .await;

    Json(MessageResponse::cleared(result.cleared))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts chat errors to HTTP responses.
#[derive(Debug)]
pub struct ChatApiError(ChatError);

impl From<ChatError> for ChatApiError {
    fn from(err: ChatError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            ChatError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, RATE_LIMITED_DETAIL.to_string()),
            ChatError::Upstream { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("{}{}", UPSTREAM_DETAIL_PREFIX, detail),
            ),
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}
