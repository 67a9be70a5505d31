//! Axum router configuration for the chat endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{chat, clear_chat, health, home, ChatAppState};

/// Create the chat API router.
///
/// # Routes
/// - `GET /` - Front-end page
/// - `GET /health` - Liveness probe
/// - `POST /chat` - Send a message
/// - `DELETE /chat/:session_id` - Clear a session's history
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/chat/:session_id", delete(clear_chat))
}

/// Create the chat router with its state attached.
pub fn chat_router(state: ChatAppState) -> Router {
    chat_routes().with_state(state)
}
