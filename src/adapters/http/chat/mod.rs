//! HTTP adapter for the chat endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ErrorResponse, HealthResponse, MessageResponse, SendMessageRequest, SendMessageResponse,
};
pub use handlers::{ChatApiError, ChatAppState, RATE_LIMITED_DETAIL, UPSTREAM_DETAIL_PREFIX};
pub use routes::{chat_router, chat_routes};
