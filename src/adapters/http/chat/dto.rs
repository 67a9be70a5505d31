//! Data Transfer Objects for the chat HTTP endpoints.
//!
//! Body shapes match the browser front-end: errors carry a single `detail`
//! string and `session_id` defaults to `"default"` when omitted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for POST /chat.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: SessionId,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response body for POST /chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendMessageResponse {
    pub response: String,
}

/// Informational response, used by DELETE /chat/:session_id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub const HISTORY_CLEARED: &'static str = "Chat history cleared";
    pub const SESSION_NOT_FOUND: &'static str = "Session not found";

    pub fn cleared(cleared: bool) -> Self {
        let message = if cleared {
            Self::HISTORY_CLEARED
        } else {
            Self::SESSION_NOT_FOUND
        };
        Self {
            message: message.to_string(),
        }
    }
}

/// Response body for GET /health.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Server is running".to_string(),
        }
    }
}

/// Error body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
