//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - AI provider implementations (Gemini, mock)
//! - `http` - axum routes, handlers and DTOs

pub mod ai;
pub mod http;
