//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (session ids, timestamps)
//! - `chat` - Conversations, the session registry and failure classification

pub mod chat;
pub mod foundation;
