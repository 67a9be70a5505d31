//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod chat;

pub use chat::{
    ClearSessionCommand, ClearSessionHandler, ClearSessionResult, SendMessageCommand,
    SendMessageHandler, SendMessageResult, SessionRouter,
};
