//! Application layer - Commands, Handlers, and background services.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
pub mod idle_session_sweeper;

pub use handlers::{
    ClearSessionCommand, ClearSessionHandler, ClearSessionResult, SendMessageCommand,
    SendMessageHandler, SendMessageResult, SessionRouter,
};
pub use idle_session_sweeper::{IdleSessionSweeper, IdleSessionSweeperConfig};
