//! Chat command handlers and the session router they drive.

mod clear_session;
mod router;
mod send_message;

pub use clear_session::{ClearSessionCommand, ClearSessionHandler, ClearSessionResult};
pub use router::SessionRouter;
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
