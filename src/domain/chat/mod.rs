//! Chat domain - conversations, the session registry, and failure classification.

mod conversation;
mod errors;
mod registry;

pub use conversation::{Conversation, ConversationOptions};
pub use errors::{truncate_chars, ChatError, MAX_DETAIL_CHARS};
pub use registry::{ConversationHandle, SessionRegistry};
