//! Identifier value objects.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Caller-supplied key that scopes a chat conversation.
///
/// The value is opaque: any string is accepted, including the empty string,
/// which is a distinct key from every other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Key used when a request does not name a session.
    pub const DEFAULT: &'static str = "default";

    /// Creates a SessionId from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the id, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Borrow<str> for SessionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_id_is_sentinel() {
        assert_eq!(SessionId::default().as_str(), "default");
    }

    #[test]
    fn empty_string_is_a_distinct_key() {
        let empty = SessionId::new("");
        assert_ne!(empty, SessionId::default());
        assert_eq!(empty.as_str(), "");
    }

    #[test]
    fn session_id_serializes_transparently() {
        let id = SessionId::new("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");

        let parsed: SessionId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn session_id_displays_raw_value() {
        assert_eq!(SessionId::new("user-7").to_string(), "user-7");
    }
}
