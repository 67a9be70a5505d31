//! Chat error types and provider-failure classification.

use thiserror::Error;

/// Maximum number of characters of an upstream failure shown to callers.
pub const MAX_DETAIL_CHARS: usize = 100;

/// Outcome of a failed forward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The provider reported quota exhaustion; retry after a delay.
    #[error("provider quota exceeded")]
    RateLimited,

    /// Any other provider failure.
    #[error("upstream failure: {detail}")]
    Upstream {
        /// Leading part of the provider's error text.
        detail: String,
    },
}

impl ChatError {
    /// Classifies a provider failure from its textual representation.
    ///
    /// Quota exhaustion is recognised by the word "quota" (any case) or the
    /// status code 429 anywhere in the text. The provider exposes no stable
    /// error codes, so the wording is the contract.
    pub fn classify(error_text: &str) -> Self {
        if error_text.to_lowercase().contains("quota") || error_text.contains("429") {
            ChatError::RateLimited
        } else {
            ChatError::Upstream {
                detail: truncate_chars(error_text, MAX_DETAIL_CHARS).to_string(),
            }
        }
    }

    /// Returns true if the caller should retry later.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ChatError::RateLimited)
    }
}

/// Returns the prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
