//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models via the Generative Language API
//! - `MockAIProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
