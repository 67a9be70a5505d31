//! AI provider configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Highest accepted retry count; backoff doubles per attempt.
pub const MAX_RETRIES: u32 = 5;

/// Gemini provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key; `GEMINI_API_KEY` is used when unset
    pub gemini_api_key: Option<Secret<String>>,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API root URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Sampling temperature; provider default when unset
    pub temperature: Option<f32>,

    /// Reply length limit; provider default when unset
    pub max_output_tokens: Option<u32>,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        use secrecy::ExposeSecret;
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }

    /// Validate AI configuration
    ///
    /// A missing API key is not an error; the first remote call reports it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if self.max_retries > MAX_RETRIES {
            return Err(ValidationError::TooManyRetries);
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ValidationError::InvalidTemperature);
            }
        }
        if self.max_output_tokens == Some(0) {
            return Err(ValidationError::InvalidMaxOutputTokens);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    90
}

fn default_retries() -> u32 {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 90);
        assert_eq!(config.max_retries, 2);
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_timeout_duration() {
        let config = AiConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_missing_key_is_valid() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_key_is_not_configured() {
        let config = AiConfig {
            gemini_api_key: Some(Secret::new(String::new())),
            ..Default::default()
        };
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let config = AiConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBaseUrl));
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let config = AiConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyModel));
    }

    #[test]
    fn test_validation_temperature_range() {
        let config = AiConfig {
            temperature: Some(2.5),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));

        let config = AiConfig {
            temperature: Some(0.7),
            max_output_tokens: Some(512),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_retry_bound() {
        let config = AiConfig {
            max_retries: MAX_RETRIES,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = AiConfig {
            max_retries: 64,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::TooManyRetries));
    }

    #[test]
    fn test_validation_zero_output_tokens() {
        let config = AiConfig {
            max_output_tokens: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxOutputTokens));
    }
}
