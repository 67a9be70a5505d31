//! Session lifecycle configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted idle TTL (one year).
pub const MAX_IDLE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Longest accepted sweep interval (one day).
pub const MAX_SWEEP_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Session lifecycle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionsConfig {
    /// Evict sessions idle for this many seconds; sessions live forever when unset
    pub idle_ttl_secs: Option<u64>,

    /// How often the idle sweeper scans the registry
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl SessionsConfig {
    /// Idle TTL, if eviction is enabled
    pub fn idle_ttl(&self) -> Option<Duration> {
        self.idle_ttl_secs.map(Duration::from_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(ttl) = self.idle_ttl_secs {
            if ttl == 0 || ttl > MAX_IDLE_TTL_SECS {
                return Err(ValidationError::InvalidIdleTtl);
            }
        }
        if self.sweep_interval_secs == 0 || self.sweep_interval_secs > MAX_SWEEP_INTERVAL_SECS {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: None,
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

fn default_sweep_interval() -> u64 {
    60
}
