//! IdleSessionSweeper - Background service that evicts idle chat sessions.
//!
//! The registry otherwise grows with every new session id for the life of
//! the process. The sweeper periodically drops conversations that have not
//! been used for `idle_ttl`.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `idle_ttl` | 1h | Inactivity after which a session is evicted |
//! | `sweep_interval` | 60s | How often to scan the registry |
//!
//! ## Graceful Shutdown
//!
//! The service listens for a shutdown signal and exits after the current
//! sweep.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::chat::SessionRegistry;
use crate::domain::foundation::Timestamp;

/// Configuration for the IdleSessionSweeper service.
#[derive(Debug, Clone)]
pub struct IdleSessionSweeperConfig {
    /// Inactivity after which a session is evicted.
    pub idle_ttl: Duration,

    /// How often to scan the registry.
    pub sweep_interval: Duration,
}

impl Default for IdleSessionSweeperConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(3600),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl IdleSessionSweeperConfig {
    /// Create config with custom idle TTL.
    pub fn with_idle_ttl(mut self, ttl: Duration) -> Self {
        self.idle_ttl = ttl;
        self
    }

    /// Create config with custom sweep interval.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}

/// Background service that evicts idle sessions from the registry.
pub struct IdleSessionSweeper {
    registry: Arc<SessionRegistry>,
    config: IdleSessionSweeperConfig,
}

impl IdleSessionSweeper {
    pub fn new(registry: Arc<SessionRegistry>, config: IdleSessionSweeperConfig) -> Self {
        Self { registry, config }
    }

    /// Run the sweep loop until shutdown signal is received.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.sweep_interval);

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        tracing::debug!("Idle session sweeper stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.sweep_once().await;
                }
            }
        }
    }

    /// Evict every session idle for longer than the TTL.
    ///
    /// Returns the number of sessions evicted.
    pub async fn sweep_once(&self) -> usize {
        let cutoff = Timestamp::now().minus_secs(self.config.idle_ttl.as_secs());
        let evicted = self.registry.evict_idle(cutoff).await;

        if !evicted.is_empty() {
            tracing::info!(count = evicted.len(), "Evicted idle chat sessions");
        }

        evicted.len()
    }
}
