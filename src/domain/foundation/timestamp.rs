//! Timestamp value object for immutable points in time.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Creates a new timestamp by adding the specified number of seconds.
    ///
    /// Saturates at the latest representable time.
    pub fn plus_secs(&self, secs: u64) -> Self {
        let shifted = Self::delta(secs).and_then(|d| self.0.checked_add_signed(d));
        Self(shifted.unwrap_or(DateTime::<Utc>::MAX_UTC))
    }

    /// Creates a new timestamp by subtracting the specified number of seconds.
    ///
    /// Saturates at the earliest representable time.
    pub fn minus_secs(&self, secs: u64) -> Self {
        let shifted = Self::delta(secs).and_then(|d| self.0.checked_sub_signed(d));
        Self(shifted.unwrap_or(DateTime::<Utc>::MIN_UTC))
    }

    fn delta(secs: u64) -> Option<TimeDelta> {
        i64::try_from(secs).ok().and_then(TimeDelta::try_seconds)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
