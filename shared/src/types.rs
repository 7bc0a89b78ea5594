//! Common types used across the system

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Date-range window for scoping order queries, inclusive on both ends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Window starting now and ending the given number of days ahead
    pub fn upcoming(days: i64) -> Self {
        let now = Utc::now();
        Self {
            from: now,
            to: now + Duration::days(days),
        }
    }

    /// Whether the instant falls within `[from, to]`
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.from && at <= self.to
    }
}
