//! Liveness report returned by `GET /health`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::time::{self, Timestamp};

/// Reported process status. The server only ever answers `healthy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    #[default]
    Healthy,
}

/// Process uptime snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    /// Seconds since the process started.
    #[serde(alias = "uptimeSeconds")]
    pub uptime: f64,
    pub timestamp: Timestamp,
}

impl HealthReport {
    /// Snapshot `uptime`, stamped with the current time.
    #[must_use]
    pub fn new(uptime: Duration) -> Self {
        Self {
            status: HealthStatus::Healthy,
            uptime: uptime.as_secs_f64(),
            timestamp: time::now(),
        }
    }

    /// Whole minutes of uptime, rounded down. Nonsensical values count as zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn uptime_minutes(&self) -> u64 {
        if self.uptime.is_finite() && self.uptime > 0.0 {
            (self.uptime / 60.0).floor() as u64
        } else {
            0
        }
    }
}
