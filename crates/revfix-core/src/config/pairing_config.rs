use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Pairing engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// Maximum distance between observation and fix. Default: 72h.
    pub temporal_window_hours: i64,
    /// Proximity window for the same-PR heuristic. Default: 60 minutes.
    pub same_pr_window_minutes: i64,
    /// Candidates scoring below this are dropped. Default: 0.0.
    pub storage_threshold: f64,
    /// Pairs scoring at or above this are promoted. Default: 0.75.
    pub promotion_threshold: f64,
    /// Distinct files a fix must touch to be treated as a formatter batch. Default: 10.
    pub formatter_batch_min_files: usize,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            temporal_window_hours: constants::DEFAULT_TEMPORAL_WINDOW_HOURS,
            same_pr_window_minutes: constants::DEFAULT_SAME_PR_WINDOW_MINUTES,
            storage_threshold: constants::DEFAULT_STORAGE_THRESHOLD,
            promotion_threshold: constants::DEFAULT_PROMOTION_THRESHOLD,
            formatter_batch_min_files: constants::DEFAULT_FORMATTER_BATCH_MIN_FILES,
        }
    }
}

impl PairingConfig {
    pub fn temporal_window(&self) -> Duration {
        Duration::hours(self.temporal_window_hours)
    }

    pub fn same_pr_window(&self) -> Duration {
        Duration::minutes(self.same_pr_window_minutes)
    }
}
