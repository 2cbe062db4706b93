//! Stable string codes attached to every error, for the persistence and
//! dead-letter layers that outlive a single process.

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REWARD_ERROR: &str = "REWARD_ERROR";

/// Implemented by every revfix error.
pub trait RevfixErrorCode {
    fn error_code(&self) -> &'static str;
}
