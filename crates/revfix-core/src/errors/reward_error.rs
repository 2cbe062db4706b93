//! Reward scoring errors.

use super::error_code::{self, RevfixErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RewardError {
    #[error("unknown reward outcome `{0}`")]
    UnknownOutcome(String),
}

impl RevfixErrorCode for RewardError {
    fn error_code(&self) -> &'static str {
        error_code::REWARD_ERROR
    }
}
