//! Error handling for revfix.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod reward_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::RevfixErrorCode;
pub use reward_error::RewardError;
pub use validation_error::ValidationError;

/// Aggregate error for callers that drive several subsystems.
#[derive(Debug, thiserror::Error)]
pub enum RevfixError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Reward error: {0}")]
    Reward(#[from] RewardError),
}

impl RevfixErrorCode for RevfixError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Reward(e) => e.error_code(),
        }
    }
}

pub type RevfixResult<T> = Result<T, RevfixError>;
