//! Configuration errors.

use super::error_code::{self, RevfixErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for `{field}`: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("invalid config file pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl RevfixErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
