//! Value-object construction errors.

use super::error_code::{self, RevfixErrorCode};

/// Raised when a value object is built from malformed input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    #[error("invalid rule id `{value}`: expected `tool:code`")]
    InvalidRuleId { value: String },

    #[error("invalid line range {start}..={end}")]
    InvalidLineRange { start: u32, end: u32 },
}

impl RevfixErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}

/// Reject empty or whitespace-only required strings.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}
