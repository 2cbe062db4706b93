use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// Inclusive, 1-based line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLineRange", into = "RawLineRange")]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Result<Self, ValidationError> {
        if start == 0 || start > end {
            return Err(ValidationError::InvalidLineRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(line: u32) -> Result<Self, ValidationError> {
        Self::new(line, line)
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, line: u32) -> bool {
        (self.start..=self.end).contains(&line)
    }

    /// Inclusive overlap: ranges sharing a single boundary line overlap.
    pub fn overlaps(&self, other: &LineRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawLineRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawLineRange> for LineRange {
    type Error = ValidationError;
    fn try_from(raw: RawLineRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<LineRange> for RawLineRange {
    fn from(range: LineRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}
