use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Pairing confidence clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0.0);

    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN becomes 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Apply a signed delta, re-clamping the result.
    pub fn adjusted(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    pub fn meets(self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

impl Add for Confidence {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Confidence {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.3).value(), 0.0);
        assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn adjusted_stays_in_range() {
        let c = Confidence::new(0.1);
        assert_eq!(c.adjusted(-0.2).value(), 0.0);
        assert!((c.adjusted(0.15).value() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn deserializing_clamps() {
        let c: Confidence = serde_json::from_str("3.5").unwrap();
        assert_eq!(c.value(), 1.0);
    }
}
