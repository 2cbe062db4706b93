use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// A qualified static-analysis rule identifier, `tool:code` (e.g. `ruff:E501`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RuleId {
    qualified: String,
    split_at: usize,
}

impl RuleId {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidRuleId {
            value: value.to_string(),
        };
        let trimmed = value.trim();
        let split_at = trimmed.find(':').ok_or_else(invalid)?;
        let (tool, code) = (&trimmed[..split_at], &trimmed[split_at + 1..]);
        if tool.is_empty() || code.is_empty() || code.contains(':') {
            return Err(invalid());
        }
        Ok(Self {
            qualified: trimmed.to_string(),
            split_at,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.qualified
    }

    pub fn tool(&self) -> &str {
        &self.qualified[..self.split_at]
    }

    /// The bare code without the tool prefix.
    pub fn code(&self) -> &str {
        &self.qualified[self.split_at + 1..]
    }

    /// True when `label` names this rule, either qualified or bare.
    pub fn matches_label(&self, label: &str) -> bool {
        let label = label.trim();
        label == self.qualified || label == self.code()
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}

impl FromStr for RuleId {
    type Err = ValidationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RuleId {
    type Error = ValidationError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RuleId> for String {
    fn from(rule: RuleId) -> Self {
        rule.qualified
    }
}
