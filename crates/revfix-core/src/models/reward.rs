use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RewardError;

/// Terminal lifecycle outcome of a finding. Exactly five members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardOutcome {
    /// The violation was never introduced after an injected hint.
    PreemptiveAvoidance,
    CodemodFix,
    ManualResolution,
    Reintroduced,
    RepeatedViolation,
}

impl RewardOutcome {
    pub const ALL: [RewardOutcome; 5] = [
        Self::PreemptiveAvoidance,
        Self::CodemodFix,
        Self::ManualResolution,
        Self::Reintroduced,
        Self::RepeatedViolation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PreemptiveAvoidance => "preemptive_avoidance",
            Self::CodemodFix => "codemod_fix",
            Self::ManualResolution => "manual_resolution",
            Self::Reintroduced => "reintroduced",
            Self::RepeatedViolation => "repeated_violation",
        }
    }
}

impl fmt::Display for RewardOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RewardOutcome {
    type Err = RewardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|o| o.name() == label)
            .ok_or_else(|| RewardError::UnknownOutcome(s.to_string()))
    }
}

/// A scored outcome. Append-only once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardSignal {
    pub signal_id: String,
    pub outcome: RewardOutcome,
    pub reward: f64,
    pub agent_id: Option<String>,
    pub repo: Option<String>,
    pub rule_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}
