//! RewardScorer: frozen outcome → reward table.

use chrono::{DateTime, Utc};
use revfix_core::constants::rewards;
use revfix_core::models::{RewardOutcome, RewardSignal};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Reward for a terminal outcome.
pub fn reward_for(outcome: RewardOutcome) -> f64 {
    match outcome {
        RewardOutcome::PreemptiveAvoidance => rewards::PREEMPTIVE_AVOIDANCE,
        RewardOutcome::CodemodFix => rewards::CODEMOD_FIX,
        RewardOutcome::ManualResolution => rewards::MANUAL_RESOLUTION,
        RewardOutcome::Reintroduced => rewards::REINTRODUCED,
        RewardOutcome::RepeatedViolation => rewards::REPEATED_VIOLATION,
    }
}

/// Optional attribution carried onto the emitted signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardMetadata {
    pub agent_id: Option<String>,
    pub repo: Option<String>,
    pub rule_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// One batch entry. The outcome is an unparsed label from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub outcome: String,
    #[serde(flatten)]
    pub metadata: RewardMetadata,
}

impl RewardEntry {
    pub fn new(outcome: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            metadata: RewardMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: RewardMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RewardScorer;

impl RewardScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a single outcome into a fresh signal.
    pub fn score(&self, outcome: RewardOutcome, metadata: RewardMetadata) -> RewardSignal {
        RewardSignal {
            signal_id: Uuid::new_v4().to_string(),
            outcome,
            reward: reward_for(outcome),
            agent_id: metadata.agent_id,
            repo: metadata.repo,
            rule_id: metadata.rule_id,
            timestamp: metadata.timestamp,
        }
    }

    /// Score every entry whose label parses. Unknown labels are skipped, never
    /// fatal; output order follows input order.
    pub fn score_batch(&self, entries: &[RewardEntry]) -> Vec<RewardSignal> {
        let span = revfix_core::reward_span!(entries.len());
        let _guard = span.enter();

        let signals: Vec<RewardSignal> = entries
            .iter()
            .filter_map(|entry| match entry.outcome.parse::<RewardOutcome>() {
                Ok(outcome) => Some(self.score(outcome, entry.metadata.clone())),
                Err(e) => {
                    debug!(error = %e, "skipping reward entry");
                    None
                }
            })
            .collect();

        debug!(
            scored = signals.len(),
            skipped = entries.len() - signals.len(),
            "reward batch scored"
        );
        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_exact_values() {
        let table: Vec<(RewardOutcome, f64)> =
            RewardOutcome::ALL.iter().map(|o| (*o, reward_for(*o))).collect();
        assert_eq!(
            table,
            vec![
                (RewardOutcome::PreemptiveAvoidance, 1.0),
                (RewardOutcome::CodemodFix, 0.8),
                (RewardOutcome::ManualResolution, 0.5),
                (RewardOutcome::Reintroduced, -1.0),
                (RewardOutcome::RepeatedViolation, -2.0),
            ]
        );
    }

    #[test]
    fn score_carries_metadata() {
        let signal = RewardScorer::new().score(
            RewardOutcome::CodemodFix,
            RewardMetadata {
                agent_id: Some("agent-7".into()),
                rule_id: Some("ruff:E501".into()),
                ..RewardMetadata::default()
            },
        );
        assert_eq!(signal.reward, 0.8);
        assert_eq!(signal.agent_id.as_deref(), Some("agent-7"));
        assert_eq!(signal.repo, None);
        assert!(signal.timestamp.is_none());
        assert!(Uuid::parse_str(&signal.signal_id).is_ok());
    }
}
