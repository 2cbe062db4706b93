//! Metrics inputs, filters, and snapshot types.

use std::collections::BTreeMap;

use revfix_core::models::{Confidence, RewardSignal};
use serde::{Deserialize, Serialize};

/// Lifecycle summary of one finding, as tracked by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindingRecord {
    pub finding_id: String,
    pub repo: String,
    pub rule_id: String,
    /// A fix pair exists and was not rejected by verification.
    pub paired: bool,
    pub autofix: bool,
    pub confidence: Confidence,
    /// Seconds from observation to confirmed resolution; `None` while unresolved.
    #[serde(default)]
    pub resolution_secs: Option<u64>,
    pub promoted: bool,
    pub reintroduced: bool,
}

/// A preventive hint injected ahead of a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectionRecord {
    pub repo: String,
    pub rule_id: String,
    /// The hinted violation was never introduced.
    pub avoided: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsFilter {
    pub repo: Option<String>,
}

impl MetricsFilter {
    pub fn repo(repo: impl Into<String>) -> Self {
        Self {
            repo: Some(repo.into()),
        }
    }

    pub(crate) fn admits(&self, repo: &str) -> bool {
        self.repo.as_deref().map_or(true, |r| r == repo)
    }
}

/// Every set field must match; an empty filter admits all signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardFilter {
    pub rule_id: Option<String>,
    pub agent_id: Option<String>,
    pub repo: Option<String>,
}

impl RewardFilter {
    pub fn admits(&self, signal: &RewardSignal) -> bool {
        field_matches(&self.rule_id, &signal.rule_id)
            && field_matches(&self.agent_id, &signal.agent_id)
            && field_matches(&self.repo, &signal.repo)
    }
}

fn field_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match wanted {
        None => true,
        Some(w) => actual.as_deref() == Some(w.as_str()),
    }
}

/// Per-rule slice of a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleMetrics {
    pub total_findings: u64,
    pub paired_findings: u64,
    pub promoted_findings: u64,
    pub reintroduced_findings: u64,
    pub paired_rate: f64,
    pub average_confidence: f64,
}

/// Aggregate statistics over one batch. Computed on demand, never stored by
/// the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairingMetricsSnapshot {
    pub total_findings: u64,
    pub paired_findings: u64,
    pub resolved_findings: u64,
    pub promoted_findings: u64,
    pub reintroduced_findings: u64,
    pub total_injections: u64,
    pub avoided_injections: u64,

    /// paired / total
    pub paired_rate: f64,
    /// Mean confidence over paired findings.
    pub average_confidence: f64,
    pub median_resolution_secs: f64,
    /// Promoted findings later reintroduced / promoted.
    pub reintroduction_rate: f64,
    /// Share of paired findings fixed by a tool autofix, 0..=100.
    pub autofix_percentage: f64,
    /// avoided / injections
    pub preemptive_avoidance_rate: f64,
    pub cumulative_reward: f64,

    pub per_rule: BTreeMap<String, RuleMetrics>,
}
