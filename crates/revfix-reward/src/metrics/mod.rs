//! PairingMetricsCalculator: effectiveness statistics over findings,
//! injections, and reward signals.
//!
//! Every ratio guards its denominator: an empty population yields 0.0.

pub mod types;

pub use types::{
    FindingRecord, InjectionRecord, MetricsFilter, PairingMetricsSnapshot, RewardFilter,
    RuleMetrics,
};

use std::collections::BTreeMap;

use revfix_core::models::RewardSignal;
use statrs::statistics::{Data, Median};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct PairingMetricsCalculator;

impl PairingMetricsCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(
        &self,
        findings: &[FindingRecord],
        injections: &[InjectionRecord],
    ) -> PairingMetricsSnapshot {
        self.compute_filtered(findings, injections, &MetricsFilter::default())
    }

    /// Snapshot restricted to the records admitted by `filter`.
    pub fn compute_filtered(
        &self,
        findings: &[FindingRecord],
        injections: &[InjectionRecord],
        filter: &MetricsFilter,
    ) -> PairingMetricsSnapshot {
        let findings: Vec<&FindingRecord> =
            findings.iter().filter(|f| filter.admits(&f.repo)).collect();
        let injections: Vec<&InjectionRecord> =
            injections.iter().filter(|i| filter.admits(&i.repo)).collect();

        let span = revfix_core::metrics_span!(findings.len(), injections.len());
        let _guard = span.enter();

        let paired: Vec<&FindingRecord> = findings.iter().copied().filter(|f| f.paired).collect();
        let promoted = count(&findings, |f| f.promoted);
        let promoted_reintroduced = count(&findings, |f| f.promoted && f.reintroduced);
        let autofixed = count(&paired, |f| f.autofix);
        let avoided = injections.iter().filter(|i| i.avoided).count() as u64;
        let resolution_times: Vec<f64> = findings
            .iter()
            .filter_map(|f| f.resolution_secs)
            .map(|s| s as f64)
            .collect();

        let mut per_rule: BTreeMap<String, RuleMetrics> = BTreeMap::new();
        for f in &findings {
            let entry = per_rule.entry(f.rule_id.clone()).or_default();
            entry.total_findings += 1;
            entry.paired_findings += u64::from(f.paired);
            entry.promoted_findings += u64::from(f.promoted);
            entry.reintroduced_findings += u64::from(f.reintroduced);
        }
        for (rule, entry) in per_rule.iter_mut() {
            let rule_paired: Vec<&FindingRecord> = paired
                .iter()
                .copied()
                .filter(|f| &f.rule_id == rule)
                .collect();
            entry.paired_rate = ratio(entry.paired_findings, entry.total_findings);
            entry.average_confidence = mean_confidence(&rule_paired);
        }

        let snapshot = PairingMetricsSnapshot {
            total_findings: findings.len() as u64,
            paired_findings: paired.len() as u64,
            resolved_findings: resolution_times.len() as u64,
            promoted_findings: promoted,
            reintroduced_findings: count(&findings, |f| f.reintroduced),
            total_injections: injections.len() as u64,
            avoided_injections: avoided,
            paired_rate: ratio(paired.len() as u64, findings.len() as u64),
            average_confidence: mean_confidence(&paired),
            median_resolution_secs: median(resolution_times),
            reintroduction_rate: ratio(promoted_reintroduced, promoted),
            autofix_percentage: ratio(autofixed, paired.len() as u64) * 100.0,
            preemptive_avoidance_rate: ratio(avoided, injections.len() as u64),
            cumulative_reward: 0.0,
            per_rule,
        };

        debug!(
            paired_rate = snapshot.paired_rate,
            reintroduction_rate = snapshot.reintroduction_rate,
            "metrics computed"
        );
        snapshot
    }

    /// [`Self::compute_filtered`] plus the cumulative reward of the matching
    /// signals.
    pub fn compute_with_rewards(
        &self,
        findings: &[FindingRecord],
        injections: &[InjectionRecord],
        filter: &MetricsFilter,
        signals: &[RewardSignal],
        reward_filter: &RewardFilter,
    ) -> PairingMetricsSnapshot {
        PairingMetricsSnapshot {
            cumulative_reward: self.cumulative_reward(signals, reward_filter),
            ..self.compute_filtered(findings, injections, filter)
        }
    }

    /// Sum of rewards over matching signals; 0.0 when nothing matches.
    pub fn cumulative_reward(&self, signals: &[RewardSignal], filter: &RewardFilter) -> f64 {
        signals
            .iter()
            .filter(|s| filter.admits(s))
            .map(|s| s.reward)
            .sum()
    }
}

fn count(findings: &[&FindingRecord], pred: impl Fn(&FindingRecord) -> bool) -> u64 {
    findings.iter().filter(|f| pred(f)).count() as u64
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn mean_confidence(findings: &[&FindingRecord]) -> f64 {
    if findings.is_empty() {
        return 0.0;
    }
    let total: f64 = findings.iter().map(|f| f.confidence.value()).sum();
    total / findings.len() as f64
}

fn median(values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Data::new(values).median()
}
