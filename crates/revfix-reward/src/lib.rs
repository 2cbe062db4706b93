//! # revfix-reward
//!
//! Turns terminal finding outcomes into reward signals and aggregates
//! pairing effectiveness into metrics snapshots.

pub mod metrics;
pub mod scorer;

pub use metrics::{
    FindingRecord, InjectionRecord, MetricsFilter, PairingMetricsCalculator,
    PairingMetricsSnapshot, RewardFilter, RuleMetrics,
};
pub use scorer::{reward_for, RewardEntry, RewardMetadata, RewardScorer};
