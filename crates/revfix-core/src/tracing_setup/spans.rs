//! Span definitions per operation: pairing, verification, reward, metrics.

/// Create a pairing span.
#[macro_export]
macro_rules! pairing_span {
    ($finding_id:expr, $candidate_count:expr) => {
        tracing::info_span!(
            "revfix.pairing",
            finding_id = %$finding_id,
            candidate_count = $candidate_count
        )
    };
}

/// Create a verification span.
#[macro_export]
macro_rules! verification_span {
    ($finding_id:expr, $ci_run_id:expr) => {
        tracing::info_span!("revfix.verification", finding_id = %$finding_id, ci_run_id = %$ci_run_id)
    };
}

/// Create a reward scoring span.
#[macro_export]
macro_rules! reward_span {
    ($entry_count:expr) => {
        tracing::info_span!("revfix.reward", entry_count = $entry_count)
    };
}

/// Create a metrics span.
#[macro_export]
macro_rules! metrics_span {
    ($finding_count:expr, $injection_count:expr) => {
        tracing::info_span!(
            "revfix.metrics",
            finding_count = $finding_count,
            injection_count = $injection_count
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PAIRING: &str = "revfix.pairing";
    pub const VERIFICATION: &str = "revfix.verification";
    pub const REWARD: &str = "revfix.reward";
    pub const METRICS: &str = "revfix.metrics";
}
