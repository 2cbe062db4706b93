//! Pairing-type classification.

use chrono::Duration;
use revfix_core::config::PairingConfig;
use revfix_core::models::{PairingType, ReviewFindingObserved, ReviewFixApplied};

/// Classify how `fix` relates to `finding`. Fixed precedence, first match wins:
/// autofix, same commit, same PR, temporal, inferred.
///
/// "Same PR" is a time-proximity proxy: no PR-to-commit mapping reaches this
/// layer, so a fix applied within `same_pr_window_minutes` of the observation
/// is assumed to belong to the reviewed PR.
pub fn classify_pairing_type(
    finding: &ReviewFindingObserved,
    fix: &ReviewFixApplied,
    config: &PairingConfig,
) -> PairingType {
    let elapsed = fix.applied_at() - finding.observed_at();
    let after = elapsed > Duration::zero();

    if fix.tool_autofix() {
        PairingType::Autofix
    } else if fix.fix_commit_sha() == finding.commit_sha() {
        PairingType::SameCommit
    } else if after && elapsed <= config.same_pr_window() {
        PairingType::SamePr
    } else if after && elapsed <= config.temporal_window() {
        PairingType::Temporal
    } else {
        PairingType::Inferred
    }
}
