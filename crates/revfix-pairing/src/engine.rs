//! PairingEngine: filters, scores, and selects the fix for one finding.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use revfix_core::config::{PairingConfig, ScoringWeights};
use revfix_core::errors::ConfigError;
use revfix_core::models::{CandidateFix, FindingFixPair, ReviewFindingObserved};
use revfix_core::{ConfigFileMatcher, RevfixConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::classify::classify_pairing_type;
use crate::scorer::{ConfidenceScorer, DiffEvidence, ScoreBreakdown};

/// Why a finding produced no pair. A result state, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NoCandidates,
    AllCandidatesOutsideTemporalWindow,
    BelowStorageThreshold,
}

impl SkipReason {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoCandidates => "no_candidates",
            Self::AllCandidatesOutsideTemporalWindow => "all_candidates_outside_temporal_window",
            Self::BelowStorageThreshold => "below_storage_threshold",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of pairing one finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingResult {
    pub finding_id: String,
    /// At most one pair.
    pub pairs: Vec<FindingFixPair>,
    /// Subset of `pairs` confident enough for automated action.
    pub promoted: Vec<FindingFixPair>,
    pub skip_reason: Option<SkipReason>,
    /// Candidates that survived the temporal filter.
    pub eligible_candidates: usize,
    pub ambiguous: bool,
    /// Breakdown of the winning candidate's score.
    pub breakdown: Option<ScoreBreakdown>,
}

impl PairingResult {
    fn skipped(finding_id: &str, reason: SkipReason, eligible: usize, ambiguous: bool) -> Self {
        Self {
            finding_id: finding_id.to_string(),
            pairs: Vec::new(),
            promoted: Vec::new(),
            skip_reason: Some(reason),
            eligible_candidates: eligible,
            ambiguous,
            breakdown: None,
        }
    }

    pub fn pair(&self) -> Option<&FindingFixPair> {
        self.pairs.first()
    }

    pub fn is_promoted(&self) -> bool {
        !self.promoted.is_empty()
    }
}

/// Joins a finding with the candidate fix that most likely resolved it.
///
/// Stateless across calls: the same engine can be shared by any number of
/// workers.
#[derive(Debug, Clone)]
pub struct PairingEngine {
    config: PairingConfig,
    scorer: ConfidenceScorer,
    config_files: ConfigFileMatcher,
}

impl PairingEngine {
    pub fn new(config: PairingConfig, weights: ScoringWeights, config_files: ConfigFileMatcher) -> Self {
        Self {
            config,
            scorer: ConfidenceScorer::new(weights),
            config_files,
        }
    }

    /// Validate `config` and build an engine from it.
    pub fn from_config(config: &RevfixConfig) -> Result<Self, ConfigError> {
        RevfixConfig::validate(config)?;
        let matcher = ConfigFileMatcher::new(&config.verification.config_file_patterns())?;
        Ok(Self::new(config.pairing.clone(), config.scoring.clone(), matcher))
    }

    /// Engine with compiled defaults.
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::from_config(&RevfixConfig::default())
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    pub fn scorer(&self) -> &ConfidenceScorer {
        &self.scorer
    }

    /// Pair `finding` with the best of `candidates`.
    ///
    /// `evaluated_at` stamps the emitted pair; it never influences selection.
    pub fn pair(
        &self,
        finding: &ReviewFindingObserved,
        candidates: &[CandidateFix],
        evaluated_at: DateTime<Utc>,
    ) -> PairingResult {
        let span = revfix_core::pairing_span!(finding.finding_id(), candidates.len());
        let _guard = span.enter();

        if candidates.is_empty() {
            debug!(reason = %SkipReason::NoCandidates, "pairing skipped");
            return PairingResult::skipped(finding.finding_id(), SkipReason::NoCandidates, 0, false);
        }

        let eligible: Vec<&CandidateFix> = candidates
            .iter()
            .filter(|c| self.within_window(finding, c))
            .collect();
        if eligible.is_empty() {
            debug!(
                reason = %SkipReason::AllCandidatesOutsideTemporalWindow,
                window_hours = self.config.temporal_window_hours,
                "pairing skipped"
            );
            return PairingResult::skipped(
                finding.finding_id(),
                SkipReason::AllCandidatesOutsideTemporalWindow,
                0,
                false,
            );
        }

        let evidence: Vec<DiffEvidence> = eligible.iter().map(|c| DiffEvidence::collect(c)).collect();
        let overlapping = eligible
            .iter()
            .zip(&evidence)
            .filter(|(c, ev)| ev.overlaps_finding(c, finding))
            .count();
        let ambiguous = overlapping >= 2;

        let mut best: Option<(&CandidateFix, ScoreBreakdown)> = None;
        for (candidate, ev) in eligible.iter().zip(&evidence) {
            let ctx = ev.context(
                finding,
                candidate,
                &self.config_files,
                self.config.formatter_batch_min_files,
                eligible.len(),
                ambiguous,
            );
            let breakdown = self.scorer.score(&ctx);
            debug!(
                fix_commit_sha = candidate.fix_commit_sha(),
                confidence = breakdown.confidence.value(),
                raw_score = breakdown.raw_score,
                formatter_batch = breakdown.formatter_batch,
                "candidate scored"
            );

            if breakdown.confidence.value() < self.config.storage_threshold {
                continue;
            }
            // Strictly greater: ties keep the first-seen candidate.
            let better = best
                .as_ref()
                .map_or(true, |(_, b)| breakdown.confidence.value() > b.confidence.value());
            if better {
                best = Some((*candidate, breakdown));
            }
        }

        let Some((winner, breakdown)) = best else {
            debug!(
                reason = %SkipReason::BelowStorageThreshold,
                threshold = self.config.storage_threshold,
                "pairing skipped"
            );
            return PairingResult::skipped(
                finding.finding_id(),
                SkipReason::BelowStorageThreshold,
                eligible.len(),
                ambiguous,
            );
        };

        let pairing_type = classify_pairing_type(finding, &winner.fix, &self.config);
        let pair = FindingFixPair {
            pair_id: Uuid::new_v4().to_string(),
            finding_id: finding.finding_id().to_string(),
            fix_commit_sha: winner.fix_commit_sha().to_string(),
            diff_hunks: winner.fix.diff_hunks().to_vec(),
            confidence: breakdown.confidence,
            disappearance_confirmed: winner.disappearance_confirmed,
            pairing_type,
            created_at: evaluated_at,
        };
        let promoted = breakdown.promotable(self.config.promotion_threshold);

        info!(
            fix_commit_sha = %pair.fix_commit_sha,
            confidence = pair.confidence.value(),
            pairing_type = %pairing_type,
            ambiguous,
            promoted,
            "finding paired"
        );

        PairingResult {
            finding_id: pair.finding_id.clone(),
            promoted: if promoted { vec![pair.clone()] } else { Vec::new() },
            pairs: vec![pair],
            skip_reason: None,
            eligible_candidates: eligible.len(),
            ambiguous,
            breakdown: Some(breakdown),
        }
    }

    /// Fix strictly after the finding and no later than the window.
    fn within_window(&self, finding: &ReviewFindingObserved, candidate: &CandidateFix) -> bool {
        let elapsed = candidate.fix.applied_at() - finding.observed_at();
        elapsed > Duration::zero() && elapsed <= self.config.temporal_window()
    }
}
