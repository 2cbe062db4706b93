//! Weighted-signal confidence scoring.
//!
//! ```text
//! score = clamp(
//!     rule_id_matched + diff_removes_token + disappearance_confirmed + anchored_to_hunk
//!   - ambiguous_commits - disappears_without_mod - config_change_detected
//!   - candidate_penalty(candidate_commit_count),
//!   0, 1)
//! ```
//!
//! `is_formatter_batch` does not move the score; it vetoes promotion.

pub mod context;
pub mod evidence;

pub use context::{ScoringContext, Signal};
pub use evidence::DiffEvidence;

use revfix_core::config::ScoringWeights;
use revfix_core::models::Confidence;
use serde::{Deserialize, Serialize};

/// One signal's share of the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub signal: Signal,
    pub active: bool,
    /// Signed amount added to the raw score (0.0 when inactive).
    pub contribution: f64,
}

/// Score plus the per-signal breakdown, for observability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<SignalContribution>,
    /// Sum of contributions before clamping.
    pub raw_score: f64,
    pub confidence: Confidence,
    pub formatter_batch: bool,
}

impl ScoreBreakdown {
    /// Signals that moved the score.
    pub fn active_signals(&self) -> impl Iterator<Item = Signal> + '_ {
        self.contributions
            .iter()
            .filter(|c| c.active)
            .map(|c| c.signal)
    }

    /// Eligible for promotion at `threshold`. Formatter batches never are.
    pub fn promotable(&self, threshold: f64) -> bool {
        !self.formatter_batch && self.confidence.meets(threshold)
    }
}

/// Stateless scorer over a caller-built [`ScoringContext`].
#[derive(Debug, Clone, Default)]
pub struct ConfidenceScorer {
    weights: ScoringWeights,
}

impl ConfidenceScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a context. Never fails; identical contexts give identical results.
    pub fn score(&self, ctx: &ScoringContext) -> ScoreBreakdown {
        let w = &self.weights;
        let candidate_penalty = w.candidate_penalty(ctx.candidate_commit_count);

        let contributions = vec![
            contribution(Signal::RuleIdMatched, ctx.rule_id_matched, w.rule_id_matched),
            contribution(Signal::DiffRemovesToken, ctx.diff_removes_token, w.diff_removes_token),
            contribution(
                Signal::DisappearanceConfirmed,
                ctx.disappearance_confirmed,
                w.disappearance_confirmed,
            ),
            contribution(Signal::AnchoredToHunk, ctx.anchored_to_hunk, w.anchored_to_hunk),
            contribution(Signal::AmbiguousCommits, ctx.ambiguous_commits, -w.ambiguous_commits),
            contribution(
                Signal::DisappearsWithoutMod,
                ctx.disappears_without_mod,
                -w.disappears_without_mod,
            ),
            contribution(
                Signal::ConfigChangeDetected,
                ctx.config_change_detected,
                -w.config_change_detected,
            ),
            contribution(
                Signal::CandidateCommitCount,
                candidate_penalty > 0.0,
                -candidate_penalty,
            ),
            SignalContribution {
                signal: Signal::IsFormatterBatch,
                active: ctx.is_formatter_batch,
                contribution: 0.0,
            },
        ];

        let raw_score: f64 = contributions.iter().map(|c| c.contribution).sum();
        ScoreBreakdown {
            contributions,
            raw_score,
            confidence: Confidence::new(raw_score),
            formatter_batch: ctx.is_formatter_batch,
        }
    }
}

fn contribution(signal: Signal, active: bool, weight: f64) -> SignalContribution {
    SignalContribution {
        signal,
        active,
        contribution: if active { weight } else { 0.0 },
    }
}
