use serde::{Deserialize, Serialize};
use std::fmt;

/// Signals feeding the confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    RuleIdMatched,
    DiffRemovesToken,
    DisappearanceConfirmed,
    AnchoredToHunk,
    AmbiguousCommits,
    DisappearsWithoutMod,
    ConfigChangeDetected,
    CandidateCommitCount,
    IsFormatterBatch,
}

impl Signal {
    /// Breakdown order.
    pub const ALL: [Signal; 9] = [
        Self::RuleIdMatched,
        Self::DiffRemovesToken,
        Self::DisappearanceConfirmed,
        Self::AnchoredToHunk,
        Self::AmbiguousCommits,
        Self::DisappearsWithoutMod,
        Self::ConfigChangeDetected,
        Self::CandidateCommitCount,
        Self::IsFormatterBatch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::RuleIdMatched => "rule_id_matched",
            Self::DiffRemovesToken => "diff_removes_token",
            Self::DisappearanceConfirmed => "disappearance_confirmed",
            Self::AnchoredToHunk => "anchored_to_hunk",
            Self::AmbiguousCommits => "ambiguous_commits",
            Self::DisappearsWithoutMod => "disappears_without_mod",
            Self::ConfigChangeDetected => "config_change_detected",
            Self::CandidateCommitCount => "candidate_commit_count",
            Self::IsFormatterBatch => "is_formatter_batch",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the scorer needs to know about one finding/candidate pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringContext {
    /// The finding's rule id (qualified or bare) appears in a hunk.
    pub rule_id_matched: bool,
    /// A hunk removes the original line the finding points at.
    pub diff_removes_token: bool,
    /// An earlier verification confirmed the finding disappeared.
    pub disappearance_confirmed: bool,
    /// The finding's line falls inside a hunk's before/after span.
    pub anchored_to_hunk: bool,
    /// Two or more eligible candidates overlap the finding's region.
    pub ambiguous_commits: bool,
    /// The finding vanished although the fix never touched its file.
    pub disappears_without_mod: bool,
    /// The PR also edited a lint/format config file.
    pub config_change_detected: bool,
    /// Eligible candidates for this finding.
    pub candidate_commit_count: usize,
    /// Large reformat commit spanning unrelated files.
    pub is_formatter_batch: bool,
}
