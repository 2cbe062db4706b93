use serde::{Deserialize, Serialize};
use std::fmt;

/// A finding reported by the CI rerun after the fix landed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFixFinding {
    /// Qualified (`tool:code`) or bare rule label.
    pub rule_id: String,
    pub file_path: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub tool: Option<String>,
}

/// Results of the CI run that followed a fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFixCiFindings {
    /// Commit the CI run analysed.
    pub commit_sha: String,
    pub findings: Vec<PostFixFinding>,
    pub ci_run_id: String,
    /// Files modified by the fix commit itself.
    pub fix_modified_files: Vec<String>,
    /// Files modified anywhere in the pull request.
    pub pr_files: Vec<String>,
    pub verification_source: String,
}

/// Verification outcomes in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    StillPresent,
    ConfigOnly,
    DisappearsWithoutMod,
    Confirmed,
}

impl VerificationOutcome {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StillPresent => "still_present",
            Self::ConfigOnly => "config_only",
            Self::DisappearsWithoutMod => "disappears_without_mod",
            Self::Confirmed => "confirmed",
        }
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload for the finding-resolved notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingResolvedEvent {
    pub finding_id: String,
    pub fix_commit_sha: String,
    pub ci_run_id: String,
    pub verification_commit_sha: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub finding_id: String,
    pub pair_id: String,
    pub outcome: VerificationOutcome,
    pub disappearance_confirmed: bool,
    /// Signed correction applied to the pair's confidence.
    pub confidence_delta: f64,
    /// Only populated for [`VerificationOutcome::Confirmed`].
    pub resolved_event: Option<FindingResolvedEvent>,
}
