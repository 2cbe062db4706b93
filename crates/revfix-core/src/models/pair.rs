use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::Confidence;
use super::verification::VerificationResult;

/// How a finding was linked to its fix, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingType {
    /// The tool's own autofix produced the commit.
    Autofix,
    /// The fix is the commit the finding was observed at.
    SameCommit,
    /// Applied shortly after observation; a time-proximity proxy for PR membership.
    SamePr,
    /// Applied inside the temporal window.
    Temporal,
    Inferred,
}

impl PairingType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Autofix => "autofix",
            Self::SameCommit => "same_commit",
            Self::SamePr => "same_pr",
            Self::Temporal => "temporal",
            Self::Inferred => "inferred",
        }
    }
}

impl fmt::Display for PairingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finding linked to the commit believed to have fixed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FindingFixPair {
    pub pair_id: String,
    pub finding_id: String,
    pub fix_commit_sha: String,
    pub diff_hunks: Vec<String>,
    pub confidence: Confidence,
    pub disappearance_confirmed: bool,
    pub pairing_type: PairingType,
    pub created_at: DateTime<Utc>,
}

impl FindingFixPair {
    /// Identity used for idempotence: the generated pair id is not part of it.
    pub fn identity(&self) -> (&str, &str) {
        (&self.finding_id, &self.fix_commit_sha)
    }

    /// Same finding, same fix, same score and pairing type.
    pub fn same_pairing(&self, other: &FindingFixPair) -> bool {
        self.identity() == other.identity()
            && self.confidence == other.confidence
            && self.pairing_type == other.pairing_type
    }

    /// Produce the corrected record after verification. The original pair is
    /// left untouched.
    pub fn with_verification(&self, result: &VerificationResult) -> FindingFixPair {
        FindingFixPair {
            confidence: self.confidence.adjusted(result.confidence_delta),
            disappearance_confirmed: result.disappearance_confirmed,
            ..self.clone()
        }
    }
}
