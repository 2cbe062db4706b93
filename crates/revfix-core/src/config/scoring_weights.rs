use serde::{Deserialize, Serialize};

/// Weights of the confidence signals. Positive signals add, penalties subtract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub rule_id_matched: f64,
    pub diff_removes_token: f64,
    pub disappearance_confirmed: f64,
    pub anchored_to_hunk: f64,
    pub ambiguous_commits: f64,
    pub disappears_without_mod: f64,
    pub config_change_detected: f64,
    /// Penalty per eligible candidate beyond the first.
    pub per_extra_candidate: f64,
    /// Cap on the total candidate-count penalty.
    pub max_candidate_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rule_id_matched: 0.30,
            diff_removes_token: 0.30,
            disappearance_confirmed: 0.20,
            anchored_to_hunk: 0.20,
            ambiguous_commits: 0.20,
            disappears_without_mod: 0.25,
            config_change_detected: 0.15,
            per_extra_candidate: 0.05,
            max_candidate_penalty: 0.20,
        }
    }
}

impl ScoringWeights {
    /// Named weights, in a fixed order, for validation and reporting.
    pub fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("rule_id_matched", self.rule_id_matched),
            ("diff_removes_token", self.diff_removes_token),
            ("disappearance_confirmed", self.disappearance_confirmed),
            ("anchored_to_hunk", self.anchored_to_hunk),
            ("ambiguous_commits", self.ambiguous_commits),
            ("disappears_without_mod", self.disappears_without_mod),
            ("config_change_detected", self.config_change_detected),
            ("per_extra_candidate", self.per_extra_candidate),
            ("max_candidate_penalty", self.max_candidate_penalty),
        ]
    }

    /// Penalty for `count` eligible candidates.
    pub fn candidate_penalty(&self, count: usize) -> f64 {
        let extra = count.saturating_sub(1) as f64;
        (extra * self.per_extra_candidate).min(self.max_candidate_penalty)
    }
}
