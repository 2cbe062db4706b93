//! Builders for findings, fixes, candidates, and diff hunks used across the
//! revfix integration tests. All timestamps derive from [`t0`] so tests stay
//! deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use revfix_core::models::{
    CandidateFix, Confidence, FindingFixPair, LineRange, NewFinding, NewFix, PairingType,
    PostFixCiFindings, PostFixFinding, ReviewFindingObserved, ReviewFixApplied, Severity,
};

/// Fixed reference instant: 2024-05-01T12:00:00Z.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn minutes_after_t0(minutes: i64) -> DateTime<Utc> {
    t0() + Duration::minutes(minutes)
}

pub const OBSERVED_SHA: &str = "0bse7ved";

/// Finding with id `f-<rule>-<line>` observed at `t0()` on commit [`OBSERVED_SHA`].
pub fn finding(rule_id: &str, file_path: &str, line: u32) -> ReviewFindingObserved {
    finding_with_range(rule_id, file_path, line, line)
}

pub fn finding_with_range(
    rule_id: &str,
    file_path: &str,
    start: u32,
    end: u32,
) -> ReviewFindingObserved {
    let line_range = LineRange::new(start, end).expect("fixture line range");
    let draft = NewFinding {
        finding_id: format!("f-{rule_id}-{start}"),
        repo: "acme/api".to_string(),
        pr_id: "42".to_string(),
        rule_id: rule_id.to_string(),
        severity: Severity::Warning,
        file_path: file_path.to_string(),
        line_range,
        tool_name: None,
        tool_version: None,
        normalized_message: String::new(),
        raw_message: String::new(),
        commit_sha: OBSERVED_SHA.to_string(),
        observed_at: t0(),
    };
    ReviewFindingObserved::new(draft).expect("fixture finding")
}

/// Unified-diff hunk for `path` that removes original line `line`, with two
/// lines of leading context. `note` is appended to the removed line.
pub fn hunk_removing(path: &str, line: u32, note: &str) -> String {
    let start = line.saturating_sub(2).max(1);
    let mut body = String::new();
    body.push_str(&format!("--- a/{path}\n+++ b/{path}\n"));
    let context = line - start;
    body.push_str(&format!("@@ -{start},{} +{start},{} @@\n", context + 1, context + 1));
    for n in start..line {
        body.push_str(&format!(" context line {n}\n"));
    }
    body.push_str(&format!("-offending line {line} {note}\n"));
    body.push_str(&format!("+fixed line {line}\n"));
    body
}

/// Hunk for `path` that only adds lines after `line`; removes nothing.
pub fn hunk_adding(path: &str, line: u32, note: &str) -> String {
    format!("--- a/{path}\n+++ b/{path}\n@@ -{line},1 +{line},2 @@\n context line {line}\n+added {note}\n")
}

/// Builder for [`ReviewFixApplied`] / [`CandidateFix`].
#[derive(Debug, Clone)]
pub struct FixBuilder {
    sha: String,
    hunks: Vec<String>,
    autofix: bool,
    range: (u32, u32),
    files: Vec<String>,
    applied_at: DateTime<Utc>,
    pr_files: Vec<String>,
    confirmed: bool,
    vanished_without_mod: bool,
}

impl FixBuilder {
    /// Fix `sha` applied `minutes` after [`t0`].
    pub fn new(sha: &str, minutes: i64) -> Self {
        Self {
            sha: sha.to_string(),
            hunks: Vec::new(),
            autofix: false,
            range: (1, 1),
            files: Vec::new(),
            applied_at: minutes_after_t0(minutes),
            pr_files: Vec::new(),
            confirmed: false,
            vanished_without_mod: false,
        }
    }

    pub fn hunk(mut self, hunk: impl Into<String>) -> Self {
        self.hunks.push(hunk.into());
        self
    }

    pub fn autofix(mut self) -> Self {
        self.autofix = true;
        self
    }

    pub fn lines(mut self, start: u32, end: u32) -> Self {
        self.range = (start, end);
        self
    }

    pub fn files(mut self, files: &[&str]) -> Self {
        self.files = files.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn applied_at(mut self, at: DateTime<Utc>) -> Self {
        self.applied_at = at;
        self
    }

    pub fn pr_files(mut self, files: &[&str]) -> Self {
        self.pr_files = files.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn confirmed(mut self) -> Self {
        self.confirmed = true;
        self
    }

    pub fn vanished_without_mod(mut self) -> Self {
        self.vanished_without_mod = true;
        self
    }

    pub fn build_fix(&self) -> ReviewFixApplied {
        let touched_line_range =
            LineRange::new(self.range.0, self.range.1).expect("fixture fix range");
        let draft = NewFix {
            fix_commit_sha: self.sha.clone(),
            diff_hunks: self.hunks.clone(),
            tool_autofix: self.autofix,
            touched_line_range,
            touched_files: self.files.clone(),
            applied_at: self.applied_at,
        };
        ReviewFixApplied::new(draft).expect("fixture fix")
    }

    pub fn build(&self) -> CandidateFix {
        CandidateFix::new(self.build_fix(), self.pr_files.clone())
            .with_disappearance_confirmed(self.confirmed)
            .with_disappeared_without_modification(self.vanished_without_mod)
    }
}

/// Post-fix CI results with no remaining findings.
pub fn clean_ci_run(fix_modified: &[&str], pr_files: &[&str]) -> PostFixCiFindings {
    PostFixCiFindings {
        commit_sha: "ver1f1ed".to_string(),
        findings: Vec::new(),
        ci_run_id: "ci-1001".to_string(),
        fix_modified_files: fix_modified.iter().map(|f| f.to_string()).collect(),
        pr_files: pr_files.iter().map(|f| f.to_string()).collect(),
        verification_source: "ci_rerun".to_string(),
    }
}

pub fn post_fix_finding(rule_id: &str, file_path: &str, line: Option<u32>) -> PostFixFinding {
    PostFixFinding {
        rule_id: rule_id.to_string(),
        file_path: file_path.to_string(),
        line,
        tool: None,
    }
}

/// Stored pair for `finding`, as the pairing engine would have produced it.
pub fn stored_pair(finding: &ReviewFindingObserved, fix_commit_sha: &str, confidence: f64) -> FindingFixPair {
    FindingFixPair {
        pair_id: format!("pair-{}", finding.finding_id()),
        finding_id: finding.finding_id().to_string(),
        fix_commit_sha: fix_commit_sha.to_string(),
        diff_hunks: Vec::new(),
        confidence: Confidence::new(confidence),
        disappearance_confirmed: false,
        pairing_type: PairingType::Temporal,
        created_at: minutes_after_t0(90),
    }
}
