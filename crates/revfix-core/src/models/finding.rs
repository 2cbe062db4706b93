use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::line_range::LineRange;
use super::paths;
use super::rule_id::RuleId;
use crate::errors::validation_error::{require_non_empty, ValidationError};

/// Diagnostic severity as reported by the rule-runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
    Hint,
}

/// Unvalidated finding fields, as received from upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFinding {
    pub finding_id: String,
    pub repo: String,
    pub pr_id: String,
    pub rule_id: String,
    #[serde(default)]
    pub severity: Severity,
    pub file_path: String,
    pub line_range: LineRange,
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_version: Option<String>,
    #[serde(default)]
    pub normalized_message: String,
    #[serde(default)]
    pub raw_message: String,
    pub commit_sha: String,
    pub observed_at: DateTime<Utc>,
}

/// A static-analysis finding observed during pull-request review.
///
/// Immutable once built; construction rejects empty identifiers and malformed
/// rule ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewFinding")]
pub struct ReviewFindingObserved {
    finding_id: String,
    repo: String,
    pr_id: String,
    rule_id: RuleId,
    severity: Severity,
    file_path: String,
    line_range: LineRange,
    tool_name: String,
    tool_version: Option<String>,
    normalized_message: String,
    raw_message: String,
    commit_sha: String,
    observed_at: DateTime<Utc>,
}

impl ReviewFindingObserved {
    pub fn new(draft: NewFinding) -> Result<Self, ValidationError> {
        require_non_empty("finding_id", &draft.finding_id)?;
        require_non_empty("repo", &draft.repo)?;
        require_non_empty("file_path", &draft.file_path)?;
        require_non_empty("commit_sha", &draft.commit_sha)?;
        let rule_id = RuleId::parse(&draft.rule_id)?;
        let tool_name = draft
            .tool_name
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| rule_id.tool().to_string());

        Ok(Self {
            finding_id: draft.finding_id,
            repo: draft.repo,
            pr_id: draft.pr_id,
            rule_id,
            severity: draft.severity,
            file_path: paths::normalize(&draft.file_path),
            line_range: draft.line_range,
            tool_name,
            tool_version: draft.tool_version,
            normalized_message: draft.normalized_message,
            raw_message: draft.raw_message,
            commit_sha: draft.commit_sha,
            observed_at: draft.observed_at,
        })
    }

    pub fn finding_id(&self) -> &str {
        &self.finding_id
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn pr_id(&self) -> &str {
        &self.pr_id
    }

    pub fn rule_id(&self) -> &RuleId {
        &self.rule_id
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn line_range(&self) -> LineRange {
        self.line_range
    }

    /// First line of the finding; the anchor used by diff matching.
    pub fn line(&self) -> u32 {
        self.line_range.start()
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> Option<&str> {
        self.tool_version.as_deref()
    }

    pub fn normalized_message(&self) -> &str {
        &self.normalized_message
    }

    pub fn raw_message(&self) -> &str {
        &self.raw_message
    }

    /// Commit SHA the finding was observed at.
    pub fn commit_sha(&self) -> &str {
        &self.commit_sha
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }
}

impl TryFrom<NewFinding> for ReviewFindingObserved {
    type Error = ValidationError;
    fn try_from(draft: NewFinding) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}
