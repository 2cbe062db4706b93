use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::line_range::LineRange;
use super::paths;
use crate::errors::validation_error::{require_non_empty, ValidationError};

/// Unvalidated fix fields, as received from the commit-watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFix {
    pub fix_commit_sha: String,
    #[serde(default)]
    pub diff_hunks: Vec<String>,
    #[serde(default)]
    pub tool_autofix: bool,
    pub touched_line_range: LineRange,
    #[serde(default)]
    pub touched_files: Vec<String>,
    pub applied_at: DateTime<Utc>,
}

/// A commit applied to a pull request, carrying its unified-diff hunks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewFix")]
pub struct ReviewFixApplied {
    fix_commit_sha: String,
    diff_hunks: Vec<String>,
    tool_autofix: bool,
    touched_line_range: LineRange,
    touched_files: Vec<String>,
    applied_at: DateTime<Utc>,
}

impl ReviewFixApplied {
    pub fn new(draft: NewFix) -> Result<Self, ValidationError> {
        require_non_empty("fix_commit_sha", &draft.fix_commit_sha)?;
        let mut touched_files: Vec<String> = draft
            .touched_files
            .iter()
            .filter(|f| !f.trim().is_empty())
            .map(|f| paths::normalize(f))
            .collect();
        touched_files.sort();
        touched_files.dedup();

        Ok(Self {
            fix_commit_sha: draft.fix_commit_sha,
            diff_hunks: draft.diff_hunks,
            tool_autofix: draft.tool_autofix,
            touched_line_range: draft.touched_line_range,
            touched_files,
            applied_at: draft.applied_at,
        })
    }

    pub fn fix_commit_sha(&self) -> &str {
        &self.fix_commit_sha
    }

    /// Hunks in commit order.
    pub fn diff_hunks(&self) -> &[String] {
        &self.diff_hunks
    }

    /// Whether the fix was produced by the tool's own autofix.
    pub fn tool_autofix(&self) -> bool {
        self.tool_autofix
    }

    pub fn touched_line_range(&self) -> LineRange {
        self.touched_line_range
    }

    /// Files reported by the commit-watcher. May be empty when the hunks carry
    /// their own file headers.
    pub fn touched_files(&self) -> &[String] {
        &self.touched_files
    }

    pub fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }
}

impl TryFrom<NewFix> for ReviewFixApplied {
    type Error = ValidationError;
    fn try_from(draft: NewFix) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}
