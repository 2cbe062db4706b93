use super::fix::ReviewFixApplied;
use super::paths;

/// A fix under consideration for one finding. Built per pairing call and never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateFix {
    pub fix: ReviewFixApplied,
    /// A previous verification already confirmed the finding disappeared.
    pub disappearance_confirmed: bool,
    /// CI showed the finding gone although this fix never touched its file.
    pub disappeared_without_modification: bool,
    /// Files modified anywhere in the pull request.
    pub pr_modified_files: Vec<String>,
}

impl CandidateFix {
    pub fn new(fix: ReviewFixApplied, pr_modified_files: Vec<String>) -> Self {
        Self {
            fix,
            disappearance_confirmed: false,
            disappeared_without_modification: false,
            pr_modified_files: pr_modified_files.iter().map(|f| paths::normalize(f)).collect(),
        }
    }

    pub fn with_disappearance_confirmed(mut self, confirmed: bool) -> Self {
        self.disappearance_confirmed = confirmed;
        self
    }

    pub fn with_disappeared_without_modification(mut self, vanished: bool) -> Self {
        self.disappeared_without_modification = vanished;
        self
    }

    pub fn fix_commit_sha(&self) -> &str {
        self.fix.fix_commit_sha()
    }
}
