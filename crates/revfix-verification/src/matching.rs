//! Matching post-fix CI findings back to the original finding.

use revfix_core::models::{paths, PostFixFinding, ReviewFindingObserved};

/// Same rule (qualified or bare code) in the same normalized file.
///
/// Line numbers are ignored: the fix itself may have shifted them. A bare
/// label reported with an explicit tool only matches that tool.
pub fn matches_original(finding: &ReviewFindingObserved, reported: &PostFixFinding) -> bool {
    let rule = finding.rule_id();
    if !rule.matches_label(&reported.rule_id) {
        return false;
    }
    if reported.rule_id.trim() == rule.code() {
        if let Some(tool) = reported.tool.as_deref() {
            if !tool.trim().eq_ignore_ascii_case(finding.tool_name()) {
                return false;
            }
        }
    }
    paths::same_file(&reported.file_path, finding.file_path())
}

/// True when any post-fix finding is the original one reported again.
pub fn finding_still_reported(finding: &ReviewFindingObserved, reported: &[PostFixFinding]) -> bool {
    reported.iter().any(|r| matches_original(finding, r))
}
