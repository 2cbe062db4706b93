//! Reads scoring evidence out of a candidate's diff.

use std::collections::BTreeSet;

use revfix_core::models::{paths, CandidateFix, ReviewFindingObserved};
use revfix_core::ConfigFileMatcher;

use super::context::ScoringContext;
use crate::diff::{self, ParsedHunk};

/// Per-candidate facts derived from its hunks, computed once per pairing call.
#[derive(Debug, Clone)]
pub struct DiffEvidence {
    pub parsed: Vec<ParsedHunk>,
    pub files: BTreeSet<String>,
}

impl DiffEvidence {
    pub fn collect(candidate: &CandidateFix) -> Self {
        let parsed: Vec<ParsedHunk> = candidate
            .fix
            .diff_hunks()
            .iter()
            .flat_map(|h| diff::parse_hunks(h))
            .collect();
        let files = diff::files_in_fix(&candidate.fix, &parsed);
        Self { parsed, files }
    }

    pub fn touches_file(&self, path: &str) -> bool {
        diff::touches_file(&self.files, path)
    }

    /// Hunks that belong to `path`, or carry no file header at all.
    fn hunks_for<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ParsedHunk> + 'a {
        self.parsed.iter().filter(move |h| {
            h.file_path
                .as_deref()
                .map_or(true, |p| paths::same_file(p, path))
        })
    }

    /// The touched region overlaps the finding inside the finding's file.
    pub fn overlaps_finding(&self, candidate: &CandidateFix, finding: &ReviewFindingObserved) -> bool {
        self.touches_file(finding.file_path())
            && candidate
                .fix
                .touched_line_range()
                .overlaps(&finding.line_range())
    }

    /// Build the scoring context for this candidate. `eligible` and
    /// `ambiguous` are properties of the whole candidate set.
    pub fn context(
        &self,
        finding: &ReviewFindingObserved,
        candidate: &CandidateFix,
        config_files: &ConfigFileMatcher,
        formatter_batch_min_files: usize,
        eligible: usize,
        ambiguous: bool,
    ) -> ScoringContext {
        let rule = finding.rule_id();
        let line = finding.line();
        let path = finding.file_path();

        let rule_id_matched = candidate.fix.diff_hunks().iter().any(|h| {
            body_lines(h).any(|l| mentions_token(l, rule.as_str()) || mentions_token(l, rule.code()))
        });

        ScoringContext {
            rule_id_matched,
            diff_removes_token: self.hunks_for(path).any(|h| h.removes_line(line)),
            disappearance_confirmed: candidate.disappearance_confirmed,
            anchored_to_hunk: self.hunks_for(path).any(|h| h.spans_line(line)),
            ambiguous_commits: ambiguous,
            disappears_without_mod: candidate.disappeared_without_modification
                && !self.touches_file(path),
            config_change_detected: config_files.any_config_file(&candidate.pr_modified_files)
                || self.files.iter().any(|f| config_files.is_config_file(f)),
            candidate_commit_count: eligible,
            is_formatter_batch: self.files.len() >= formatter_batch_min_files,
        }
    }
}

/// File content carried by a hunk, without the `+`/`-`/` ` marker. File and
/// hunk headers are skipped.
fn body_lines(hunk: &str) -> impl Iterator<Item = &str> {
    hunk.lines()
        .filter(|l| {
            !(l.starts_with("--- ")
                || l.starts_with("+++ ")
                || l.starts_with("@@")
                || l.starts_with("diff ")
                || l.starts_with("index "))
        })
        .map(|l| l.strip_prefix(['+', '-', ' ']).unwrap_or(l))
}

/// `token` occurs in `line` with no identifier character on either side, so
/// `indent` does not match inside `indentation`.
fn mentions_token(line: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let is_ident = |c: char| c.is_alphanumeric() || c == '_' || c == '-';
    line.match_indices(token).any(|(at, _)| {
        let before = line[..at].chars().next_back();
        let after = line[at + token.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_needs_identifier_boundaries() {
        assert!(mentions_token("-x = 1  # noqa: E501", "E501"));
        assert!(mentions_token("+// eslint-disable-next-line no-unused-vars", "no-unused-vars"));
        assert!(mentions_token("# ruff:E501 fixed", "ruff:E501"));
        assert!(!mentions_token("-fix indentation", "indent"));
        assert!(!mentions_token("+add a semicolon", "semi"));
        assert!(!mentions_token("-E5011 is another rule", "E501"));
        assert!(mentions_token("-indentation, then indent", "indent"));
    }

    #[test]
    fn headers_are_not_body() {
        let hunk = "--- a/semi.js\n+++ b/semi.js\n@@ -1,1 +1,1 @@ semi\n-let a = 1\n+let a = 1;\n";
        assert!(!body_lines(hunk).any(|l| mentions_token(l, "semi")));
        assert_eq!(body_lines(hunk).collect::<Vec<_>>(), vec!["let a = 1", "let a = 1;"]);
        assert!(body_lines("-E501 at line start").any(|l| mentions_token(l, "E501")));
    }
}
