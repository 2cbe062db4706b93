use std::collections::BTreeSet;

use revfix_core::models::{paths, ReviewFixApplied};

use super::hunk::ParsedHunk;

/// Every file a fix touched: the commit-watcher's list plus any file named in
/// the hunks' headers. Ordered for deterministic iteration.
pub fn files_in_fix(fix: &ReviewFixApplied, parsed: &[ParsedHunk]) -> BTreeSet<String> {
    fix.touched_files()
        .iter()
        .cloned()
        .chain(parsed.iter().filter_map(|h| h.file_path.clone()))
        .collect()
}

/// Whether the fix touched `path`. A fix carrying no file information at all
/// is taken to be scoped to the finding's file.
pub fn touches_file(files: &BTreeSet<String>, path: &str) -> bool {
    files.is_empty() || files.contains(&paths::normalize(path))
}
