//! Unified-diff analysis: hunk headers, original-file line reconstruction, and
//! the set of files a fix touched.

pub mod files;
pub mod hunk;

pub use files::{files_in_fix, touches_file};
pub use hunk::{parse_hunks, HunkHeader, ParsedHunk};
