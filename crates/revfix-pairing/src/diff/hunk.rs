//! Hunk parsing with original-file line numbers.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HUNK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").unwrap()
});

/// `@@ -old_start,old_len +new_start,new_len @@`. An omitted length is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HunkHeader {
    pub old_start: u32,
    pub old_len: u32,
    pub new_start: u32,
    pub new_len: u32,
}

impl HunkHeader {
    pub fn parse(line: &str) -> Option<Self> {
        let caps = HUNK_HEADER_RE.captures(line)?;
        let num = |i: usize, default: u32| -> Option<u32> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().ok(),
                None => Some(default),
            }
        };
        let header = Self {
            old_start: num(1, 0)?,
            old_len: num(2, 1)?,
            new_start: num(3, 0)?,
            new_len: num(4, 1)?,
        };
        // Line counters run up to `start + len`; that must fit in a u32.
        header.old_start.checked_add(header.old_len)?;
        header.new_start.checked_add(header.new_len)?;
        Some(header)
    }

    fn old_span(&self) -> Option<(u32, u32)> {
        span(self.old_start, self.old_len)
    }

    fn new_span(&self) -> Option<(u32, u32)> {
        span(self.new_start, self.new_len)
    }
}

fn span(start: u32, len: u32) -> Option<(u32, u32)> {
    if len == 0 || start == 0 {
        return None;
    }
    Some((start, start.saturating_add(len - 1)))
}

/// One `@@` section of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHunk {
    /// File from the closest preceding `+++`/`---` header, if any.
    pub file_path: Option<String>,
    pub header: HunkHeader,
    /// Original-file line numbers of every `-` line.
    pub removed_lines: Vec<u32>,
    /// New-file line numbers of every `+` line.
    pub added_lines: Vec<u32>,
}

impl ParsedHunk {
    /// Line falls inside the hunk's before or after span.
    pub fn spans_line(&self, line: u32) -> bool {
        let within = |s: Option<(u32, u32)>| s.is_some_and(|(a, b)| (a..=b).contains(&line));
        within(self.header.old_span()) || within(self.header.new_span())
    }

    /// The hunk removes original line `line`.
    pub fn removes_line(&self, line: u32) -> bool {
        self.removed_lines.contains(&line)
    }
}

/// Parse every `@@` section in `text`.
///
/// Body lines are consumed only while the header's counts are not exhausted,
/// so an added line that happens to start with `++` is never mistaken for a
/// file header. Malformed headers are skipped.
pub fn parse_hunks(text: &str) -> Vec<ParsedHunk> {
    let mut hunks = Vec::new();
    let mut old_path: Option<String> = None;
    let mut file_path: Option<String> = None;
    let mut current: Option<ParsedHunk> = None;
    let (mut old_line, mut new_line) = (0u32, 0u32);
    let (mut old_left, mut new_left) = (0u32, 0u32);

    for line in text.lines() {
        if old_left > 0 || new_left > 0 {
            if let Some(hunk) = current.as_mut() {
                match line.chars().next() {
                    Some('-') => {
                        hunk.removed_lines.push(old_line);
                        old_line = old_line.saturating_add(1);
                        old_left = old_left.saturating_sub(1);
                    }
                    Some('+') => {
                        hunk.added_lines.push(new_line);
                        new_line = new_line.saturating_add(1);
                        new_left = new_left.saturating_sub(1);
                    }
                    Some('\\') => {}
                    // Context; some tools strip the leading space of blank lines.
                    _ => {
                        old_line = old_line.saturating_add(1);
                        new_line = new_line.saturating_add(1);
                        old_left = old_left.saturating_sub(1);
                        new_left = new_left.saturating_sub(1);
                    }
                }
                continue;
            }
        }

        if let Some(header) = HunkHeader::parse(line) {
            if let Some(done) = current.take() {
                hunks.push(done);
            }
            old_line = header.old_start;
            new_line = header.new_start;
            old_left = header.old_len;
            new_left = header.new_len;
            current = Some(ParsedHunk {
                file_path: file_path.clone(),
                header,
                removed_lines: Vec::new(),
                added_lines: Vec::new(),
            });
        } else if let Some(rest) = line.strip_prefix("--- ") {
            old_path = header_path(rest);
        } else if let Some(rest) = line.strip_prefix("+++ ") {
            // Deleted files report `/dev/null` as the new side.
            file_path = header_path(rest).or_else(|| old_path.clone());
        }
    }

    if let Some(done) = current {
        hunks.push(done);
    }
    hunks
}

/// Extract the path from a `---`/`+++` header, dropping the `a/`/`b/` prefix
/// and any trailing timestamp.
fn header_path(rest: &str) -> Option<String> {
    let raw = rest.split('\t').next().unwrap_or(rest).trim();
    if raw.is_empty() || raw == "/dev/null" {
        return None;
    }
    let path = raw
        .strip_prefix("a/")
        .or_else(|| raw.strip_prefix("b/"))
        .unwrap_or(raw);
    Some(revfix_core::models::paths::normalize(path))
}
