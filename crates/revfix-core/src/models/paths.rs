//! Repository-relative path normalization.

/// Strip leading `./` segments and convert Windows separators so that paths
/// reported by different tools compare equal.
pub fn normalize(path: &str) -> String {
    let mut p = path.trim().replace('\\', "/");
    while let Some(rest) = p.strip_prefix("./") {
        p = rest.to_string();
    }
    p
}

/// Compare two paths after normalization.
pub fn same_file(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
