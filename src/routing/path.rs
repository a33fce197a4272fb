//! Path pattern normalization.

/// Characters trimmed from both ends of a path pattern.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Normalize a path pattern so it starts with exactly one `/`.
///
/// Surrounding ASCII whitespace and NUL bytes are trimmed and every leading
/// slash is collapsed, so `"//path"` cannot be mistaken for a network path
/// once a URL is generated from it.
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_matches(TRIMMED).trim_start_matches('/'))
}
