//! Path normalization for the reported `file` attribute.
//!
//! The wire format is text, so paths stay strings here. Rules are simple
//! and deterministic: always forward slashes, absolute paths rewritten
//! relative to the configured base paths.

/// Normalize native separators to forward slashes.
pub fn from_native_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Whether a (forward-slash normalized) path is absolute, covering both
/// Unix roots and Windows drive prefixes.
pub fn is_absolute(path: &str) -> bool {
    if path.starts_with('/') {
        return true;
    }
    let bytes = path.as_bytes();
    bytes.len() >= 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}

/// Rewrite an absolute path relative to the first matching base path.
///
/// A base matches when the path starts with it (trailing slash on the base
/// ignored) and at least one component follows. Unmatched paths come back
/// unchanged.
pub fn relative_to(path: &str, base_paths: &[String]) -> String {
    for base in base_paths {
        if base.is_empty() {
            continue;
        }
        let base = from_native_separators(base);
        let prefix = base.strip_suffix('/').unwrap_or(&base);
        if let Some(rest) = path.strip_prefix(prefix)
            && let Some(rest) = rest.strip_prefix('/')
            && !rest.is_empty()
        {
            return rest.to_string();
        }
    }
    path.to_string()
}
