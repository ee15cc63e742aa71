//! Hyperlink references.
//!
//! The records API identifies related resources by absolute URL rather than
//! bare foreign key (`"http://host/api/degree/COMSCI1/"` instead of
//! `"COMSCI1"`). Resolving strips exactly one trailing slash and takes the
//! final path segment; building does the inverse for POST payloads.

/// Extract the bare identifier from a hyperlink reference.
///
/// Empty input resolves to the empty string. Input with no path separator
/// is already bare and comes back unchanged, which makes the function
/// idempotent on its own output.
pub fn resolve_reference(raw: &str) -> &str {
    if raw.is_empty() {
        return "";
    }
    let trimmed = raw.strip_suffix('/').unwrap_or(raw);
    match trimmed.rsplit_once('/') {
        Some((_, id)) => id,
        None => trimmed,
    }
}

/// Build the absolute hyperlink the API expects for a foreign-key field:
/// base, resource name, bare identifier, trailing slash.
pub fn reference(base: &str, resource: &str, id: &str) -> String {
    format!("{}/{}/{}/", base.trim_end_matches('/'), resource, id)
}
