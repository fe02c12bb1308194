//! Shared utility functions.

/// Strip the `.html` extension from a page name or path segment.
///
/// "bar.html" -> "bar"
/// "eggs/foo.html" -> "eggs/foo"
/// "notes" -> "notes"
pub fn page_stem(name: &str) -> &str {
    name.strip_suffix(".html").unwrap_or(name)
}
