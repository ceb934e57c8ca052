//! Whitespace normalization shared by the address and table extractors.

/// Collapse every run of whitespace (including newlines) to a single
/// space and trim the ends. Idempotent: applying it twice yields the
/// same string as applying it once.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
