//! Search term handling.
//!
//! Search is a plain case-insensitive substring match; this module turns the
//! raw query into a safe `ILIKE` pattern.

use crate::error::CoreError;

/// Minimum query length after trimming.
pub const MIN_QUERY_LEN: usize = 1;

/// Trim the raw query and reject it when nothing is left.
pub fn normalize_query(raw: &str) -> Result<&str, CoreError> {
    let term = raw.trim();
    if term.chars().count() < MIN_QUERY_LEN {
        return Err(CoreError::Validation(
            "Search query must contain at least one non-whitespace character".into(),
        ));
    }
    Ok(term)
}

/// Build a `%term%` pattern with `ILIKE` wildcards in `term` escaped.
///
/// The SQL side must use `ESCAPE '\'`.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
