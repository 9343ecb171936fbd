//! Field bounds and validation helpers for catalog entities.
//!
//! The `#[validate(...)]` attributes on the DTOs in `filmoteca-db` repeat
//! these numbers as literals; the constants here are what handlers, pages,
//! and tests refer to.

use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Earliest accepted film release year (inclusive).
pub const MIN_RELEASE_YEAR: i32 = 1900;

/// Latest accepted film release year (inclusive).
pub const MAX_RELEASE_YEAR: i32 = 2100;

/// Minimum trivia content length, in characters.
pub const MIN_TRIVIA_LEN: usize = 10;

/// Maximum trivia content length, in characters.
pub const MAX_TRIVIA_LEN: usize = 300;

/// Minimum length for names and titles.
pub const MIN_NAME_LEN: usize = 2;

/// Maximum length for names and titles.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum director biography length.
pub const MAX_BIOGRAPHY_LEN: usize = 2000;

/// Maximum character power descriptor length.
pub const MAX_POWER_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Run the derived `validator` rules on a DTO, converting failures to
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input.validate().map_err(CoreError::from)
}

/// Reject values made only of whitespace.
///
/// Length rules alone accept `"   "`, so name-like fields call this as well.
pub fn require_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be blank")))
    } else {
        Ok(())
    }
}

/// Same as [`require_not_blank`] for optional (update) fields.
pub fn require_not_blank_opt(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_not_blank(field, v),
        None => Ok(()),
    }
}

/// Check a film release year against the accepted range.
pub fn validate_release_year(year: i32) -> Result<(), CoreError> {
    if (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "release_year must be between {MIN_RELEASE_YEAR} and {MAX_RELEASE_YEAR}, got {year}"
        )))
    }
}

/// Check trivia content length, counted in characters rather than bytes.
pub fn validate_trivia_content(content: &str) -> Result<(), CoreError> {
    let len = content.chars().count();
    if (MIN_TRIVIA_LEN..=MAX_TRIVIA_LEN).contains(&len) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "content must be between {MIN_TRIVIA_LEN} and {MAX_TRIVIA_LEN} characters, got {len}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_year_bounds_are_inclusive() {
        assert!(validate_release_year(1899).is_err());
        assert!(validate_release_year(1900).is_ok());
        assert!(validate_release_year(2100).is_ok());
        assert!(validate_release_year(2101).is_err());
    }

    #[test]
    fn trivia_length_bounds_are_inclusive() {
        assert!(validate_trivia_content(&"a".repeat(9)).is_err());
        assert!(validate_trivia_content(&"a".repeat(10)).is_ok());
        assert!(validate_trivia_content(&"a".repeat(300)).is_ok());
        assert!(validate_trivia_content(&"a".repeat(301)).is_err());
    }

    #[test]
    fn trivia_length_counts_characters_not_bytes() {
        // Ten two-byte characters.
        assert!(validate_trivia_content(&"ñ".repeat(10)).is_ok());
        // 300 multi-byte characters would be 600 bytes.
        assert!(validate_trivia_content(&"é".repeat(300)).is_ok());
    }

    #[test]
    fn blank_values_rejected() {
        assert!(require_not_blank("name", "   ").is_err());
        assert!(require_not_blank("name", "").is_err());
        assert!(require_not_blank("name", "Thor").is_ok());
    }

    #[test]
    fn blank_optional_values() {
        assert!(require_not_blank_opt("name", None).is_ok());
        assert!(require_not_blank_opt("name", Some(" ")).is_err());
        assert!(require_not_blank_opt("name", Some("Loki")).is_ok());
    }
}
