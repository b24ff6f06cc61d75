//! Expiration month and year checks.
//!
//! The form collects month and year in separate fields. The month must be
//! 1-12. The year must fall in a sliding window starting at the current
//! calendar year and spanning [`MAX_YEARS_AHEAD`] years. The window moves
//! with the clock, so the deterministic checks take the current year as a
//! parameter and [`current_year`] reads it from the system clock.
//!
//! # Example
//!
//! ```
//! use card_input::expiry::{validate_month, validate_year};
//!
//! assert_eq!(validate_month("07"), Ok(7));
//! assert!(validate_month("13").is_err());
//!
//! assert_eq!(validate_year("2030", 2026), Ok(2030));
//! assert!(validate_year("2025", 2026).is_err());
//! ```

use chrono::{Datelike, Utc};

use crate::error::{Field, FieldError};

/// How many years past the current year an expiration may be.
pub const MAX_YEARS_AHEAD: i32 = 20;

/// Returns the current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Returns the inclusive range of accepted expiration years.
#[inline]
pub const fn year_window(current_year: i32) -> (i32, i32) {
    (current_year, current_year.saturating_add(MAX_YEARS_AHEAD))
}

/// Parses the leading integer of a form value.
///
/// Surrounding whitespace and an optional sign are accepted, then the run
/// of ASCII digits is read and anything after it ignored, so `"12.5"` is 12
/// and `"2030x"` is 2030. Returns `None` when there are no leading digits
/// or the value does not fit an `i32`.
fn parse_number(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let value: i32 = unsigned[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Validates an expiration month, returning it as a number.
///
/// # Errors
///
/// - [`FieldError::Required`] if the input is empty
/// - [`FieldError::InvalidMonth`] if it is not an integer in 1-12
pub fn validate_month(input: &str) -> Result<u8, FieldError> {
    if input.trim().is_empty() {
        return Err(FieldError::Required(Field::ExpirationMonth));
    }

    match parse_number(input) {
        Some(month @ 1..=12) => Ok(month as u8),
        _ => Err(FieldError::InvalidMonth),
    }
}

/// Validates an expiration year against the window for `current_year`.
///
/// # Errors
///
/// - [`FieldError::Required`] if the input is empty
/// - [`FieldError::InvalidYear`] if it is not an integer inside
///   `[current_year, current_year + 20]`
pub fn validate_year(input: &str, current_year: i32) -> Result<i32, FieldError> {
    if input.trim().is_empty() {
        return Err(FieldError::Required(Field::ExpirationYear));
    }

    let (min, max) = year_window(current_year);

    match parse_number(input) {
        Some(year) if (min..=max).contains(&year) => Ok(year),
        _ => Err(FieldError::InvalidYear { min, max }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i32 = 2026;

    #[test]
    fn test_valid_months() {
        assert_eq!(validate_month("1"), Ok(1));
        assert_eq!(validate_month("01"), Ok(1));
        assert_eq!(validate_month("12"), Ok(12));
        assert_eq!(validate_month(" 6 "), Ok(6));
    }

    #[test]
    fn test_invalid_months() {
        assert_eq!(validate_month("0"), Err(FieldError::InvalidMonth));
        assert_eq!(validate_month("13"), Err(FieldError::InvalidMonth));
        assert_eq!(validate_month("-1"), Err(FieldError::InvalidMonth));
        assert_eq!(validate_month("ab"), Err(FieldError::InvalidMonth));
        assert_eq!(validate_month("a1"), Err(FieldError::InvalidMonth));
        assert_eq!(validate_month("-"), Err(FieldError::InvalidMonth));
        assert_eq!(validate_month("13a"), Err(FieldError::InvalidMonth));
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(validate_month("1a"), Ok(1));
        assert_eq!(validate_month("12.5"), Ok(12));
        assert_eq!(validate_month("+6"), Ok(6));
        assert_eq!(validate_month(" 07/30"), Ok(7));
        assert_eq!(validate_year("2030x", NOW), Ok(2030));
        assert_eq!(validate_year("2030.9", NOW), Ok(2030));
        assert!(validate_year("x2030", NOW).is_err());
    }

    #[test]
    fn test_empty_month_is_required() {
        assert_eq!(
            validate_month(""),
            Err(FieldError::Required(Field::ExpirationMonth))
        );
        assert_eq!(
            validate_month("  "),
            Err(FieldError::Required(Field::ExpirationMonth))
        );
    }

    #[test]
    fn test_year_window_edges() {
        assert_eq!(validate_year("2026", NOW), Ok(2026));
        assert_eq!(validate_year("2046", NOW), Ok(2046));
        assert_eq!(
            validate_year("2025", NOW),
            Err(FieldError::InvalidYear {
                min: 2026,
                max: 2046
            })
        );
        assert!(validate_year("2047", NOW).is_err());
    }

    #[test]
    fn test_year_window_slides() {
        assert!(validate_year("2026", 2027).is_err());
        assert!(validate_year("2047", 2027).is_ok());
    }

    #[test]
    fn test_invalid_year_input() {
        assert_eq!(
            validate_year("", NOW),
            Err(FieldError::Required(Field::ExpirationYear))
        );
        assert!(validate_year("twenty", NOW).is_err());
        assert!(validate_year("30", NOW).is_err());
        assert!(validate_year("99999999999", NOW).is_err());
    }

    #[test]
    fn test_current_year_is_plausible() {
        let year = current_year();
        assert!(year >= 2024);
        assert_eq!(year_window(year), (year, year + MAX_YEARS_AHEAD));
    }
}
