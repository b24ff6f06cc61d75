//! As-you-type input sanitizers.
//!
//! Text inputs call these on every change. Each one returns the value the
//! field should hold next, or `None` when the keystroke must be ignored
//! because the field would exceed its maximum length.
//!
//! # Example
//!
//! ```
//! use card_input::sanitize;
//!
//! assert_eq!(sanitize::month("0a7"), Some("07".to_string()));
//! assert_eq!(sanitize::month("123"), None);
//! assert_eq!(sanitize::card_number("45320151"), "4532 0151");
//! ```

use crate::cvv::MAX_SECURITY_CODE_DIGITS;
use crate::format::format_card_number;

/// Maximum digits in the month field.
pub const MAX_MONTH_DIGITS: usize = 2;

/// Maximum digits in the year field.
pub const MAX_YEAR_DIGITS: usize = 4;

/// Keeps only ASCII digits, rejecting the result if it is longer than
/// `max_len`.
fn digits_up_to(text: &str, max_len: usize) -> Option<String> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    (digits.len() <= max_len).then_some(digits)
}

/// Sanitizes the expiration month field (digits only, at most 2).
pub fn month(text: &str) -> Option<String> {
    digits_up_to(text, MAX_MONTH_DIGITS)
}

/// Sanitizes the expiration year field (digits only, at most 4).
pub fn year(text: &str) -> Option<String> {
    digits_up_to(text, MAX_YEAR_DIGITS)
}

/// Sanitizes the security code field (digits only, at most 4).
pub fn security_code(text: &str) -> Option<String> {
    digits_up_to(text, MAX_SECURITY_CODE_DIGITS)
}

/// Reformats the card number field for display.
///
/// Never rejects input: length and character problems are left for
/// validation to report.
pub fn card_number(text: &str) -> String {
    format_card_number(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month() {
        assert_eq!(month(""), Some(String::new()));
        assert_eq!(month("1"), Some("1".to_string()));
        assert_eq!(month("12"), Some("12".to_string()));
        assert_eq!(month("1/"), Some("1".to_string()));
        assert_eq!(month("123"), None);
    }

    #[test]
    fn test_year() {
        assert_eq!(year("2030"), Some("2030".to_string()));
        assert_eq!(year("20 30"), Some("2030".to_string()));
        assert_eq!(year("20301"), None);
    }

    #[test]
    fn test_security_code() {
        assert_eq!(security_code("12"), Some("12".to_string()));
        assert_eq!(security_code("1234"), Some("1234".to_string()));
        assert_eq!(security_code("12345"), None);
        assert_eq!(security_code("abc"), Some(String::new()));
    }

    #[test]
    fn test_card_number() {
        assert_eq!(card_number("4532015112830366"), "4532 0151 1283 0366");
        assert_eq!(card_number("4532 01511"), "4532 0151 1");
    }
}
