//! Card number display formatting.
//!
//! The form shows card numbers in groups of four separated by a single space
//! (`4532 0151 1283 0366`). The canonical form is the same string with all
//! whitespace removed. Formatting is purely cosmetic:
//! `format_card_number(&strip_formatting(&format_card_number(s)))` always
//! equals `format_card_number(s)`.
//!
//! # Example
//!
//! ```
//! use card_input::format::{format_card_number, strip_formatting};
//!
//! assert_eq!(format_card_number("4532015112830366"), "4532 0151 1283 0366");
//! assert_eq!(strip_formatting("4532 0151 1283 0366"), "4532015112830366");
//! ```

/// Size of a display group.
pub const GROUP_SIZE: usize = 4;

/// Removes every whitespace character, leaving the canonical number.
///
/// Other characters are kept so validation can still reject them.
///
/// # Example
///
/// ```
/// use card_input::format::strip_formatting;
///
/// assert_eq!(strip_formatting(" 4111 1111\t1111 1111 "), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111"), "4111-1111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Formats a card number with a space every four characters.
///
/// Works on partial input too, which is how the form reformats on each
/// keystroke. No trailing separator is ever produced.
///
/// # Example
///
/// ```
/// use card_input::format::format_card_number;
///
/// assert_eq!(format_card_number("4111"), "4111");
/// assert_eq!(format_card_number("41111"), "4111 1");
/// assert_eq!(format_card_number("4111 11 11"), "4111 1111");
/// ```
pub fn format_card_number(input: &str) -> String {
    format_with_separator(input, " ")
}

/// Formats a card number with a custom separator between groups of four.
///
/// # Example
///
/// ```
/// use card_input::format::format_with_separator;
///
/// assert_eq!(format_with_separator("4111111111111111", "-"), "4111-1111-1111-1111");
/// assert_eq!(format_with_separator("4111 1111 1111 1111", " - "), "4111 - 1111 - 1111 - 1111");
/// ```
pub fn format_with_separator(input: &str, separator: &str) -> String {
    let cleaned: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();

    let mut result = String::with_capacity(cleaned.len() + cleaned.len() / GROUP_SIZE * separator.len());

    for (i, c) in cleaned.iter().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            result.push_str(separator);
        }
        result.push(*c);
    }

    result
}

/// Splits the canonical number into display groups.
///
/// Returns a vector of groups for flexible rendering (e.g. one text span
/// per group).
///
/// # Example
///
/// ```
/// use card_input::format::split_into_groups;
///
/// assert_eq!(split_into_groups("4222222222222"), vec!["4222", "2222", "2222", "2"]);
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    let cleaned: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();

    cleaned
        .chunks(GROUP_SIZE)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
