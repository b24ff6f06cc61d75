//! PCI-DSS compliant masking utilities.
//!
//! Card numbers pass through log events and `Debug` output only in masked
//! form. PCI-DSS allows displaying the last 4 digits; never display or log
//! the full card number.

/// Masks a card number string, showing only the last 4 digits.
///
/// Non-digit characters are dropped before masking. Inputs with 4 or fewer
/// digits are masked completely, since a partially typed number would
/// otherwise be shown in full.
///
/// # Example
///
/// ```
/// use card_input::mask::mask_string;
///
/// assert_eq!(mask_string("4532 0151 1283 0366"), "****-****-****-0366");
/// assert_eq!(mask_string("453"), "***");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    // Add masked portion with grouping
    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Add separator before last 4 if needed
    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.extend(&digits[len - 4..]);
    result
}

/// Extracts the last 4 digits from a card number string.
///
/// Returns an empty string if there are fewer than 4 digits.
pub fn last_four_from_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
