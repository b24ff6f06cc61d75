//! Security code (CVV/CVC/CID) checks.
//!
//! - **CVV** (Card Verification Value) - Visa
//! - **CVC** (Card Verification Code) - Mastercard
//! - **CID** (Card Identification Number) - American Express, Discover
//!
//! The form accepts 3 or 4 digits for every brand. Non-digit characters are
//! ignored when counting, matching the input field which only keeps digits.
//!
//! # Example
//!
//! ```
//! use card_input::cvv::validate_security_code;
//!
//! assert_eq!(validate_security_code("123"), Ok(3));
//! assert_eq!(validate_security_code("1234"), Ok(4));
//! assert!(validate_security_code("12").is_err());
//! ```

use crate::error::{Field, FieldError};

/// Minimum security code length.
pub const MIN_SECURITY_CODE_DIGITS: usize = 3;

/// Maximum security code length.
pub const MAX_SECURITY_CODE_DIGITS: usize = 4;

/// Returns only the ASCII digits of `input`.
#[inline]
pub fn security_code_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates a security code, returning its digit count.
///
/// # Errors
///
/// - [`FieldError::Required`] if the input is empty
/// - [`FieldError::InvalidSecurityCode`] if it does not contain 3 or 4
///   digits
pub fn validate_security_code(input: &str) -> Result<usize, FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required(Field::SecurityCode));
    }

    let length = security_code_digits(input).len();

    if (MIN_SECURITY_CODE_DIGITS..=MAX_SECURITY_CODE_DIGITS).contains(&length) {
        Ok(length)
    } else {
        Err(FieldError::InvalidSecurityCode { length })
    }
}

/// Checks if a string is an acceptable security code.
#[inline]
pub fn is_valid_security_code(input: &str) -> bool {
    validate_security_code(input).is_ok()
}
