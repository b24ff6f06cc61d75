//! Fuzz target for security code validation and sanitizing.
//!
//! Tests that security code functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_input::{cvv, sanitize};

fuzz_target!(|data: &str| {
    let _ = cvv::is_valid_security_code(data);

    if let Ok(length) = cvv::validate_security_code(data) {
        assert!((3..=4).contains(&length));
        assert_eq!(cvv::security_code_digits(data).len(), length);
    }

    // Whatever the sanitizer keeps is all digits and at most 4 long
    if let Some(code) = sanitize::security_code(data) {
        assert!(code.len() <= 4);
        assert!(code.bytes().all(|b| b.is_ascii_digit()));
    }
});
