//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_input::{classify_brand, format, sanitize};

fuzz_target!(|data: &str| {
    let _ = format::format_with_separator(data, "-");
    let _ = format::format_with_separator(data, "");
    let _ = format::split_into_groups(data);
    let _ = sanitize::card_number(data);

    let formatted = format::format_card_number(data);

    // Roundtrip preserves content
    let stripped = format::strip_formatting(&formatted);
    assert_eq!(stripped, format::strip_formatting(data), "Format roundtrip should preserve content");

    // Idempotent
    assert_eq!(format::format_card_number(&stripped), formatted);

    // Classification ignores the display spaces
    assert_eq!(classify_brand(&formatted), classify_brand(data));
});
