//! Fuzz target for expiration month and year validation.
//!
//! Tests that expiry checks never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_input::expiry;

fuzz_target!(|data: (&str, i16)| {
    let (text, year) = data;
    let current_year = i32::from(year);

    if let Ok(month) = expiry::validate_month(text) {
        assert!((1..=12).contains(&month));
    }

    if let Ok(parsed) = expiry::validate_year(text, current_year) {
        let (min, max) = expiry::year_window(current_year);
        assert!((min..=max).contains(&parsed));
    }
});
