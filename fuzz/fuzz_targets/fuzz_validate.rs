//! Fuzz target for form validation.
//!
//! Tests that validate_at() never panics and reports one entry per failing
//! field, whatever the form holds.

#![no_main]

use arbitrary::Arbitrary;
use card_input::{classify_brand, validate_at, validate_card_number, CardData, FormConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    card_number: String,
    cardholder_name: String,
    expiration_month: String,
    expiration_year: String,
    security_code: String,
    identification_type: Option<String>,
    identification_number: Option<String>,
    show_security_code: bool,
    show_cardholder_name: bool,
    show_identification: bool,
    current_year: i32,
}

fuzz_target!(|input: Input| {
    let mut data = CardData::new()
        .with_card_number(input.card_number.as_str())
        .with_cardholder_name(input.cardholder_name.as_str())
        .with_expiration(input.expiration_month.as_str(), input.expiration_year.as_str())
        .with_security_code(input.security_code.as_str());
    data.identification_type = input.identification_type;
    data.identification_number = input.identification_number;

    let config = FormConfig::new()
        .security_code(input.show_security_code)
        .cardholder_name(input.show_cardholder_name)
        .identification(input.show_identification);

    let result = validate_at(&data, &config, input.current_year);

    assert_eq!(result.is_valid(), result.is_empty());
    for (field, error) in result.iter() {
        assert_eq!(error.field(), field);
    }

    // A valid number reports the same brand classification does
    if let Ok(brand) = validate_card_number(&input.card_number) {
        assert_eq!(brand, classify_brand(&input.card_number));
    }

    // Debug output never carries the raw number
    let digits: String = input.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() > 4 {
        assert!(!format!("{:?}", data).contains(&digits));
    }
});
