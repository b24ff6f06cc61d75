//! Basic card form validation example.
//!
//! Run with: `cargo run --example basic`

use card_input::{
    classify_brand, is_valid_card_number, validate, CardData, Field, FieldError, FormConfig,
};

fn main() {
    println!("=== Basic Card Form Validation ===\n");

    // Example 1: Validate a complete form
    let data = CardData::new()
        .with_card_number("4532 0151 1283 0366")
        .with_cardholder_name("Ana Gomez")
        .with_expiration("12", "2030")
        .with_security_code("123");

    println!("Validating: {:?}", data);
    let result = validate(&data, &FormConfig::default());
    println!("  Valid: {}", if result.is_valid() { "yes" } else { "no" });
    println!("  Brand: {}", classify_brand(&data.card_number));
    println!();

    // Example 2: Quick boolean check
    let test_cards = [
        ("4532015112830366", "Visa"),
        ("5500000000000004", "Mastercard"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover"),
        ("4532015112830367", "Invalid (bad checksum)"),
    ];

    println!("Quick card number checks:");
    for (number, description) in test_cards {
        let valid = is_valid_card_number(number);
        println!(
            "  {} - {}: {}",
            number,
            description,
            if valid { "VALID" } else { "INVALID" }
        );
    }
    println!();

    // Example 3: Every failing field is reported at once
    println!("Error reporting:");
    let data = CardData::new()
        .with_card_number("4532-0151-1283-0366")
        .with_cardholder_name("Al")
        .with_expiration("13", "1999")
        .with_security_code("12");

    let result = validate(&data, &FormConfig::default());
    for (field, error) in result.iter() {
        println!("  {:<16} {}", field.key(), error);
    }
    println!();

    // Example 4: Matching on specific errors
    if let Some(FieldError::InvalidCharacter { position, character }) =
        result.error(Field::CardNumber)
    {
        println!("Card number has '{}' at position {}", character, position);
    }
}
