//! Card number formatting and as-you-type sanitizing example.
//!
//! Run with: `cargo run --example formatting`

use card_input::{classify_brand, format, mask, sanitize};

fn main() {
    println!("=== Card Number Formatting ===\n");

    // Example 1: Display grouping
    let cards = [
        ("4532015112830366", "Visa (16 digits)"),
        ("378282246310005", "Amex (15 digits)"),
        ("30569309025904", "Diners (14 digits)"),
        ("4222222222222", "Visa (13 digits)"),
    ];

    println!("Groups of four:");
    for (number, description) in cards {
        println!("  {:<20} {}", description, format::format_card_number(number));
    }
    println!();

    // Example 2: Custom separators
    let number = "4532015112830366";
    println!("Custom separators:");
    println!("  dash:  {}", format::format_with_separator(number, "-"));
    println!("  dot:   {}", format::format_with_separator(number, "."));
    println!("  groups: {:?}", format::split_into_groups(number));
    println!();

    // Example 3: Simulate typing into the card number field
    println!("Typing a card number:");
    let mut field = String::new();
    for c in "4532015112830366".chars() {
        field.push(c);
        field = sanitize::card_number(&field);
        println!("  {:<22} brand: {}", field, classify_brand(&field).id());
    }
    println!();

    // Example 4: Sanitizing short fields
    println!("Sanitizing:");
    for text in ["1", "12", "1a", "123"] {
        match sanitize::month(text) {
            Some(value) => println!("  month {:?} -> {:?}", text, value),
            None => println!("  month {:?} -> rejected", text),
        }
    }
    println!();

    // Example 5: Masking for logs and receipts
    println!("Masking:");
    println!("  {}", mask::mask_string("4532 0151 1283 0366"));
    println!("  last four: {}", mask::last_four_from_string("4532 0151 1283 0366"));
}
