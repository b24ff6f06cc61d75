//! Test card generation example.
//!
//! Run with: `cargo run --example generate --features generate`

use card_input::generate::{self, CardGenerator};
use card_input::{format_card_number, is_valid_card_number, CardBrand};

fn main() {
    println!("=== Test Card Generation ===\n");

    // Example 1: Deterministic cards (always the same)
    println!("Deterministic test cards:");
    for brand in CardBrand::ALL {
        let card = generate::generate_card_deterministic(brand);
        println!("  {:<18} {}", brand.name(), format_card_number(&card));
    }
    println!();

    // Example 2: Random cards
    println!("Random test cards:");
    for brand in [CardBrand::Visa, CardBrand::Mastercard, CardBrand::Amex] {
        let card = generate::generate_card(brand);
        println!(
            "  {:<18} {} (valid: {})",
            brand.name(),
            card,
            is_valid_card_number(&card)
        );
    }
    println!();

    // Example 3: Batch of cards
    println!("Five JCB cards:");
    for card in generate::generate_cards(CardBrand::Jcb, 5) {
        println!("  {}", card);
    }
    println!();

    // Example 4: Custom prefix and length
    println!("Custom generator:");
    let generator = CardGenerator::with_prefix("453201").length(19);
    println!("  deterministic: {}", generator.generate_deterministic());
    println!("  random:        {}", generator.generate());
}
