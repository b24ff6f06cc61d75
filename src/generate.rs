//! Test card number generation.
//!
//! Generates numbers that pass Luhn and classify as the requested brand,
//! for exercising forms in tests and demos. They are not connected to real
//! accounts.
//!
//! # Example
//!
//! ```
//! use card_input::generate::{generate_card_deterministic, CardGenerator};
//! use card_input::{classify_brand, is_valid_card_number, CardBrand};
//!
//! let number = generate_card_deterministic(CardBrand::Jcb);
//! assert!(is_valid_card_number(&number));
//! assert_eq!(classify_brand(&number), CardBrand::Jcb);
//!
//! let number = CardGenerator::new(CardBrand::Visa).length(13).generate_deterministic();
//! assert_eq!(number.len(), 13);
//! ```

use crate::luhn;
use crate::CardBrand;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns a prefix that classifies as `brand`.
///
/// `Unknown` gets a prefix no row of the brand table matches.
pub const fn prefix_for_brand(brand: CardBrand) -> &'static str {
    match brand {
        CardBrand::Visa => "4",
        CardBrand::Mastercard => "51",
        CardBrand::Amex => "34",
        CardBrand::Discover => "6011",
        CardBrand::Diners => "36",
        CardBrand::Jcb => "3528",
        CardBrand::Unknown => "9",
    }
}

/// Default length for each card brand.
pub const fn default_length(brand: CardBrand) -> usize {
    match brand {
        CardBrand::Amex => 15,
        CardBrand::Diners => 14,
        _ => 16,
    }
}

/// Builds a number from `prefix`, filling with `fill` until one digit short
/// of `length`, then appends the check digit.
///
/// Non-digit prefix characters are ignored. The result is always at least
/// one digit longer than the prefix.
fn complete_number(prefix: &str, length: usize, mut fill: impl FnMut() -> u8) -> String {
    let mut digits: Vec<u8> = prefix
        .chars()
        .filter_map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();

    let length = length.max(digits.len() + 1);
    while digits.len() < length - 1 {
        digits.push(fill());
    }

    digits.push(luhn::generate_check_digit(&digits));
    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a valid card number deterministically (no randomness).
///
/// Middle digits are zeros, so the same brand always yields the same number.
pub fn generate_card_deterministic(brand: CardBrand) -> String {
    generate_card_deterministic_with_prefix(prefix_for_brand(brand), default_length(brand))
}

/// Generates a valid card number deterministically with a custom prefix.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    complete_number(prefix, length, || 0)
}

/// Generates a random valid card number for the given brand.
///
/// Requires the `generate` feature (which enables the `rand` dependency).
#[cfg(feature = "generate")]
pub fn generate_card(brand: CardBrand) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix_for_brand(brand), default_length(brand), &mut rng)
}

/// Generates a random valid card number using a provided RNG.
///
/// Useful for reproducible generation with seeded RNGs.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    complete_number(prefix, length, || rng.gen_range(0..10))
}

/// Generates multiple random card numbers for the given brand.
#[cfg(feature = "generate")]
pub fn generate_cards(brand: CardBrand, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_card(brand)).collect()
}

/// Card generator builder.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefix: String,
    length: usize,
}

impl CardGenerator {
    /// Creates a generator for the given brand.
    pub fn new(brand: CardBrand) -> Self {
        Self {
            prefix: prefix_for_brand(brand).to_string(),
            length: default_length(brand),
        }
    }

    /// Creates a generator with a custom prefix and 16 digit numbers.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            length: 16,
        }
    }

    /// Sets the card length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Generates a card number deterministically.
    pub fn generate_deterministic(&self) -> String {
        generate_card_deterministic_with_prefix(&self.prefix, self.length)
    }

    /// Generates a card number with randomness.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        generate_card_with_rng(&self.prefix, self.length, &mut rng)
    }
}
