//! # card_input
//!
//! Validation core for a card-entry form: Luhn checking, brand
//! classification, display formatting, and per-field validation of a form
//! snapshot.
//!
//! ## Features
//!
//! - Luhn validation and check digit generation
//! - Brand classification from leading digits (6 networks)
//! - Per-field form validation with every failure reported at once
//! - As-you-type sanitizers and 4-digit display grouping
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_input::{validate_at, CardData, Field, FormConfig};
//!
//! let data = CardData::new()
//!     .with_card_number("4532 0151 1283 0366")
//!     .with_cardholder_name("Ana Gomez")
//!     .with_expiration("12", "2030")
//!     .with_security_code("12");
//!
//! let result = validate_at(&data, &FormConfig::default(), 2026);
//! assert!(!result.is_valid());
//! assert_eq!(result.fields(), vec![Field::SecurityCode]);
//!
//! // Debug never exposes the full number
//! assert!(!format!("{:?}", data).contains("4532015112830366"));
//! ```
//!
//! ## Brand Classification
//!
//! ```rust
//! use card_input::{classify_brand, CardBrand};
//!
//! assert_eq!(classify_brand("4532 0151 1283 0366"), CardBrand::Visa);
//! assert_eq!(classify_brand("3782"), CardBrand::Amex);
//! assert_eq!(classify_brand("123"), CardBrand::Unknown);
//! ```
//!
//! ## Card Formatting
//!
//! ```rust
//! use card_input::{format_card_number, strip_formatting};
//!
//! assert_eq!(format_card_number("4532015112830366"), "4532 0151 1283 0366");
//! assert_eq!(format_card_number("378282246310005"), "3782 8224 6310 005");
//! assert_eq!(strip_formatting("4532 0151 1283 0366"), "4532015112830366");
//! ```
//!
//! ## Form Configuration
//!
//! ```rust
//! use card_input::{validate_at, CardBrand, CardData, Field, FormConfig};
//!
//! let config = FormConfig::new()
//!     .identification(true)
//!     .exclude_brands([CardBrand::Amex]);
//!
//! let data = CardData::new()
//!     .with_card_number("378282246310005")
//!     .with_cardholder_name("Ana Gomez")
//!     .with_expiration("12", "2030")
//!     .with_security_code("1234");
//!
//! let result = validate_at(&data, &config, 2026);
//! assert_eq!(
//!     result.fields(),
//!     vec![Field::CardNumber, Field::IdentificationType, Field::IdentificationNumber]
//! );
//! ```
//!
//! ## Supported Card Brands
//!
//! Checked in this order; the first match wins.
//!
//! | Brand | Prefix |
//! |-------|--------|
//! | Visa | 4 |
//! | Mastercard | 51-55 |
//! | American Express | 34, 37 |
//! | Discover | 6011, 65 |
//! | Diners Club | 300-305, 36, 38 |
//! | JCB | 2131, 1800, 35 + 3 digits |
//!
//! Anything else classifies as `Unknown`, which is still a valid number.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize form data, config and results |
//! | `json` | `serde_json` support |
//! | `generate` | Random test card generation |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - `CardData` zeroizes its fields when dropped
//! - `Debug` shows masked numbers only, and log events carry masked numbers
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod config;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod format;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod result;
pub mod sanitize;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{CardBrand, CardData, ParseBrandError};
pub use config::FormConfig;
pub use error::{Field, FieldError};
pub use result::ValidationResult;
pub use validate::{
    is_valid_card_number, passes_luhn, validate, validate_at, validate_card_number,
    MAX_CARD_DIGITS, MIN_CARD_DIGITS,
};

pub use detect::classify_brand;
pub use format::{format_card_number, strip_formatting};
