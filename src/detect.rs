//! Card brand classification using IIN prefix matching.
//!
//! The Issuer Identification Number (IIN) is the leading part of a card
//! number. This module checks a fixed, ordered prefix table against it.
//!
//! | Brand | Prefix |
//! |-------|--------|
//! | Visa | `4` |
//! | Mastercard | `51`-`55` |
//! | American Express | `34`, `37` |
//! | Discover | `6011`, `65` |
//! | Diners Club | `300`-`305`, `36`, `38` |
//! | JCB | `2131`, `1800`, `35` followed by three digits |
//!
//! The first matching row wins. The leading digits of the rows are disjoint
//! except inside the `3` family, where each row pins a distinct second
//! digit, so ordering never changes the answer today. New rows must keep
//! that property or be placed according to the precedence they need.
//!
//! # Performance
//!
//! Classification is O(1) pattern matching on at most the first 5 bytes.

use crate::format::strip_formatting;
use crate::CardBrand;

/// Classifies a card number (raw or display-formatted) into a brand.
///
/// Whitespace is removed first; everything else is matched as-is, so a
/// partially typed number is classified as soon as its prefix is known.
/// Always returns a brand, falling back to [`CardBrand::Unknown`].
///
/// # Example
///
/// ```
/// use card_input::detect::classify_brand;
/// use card_input::CardBrand;
///
/// assert_eq!(classify_brand("4532 0151 1283 0366"), CardBrand::Visa);
/// assert_eq!(classify_brand("37"), CardBrand::Amex);
/// assert_eq!(classify_brand("123"), CardBrand::Unknown);
/// ```
pub fn classify_brand(card_number: &str) -> CardBrand {
    let cleaned = strip_formatting(card_number);
    let brand = classify_prefix(cleaned.as_bytes());
    tracing::trace!(brand = brand.id(), "classified card prefix");
    brand
}

/// Classifies an already cleaned byte string (ASCII, no whitespace).
///
/// # Example
///
/// ```
/// use card_input::detect::classify_prefix;
/// use card_input::CardBrand;
///
/// assert_eq!(classify_prefix(b"6011000990139424"), CardBrand::Discover);
/// assert_eq!(classify_prefix(b"35"), CardBrand::Unknown);
/// assert_eq!(classify_prefix(b"35280"), CardBrand::Jcb);
/// ```
#[inline]
pub fn classify_prefix(cleaned: &[u8]) -> CardBrand {
    match cleaned {
        // Visa: ^4
        [b'4', ..] => CardBrand::Visa,

        // Mastercard: ^5[1-5]
        [b'5', b'1'..=b'5', ..] => CardBrand::Mastercard,

        // American Express: ^3[47]
        [b'3', b'4' | b'7', ..] => CardBrand::Amex,

        // Discover: ^6(011|5)
        [b'6', b'0', b'1', b'1', ..] | [b'6', b'5', ..] => CardBrand::Discover,

        // Diners Club: ^3(0[0-5]|[68])
        [b'3', b'0', b'0'..=b'5', ..] | [b'3', b'6' | b'8', ..] => CardBrand::Diners,

        // JCB: ^(2131|1800|35\d{3})
        [b'2', b'1', b'3', b'1', ..]
        | [b'1', b'8', b'0', b'0', ..]
        | [b'3', b'5', b'0'..=b'9', b'0'..=b'9', b'0'..=b'9', ..] => CardBrand::Jcb,

        _ => CardBrand::Unknown,
    }
}
