//! Form validation orchestration.
//!
//! [`validate_at`] checks every active field of a [`CardData`] snapshot and
//! collects the failures into a [`ValidationResult`]. It is a pure function
//! of its inputs; [`validate`] is the same check with the current year read
//! from the system clock.
//!
//! # Performance
//!
//! Everything here is cheap enough to run on every keystroke: a handful of
//! small string scans and no I/O.

use crate::card::{CardBrand, CardData};
use crate::config::FormConfig;
use crate::cvv::validate_security_code;
use crate::detect::classify_prefix;
use crate::error::{Field, FieldError};
use crate::expiry::{current_year, validate_month, validate_year};
use crate::format::strip_formatting;
use crate::luhn;
use crate::mask::mask_string;
use crate::result::ValidationResult;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum trimmed length of the cardholder name.
pub const MIN_CARDHOLDER_NAME_CHARS: usize = 3;

/// Validates a form snapshot against the current calendar year.
///
/// # Example
///
/// ```
/// use card_input::{validate, CardData, Field, FormConfig};
///
/// let data = CardData::new()
///     .with_card_number("4532 0151 1283 0366")
///     .with_cardholder_name("Ana Gomez")
///     .with_expiration("13", "2030")
///     .with_security_code("123");
///
/// let result = validate(&data, &FormConfig::default());
/// assert!(!result.is_valid());
/// assert!(result.has_error(Field::ExpirationMonth));
/// assert!(!result.has_error(Field::CardNumber));
/// ```
pub fn validate(data: &CardData, config: &FormConfig) -> ValidationResult {
    validate_at(data, config, current_year())
}

/// Validates a form snapshot, with the year window anchored at
/// `current_year`.
///
/// Only fields enabled in `config` are checked. Every failing field gets
/// exactly one entry; nothing short-circuits.
///
/// # Example
///
/// ```
/// use card_input::{validate_at, CardData, FormConfig};
///
/// let data = CardData::new()
///     .with_card_number("4532015112830366")
///     .with_cardholder_name("Ana Gomez")
///     .with_expiration("12", "2026")
///     .with_security_code("123");
///
/// assert!(validate_at(&data, &FormConfig::default(), 2026).is_valid());
/// assert!(!validate_at(&data, &FormConfig::default(), 2027).is_valid());
/// ```
pub fn validate_at(data: &CardData, config: &FormConfig, current_year: i32) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(brand) = result.check(validate_card_number(&data.card_number)) {
        if !config.accepts(brand) {
            result.push(FieldError::BrandNotAccepted(brand));
        }
    }

    if config.show_cardholder_name {
        result.check(validate_cardholder_name(&data.cardholder_name));
    }

    result.check(validate_month(&data.expiration_month));
    result.check(validate_year(&data.expiration_year, current_year));

    if config.show_security_code {
        result.check(validate_security_code(&data.security_code));
    }

    if config.show_identification {
        result.check(require(
            data.identification_type.as_deref(),
            Field::IdentificationType,
        ));
        result.check(require(
            data.identification_number.as_deref(),
            Field::IdentificationNumber,
        ));
    }

    tracing::debug!(
        card = %mask_string(&data.card_number),
        errors = result.len(),
        valid = result.is_valid(),
        "validated card form"
    );

    result
}

/// Validates a card number, returning its brand.
///
/// Whitespace is stripped first. The remainder must be 13-19 ASCII digits
/// and pass the Luhn checksum.
///
/// # Errors
///
/// - [`FieldError::Required`] if the input is empty or only whitespace
/// - [`FieldError::InvalidCharacter`] for anything but digits
/// - [`FieldError::InvalidLength`] outside 13-19 digits
/// - [`FieldError::InvalidChecksum`] if the Luhn check fails
///
/// # Example
///
/// ```
/// use card_input::validate::validate_card_number;
/// use card_input::{CardBrand, FieldError};
///
/// assert_eq!(validate_card_number("4532 0151 1283 0366"), Ok(CardBrand::Visa));
/// assert_eq!(
///     validate_card_number("4532015112830367"),
///     Err(FieldError::InvalidChecksum)
/// );
/// ```
pub fn validate_card_number(input: &str) -> Result<CardBrand, FieldError> {
    let cleaned = strip_formatting(input);

    if cleaned.is_empty() {
        return Err(FieldError::Required(Field::CardNumber));
    }

    if let Some((position, character)) = cleaned
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(FieldError::InvalidCharacter {
            position,
            character,
        });
    }

    let length = cleaned.len();
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&length) {
        return Err(FieldError::InvalidLength {
            length,
            minimum: MIN_CARD_DIGITS,
            maximum: MAX_CARD_DIGITS,
        });
    }

    let digits = luhn::parse_digits(&cleaned).ok_or(FieldError::InvalidChecksum)?;
    if !luhn::validate(&digits) {
        return Err(FieldError::InvalidChecksum);
    }

    Ok(classify_prefix(cleaned.as_bytes()))
}

/// Quickly checks if a card number is structurally valid.
///
/// Same rules as [`validate_card_number`]: 13-19 digits after removing
/// whitespace, passing Luhn.
///
/// # Example
///
/// ```
/// use card_input::is_valid_card_number;
///
/// assert!(is_valid_card_number("4532 0151 1283 0366"));
/// assert!(!is_valid_card_number("4532 0151 1283 0367"));
/// assert!(!is_valid_card_number("123"));
/// ```
#[inline]
pub fn is_valid_card_number(input: &str) -> bool {
    validate_card_number(input).is_ok()
}

/// Checks only the Luhn checksum, ignoring the 13-19 digit length rule.
///
/// Whitespace is stripped first; any other non-digit fails the check.
///
/// # Example
///
/// ```
/// use card_input::{is_valid_card_number, passes_luhn};
///
/// // 12 digits: checksum is fine, length is not
/// assert!(passes_luhn("4111 1111 1117"));
/// assert!(!is_valid_card_number("4111 1111 1117"));
/// ```
pub fn passes_luhn(input: &str) -> bool {
    luhn::parse_digits(&strip_formatting(input)).is_some_and(|digits| luhn::validate(&digits))
}

/// Validates the cardholder name: required, at least 3 characters once
/// trimmed.
pub fn validate_cardholder_name(input: &str) -> Result<(), FieldError> {
    if input.is_empty() {
        return Err(FieldError::Required(Field::CardholderName));
    }

    let length = input.trim().chars().count();
    if length < MIN_CARDHOLDER_NAME_CHARS {
        return Err(FieldError::NameTooShort {
            length,
            minimum: MIN_CARDHOLDER_NAME_CHARS,
        });
    }

    Ok(())
}

fn require(value: Option<&str>, field: Field) -> Result<(), FieldError> {
    match value {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(FieldError::Required(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i32 = 2026;
    const VISA: &str = "4532015112830366";

    fn valid_data() -> CardData {
        CardData::new()
            .with_card_number(VISA)
            .with_cardholder_name("Ana Gomez")
            .with_expiration("12", "2030")
            .with_security_code("123")
    }

    #[test]
    fn test_valid_form() {
        let result = validate_at(&valid_data(), &FormConfig::default(), NOW);
        assert!(result.is_valid(), "{:?}", result);
    }

    #[test]
    fn test_card_number_required() {
        let data = valid_data().with_card_number("");
        let result = validate_at(&data, &FormConfig::default(), NOW);
        assert_eq!(
            result.error(Field::CardNumber),
            Some(&FieldError::Required(Field::CardNumber))
        );

        let data = valid_data().with_card_number("   ");
        let result = validate_at(&data, &FormConfig::default(), NOW);
        assert_eq!(
            result.error(Field::CardNumber),
            Some(&FieldError::Required(Field::CardNumber))
        );
    }

    #[test]
    fn test_card_number_formatted_input() {
        assert_eq!(validate_card_number("4532 0151 1283 0366"), Ok(CardBrand::Visa));
        assert_eq!(validate_card_number(" 4532015112830366 "), Ok(CardBrand::Visa));
    }

    #[test]
    fn test_card_number_rejects_dashes() {
        assert_eq!(
            validate_card_number("4532-0151-1283-0366"),
            Err(FieldError::InvalidCharacter {
                position: 4,
                character: '-'
            })
        );
    }

    #[test]
    fn test_card_number_length() {
        assert_eq!(
            validate_card_number("123"),
            Err(FieldError::InvalidLength {
                length: 3,
                minimum: 13,
                maximum: 19
            })
        );
        // 20 digits
        assert!(matches!(
            validate_card_number("45320151128303660000"),
            Err(FieldError::InvalidLength { length: 20, .. })
        ));
        // 12 digits, even though Luhn passes
        assert!(matches!(
            validate_card_number("000000000000"),
            Err(FieldError::InvalidLength { length: 12, .. })
        ));
    }

    #[test]
    fn test_card_number_checksum() {
        assert_eq!(
            validate_card_number("4532015112830367"),
            Err(FieldError::InvalidChecksum)
        );
    }

    #[test]
    fn test_unknown_brand_is_still_valid() {
        // Luhn-valid 16 digit number with an unlisted prefix
        assert_eq!(validate_card_number("9000000000000001"), Ok(CardBrand::Unknown));
    }

    #[test]
    fn test_cardholder_name() {
        assert!(validate_cardholder_name("Ana").is_ok());
        assert_eq!(
            validate_cardholder_name(""),
            Err(FieldError::Required(Field::CardholderName))
        );
        assert_eq!(
            validate_cardholder_name("  Al  "),
            Err(FieldError::NameTooShort {
                length: 2,
                minimum: 3
            })
        );
        // Counts characters, not bytes
        assert!(validate_cardholder_name("Iñé").is_ok());
    }

    #[test]
    fn test_cardholder_name_only_when_shown() {
        let data = valid_data().with_cardholder_name("");
        let shown = validate_at(&data, &FormConfig::default(), NOW);
        assert!(shown.has_error(Field::CardholderName));

        let hidden = validate_at(&data, &FormConfig::new().cardholder_name(false), NOW);
        assert!(hidden.is_valid());
    }

    #[test]
    fn test_security_code_only_when_shown() {
        let data = valid_data().with_security_code("12");
        let shown = validate_at(&data, &FormConfig::default(), NOW);
        assert!(shown.has_error(Field::SecurityCode));

        let hidden = validate_at(&data, &FormConfig::new().security_code(false), NOW);
        assert!(hidden.is_valid());
    }

    #[test]
    fn test_identification_only_when_shown() {
        let data = valid_data();
        let hidden = validate_at(&data, &FormConfig::default(), NOW);
        assert!(hidden.is_valid());

        let config = FormConfig::new().identification(true);
        let shown = validate_at(&data, &config, NOW);
        assert_eq!(
            shown.fields(),
            vec![Field::IdentificationType, Field::IdentificationNumber]
        );

        let data = valid_data().with_identification("DNI", "");
        let shown = validate_at(&data, &config, NOW);
        assert_eq!(shown.fields(), vec![Field::IdentificationNumber]);

        let data = valid_data().with_identification("DNI", "12345678");
        assert!(validate_at(&data, &config, NOW).is_valid());
    }

    #[test]
    fn test_identification_has_no_format_check() {
        let config = FormConfig::new().identification(true);

        // Only an empty value is missing
        let data = valid_data().with_identification(" ", " ");
        assert!(validate_at(&data, &config, NOW).is_valid());

        let data = valid_data().with_identification("x", "not a number");
        assert!(validate_at(&data, &config, NOW).is_valid());
    }

    #[test]
    fn test_every_failure_is_reported() {
        let data = CardData::new().with_identification("", "");
        let config = FormConfig::new().identification(true);
        let result = validate_at(&data, &config, NOW);

        assert_eq!(result.fields(), Field::ALL.to_vec());
        for field in Field::ALL {
            assert_eq!(result.error(field), Some(&FieldError::Required(field)));
        }
    }

    #[test]
    fn test_brand_acceptance() {
        let config = FormConfig::new().allow_brands([CardBrand::Mastercard]);
        let result = validate_at(&valid_data(), &config, NOW);
        assert_eq!(
            result.error(Field::CardNumber),
            Some(&FieldError::BrandNotAccepted(CardBrand::Visa))
        );

        let config = FormConfig::new().exclude_brands([CardBrand::Visa]);
        assert!(!validate_at(&valid_data(), &config, NOW).is_valid());

        // A broken number reports the number problem, not the brand
        let data = valid_data().with_card_number("4532015112830367");
        let config = FormConfig::new().allow_brands([CardBrand::Mastercard]);
        assert_eq!(
            validate_at(&data, &config, NOW).error(Field::CardNumber),
            Some(&FieldError::InvalidChecksum)
        );
    }

    #[test]
    fn test_validate_uses_clock() {
        let year = current_year();
        let data = valid_data().with_expiration("12", year.to_string());
        assert!(validate(&data, &FormConfig::default()).is_valid());

        let data = valid_data().with_expiration("12", (year - 1).to_string());
        assert!(validate(&data, &FormConfig::default()).has_error(Field::ExpirationYear));
    }

    #[test]
    fn test_passes_luhn_ignores_length() {
        assert!(passes_luhn("411111111117"));
        assert!(!is_valid_card_number("411111111117"));
        assert!(passes_luhn("4532 0151 1283 0366"));
        assert!(!passes_luhn("4532015112830367"));
        assert!(!passes_luhn(""));
        assert!(!passes_luhn("4111-1111-1111-1111"));
    }

    #[test]
    fn test_is_valid_card_number() {
        assert!(is_valid_card_number(VISA));
        assert!(is_valid_card_number("378282246310005"));
        assert!(!is_valid_card_number(""));
        assert!(!is_valid_card_number("4532015112830367"));
    }
}
