//! Field-level validation errors.
//!
//! A card form never fails as a whole: each field that does not pass its
//! check gets one [`FieldError`], keyed by [`Field`], in the
//! [`ValidationResult`](crate::ValidationResult).

use std::fmt;

use crate::CardBrand;

/// A card-entry form field.
///
/// The declaration order is the order the form displays the fields in, and
/// the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    /// The card number.
    CardNumber,
    /// The name printed on the card.
    CardholderName,
    /// Expiration month.
    ExpirationMonth,
    /// Expiration year.
    ExpirationYear,
    /// CVV/CVC/CID.
    SecurityCode,
    /// Identification document type.
    IdentificationType,
    /// Identification document number.
    IdentificationNumber,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 7] = [
        Self::CardNumber,
        Self::CardholderName,
        Self::ExpirationMonth,
        Self::ExpirationYear,
        Self::SecurityCode,
        Self::IdentificationType,
        Self::IdentificationNumber,
    ];

    /// Returns the camelCase key host code uses for this field.
    #[inline]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CardNumber => "cardNumber",
            Self::CardholderName => "cardholderName",
            Self::ExpirationMonth => "expirationMonth",
            Self::ExpirationYear => "expirationYear",
            Self::SecurityCode => "securityCode",
            Self::IdentificationType => "identificationType",
            Self::IdentificationNumber => "identificationNumber",
        }
    }

    /// Returns a human-readable label.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CardNumber => "card number",
            Self::CardholderName => "cardholder name",
            Self::ExpirationMonth => "expiration month",
            Self::ExpirationYear => "expiration year",
            Self::SecurityCode => "security code",
            Self::IdentificationType => "identification type",
            Self::IdentificationNumber => "identification number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a single field failed validation.
///
/// Each variant carries enough detail to explain the problem to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was left empty.
    Required(Field),

    /// The card number contains a character other than digits and whitespace.
    InvalidCharacter {
        /// Position in the whitespace-stripped number (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The card number has a digit count outside 13-19.
    InvalidLength {
        /// Digits provided.
        length: usize,
        /// Minimum accepted (13).
        minimum: usize,
        /// Maximum accepted (19).
        maximum: usize,
    },

    /// The Luhn checksum failed.
    InvalidChecksum,

    /// The card's brand is not accepted by this form.
    BrandNotAccepted(CardBrand),

    /// The cardholder name is shorter than the minimum.
    NameTooShort {
        /// Trimmed character count.
        length: usize,
        /// Minimum required.
        minimum: usize,
    },

    /// The month is not an integer in 1-12.
    InvalidMonth,

    /// The year is not an integer inside the accepted window.
    InvalidYear {
        /// First accepted year (the current year).
        min: i32,
        /// Last accepted year.
        max: i32,
    },

    /// The security code does not have 3 or 4 digits.
    InvalidSecurityCode {
        /// Digit count after stripping non-digits.
        length: usize,
    },
}

impl FieldError {
    /// Returns the field this error is reported against.
    pub const fn field(&self) -> Field {
        match self {
            Self::Required(field) => *field,
            Self::InvalidCharacter { .. }
            | Self::InvalidLength { .. }
            | Self::InvalidChecksum
            | Self::BrandNotAccepted(_) => Field::CardNumber,
            Self::NameTooShort { .. } => Field::CardholderName,
            Self::InvalidMonth => Field::ExpirationMonth,
            Self::InvalidYear { .. } => Field::ExpirationYear,
            Self::InvalidSecurityCode { .. } => Field::SecurityCode,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field.label()),

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} in card number",
                    character.escape_default(),
                    position
                )
            }

            Self::InvalidLength {
                length,
                minimum,
                maximum,
            } => {
                write!(
                    f,
                    "card number must have {} to {} digits, got {}",
                    minimum, maximum, length
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid card number - please verify the digits")
            }

            Self::BrandNotAccepted(brand) => {
                write!(f, "{} cards are not accepted", brand.name())
            }

            Self::NameTooShort { minimum, .. } => {
                write!(f, "cardholder name must have at least {} characters", minimum)
            }

            Self::InvalidMonth => write!(f, "invalid month: must be 1-12"),

            Self::InvalidYear { min, max } => {
                write!(f, "invalid year: must be between {} and {}", min, max)
            }

            Self::InvalidSecurityCode { .. } => {
                write!(f, "security code must have 3 or 4 digits")
            }
        }
    }
}

impl std::error::Error for FieldError {}
