//! Core card types for card-entry forms.
//!
//! This module provides the `CardBrand` enum used to pick a display icon
//! and the `CardData` record holding what the user has typed so far.

use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Card brands recognised by the form.
///
/// Covers the networks the checkout form has icons for. Anything else
/// classifies as [`CardBrand::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardBrand {
    /// Visa - Prefix 4
    Visa,
    /// Mastercard - Prefix 51-55
    Mastercard,
    /// American Express - Prefix 34, 37
    Amex,
    /// Discover - Prefix 6011, 65
    Discover,
    /// Diners Club - Prefix 300-305, 36, 38
    Diners,
    /// JCB - Prefix 2131, 1800, 35xxx
    Jcb,
    /// No prefix in the table matched.
    Unknown,
}

impl CardBrand {
    /// Every brand, in classification order, followed by `Unknown`.
    pub const ALL: [CardBrand; 7] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::Diners,
        Self::Jcb,
        Self::Unknown,
    ];

    /// Returns the lower-case identifier (`"visa"`, `"amex"`, ...).
    ///
    /// This is the key UI code uses to select an icon.
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Diners => "diners",
            Self::Jcb => "jcb",
            Self::Unknown => "unknown",
        }
    }

    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Diners => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true unless this is [`CardBrand::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Parses a list of brand identifiers, failing on the first one that
    /// is not recognised.
    ///
    /// # Example
    ///
    /// ```
    /// use card_input::CardBrand;
    ///
    /// let brands = CardBrand::parse_ids(["visa", "MC"]).unwrap();
    /// assert_eq!(brands, vec![CardBrand::Visa, CardBrand::Mastercard]);
    /// assert!(CardBrand::parse_ids(["visa", "maestro"]).is_err());
    /// ```
    pub fn parse_ids<I, S>(ids: I) -> Result<Vec<CardBrand>, ParseBrandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().map(|id| id.as_ref().parse()).collect()
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing a brand identifier fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBrandError {
    input: String,
}

impl fmt::Display for ParseBrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown card brand '{}'", self.input)
    }
}

impl std::error::Error for ParseBrandError {}

impl FromStr for CardBrand {
    type Err = ParseBrandError;

    /// Parses a brand identifier, case-insensitively.
    ///
    /// Accepts the identifiers returned by [`CardBrand::id`] plus a few
    /// common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "amex" | "american express" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            "diners" | "dinersclub" | "diners club" => Ok(Self::Diners),
            "jcb" => Ok(Self::Jcb),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseBrandError {
                input: s.to_string(),
            }),
        }
    }
}

/// Raw values of a card-entry form.
///
/// Fields hold exactly what the user typed (the card number may carry
/// display spaces). Nothing here is validated; pass it to
/// [`validate`](crate::validate()) for that.
///
/// # Security
///
/// - All buffers are zeroed on drop using the `zeroize` crate
/// - `Debug` masks the card number and hides the security code
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardData {
    /// Card number, possibly with space separators.
    #[cfg_attr(feature = "serde", serde(default))]
    pub card_number: String,
    /// Name printed on the card.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cardholder_name: String,
    /// Expiration month, 1-2 digits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expiration_month: String,
    /// Expiration year, 4 digits.
    #[cfg_attr(feature = "serde", serde(default))]
    pub expiration_year: String,
    /// CVV/CVC/CID.
    #[cfg_attr(feature = "serde", serde(default))]
    pub security_code: String,
    /// Identification document type (e.g. "DNI"), when captured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub identification_type: Option<String>,
    /// Identification document number, when captured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub identification_number: Option<String>,
}

impl CardData {
    /// Creates an empty form snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the card number.
    pub fn with_card_number(mut self, value: impl Into<String>) -> Self {
        self.card_number = value.into();
        self
    }

    /// Sets the cardholder name.
    pub fn with_cardholder_name(mut self, value: impl Into<String>) -> Self {
        self.cardholder_name = value.into();
        self
    }

    /// Sets expiration month and year.
    pub fn with_expiration(mut self, month: impl Into<String>, year: impl Into<String>) -> Self {
        self.expiration_month = month.into();
        self.expiration_year = year.into();
        self
    }

    /// Sets the security code.
    pub fn with_security_code(mut self, value: impl Into<String>) -> Self {
        self.security_code = value.into();
        self
    }

    /// Sets identification type and number.
    pub fn with_identification(
        mut self,
        kind: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        self.identification_type = Some(kind.into());
        self.identification_number = Some(number.into());
        self
    }
}

impl fmt::Debug for CardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the PAN or the security code
        f.debug_struct("CardData")
            .field("card_number", &crate::mask::mask_string(&self.card_number))
            .field("cardholder_name", &self.cardholder_name)
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .field("security_code", &"*".repeat(self.security_code.len()))
            .field("identification_type", &self.identification_type)
            .field(
                "identification_number",
                &self.identification_number.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_brand_ids() {
        assert_eq!(CardBrand::Visa.id(), "visa");
        assert_eq!(CardBrand::Diners.id(), "diners");
        assert_eq!(CardBrand::Unknown.id(), "unknown");
    }

    #[test]
    fn test_card_brand_names() {
        assert_eq!(CardBrand::Visa.name(), "Visa");
        assert_eq!(CardBrand::Amex.name(), "American Express");
        assert_eq!(CardBrand::Mastercard.to_string(), "Mastercard");
    }

    #[test]
    fn test_brand_from_str_round_trips_ids() {
        for brand in CardBrand::ALL {
            assert_eq!(brand.id().parse::<CardBrand>(), Ok(brand));
        }
        assert_eq!("MC".parse::<CardBrand>(), Ok(CardBrand::Mastercard));
        assert!("maestro".parse::<CardBrand>().is_err());
    }

    #[test]
    fn test_is_known() {
        assert!(CardBrand::Jcb.is_known());
        assert!(!CardBrand::Unknown.is_known());
    }

    #[test]
    fn test_debug_is_masked() {
        let data = CardData::new()
            .with_card_number("4532 0151 1283 0366")
            .with_security_code("123")
            .with_identification("DNI", "12345678");
        let debug = format!("{:?}", data);

        assert!(!debug.contains("4532015112830366"));
        assert!(!debug.contains("4532 0151 1283 0366"));
        assert!(debug.contains("0366"));
        assert!(!debug.contains("123\""));
        assert!(!debug.contains("12345678"));
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!(
            CardBrand::parse_ids(["amex", " Diners Club "]),
            Ok(vec![CardBrand::Amex, CardBrand::Diners])
        );
        assert_eq!(CardBrand::parse_ids(Vec::<String>::new()), Ok(Vec::new()));

        let err = CardBrand::parse_ids(["jcb", "elo"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown card brand 'elo'");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_card_data() {
        let data: CardData = serde_json::from_str(
            r#"{ "cardNumber": "4532 0151 1283 0366", "identificationType": "DNI" }"#,
        )
        .unwrap();

        assert_eq!(data.card_number, "4532 0151 1283 0366");
        assert_eq!(data.identification_type.as_deref(), Some("DNI"));
        assert!(data.cardholder_name.is_empty());
        assert!(data.security_code.is_empty());
        assert_eq!(data.identification_number, None);

        let empty: CardData = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CardData::new());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_card_data_keys() {
        let data = CardData::new().with_expiration("12", "2030");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["expirationMonth"], "12");
        assert_eq!(json["expirationYear"], "2030");
        assert_eq!(json["identificationNumber"], serde_json::Value::Null);
    }

    #[test]
    fn test_card_data_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardData>();
        assert_send_sync::<CardBrand>();
    }
}
