//! Form configuration.
//!
//! A [`FormConfig`] tells the validator which optional fields the form is
//! showing, and optionally which card brands it accepts. Hidden fields are
//! never validated.
//!
//! With the `serde` feature the config (de)serializes with camelCase keys, so
//! host code can hand over the same JSON object it uses for its form props:
//!
//! ```json
//! { "showSecurityCode": true, "showCardholderName": true, "showIdentification": false }
//! ```

use crate::CardBrand;

/// Which optional fields are active, plus brand acceptance rules.
///
/// Defaults match the stock card form: security code and cardholder name
/// shown, identification hidden, every brand accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct FormConfig {
    /// Validate the security code.
    pub show_security_code: bool,
    /// Validate the cardholder name.
    pub show_cardholder_name: bool,
    /// Validate identification type and number.
    pub show_identification: bool,
    /// When non-empty, only these brands are accepted.
    pub allowed_brands: Vec<CardBrand>,
    /// Brands that are always rejected.
    pub excluded_brands: Vec<CardBrand>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            show_security_code: true,
            show_cardholder_name: true,
            show_identification: false,
            allowed_brands: Vec::new(),
            excluded_brands: Vec::new(),
        }
    }
}

impl FormConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the security code field.
    pub fn security_code(mut self, show: bool) -> Self {
        self.show_security_code = show;
        self
    }

    /// Enables or disables the cardholder name field.
    pub fn cardholder_name(mut self, show: bool) -> Self {
        self.show_cardholder_name = show;
        self
    }

    /// Enables or disables identification capture.
    pub fn identification(mut self, show: bool) -> Self {
        self.show_identification = show;
        self
    }

    /// Restricts accepted cards to the given brands.
    pub fn allow_brands(mut self, brands: impl IntoIterator<Item = CardBrand>) -> Self {
        self.allowed_brands = brands.into_iter().collect();
        self
    }

    /// Rejects cards of the given brands.
    pub fn exclude_brands(mut self, brands: impl IntoIterator<Item = CardBrand>) -> Self {
        self.excluded_brands = brands.into_iter().collect();
        self
    }

    /// Returns true if a card of `brand` may be submitted.
    ///
    /// Exclusion wins over the allow list.
    pub fn accepts(&self, brand: CardBrand) -> bool {
        if self.excluded_brands.contains(&brand) {
            return false;
        }
        self.allowed_brands.is_empty() || self.allowed_brands.contains(&brand)
    }
}
