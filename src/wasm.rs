//! WebAssembly bindings for the card-entry form.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { validate_card_form, classify_brand, format_card_number } from 'card_input';
//!
//! await init();
//!
//! // On every keystroke
//! input.value = format_card_number(input.value);
//! brandIcon.src = `/brands/${classify_brand(input.value)}.svg`;
//!
//! // On submit
//! const result = validate_card_form(
//!     number, name, month, year, code, null, null,
//!     true, true, false, [], ["amex"],
//! );
//! if (!result.valid) {
//!     result.fields.forEach(key => showError(key, result.error_for(key)));
//! }
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{CardBrand, CardData, Field, FormConfig};

/// Result of form validation, returned to JavaScript.
#[wasm_bindgen]
pub struct FormResult {
    inner: crate::ValidationResult,
}

#[wasm_bindgen]
impl FormResult {
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Keys of the failing fields (`cardNumber`, `expirationMonth`, ...).
    #[wasm_bindgen(getter)]
    pub fn fields(&self) -> js_sys::Array {
        self.inner
            .fields()
            .into_iter()
            .map(|field| JsValue::from_str(field.key()))
            .collect()
    }

    #[wasm_bindgen(getter)]
    pub fn messages(&self) -> js_sys::Array {
        self.inner
            .messages()
            .into_iter()
            .map(|message| JsValue::from_str(&message))
            .collect()
    }

    /// Error message for a field key, if that field failed.
    pub fn error_for(&self, key: &str) -> Option<String> {
        let field = Field::ALL.into_iter().find(|f| f.key() == key)?;
        self.inner.error(field).map(ToString::to_string)
    }
}

/// Validates a form snapshot against the current year.
///
/// `allowed_brands` and `excluded_brands` are arrays of brand ids
/// (`"visa"`, `"amex"`, ...); pass empty arrays to accept every brand.
/// Throws if an id is not a recognised brand.
///
/// # Example
/// ```javascript
/// const result = validate_card_form(
///     "4532 0151 1283 0366", "Ana Gomez", "13", "2030", "123", null, null,
///     true, true, false, ["mastercard"], [],
/// );
/// console.log(result.valid);                        // false
/// console.log(result.error_for("cardNumber"));      // "Visa cards are not accepted"
/// console.log(result.error_for("expirationMonth")); // "invalid month: must be 1-12"
/// ```
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn validate_card_form(
    card_number: &str,
    cardholder_name: &str,
    expiration_month: &str,
    expiration_year: &str,
    security_code: &str,
    identification_type: Option<String>,
    identification_number: Option<String>,
    show_security_code: bool,
    show_cardholder_name: bool,
    show_identification: bool,
    allowed_brands: js_sys::Array,
    excluded_brands: js_sys::Array,
) -> Result<FormResult, JsValue> {
    let mut data = CardData::new()
        .with_card_number(card_number)
        .with_cardholder_name(cardholder_name)
        .with_expiration(expiration_month, expiration_year)
        .with_security_code(security_code);
    data.identification_type = identification_type;
    data.identification_number = identification_number;

    let config = FormConfig::new()
        .security_code(show_security_code)
        .cardholder_name(show_cardholder_name)
        .identification(show_identification)
        .allow_brands(brand_list(&allowed_brands)?)
        .exclude_brands(brand_list(&excluded_brands)?);

    Ok(FormResult {
        inner: crate::validate(&data, &config),
    })
}

fn brand_list(ids: &js_sys::Array) -> Result<Vec<CardBrand>, JsValue> {
    let ids = ids
        .iter()
        .map(|id| {
            id.as_string()
                .ok_or_else(|| JsValue::from_str("brand ids must be strings"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    CardBrand::parse_ids(ids).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Classifies the brand of a (partial) card number.
///
/// Returns the brand id: `visa`, `mastercard`, `amex`, `discover`,
/// `diners`, `jcb` or `unknown`.
///
/// # Example
/// ```javascript
/// classify_brand("4532")  // "visa"
/// ```
#[wasm_bindgen]
pub fn classify_brand(card_number: &str) -> String {
    crate::classify_brand(card_number).id().to_string()
}

/// Formats a card number in groups of 4.
///
/// # Example
/// ```javascript
/// format_card_number("4532015112830366")  // "4532 0151 1283 0366"
/// ```
#[wasm_bindgen]
pub fn format_card_number(card_number: &str) -> String {
    crate::format::format_card_number(card_number)
}

/// Removes whitespace from a card number.
#[wasm_bindgen]
pub fn strip_formatting(card_number: &str) -> String {
    crate::format::strip_formatting(card_number)
}

/// Quick check if a card number is valid (13-19 digits, Luhn).
#[wasm_bindgen]
pub fn is_valid_card_number(card_number: &str) -> bool {
    crate::is_valid_card_number(card_number)
}

/// Checks only the Luhn checksum, without the length rule.
#[wasm_bindgen]
pub fn passes_luhn(card_number: &str) -> bool {
    crate::passes_luhn(card_number)
}

/// Generates a valid test card number for the given brand id.
///
/// # Example
/// ```javascript
/// const card = generate_test_card("amex");  // "340000000000009"
/// ```
#[wasm_bindgen]
pub fn generate_test_card(brand: &str) -> Result<String, JsValue> {
    let brand: CardBrand = brand
        .parse()
        .map_err(|e: crate::ParseBrandError| JsValue::from_str(&e.to_string()))?;
    Ok(crate::generate::generate_card_deterministic(brand))
}
