//! Form configuration example.
//!
//! Shows how a host passes form configuration and field values as JSON and
//! gets the per-field errors back as JSON.
//!
//! Run with: `cargo run --example form_config --features json`

use card_input::{validate_at, CardData, FormConfig};

fn main() -> Result<(), serde_json::Error> {
    println!("=== Form Configuration ===\n");

    // Example 1: Defaults
    let config = FormConfig::default();
    println!("Default config: {}", serde_json::to_string(&config)?);
    println!();

    // Example 2: Configuration from the host
    let config: FormConfig = serde_json::from_str(
        r#"{
            "showIdentification": true,
            "excludedBrands": ["amex"]
        }"#,
    )?;
    println!("Host config: {:?}", config);

    let data: CardData = serde_json::from_str(
        r#"{
            "cardNumber": "3782 8224 6310 005",
            "cardholderName": "Ana Gomez",
            "expirationMonth": "12",
            "expirationYear": "2030",
            "securityCode": "1234",
            "identificationType": "DNI"
        }"#,
    )?;
    println!("Form data: {:?}", data);
    println!();

    // Example 3: Result as JSON
    let result = validate_at(&data, &config, 2026);
    println!("Result:");
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
