//! Mapping a JSON object into typed settings with `validate_deep`.
//!
//! Run: `cargo run -p argus-validator --example config_mapping`

use argus_validator::{
    Type, ValidationResult, Value, validate, validate_deep, validate_optional_or,
};
use serde_json::json;

#[derive(Debug)]
struct Settings {
    host: String,
    port: f64,
    verbose: bool,
}

/// Check the whole object first, then each member with its dotted path.
fn settings_from(config: Value) -> ValidationResult<Settings> {
    validate_deep(config, "config", |config| {
        let host = validate(config.get("host"), "config.host", Type::String)?;
        let port = validate(config.get("port"), "config.port", Type::Number)?;
        let verbose = validate_optional_or(
            config.get("verbose"),
            "config.verbose",
            Type::Boolean,
            Value::from(false),
        )?;

        Ok(Settings {
            host: host.as_str().unwrap_or_default().to_owned(),
            port: port.as_number().unwrap_or(0.0),
            verbose: verbose.is_truthy(),
        })
    })
}

fn main() {
    let full = Value::from(json!({
        "host": "localhost",
        "port": 8080,
        "verbose": true
    }));
    match settings_from(full) {
        Ok(settings) => println!("✓ {settings:?}"),
        Err(e) => println!("✗ {e}"),
    }

    // Defaults fill in for members that are absent or falsy.
    let minimal = Value::from(json!({
        "host": "0.0.0.0",
        "port": 3000
    }));
    match settings_from(minimal) {
        Ok(settings) => println!("✓ {settings:?}"),
        Err(e) => println!("✗ {e}"),
    }

    // A missing member fails with its full dotted path.
    let broken = Value::from(json!({ "host": "localhost" }));
    match settings_from(broken) {
        Ok(settings) => println!("✓ {settings:?}"),
        Err(e) => println!("✗ {e}"),
    }

    // Non-objects are rejected before the mapper ever runs.
    match settings_from(Value::from("not a config")) {
        Ok(settings) => println!("✓ {settings:?}"),
        Err(e) => println!("✗ {e}"),
    }
}
