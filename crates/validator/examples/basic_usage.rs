//! Basic usage example for argus-validator.
//!
//! Run: `cargo run -p argus-validator --example basic_usage`

use argus_validator::{Type, Value, types, validate, validate_optional, validate_optional_or};

fn main() {
    // A matching value passes through unchanged.
    match validate(Value::from("localhost"), "host", Type::String) {
        Ok(host) => println!("✓ host = {host}"),
        Err(e) => println!("✗ {e}"),
    }

    // A mismatch names the argument and the accepted types.
    match validate(Value::from(false), "host", Type::String) {
        Ok(host) => println!("✓ host = {host}"),
        Err(e) => println!("✗ {e}"),
    }

    // Markers chain into alternatives; any match accepts.
    match validate(Value::from(8080), "port", types![Type::Number, Type::String]) {
        Ok(port) => println!("✓ port = {port}"),
        Err(e) => println!("✗ {e}"),
    }

    // Optional arguments accept null and undefined on top of their types.
    match validate_optional(Value::Undefined, "label", Type::String) {
        Ok(label) => println!("✓ label = {label}"),
        Err(e) => println!("✗ {e}"),
    }

    // An absent or falsy optional argument can fall back to a default.
    match validate_optional_or(Value::Null, "retries", Type::Number, Value::from(3)) {
        Ok(retries) => println!("✓ retries = {retries}"),
        Err(e) => println!("✗ {e}"),
    }

    // Custom markers carry their own membership probe and name.
    let positive = Type::custom("PositiveNumber", |v: &Value| {
        v.as_number().is_some_and(|n| n > 0.0)
    });
    match validate(Value::from(-1), "count", positive) {
        Ok(count) => println!("✓ count = {count}"),
        Err(e) => println!("✗ {e}"),
    }
}
