//! Wrapping a function so its arguments are checked before it runs.
//!
//! Run: `cargo run -p argus-validator --example guarded_function`

use argus_validator::{Type, Validator, Value, args, guard, types};

fn main() {
    plain_guard();
    guard_with_custom_formatter();
}

fn plain_guard() {
    println!("=== Guarded Function ===\n");

    // `guard` pairs a function with one spec per positional argument.
    // The function only runs once every argument matches its spec.
    let add = guard(
        |args: &[Value]| {
            let a = args[0].as_number().unwrap_or(0.0);
            let b = args[1].as_number().unwrap_or(0.0);
            Value::from(a + b)
        },
        args![
            ("a", Type::Number),
            ("b", types![Type::Number, Type::Null]),
        ],
    );

    match add.call(&[Value::from(2), Value::from(3)]) {
        Ok(sum) => println!("add(2, 3) = {sum}"),
        Err(e) => println!("add(2, 3) failed: {e}"),
    }

    // The offending argument is named in the error.
    match add.call(&[Value::from(2), Value::from("three")]) {
        Ok(sum) => println!("add(2, \"three\") = {sum}"),
        Err(e) => println!("add(2, \"three\") failed: {e}"),
    }

    // Missing arguments are treated as undefined.
    match add.call(&[Value::from(2)]) {
        Ok(sum) => println!("add(2) = {sum}"),
        Err(e) => println!("add(2) failed: {e}"),
    }

    println!();
}

fn guard_with_custom_formatter() {
    println!("=== Guard With a Pinned Formatter ===\n");

    // A validator context carries its own formatter, so these messages
    // never depend on (or disturb) the process-wide one.
    let validator = Validator::new().with_formatter(|name, types| {
        format!("{name} expects one of [{}]", types.join(", "))
    });

    let greet = validator.guard(
        |args: &[Value]| Value::string(format!("hello, {}", args[0])),
        args![("who", types![Type::String, Type::Number])],
    );

    match greet.call(&[Value::from("world")]) {
        Ok(greeting) => println!("{greeting}"),
        Err(e) => println!("greet failed: {e}"),
    }

    match greet.call(&[Value::Null]) {
        Ok(greeting) => println!("{greeting}"),
        Err(e) => println!("greet failed: {e}"),
    }
}
