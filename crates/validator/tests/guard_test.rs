//! Guard behavior: ordered fail-fast validation, missing and extra
//! arguments, and single invocation with the original argument slice.

use std::sync::atomic::{AtomicUsize, Ordering};

use argus_validator::{Type, Validator, Value, args, guard, types};
use pretty_assertions::assert_eq;

fn add(args: &[Value]) -> Value {
    let a = args.first().and_then(Value::as_number).unwrap_or(0.0);
    let b = args.get(1).and_then(Value::as_number).unwrap_or(0.0);
    Value::from(a + b)
}

#[test]
fn valid_arguments_invoke_the_function() {
    let add = guard(add, [("a", Type::Number), ("b", Type::Number)]);
    assert_eq!(
        add.call(&[Value::from(1), Value::from(2)]).unwrap(),
        Value::from(3)
    );
}

#[test]
fn failure_identifies_the_offending_argument() {
    let add = guard(add, [("a", Type::Number), ("b", Type::Number)]);
    let err = add.call(&[Value::from(1), Value::from("2")]).unwrap_err();
    assert_eq!(err.to_string(), "'b' must be a Number");
    assert_eq!(err.name, "b");
}

#[test]
fn first_mismatch_wins() {
    let add = guard(add, [("a", Type::Number), ("b", Type::Number)]);
    // Both arguments are wrong; the error names the first.
    let err = add.call(&[Value::from("1"), Value::from("2")]).unwrap_err();
    assert_eq!(err.name, "a");
}

#[test]
fn wrapped_function_runs_once_with_original_arguments() {
    let calls = AtomicUsize::new(0);
    let record = guard(
        |args: &[Value]| {
            calls.fetch_add(1, Ordering::SeqCst);
            args.to_vec()
        },
        [("a", Type::Number), ("b", Type::String)],
    );

    let args = [Value::from(1), Value::from("x"), Value::from(true)];
    let out = record.call(&args).unwrap();

    // The function sees the slice as passed, extra argument included.
    assert_eq!(out, args.to_vec());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_validation_never_invokes_the_function() {
    let calls = AtomicUsize::new(0);
    let touched = guard(
        |_: &[Value]| {
            calls.fetch_add(1, Ordering::SeqCst);
        },
        [("a", Type::Number)],
    );

    assert!(touched.call(&[Value::from("nope")]).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn missing_arguments_validate_as_undefined() {
    let add = guard(
        add,
        args![
            ("a", Type::Number),
            ("b", types![Type::Number, Type::Undefined]),
        ],
    );

    // Second argument omitted: undefined is accepted by its spec.
    assert_eq!(add.call(&[Value::from(2)]).unwrap(), Value::from(2));

    // First argument omitted: undefined is not a Number.
    let err = add.call(&[]).unwrap_err();
    assert_eq!(err.to_string(), "'a' must be a Number");
}

#[test]
fn optional_spec_failure_lists_the_widened_names() {
    let add = guard(
        add,
        args![("a", types![Type::Number, Type::Undefined]), ("b", Type::Number)],
    );
    let err = add
        .call(&[Value::from("1"), Value::from(2)])
        .unwrap_err();
    assert_eq!(err.to_string(), "'a' must be a Number or undefined");
}

#[test]
fn arguments_beyond_the_specs_are_not_validated() {
    let first = guard(
        |args: &[Value]| args.first().cloned().unwrap_or_default(),
        [("a", Type::Number)],
    );
    let out = first
        .call(&[Value::from(1), Value::from("anything"), Value::Null])
        .unwrap();
    assert_eq!(out, Value::from(1));
}

#[test]
fn empty_specs_validate_nothing() {
    let constant = guard(|_: &[Value]| 42, args![]);
    assert_eq!(constant.call(&[Value::from("whatever")]).unwrap(), 42);
}

#[test]
fn guard_from_context_keeps_its_formatter() {
    let terse = Validator::new().with_formatter(|name, types| {
        format!("{name} wants {}", types.join("/"))
    });
    let add = terse.guard(add, [("a", Type::Number), ("b", Type::Number)]);

    let err = add.call(&[Value::Null, Value::from(2)]).unwrap_err();
    assert_eq!(err.to_string(), "a wants Number");
}

#[test]
fn guard_specs_are_inspectable() {
    let add = guard(add, [("a", Type::Number), ("b", Type::Number)]);
    let names: Vec<&str> = add.specs().iter().map(|s| s.name()).collect();
    assert_eq!(names, ["a", "b"]);
}
