//! Acceptance matrix: every built-in marker against every kind of value,
//! plus exact failure messages for the canonical scenarios.

use argus_validator::{Type, TypeList, Value, types, validate};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn builtin_markers() -> [Type; 8] {
    [
        Type::Null,
        Type::Undefined,
        Type::Boolean,
        Type::Number,
        Type::String,
        Type::Function,
        Type::Object,
        Type::Array,
    ]
}

#[rstest]
#[case::number(Value::from(1337), Type::Number)]
#[case::string(Value::from("1337"), Type::String)]
#[case::boolean(Value::from(true), Type::Boolean)]
#[case::function(Value::function(|_| Value::Null), Type::Function)]
#[case::object(Value::object(), Type::Object)]
#[case::array(Value::array([]), Type::Array)]
#[case::null(Value::Null, Type::Null)]
#[case::undefined(Value::Undefined, Type::Undefined)]
fn each_value_matches_exactly_its_marker(#[case] value: Value, #[case] expected: Type) {
    for marker in builtin_markers() {
        let should_accept = marker == expected;
        let result = validate(value.clone(), "v", marker.clone());
        assert_eq!(
            result.is_ok(),
            should_accept,
            "value {value} against marker {marker}"
        );
        if should_accept {
            // Identity passthrough: the exact value comes back.
            assert_eq!(result.unwrap(), value);
        }
    }
}

#[rstest]
#[case::nan(Value::from(f64::NAN))]
#[case::zero(Value::from(0))]
#[case::negative_zero(Value::from(-0.0))]
#[case::infinity(Value::from(f64::INFINITY))]
fn edge_numbers_are_numbers(#[case] value: Value) {
    assert!(validate(value.clone(), "n", Type::Number).is_ok());
    assert!(validate(value, "n", Type::String).is_err());
}

#[rstest]
#[case::empty_string(Value::from(""), Type::String)]
#[case::empty_array(Value::array([]), Type::Array)]
#[case::empty_object(Value::object(), Type::Object)]
fn empty_values_still_have_their_kind(#[case] value: Value, #[case] marker: Type) {
    assert_eq!(validate(value.clone(), "v", marker).unwrap(), value);
}

#[rstest]
#[case::plain_number(Value::from("42"), types![Type::Number], "'x' must be a Number")]
#[case::two_markers(Value::from(1), types![Type::String, Type::Null], "'x' must be a String or null")]
#[case::vowel_article(Value::from(1), types![Type::Array], "'x' must be an Array")]
#[case::object_article(Value::Null, types![Type::Object], "'x' must be an Object")]
#[case::undefined_first(Value::Null, types![Type::Undefined, Type::Number], "'x' must be an undefined or Number")]
#[case::widened(Value::from(true), types![Type::String, Type::Null, Type::Undefined], "'x' must be a String or null or undefined")]
#[case::duplicates_kept(Value::Null, types![Type::Number, Type::Number], "'x' must be a Number or Number")]
fn failure_messages_are_exact(
    #[case] value: Value,
    #[case] markers: TypeList,
    #[case] message: &str,
) {
    let err = validate(value, "x", markers).unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn list_accepts_when_any_marker_matches() {
    let markers = types![Type::Number, Type::String];
    assert!(validate(Value::from(1), "v", markers.clone()).is_ok());
    assert!(validate(Value::from("1"), "v", markers.clone()).is_ok());
    assert!(validate(Value::from(true), "v", markers).is_err());
}

#[test]
fn custom_marker_participates_like_builtins() {
    let positive = || Type::custom("PositiveNumber", |v: &Value| {
        v.as_number().is_some_and(|n| n > 0.0)
    });

    assert!(validate(Value::from(3), "n", positive()).is_ok());
    assert!(validate(Value::from(-3), "n", positive()).is_err());

    // Custom markers mix with built-ins inside one list.
    let markers = types![positive(), Type::Null];
    assert!(validate(Value::Null, "n", markers.clone()).is_ok());
    let err = validate(Value::from(-3), "n", markers).unwrap_err();
    assert_eq!(err.to_string(), "'n' must be a PositiveNumber or null");
}

#[test]
fn error_keeps_structured_parts() {
    let err = validate(Value::from(1), "x", types![Type::String, Type::Null]).unwrap_err();
    assert_eq!(err.name, "x");
    assert_eq!(err.expected.as_slice(), ["String", "null"]);
}

#[test]
fn passthrough_preserves_function_identity() {
    let f = Value::function(|_| Value::Null);
    let out = validate(f.clone(), "cb", Type::Function).unwrap();
    assert_eq!(out, f);
}
