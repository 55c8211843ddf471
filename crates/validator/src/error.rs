//! The validation error type.
//!
//! Validation has exactly one failure kind: a named value did not match
//! any of the expected type markers. The human-readable message is
//! rendered once, at construction time, by whichever formatter is active
//! for the failing call; the structured parts (value name, expected type
//! names) stay available for callers that want them.

use std::borrow::Cow;

use smallvec::SmallVec;

/// Result alias for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Error returned when a value does not match any expected type.
///
/// # Examples
/// ```rust
/// use argus_validator::{validate, Type, Value};
///
/// let err = validate(Value::from("42"), "x", Type::Number).unwrap_err();
/// assert_eq!(err.to_string(), "'x' must be a Number");
/// assert_eq!(err.name, "x");
/// assert_eq!(err.expected.as_slice(), ["Number"]);
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Fully rendered message.
    pub message: String,
    /// Name of the value that failed.
    pub name: String,
    /// Expected type names, in the order the caller listed them.
    pub expected: SmallVec<[Cow<'static, str>; 4]>,
}

impl ValidationError {
    /// Create an error from its parts. The message is taken as-is; use the
    /// validator entry points to render one with the active formatter.
    pub fn new(
        message: impl Into<String>,
        name: impl Into<String>,
        expected: impl IntoIterator<Item = Cow<'static, str>>,
    ) -> Self {
        Self {
            message: message.into(),
            name: name.into(),
            expected: expected.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = ValidationError::new(
            "'x' must be a Number",
            "x",
            [Cow::Borrowed("Number")],
        );
        assert_eq!(err.to_string(), "'x' must be a Number");
    }

    #[test]
    fn test_parts_are_kept() {
        let err = ValidationError::new(
            "'xs' must be an Array or null",
            "xs",
            [Cow::Borrowed("Array"), Cow::Borrowed("null")],
        );
        assert_eq!(err.name, "xs");
        assert_eq!(err.expected.as_slice(), ["Array", "null"]);
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        let err = ValidationError::new("m", "n", []);
        takes_error(&err);
    }
}
