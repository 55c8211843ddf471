//! The validation entry points.
//!
//! Validation succeeds by returning the value unchanged, so a check slots
//! into normal data flow:
//!
//! ```rust
//! use argus_validator::{validate, Type, Value, ValidationResult};
//!
//! fn connect(port: Value) -> ValidationResult<String> {
//!     let port = validate(port, "port", Type::Number)?;
//!     Ok(format!("connecting on {port}"))
//! }
//!
//! assert_eq!(connect(Value::from(8080))?, "connecting on 8080");
//! assert!(connect(Value::from("8080")).is_err());
//! # Ok::<(), argus_validator::ValidationError>(())
//! ```
//!
//! The free functions validate with the process-wide formatter. A
//! [`Validator`] pins its own formatter instead, for call sites that
//! need stable messages regardless of what the rest of the process does.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use argus_value::Value;
use smallvec::SmallVec;

use crate::error::{ValidationError, ValidationResult};
use crate::format::{self, FormatFn};
use crate::guard::{ArgSpec, Guarded};
use crate::types::{Type, TypeList};

/// A validation context.
///
/// The default context renders failure messages with whichever formatter
/// is process-wide active at the moment of failure. A context built with
/// [`with_formatter`](Self::with_formatter) always uses its own.
#[derive(Clone, Default)]
pub struct Validator {
    formatter: Option<Arc<FormatFn>>,
}

impl Validator {
    /// Create a context that follows the process-wide formatter.
    #[must_use]
    pub fn new() -> Self {
        Self { formatter: None }
    }

    /// Pin a formatter to this context.
    ///
    /// # Examples
    /// ```rust
    /// use argus_validator::{Type, Validator, Value};
    ///
    /// let quiet = Validator::new().with_formatter(|name, _| format!("bad {name}"));
    /// let err = quiet.validate(Value::Null, "port", Type::Number).unwrap_err();
    /// assert_eq!(err.to_string(), "bad port");
    /// ```
    #[must_use]
    pub fn with_formatter(
        mut self,
        format: impl Fn(&str, &[&str]) -> String + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(format));
        self
    }

    /// The pinned formatter, if any.
    #[must_use]
    pub fn formatter(&self) -> Option<Arc<FormatFn>> {
        self.formatter.clone()
    }

    /// Build the failure for a value that matched no marker.
    pub(crate) fn fail(&self, name: &str, types: &TypeList) -> ValidationError {
        let names = types.names();
        // Scope the borrowed refs so `names` can move into the error.
        let message = {
            let name_refs: SmallVec<[&str; 4]> = names.iter().map(Cow::as_ref).collect();
            match &self.formatter {
                Some(format) => format(name, &name_refs),
                None => (format::formatter())(name, &name_refs),
            }
        };
        ValidationError::new(message, name, names)
    }

    /// Check that `value` matches one of `types`; pass it through unchanged.
    pub fn validate(
        &self,
        value: Value,
        name: &str,
        types: impl Into<TypeList>,
    ) -> ValidationResult<Value> {
        let types = types.into();
        if types.matches(&value) {
            Ok(value)
        } else {
            Err(self.fail(name, &types))
        }
    }

    /// Like [`validate`](Self::validate), but `null` and `undefined` are
    /// always acceptable. A valid value is returned unchanged.
    pub fn validate_optional(
        &self,
        value: Value,
        name: &str,
        types: impl Into<TypeList>,
    ) -> ValidationResult<Value> {
        self.validate(value, name, types.into().nullable())
    }

    /// Like [`validate_optional`](Self::validate_optional), but a falsy
    /// value is replaced by `default` after validation succeeds.
    ///
    /// The default itself is not validated; substitution is a convenience
    /// on the success path, not a second check.
    pub fn validate_optional_or(
        &self,
        value: Value,
        name: &str,
        types: impl Into<TypeList>,
        default: Value,
    ) -> ValidationResult<Value> {
        let value = self.validate_optional(value, name, types)?;
        if value.is_falsy() { Ok(default) } else { Ok(value) }
    }

    /// Check that `value` is an object, then hand it to `mapper` for
    /// member-level validation. The mapper never runs for non-objects.
    pub fn validate_deep<T>(
        &self,
        value: Value,
        name: &str,
        mapper: impl FnOnce(Value) -> ValidationResult<T>,
    ) -> ValidationResult<T> {
        let value = self.validate(value, name, Type::Object)?;
        mapper(value)
    }

    /// Wrap `f` so its positional arguments are validated before it runs.
    ///
    /// See [`guard`](crate::guard::guard) for the free-function form.
    pub fn guard<F, R>(
        &self,
        f: F,
        specs: impl IntoIterator<Item: Into<ArgSpec>>,
    ) -> Guarded<F>
    where
        F: Fn(&[Value]) -> R,
    {
        Guarded::new(self.clone(), f, specs)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("formatter", &self.formatter.as_ref().map(|_| "<pinned>"))
            .finish()
    }
}

// ===== Free functions (default context) =====

/// Check that `value` matches one of `types`; pass it through unchanged.
///
/// # Examples
/// ```rust
/// use argus_validator::{types, validate, Type, Value};
///
/// assert!(validate(Value::from(42), "x", Type::Number).is_ok());
///
/// let err = validate(Value::from(1), "x", types![Type::String, Type::Null]).unwrap_err();
/// assert_eq!(err.to_string(), "'x' must be a String or null");
/// ```
pub fn validate(value: Value, name: &str, types: impl Into<TypeList>) -> ValidationResult<Value> {
    Validator::new().validate(value, name, types)
}

/// Like [`validate`], but `null` and `undefined` are always acceptable.
///
/// # Examples
/// ```rust
/// use argus_validator::{validate_optional, Type, Value};
///
/// assert!(validate_optional(Value::Undefined, "x", Type::Number).is_ok());
/// assert!(validate_optional(Value::from(0), "x", Type::Number).is_ok());
/// assert!(validate_optional(Value::from("0"), "x", Type::Number).is_err());
/// ```
pub fn validate_optional(
    value: Value,
    name: &str,
    types: impl Into<TypeList>,
) -> ValidationResult<Value> {
    Validator::new().validate_optional(value, name, types)
}

/// Like [`validate_optional`], but a falsy value is replaced by `default`
/// after validation succeeds.
///
/// # Examples
/// ```rust
/// use argus_validator::{validate_optional_or, Type, Value};
///
/// let retries = validate_optional_or(Value::Undefined, "retries", Type::Number, Value::from(3))?;
/// assert_eq!(retries, Value::from(3));
///
/// let retries = validate_optional_or(Value::from(5), "retries", Type::Number, Value::from(3))?;
/// assert_eq!(retries, Value::from(5));
/// # Ok::<(), argus_validator::ValidationError>(())
/// ```
pub fn validate_optional_or(
    value: Value,
    name: &str,
    types: impl Into<TypeList>,
    default: Value,
) -> ValidationResult<Value> {
    Validator::new().validate_optional_or(value, name, types, default)
}

/// Check that `value` is an object, then hand it to `mapper`.
///
/// # Examples
/// ```rust
/// use argus_validator::{validate, validate_deep, Type, Value};
///
/// let config = Value::from(serde_json::json!({"host": "db", "port": 5432}));
/// let (host, port) = validate_deep(config, "config", |config| {
///     let host = validate(config.get("host"), "config.host", Type::String)?;
///     let port = validate(config.get("port"), "config.port", Type::Number)?;
///     Ok((host, port))
/// })?;
/// assert_eq!(host, Value::from("db"));
/// assert_eq!(port, Value::from(5432));
/// # Ok::<(), argus_validator::ValidationError>(())
/// ```
pub fn validate_deep<T>(
    value: Value,
    name: &str,
    mapper: impl FnOnce(Value) -> ValidationResult<T>,
) -> ValidationResult<T> {
    Validator::new().validate_deep(value, name, mapper)
}
