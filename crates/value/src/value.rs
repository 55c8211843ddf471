//! The core dynamic value type.
//!
//! `Value` models the runtime data this workspace validates: the eight
//! kinds a dynamically typed host distinguishes, including an explicit
//! `Undefined` for absent data (missing arguments, missing object
//! members). Operations that classify or project a value never fail;
//! absence is a value, not an error.
//!
//! Quick example:
//! ```rust
//! use argus_value::{Kind, Value};
//!
//! let v = Value::from(vec![Value::from(1), Value::from("two")]);
//! assert_eq!(v.kind(), Kind::Array);
//! assert!(v.is_truthy());
//! assert_eq!(v.get("length"), Value::Undefined);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::function::FunctionRef;
use crate::kind::Kind;

/// A dynamically typed runtime value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value (missing argument, missing member).
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Boolean(bool),
    /// Number. A single numeric kind; NaN and infinities are numbers too.
    Number(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// String-keyed map, ordered for deterministic display.
    Object(BTreeMap<String, Value>),
    /// Callable value, compared by identity.
    Function(FunctionRef),
}

impl Value {
    // ===== Constructors =====

    /// Create an undefined value.
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// Create a null value.
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value.
    pub const fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    /// Create a number value.
    pub const fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Create an array value.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Create an empty object value.
    pub fn object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Create a function value.
    pub fn function(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self::Function(FunctionRef::new(f))
    }

    // ===== Classification =====

    /// Get the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Null => Kind::Null,
            Self::Boolean(_) => Kind::Boolean,
            Self::Number(_) => Kind::Number,
            Self::String(_) => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
            Self::Function(_) => Kind::Function,
        }
    }

    /// Check if the value is undefined.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if the value is a function.
    #[inline]
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    // ===== Accessors =====

    /// Get as boolean if this is a boolean value.
    #[inline]
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as f64 if this is a number value.
    #[inline]
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice if this is a string value.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as value slice if this is an array value.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get as map if this is an object value.
    #[inline]
    #[must_use]
    pub const fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get as function handle if this is a function value.
    #[inline]
    #[must_use]
    pub const fn as_function(&self) -> Option<&FunctionRef> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    // ===== Truthiness =====

    /// Dynamic-language truthiness.
    ///
    /// Falsy values are exactly: undefined, null, `false`, `0` (including
    /// `-0`), NaN, and the empty string. Arrays, objects, and functions
    /// are always truthy, empty or not.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Inverse of [`is_truthy`](Self::is_truthy).
    #[inline]
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }

    // ===== Member access =====

    /// Get an object member by key.
    ///
    /// Returns `Undefined` when the key is missing or the value is not an
    /// object, so member lookups chain without intermediate `Option`s.
    #[must_use]
    pub fn get(&self, key: &str) -> Value {
        match self {
            Self::Object(map) => map.get(key).cloned().unwrap_or(Self::Undefined),
            _ => Self::Undefined,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => {
                if n.is_nan() {
                    f.write_str("NaN")
                } else if n.is_infinite() {
                    f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else {
                    write!(f, "{n}")
                }
            }
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Function(_) => f.write_str("<function>"),
        }
    }
}
