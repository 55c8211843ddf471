//! Type markers and marker lists.
//!
//! A [`Type`] names a runtime type a value may be required to have. The
//! built-in markers cover the eight value kinds; [`Type::custom`] builds a
//! marker from a display name and a membership probe, for domain types the
//! kind system cannot see (a "Point" object shape, a tagged wrapper).
//!
//! Markers are grouped into a [`TypeList`], which always holds at least
//! one marker. A value satisfies the list when any marker matches.
//!
//! # Examples
//! ```rust
//! use argus_validator::{types, Type, Value};
//!
//! let accepted = types![Type::String, Type::Null];
//! assert!(accepted.matches(&Value::from("hi")));
//! assert!(accepted.matches(&Value::Null));
//! assert!(!accepted.matches(&Value::from(1)));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::mem;
use std::sync::Arc;

use argus_value::{Kind, Value};
use smallvec::SmallVec;

// ===== Custom markers =====

/// A user-defined type marker: a display name plus a membership probe.
///
/// Two custom markers are equal only when they share the same probe, the
/// identity rule built-in markers follow.
#[derive(Clone)]
pub struct CustomType {
    name: Cow<'static, str>,
    probe: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl CustomType {
    /// Create a marker from a display name and a probe.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        probe: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            probe: Arc::new(probe),
        }
    }

    /// The message-facing name of this marker.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the membership probe.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        (self.probe)(value)
    }
}

impl fmt::Debug for CustomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomType")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ===== Built-in markers =====

/// A runtime type marker.
///
/// The two absent kinds render lowercase in messages (`null`,
/// `undefined`); the constructor-backed kinds render capitalized
/// (`Number`, `String`, ...), matching how a dynamic host names them.
#[derive(Debug, Clone)]
pub enum Type {
    /// Matches only `Value::Null`.
    Null,
    /// Matches only `Value::Undefined`.
    Undefined,
    /// Matches boolean values.
    Boolean,
    /// Matches number values, NaN included.
    Number,
    /// Matches string values.
    String,
    /// Matches function values.
    Function,
    /// Matches object values. Null is not an object here.
    Object,
    /// Matches array values.
    Array,
    /// Matches whatever the probe accepts.
    Custom(CustomType),
}

impl Type {
    /// Create a custom marker from a display name and a membership probe.
    ///
    /// # Examples
    /// ```rust
    /// use argus_validator::{validate, Type, Value};
    ///
    /// let point = Type::custom("Point", |v: &Value| {
    ///     v.get("x").is_number() && v.get("y").is_number()
    /// });
    /// let err = validate(Value::Null, "p", point).unwrap_err();
    /// assert_eq!(err.to_string(), "'p' must be a Point");
    /// ```
    pub fn custom(
        name: impl Into<Cow<'static, str>>,
        probe: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::Custom(CustomType::new(name, probe))
    }

    /// The kind a built-in marker matches; `None` for custom markers.
    #[must_use]
    pub const fn kind(&self) -> Option<Kind> {
        match self {
            Self::Null => Some(Kind::Null),
            Self::Undefined => Some(Kind::Undefined),
            Self::Boolean => Some(Kind::Boolean),
            Self::Number => Some(Kind::Number),
            Self::String => Some(Kind::String),
            Self::Function => Some(Kind::Function),
            Self::Object => Some(Kind::Object),
            Self::Array => Some(Kind::Array),
            Self::Custom(_) => None,
        }
    }

    /// Check whether a value has this type.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Custom(custom) => custom.matches(value),
            _ => self.kind() == Some(value.kind()),
        }
    }

    /// The message-facing name of this marker.
    #[must_use]
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Null => Cow::Borrowed("null"),
            Self::Undefined => Cow::Borrowed("undefined"),
            Self::Boolean => Cow::Borrowed("Boolean"),
            Self::Number => Cow::Borrowed("Number"),
            Self::String => Cow::Borrowed("String"),
            Self::Function => Cow::Borrowed("Function"),
            Self::Object => Cow::Borrowed("Object"),
            Self::Array => Cow::Borrowed("Array"),
            Self::Custom(custom) => custom.name.clone(),
        }
    }

    /// Start a marker list with this marker.
    #[must_use]
    pub fn or(self, marker: Type) -> TypeList {
        TypeList::new(self).or(marker)
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(&a.probe, &b.probe),
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ===== Marker lists =====

/// One or more type markers, in caller order.
///
/// The list is structurally non-empty: it is built from a first marker
/// and extended with [`or`](TypeList::or). Duplicates are allowed; they
/// affect the rendered message, not the matching decision.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeList {
    head: Type,
    rest: SmallVec<[Type; 3]>,
}

impl TypeList {
    /// Create a list holding a single marker.
    #[must_use]
    pub fn new(first: Type) -> Self {
        Self {
            head: first,
            rest: SmallVec::new(),
        }
    }

    /// Append a marker.
    #[must_use]
    pub fn or(mut self, marker: Type) -> Self {
        self.rest.push(marker);
        self
    }

    /// Append the two absent markers (`null`, then `undefined`).
    ///
    /// This is the widening the optional validators apply.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.rest.push(Type::Null);
        self.rest.push(Type::Undefined);
        self
    }

    /// Number of markers; at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false; the list holds at least one marker.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the markers in caller order.
    pub fn iter(&self) -> std::iter::Chain<std::iter::Once<&Type>, std::slice::Iter<'_, Type>> {
        std::iter::once(&self.head).chain(self.rest.iter())
    }

    /// Check whether any marker matches the value.
    ///
    /// Pure disjunction; evaluation order never changes the outcome.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        self.iter().any(|marker| marker.matches(value))
    }

    /// The message-facing marker names, in order.
    #[must_use]
    pub fn names(&self) -> SmallVec<[Cow<'static, str>; 4]> {
        self.iter().map(Type::name).collect()
    }
}

impl From<Type> for TypeList {
    fn from(marker: Type) -> Self {
        Self::new(marker)
    }
}

impl<'a> IntoIterator for &'a TypeList {
    type Item = &'a Type;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a Type>, std::slice::Iter<'a, Type>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
