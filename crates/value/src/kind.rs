//! Value kinds.
//!
//! This module defines `Kind`, a lightweight classification for `Value`.
//! Every value belongs to exactly one kind; kinds are what type markers
//! in `argus-validator` match against.
//!
//! Quick example:
//! ```rust
//! use argus_value::{Kind, Value};
//!
//! let v = Value::from(3.14);
//! assert_eq!(v.kind(), Kind::Number);
//! assert_eq!(Kind::Number.name(), "number");
//! assert!(!Kind::Number.is_collection());
//! ```

use core::fmt::{Display, Formatter};

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl Kind {
    /// Get all kinds, in a stable order
    pub const fn all() -> [Self; 8] {
        [
            Self::Undefined,
            Self::Null,
            Self::Boolean,
            Self::Number,
            Self::String,
            Self::Array,
            Self::Object,
            Self::Function,
        ]
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Check if this kind is primitive (not a collection or function)
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Self::Array | Self::Object | Self::Function)
    }

    /// Check if this kind marks an absent value
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "undefined" => Some(Self::Undefined),
            "null" | "nil" | "none" => Some(Self::Null),
            "bool" | "boolean" => Some(Self::Boolean),
            "number" | "float" | "f64" | "double" => Some(Self::Number),
            "string" | "str" | "text" => Some(Self::String),
            "array" | "list" | "vec" => Some(Self::Array),
            "object" | "map" | "dict" => Some(Self::Object),
            "function" | "fn" => Some(Self::Function),
            _ => None,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
