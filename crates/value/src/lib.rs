//! Dynamic value model for argus.
//!
//! This crate defines the runtime data the validator layer reasons about:
//! [`Value`] (eight dynamically typed kinds, including an explicit
//! `Undefined`), [`Kind`] (the classification markers match against), and
//! [`FunctionRef`] (callable values compared by identity).
//!
//! # Examples
//! ```rust
//! use argus_value::{json, Kind, Value};
//!
//! let config = Value::from(json!({"retries": 3, "verbose": true}));
//! assert_eq!(config.kind(), Kind::Object);
//! assert_eq!(config.get("retries"), Value::from(3));
//! assert_eq!(config.get("missing"), Value::Undefined);
//! assert!(config.get("missing").is_falsy());
//! ```

pub mod convert;
pub mod function;
pub mod kind;
pub mod value;

// Re-export core types
pub use function::FunctionRef;
pub use kind::Kind;
pub use value::Value;

// Re-export serde_json::json! macro for convenience
pub use serde_json::json;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{FunctionRef, Kind, Value};

    pub use serde_json::json;
}
