//! # argus-validator
//!
//! Runtime type validation for dynamically shaped values.
//!
//! A check asserts that a named [`Value`] is one of a set of expected
//! runtime types. On success the value passes through unchanged, so
//! validation slots into normal data flow; on failure there is exactly
//! one error kind with a uniform, swappable message grammar:
//!
//! ```text
//! 'retries' must be a Number or null
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use argus_validator::prelude::*;
//! use argus_validator::types;
//!
//! // Pass: the value comes back unchanged.
//! let port = validate(Value::from(8080), "port", Type::Number)?;
//! assert_eq!(port, Value::from(8080));
//!
//! // Fail: the error names the value and the accepted types.
//! let err = validate(Value::from("yes"), "verbose", types![Type::Boolean, Type::Null])
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "'verbose' must be a Boolean or null");
//! # Ok::<(), ValidationError>(())
//! ```
//!
//! ## Guarding functions
//!
//! ```rust
//! use argus_validator::prelude::*;
//! use argus_validator::args;
//!
//! let describe = guard(
//!     |args: &[Value]| format!("{} is {}", args[0], args[1]),
//!     args![("name", Type::String), ("age", Type::Number)],
//! );
//! let err = describe.call(&[Value::from("ada"), Value::from("36")]).unwrap_err();
//! assert_eq!(err.to_string(), "'age' must be a Number");
//! ```
//!
//! Messages are customizable process-wide ([`set_formatter`]) or per
//! call site (`Validator::with_formatter`); see the [`format`] module.

// ValidationError carries the rendered message and the expected-name list
// inline; boxing it would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod error;
pub mod format;
pub mod guard;
mod macros;
pub mod prelude;
pub mod types;
pub mod validate;

pub use error::{ValidationError, ValidationResult};
pub use format::{FormatFn, default_format, formatter, reset_formatter, set_formatter};
pub use guard::{ArgSpec, Guarded, guard};
pub use types::{CustomType, Type, TypeList};
pub use validate::{Validator, validate, validate_deep, validate_optional, validate_optional_or};

// Re-export the value domain so downstream crates need only one dependency.
pub use argus_value::{FunctionRef, Kind, Value};
