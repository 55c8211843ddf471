//! Prelude module for convenient imports.
//!
//! Provides a single `use argus_validator::prelude::*;` import that brings
//! in the value types, markers, validators, and formatter controls.
//!
//! # Examples
//!
//! ```rust
//! use argus_validator::prelude::*;
//!
//! let verbose = validate_optional_or(Value::Undefined, "verbose", Type::Boolean, Value::from(false))?;
//! assert_eq!(verbose, Value::from(false));
//! # Ok::<(), ValidationError>(())
//! ```

// ============================================================================
// VALUE DOMAIN
// ============================================================================

pub use argus_value::{FunctionRef, Kind, Value};

// ============================================================================
// MARKERS AND ERRORS
// ============================================================================

pub use crate::error::{ValidationError, ValidationResult};
pub use crate::types::{CustomType, Type, TypeList};

// ============================================================================
// VALIDATION ENTRY POINTS
// ============================================================================

pub use crate::guard::{ArgSpec, Guarded, guard};
pub use crate::validate::{
    Validator, validate, validate_deep, validate_optional, validate_optional_or,
};

// ============================================================================
// FORMATTER CONTROLS
// ============================================================================

pub use crate::format::{FormatFn, default_format, formatter, reset_formatter, set_formatter};
