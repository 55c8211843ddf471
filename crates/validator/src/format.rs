//! Error message formatting.
//!
//! Failure messages are produced by a formatter function that receives the
//! value name and the ordered list of expected type names. The default
//! renders the canonical grammar:
//!
//! ```text
//! 'x' must be a Number
//! 'xs' must be an Array or null
//! ```
//!
//! with `a` becoming `an` when the first type name starts with a vowel.
//!
//! A process-wide slot holds the active formatter. [`set_formatter`]
//! returns the previous formatter so callers can restore it exactly:
//!
//! ```rust
//! use std::sync::Arc;
//! use argus_validator::{set_formatter, validate, Type, Value};
//!
//! let prev = set_formatter(Arc::new(|name, types| {
//!     format!("{name}: expected {}", types.join(" or "))
//! }));
//! let err = validate(Value::Null, "port", Type::Number).unwrap_err();
//! assert_eq!(err.to_string(), "port: expected Number");
//! set_formatter(prev);
//! ```
//!
//! Swapping the formatter affects subsequent failures everywhere,
//! including guards created earlier. For a formatter scoped to one call
//! site, see `Validator::with_formatter`.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Signature of an error formatter: value name and ordered type names in,
/// message out.
pub type FormatFn = dyn Fn(&str, &[&str]) -> String + Send + Sync;

/// The process-wide active formatter.
static ACTIVE: Lazy<RwLock<Arc<FormatFn>>> =
    Lazy::new(|| RwLock::new(Arc::new(default_format)));

/// Indefinite article for a type name: `an` before a leading vowel.
fn article_for(type_name: &str) -> &'static str {
    match type_name.chars().next() {
        Some(c) if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// The default message grammar.
#[must_use]
pub fn default_format(name: &str, type_names: &[&str]) -> String {
    let article = type_names.first().map_or("a", |first| article_for(first));
    format!("'{name}' must be {article} {}", type_names.join(" or "))
}

/// Get the active formatter.
#[must_use]
pub fn formatter() -> Arc<FormatFn> {
    ACTIVE.read().clone()
}

/// Install a new active formatter, returning the previous one.
pub fn set_formatter(format: Arc<FormatFn>) -> Arc<FormatFn> {
    std::mem::replace(&mut *ACTIVE.write(), format)
}

/// Reinstall the default formatter, returning the one it replaced.
pub fn reset_formatter() -> Arc<FormatFn> {
    set_formatter(Arc::new(default_format))
}
