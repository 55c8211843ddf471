//! Function values.
//!
//! Dynamic data can carry callables (callbacks handed through plugin
//! boundaries, scripted hooks). `FunctionRef` is a cheaply clonable handle
//! to such a callable. Two handles compare equal only when they point at
//! the same underlying function, the identity rule dynamic hosts use for
//! function objects.

use std::fmt;
use std::sync::Arc;

use crate::Value;

/// A shared, thread-safe callable value.
///
/// # Examples
/// ```rust
/// use argus_value::{FunctionRef, Value};
///
/// let double = FunctionRef::new(|args| {
///     Value::from(args.first().and_then(Value::as_number).unwrap_or(0.0) * 2.0)
/// });
/// assert_eq!(double.call(&[Value::from(21)]), Value::from(42));
/// ```
#[derive(Clone)]
pub struct FunctionRef {
    inner: Arc<dyn Fn(&[Value]) -> Value + Send + Sync>,
}

impl FunctionRef {
    /// Wrap a closure as a function value.
    pub fn new(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(f) }
    }

    /// Invoke the function with the given arguments.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner)(args)
    }

    /// Check whether two handles refer to the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for FunctionRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FunctionRef(<function>)")
    }
}

impl From<FunctionRef> for Value {
    fn from(f: FunctionRef) -> Self {
        Self::Function(f)
    }
}
