//! Guarded functions.
//!
//! A guard wraps a function together with specs for its positional
//! arguments. Calling the guard validates the arguments in order,
//! failing on the first mismatch, and only then invokes the function
//! with the original argument slice. Missing arguments validate as `undefined`, so a trailing
//! `types![Type::Number, Type::Undefined]` spec makes an argument
//! optional.
//!
//! # Examples
//! ```rust
//! use argus_validator::{args, guard, Type, Value};
//!
//! let add = guard(
//!     |args: &[Value]| {
//!         let a = args[0].as_number().unwrap_or(0.0);
//!         let b = args[1].as_number().unwrap_or(0.0);
//!         Value::from(a + b)
//!     },
//!     args![("a", Type::Number), ("b", Type::Number)],
//! );
//!
//! assert_eq!(add.call(&[Value::from(1), Value::from(2)]).unwrap(), Value::from(3));
//!
//! let err = add.call(&[Value::from(1), Value::from("2")]).unwrap_err();
//! assert_eq!(err.to_string(), "'b' must be a Number");
//! ```

use std::fmt;

use argus_value::Value;

use crate::error::ValidationResult;
use crate::types::TypeList;
use crate::validate::Validator;

/// Spec for one positional argument: its name and accepted types.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgSpec {
    name: String,
    types: TypeList,
}

impl ArgSpec {
    /// Create a spec.
    pub fn new(name: impl Into<String>, types: impl Into<TypeList>) -> Self {
        Self {
            name: name.into(),
            types: types.into(),
        }
    }

    /// The argument name used in failure messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The accepted types.
    #[must_use]
    pub fn types(&self) -> &TypeList {
        &self.types
    }
}

impl<N: Into<String>, T: Into<TypeList>> From<(N, T)> for ArgSpec {
    fn from((name, types): (N, T)) -> Self {
        Self::new(name, types)
    }
}

/// A function wrapped with argument validation.
///
/// Built by [`guard`] or `Validator::guard`; the guard keeps the context
/// it was built from, so a context-pinned formatter stays in effect for
/// every call.
pub struct Guarded<F> {
    validator: Validator,
    f: F,
    specs: Vec<ArgSpec>,
}

impl<F> Guarded<F> {
    pub(crate) fn new(
        validator: Validator,
        f: F,
        specs: impl IntoIterator<Item: Into<ArgSpec>>,
    ) -> Self {
        Self {
            validator,
            f,
            specs: specs.into_iter().map(Into::into).collect(),
        }
    }

    /// The argument specs, in call order.
    #[must_use]
    pub fn specs(&self) -> &[ArgSpec] {
        &self.specs
    }

    /// Unwrap, returning the inner function.
    pub fn into_inner(self) -> F {
        self.f
    }

    /// Validate `args` against the specs, then invoke the function.
    ///
    /// Arguments are checked left to right and the first mismatch is
    /// returned without invoking the function. Arguments beyond the spec
    /// list are not validated; arguments the caller omitted validate as
    /// `undefined`.
    pub fn call<R>(&self, args: &[Value]) -> ValidationResult<R>
    where
        F: Fn(&[Value]) -> R,
    {
        let missing = Value::Undefined;
        for (index, spec) in self.specs.iter().enumerate() {
            let arg = args.get(index).unwrap_or(&missing);
            if !spec.types.matches(arg) {
                return Err(self.validator.fail(&spec.name, &spec.types));
            }
        }
        Ok((self.f)(args))
    }
}

impl<F> fmt::Debug for Guarded<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guarded")
            .field("specs", &self.specs)
            .finish_non_exhaustive()
    }
}

/// Wrap `f` so its positional arguments are validated before it runs.
///
/// Failures render with the process-wide formatter active at call time;
/// use `Validator::with_formatter(...).guard(...)` to pin one instead.
pub fn guard<F, R>(f: F, specs: impl IntoIterator<Item: Into<ArgSpec>>) -> Guarded<F>
where
    F: Fn(&[Value]) -> R,
{
    Validator::new().guard(f, specs)
}
