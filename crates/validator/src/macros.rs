//! Convenience macros for building marker lists and guard specs.

/// Build a [`TypeList`](crate::TypeList) from one or more markers.
///
/// The grammar requires at least one marker, so an empty list is a
/// compile error, not a runtime surprise.
///
/// # Examples
/// ```rust
/// use argus_validator::{types, Type, Value};
///
/// let accepted = types![Type::Number, Type::Null];
/// assert!(accepted.matches(&Value::from(1)));
/// assert!(accepted.matches(&Value::Null));
/// assert!(!accepted.matches(&Value::from("1")));
/// ```
///
/// ```compile_fail
/// let empty = argus_validator::types![];
/// ```
#[macro_export]
macro_rules! types {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::TypeList::new($first)$(.or($rest))*
    };
}

/// Build a `Vec<ArgSpec>` for [`guard`](crate::guard::guard) from
/// `(name, types)` pairs.
///
/// Each pair takes a single marker or a [`types!`] list, so specs with
/// different list lengths mix freely.
///
/// # Examples
/// ```rust
/// use argus_validator::{args, guard, types, Type, Value};
///
/// let greet = guard(
///     |args: &[Value]| format!("hello, {}", args[0]),
///     args![
///         ("name", Type::String),
///         ("punctuation", types![Type::String, Type::Undefined]),
///     ],
/// );
/// assert!(greet.call(&[Value::from("ada")]).is_ok());
/// assert!(greet.call(&[Value::from(1)]).is_err());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::ArgSpec>::new()
    };
    ($(($name:expr, $types:expr)),+ $(,)?) => {
        ::std::vec![$($crate::ArgSpec::new($name, $types)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::types::Type;
    use crate::{args, types};

    #[test]
    fn test_types_single() {
        let list = types![Type::Number];
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_types_many_preserve_order() {
        let list = types![Type::String, Type::Null, Type::Undefined];
        assert_eq!(list.names().as_slice(), ["String", "null", "undefined"]);
    }

    #[test]
    fn test_types_trailing_comma() {
        let list = types![Type::Number, Type::Null,];
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_args_mixed_specs() {
        let specs = args![
            ("a", Type::Number),
            ("b", types![Type::String, Type::Undefined]),
        ];
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name(), "a");
        assert_eq!(specs[1].types().len(), 2);
    }

    #[test]
    fn test_args_empty() {
        let specs = args![];
        assert!(specs.is_empty());
    }
}
