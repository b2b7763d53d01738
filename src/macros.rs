//! The [`jot!`] macro for building [`crate::JotValue`] trees inline.

/// Builds a [`crate::JotValue`] from JSON-like literal syntax.
///
/// Object keys must be string literals; `null` and `undefined` are accepted
/// as bare words, and trailing commas are allowed, same as in the format
/// itself.
///
/// # Examples
///
/// ```rust
/// use jot_format::jot;
///
/// let value = jot!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["admin", "ops"],
///     "nickname": undefined,
/// });
///
/// assert_eq!(value.get("age").and_then(|v| v.as_i64()), Some(30));
/// assert!(value.get("nickname").unwrap().is_undefined());
/// ```
#[macro_export]
macro_rules! jot {
    // Handle null
    (null) => {
        $crate::JotValue::Null
    };

    // Handle undefined
    (undefined) => {
        $crate::JotValue::Undefined
    };

    // Handle empty array
    ([]) => {
        $crate::JotValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JotValue::Array(vec![$($crate::jot!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::JotValue::Object($crate::JotMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JotMap::new();
        $(
            object.insert($key.to_string(), $crate::jot!($value));
        )*
        $crate::JotValue::Object(object)
    }};

    // Fallback for any expression with a From impl
    ($other:expr) => {
        $crate::JotValue::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{JotMap, JotValue, Number};

    #[test]
    fn test_jot_macro_primitives() {
        assert_eq!(jot!(null), JotValue::Null);
        assert_eq!(jot!(undefined), JotValue::Undefined);
        assert_eq!(jot!(true), JotValue::Bool(true));
        assert_eq!(jot!(false), JotValue::Bool(false));
        assert_eq!(jot!(42), JotValue::Number(Number::Integer(42)));
        assert_eq!(jot!(3.5), JotValue::Number(Number::Float(3.5)));
        assert_eq!(jot!("hello"), JotValue::String("hello".to_string()));
    }

    #[test]
    fn test_jot_macro_arrays() {
        assert_eq!(jot!([]), JotValue::Array(vec![]));

        let arr = jot!([1, 2, 3]);
        match arr {
            JotValue::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], JotValue::Number(Number::Integer(1)));
                assert_eq!(vec[2], JotValue::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_jot_macro_objects() {
        assert_eq!(jot!({}), JotValue::Object(JotMap::new()));

        let obj = jot!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            JotValue::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(
                    map.get("name"),
                    Some(&JotValue::String("Alice".to_string()))
                );
                assert_eq!(map.get("age"), Some(&JotValue::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_jot_macro_nested() {
        let value = jot!({
            "servers": [
                { "host": "a", "port": 1 },
                { "host": "b", "port": 2 },
            ],
        });

        let servers = value.get("servers").and_then(|v| v.as_array()).unwrap();
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].get("port").and_then(|v| v.as_i64()), Some(1));
    }
}
