//! Dynamic value representation for Jot documents.
//!
//! This module provides the [`JotValue`] enum which represents one parsed
//! document: a pure owned tree rooted at a single value, read-only after
//! construction. It's useful for working with Jot data when the structure
//! isn't known at compile time.
//!
//! ## Core Types
//!
//! - [`JotValue`]: An enum representing any Jot value (null, undefined, bool,
//!   number, string, array, object)
//! - [`Number`]: Represents numeric values, keeping the radix of hexadecimal
//!   and binary literals so they re-serialize in their original form
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use jot_format::{JotValue, Number};
//!
//! // From primitives
//! let null = JotValue::Null;
//! let boolean = JotValue::from(true);
//! let number = JotValue::from(42);
//! let text = JotValue::from("hello");
//!
//! // Using the jot! macro
//! use jot_format::jot;
//! let obj = jot!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use jot_format::JotValue;
//!
//! let value = JotValue::from(42);
//! assert!(value.is_number());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use jot_format::JotValue;
//! use std::convert::TryFrom;
//!
//! let value = JotValue::from(42);
//!
//! // Safe extraction with TryFrom
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::JotMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any valid Jot value.
///
/// The tree exclusively owns all its descendants; there is no sharing or
/// back-reference anywhere in the model. `Undefined` is distinct from `Null`
/// and never collapses into it: JSON has only `null`, `undefined` is
/// Jot-specific.
///
/// # Examples
///
/// ```rust
/// use jot_format::{JotValue, Number};
///
/// let null = JotValue::Null;
/// let num = JotValue::Number(Number::Integer(42));
/// let text = JotValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JotValue {
    #[default]
    Null,
    Undefined,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JotValue>),
    Object(JotMap),
}

/// A numeric value that remembers how it was written.
///
/// The four variants are distinguished purely for round-trip formatting:
/// `Hex` and `Binary` are numerically equal to their decimal value but must
/// re-serialize in their original radix. `Float` carries the IEEE-754 special
/// values, so `Infinity`, `-Infinity`, and `NaN` all live here.
///
/// # Examples
///
/// ```rust
/// use jot_format::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
/// let hex = Number::Hex(0xFF);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// assert_eq!(hex.to_string(), "0xFF");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Hex(u64),
    Binary(u64),
}

impl Number {
    /// Returns `true` if this is a decimal integer value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Number;
    ///
    /// assert!(Number::Integer(42).is_integer());
    /// assert!(!Number::Float(3.5).is_integer());
    /// assert!(!Number::Hex(0x2A).is_integer());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this number was written as a hexadecimal or binary
    /// literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Number;
    ///
    /// assert!(Number::Hex(0xFF).is_radix_literal());
    /// assert!(Number::Binary(0b1010).is_radix_literal());
    /// assert!(!Number::Integer(255).is_radix_literal());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_radix_literal(&self) -> bool {
        matches!(self, Number::Hex(_) | Number::Binary(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers, for floats with no fractional part that
    /// fit in i64 range, and for hex/binary values up to `i64::MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Hex(0xFF).as_i64(), Some(255));
    /// assert_eq!(Number::Float(f64::INFINITY).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            Number::Hex(u) | Number::Binary(u) => {
                if *u <= i64::MAX as u64 {
                    Some(*u as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to a `u64` if it is non-negative and whole.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Number;
    ///
    /// assert_eq!(Number::Hex(0xFF).as_u64(), Some(255));
    /// assert_eq!(Number::Integer(-1).as_u64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Number::Integer(i) => u64::try_from(*i).ok(),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64 {
                    Some(*f as u64)
                } else {
                    None
                }
            }
            Number::Hex(u) | Number::Binary(u) => Some(*u),
        }
    }

    /// Converts this number to an `f64`.
    ///
    /// Always succeeds; integers and radix literals convert to their nearest
    /// f64 representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_f64(), 42.0);
    /// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
    /// assert_eq!(Number::Binary(0b100).as_f64(), 4.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Hex(u) | Number::Binary(u) => *u as f64,
        }
    }
}

impl fmt::Display for Number {
    /// Formats the number in Jot's extended syntax: hex literals with
    /// uppercase digits, whole finite floats with a `.0` suffix so the
    /// float-ness survives a round trip, and `Infinity`/`-Infinity`/`NaN`
    /// spelled out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => {
                if x.is_nan() {
                    write!(f, "NaN")
                } else if x.is_infinite() {
                    if x.is_sign_negative() {
                        write!(f, "-Infinity")
                    } else {
                        write!(f, "Infinity")
                    }
                } else if x.fract() == 0.0 {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            Number::Hex(u) => write!(f, "0x{:X}", u),
            Number::Binary(u) => write!(f, "0b{:b}", u),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl JotValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JotValue::Null)
    }

    /// Returns `true` if the value is undefined.
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, JotValue::Undefined)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JotValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, JotValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JotValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JotValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JotValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::JotValue;
    ///
    /// assert_eq!(JotValue::Bool(true).as_bool(), Some(true));
    /// assert_eq!(JotValue::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JotValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JotValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a number representable as i64, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::{JotValue, Number};
    ///
    /// assert_eq!(JotValue::Number(Number::Integer(42)).as_i64(), Some(42));
    /// assert_eq!(JotValue::Number(Number::Hex(0x2A)).as_i64(), Some(42));
    /// assert_eq!(JotValue::Number(Number::Float(42.5)).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JotValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it widened to f64. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JotValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JotValue>> {
        match self {
            JotValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JotMap> {
        match self {
            JotValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a member of an object value by key.
    ///
    /// Returns `None` if the value is not an object or the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_format::from_str;
    ///
    /// let doc = from_str("{host: 'localhost', port: 8080}").unwrap();
    /// assert_eq!(doc.get("port").and_then(|v| v.as_i64()), Some(8080));
    /// assert!(doc.get("missing").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JotValue> {
        match self {
            JotValue::Object(obj) => obj.get(key),
            _ => None,
        }
    }
}

impl fmt::Display for JotValue {
    /// Renders the value in extended syntax with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::to_string(self))
    }
}

impl Serialize for JotValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // serde has no undefined; both unit variants map to unit
            JotValue::Null | JotValue::Undefined => serializer.serialize_unit(),
            JotValue::Bool(b) => serializer.serialize_bool(*b),
            JotValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            JotValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            JotValue::Number(Number::Hex(u)) | JotValue::Number(Number::Binary(u)) => {
                serializer.serialize_u64(*u)
            }
            JotValue::String(s) => serializer.serialize_str(s),
            JotValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JotValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JotValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JotValueVisitor;

        impl<'de> Visitor<'de> for JotValueVisitor {
            type Value = JotValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid Jot value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JotValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(JotValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(JotValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(JotValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(JotValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JotValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JotValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JotValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JotValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JotValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JotMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JotValue::Object(values))
            }
        }

        deserializer.deserialize_any(JotValueVisitor)
    }
}

// TryFrom implementations for extracting values from JotValue
impl TryFrom<JotValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: JotValue) -> crate::Result<Self> {
        match value {
            JotValue::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert {} to i64", n))
            }),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JotValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: JotValue) -> crate::Result<Self> {
        match value {
            JotValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JotValue> for bool {
    type Error = crate::Error;

    fn try_from(value: JotValue) -> crate::Result<Self> {
        match value {
            JotValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JotValue> for String {
    type Error = crate::Error;

    fn try_from(value: JotValue) -> crate::Result<Self> {
        match value {
            JotValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

// From implementations for creating JotValue from primitives
impl From<bool> for JotValue {
    fn from(value: bool) -> Self {
        JotValue::Bool(value)
    }
}

impl From<i8> for JotValue {
    fn from(value: i8) -> Self {
        JotValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for JotValue {
    fn from(value: i16) -> Self {
        JotValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for JotValue {
    fn from(value: i32) -> Self {
        JotValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for JotValue {
    fn from(value: i64) -> Self {
        JotValue::Number(Number::Integer(value))
    }
}

impl From<u8> for JotValue {
    fn from(value: u8) -> Self {
        JotValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for JotValue {
    fn from(value: u16) -> Self {
        JotValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for JotValue {
    fn from(value: u32) -> Self {
        JotValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for JotValue {
    fn from(value: f32) -> Self {
        JotValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for JotValue {
    fn from(value: f64) -> Self {
        JotValue::Number(Number::Float(value))
    }
}

impl From<Number> for JotValue {
    fn from(value: Number) -> Self {
        JotValue::Number(value)
    }
}

impl From<String> for JotValue {
    fn from(value: String) -> Self {
        JotValue::String(value)
    }
}

impl From<&str> for JotValue {
    fn from(value: &str) -> Self {
        JotValue::String(value.to_string())
    }
}

impl From<Vec<JotValue>> for JotValue {
    fn from(value: Vec<JotValue>) -> Self {
        JotValue::Array(value)
    }
}

impl From<JotMap> for JotValue {
    fn from(value: JotMap) -> Self {
        JotValue::Object(value)
    }
}
