//! # Runtime Value Model
//!
//! [`Value`] is the dynamically-typed value routed through a chain. Every
//! variant maps to exactly one [`Kind`] bit, which is what the built-in links
//! test against.
//!
//! # Conversions
//!
//! Plain Rust values convert with `From`:
//!
//! ```rust,ignore
//! use typechain_core::Value;
//!
//! let n: Value = 5.into();
//! let s: Value = "hello".into();
//! let list: Value = vec![1, 2, 3].into();
//! let missing: Value = Option::<i32>::None.into(); // Value::Null
//! ```
//!
//! With the `json` feature, `serde_json::Value` converts both ways.

use crate::kind::Kind;
use std::{collections::BTreeMap, fmt};

/// A string-keyed map of values.
pub type Map = BTreeMap<String, Value>;

/// A dynamically-typed value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The absence of any value.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered list.
    Array(Vec<Value>),
    /// A string-keyed map.
    Object(Map),
    /// An opaque byte buffer.
    Bytes(Vec<u8>),
}

impl Value {
    /// The single-bit [`Kind`] of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::UNDEFINED,
            Value::Null => Kind::NULL,
            Value::Bool(_) => Kind::BOOLEAN,
            Value::Number(_) => Kind::NUMBER,
            Value::String(_) => Kind::STRING,
            Value::Array(_) => Kind::ARRAY,
            Value::Object(_) => Kind::OBJECT,
            Value::Bytes(_) => Kind::BYTES,
        }
    }

    /// Builds a [`Value::Bytes`] from a byte slice.
    pub fn bytes(bytes: impl AsRef<[u8]>) -> Self {
        Value::Bytes(bytes.as_ref().to_vec())
    }

    /// An empty [`Value::Object`].
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// An empty [`Value::Array`].
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// Whether this is [`Value::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Whether this is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The number, if this is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The items, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is an object.
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The raw bytes, if this is a byte buffer.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key:?}:{item}")?;
                }
                f.write_str("}")
            }
            Value::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

// ============================================================================
// From conversions
// ============================================================================

macro_rules! from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(map: BTreeMap<String, V>) -> Self {
        Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_single_bit() {
        let values = [
            Value::Undefined,
            Value::Null,
            Value::from(true),
            Value::from(1.5),
            Value::from("s"),
            Value::array(),
            Value::object(),
            Value::bytes(b"raw"),
        ];
        for value in &values {
            assert_eq!(value.kind().bits().count_ones(), 1, "{value:?}");
        }
    }

    #[test]
    fn test_option_none_is_null() {
        assert_eq!(Value::from(Option::<i32>::None), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Number(3.0));
    }

    #[test]
    fn test_unit_is_undefined() {
        assert!(Value::from(()).is_undefined());
        assert!(Value::default().is_undefined());
    }

    #[test]
    fn test_display() {
        let mut map = Map::new();
        map.insert("a".into(), Value::from(vec![1, 2]));
        map.insert("b".into(), Value::Null);
        assert_eq!(Value::Object(map).to_string(), r#"{"a":[1,2],"b":null}"#);
        assert_eq!(Value::bytes([0u8; 4]).to_string(), "<4 bytes>");
        assert_eq!(Value::from("hi").to_string(), "\"hi\"");
    }
}
