//! Input accepted by the [`to_repr`](crate::to_repr) dispatcher.

use num_bigint::{BigInt, BigUint};
use serde_json::Value as JsonValue;

use crate::BaseReprError;

/// A value that has a numeral-string representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(BigInt),
    Bytes(Vec<u8>),
    Text(String),
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Int(BigInt::from(n))
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Value::Int(n)
    }
}

impl From<BigUint> for Value {
    fn from(n: BigUint) -> Self {
        Value::Int(BigInt::from(n))
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(bytes: &[u8; N]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(n) if n.is_f64() => "float",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn json_byte(value: &JsonValue) -> Option<u8> {
    value.as_u64().and_then(|n| u8::try_from(n).ok())
}

/// Converts dynamically typed JSON input.
///
/// Strings become text, integral numbers become integers and arrays of
/// integers in 0..=255 become bytes. Everything else is rejected.
///
/// # Example
///
/// ```
/// use base_repr::Value;
/// use serde_json::json;
///
/// assert_eq!(Value::try_from(&json!("hi")).unwrap(), Value::from("hi"));
/// assert_eq!(Value::try_from(&json!(-7)).unwrap(), Value::from(-7));
/// assert_eq!(Value::try_from(&json!([1, 2])).unwrap(), Value::from(vec![1u8, 2]));
/// assert!(Value::try_from(&json!(1.5)).is_err());
/// ```
impl TryFrom<&JsonValue> for Value {
    type Error = BaseReprError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        let unsupported = || BaseReprError::UnsupportedType(json_kind(value));
        match value {
            JsonValue::String(s) => Ok(Value::Text(s.clone())),
            JsonValue::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Ok(Value::from(u))
                } else if let Some(i) = n.as_i64() {
                    Ok(Value::from(i))
                } else {
                    Err(unsupported())
                }
            }
            JsonValue::Array(items) => items
                .iter()
                .map(json_byte)
                .collect::<Option<Vec<u8>>>()
                .map(Value::Bytes)
                .ok_or_else(unsupported),
            _ => Err(unsupported()),
        }
    }
}

impl TryFrom<JsonValue> for Value {
    type Error = BaseReprError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Value::try_from(&value)
    }
}
