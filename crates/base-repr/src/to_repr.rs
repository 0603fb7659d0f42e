//! Dispatching conversion.

use crate::{bytes_to_repr, int_to_repr, str_to_repr, BaseReprError, ByteOrder, TextEncoding, Value};

/// Returns the representation of any [`Value`] in the `base` numeral system.
///
/// Parameters that do not apply to the variant are ignored: integers use
/// neither `byteorder` nor `encoding`, bytes do not use `encoding`.
///
/// # Example
///
/// ```
/// use base_repr::{to_repr, ByteOrder, TextEncoding};
///
/// let utf8 = TextEncoding::utf8();
/// assert_eq!(to_repr(1234, 62, 0, ByteOrder::Little, utf8).unwrap(), "Ju");
/// assert_eq!(to_repr(b"\xff\xff", 62, 0, ByteOrder::Little, utf8).unwrap(), "H31");
/// assert_eq!(to_repr("test", 62, 0, ByteOrder::Little, utf8).unwrap(), "28DbjY");
/// ```
pub fn to_repr<V: Into<Value>>(
    value: V,
    base: u32,
    padding: usize,
    byteorder: ByteOrder,
    encoding: TextEncoding,
) -> Result<String, BaseReprError> {
    match value.into() {
        Value::Text(text) => str_to_repr(&text, base, padding, byteorder, encoding),
        Value::Bytes(bytes) => bytes_to_repr(&bytes, base, padding, byteorder),
        Value::Int(number) => int_to_repr(number, base, padding),
    }
}

/// Like [`to_repr`], for dynamically typed JSON input.
///
/// # Errors
///
/// Returns [`BaseReprError::UnsupportedType`] for JSON values that are not a
/// string, an integer or an array of bytes.
pub fn json_to_repr(
    value: &serde_json::Value,
    base: u32,
    padding: usize,
    byteorder: ByteOrder,
    encoding: TextEncoding,
) -> Result<String, BaseReprError> {
    let value = Value::try_from(value).inspect_err(|err| {
        log::debug!("rejecting dynamic value: {err}");
    })?;
    to_repr(value, base, padding, byteorder, encoding)
}
