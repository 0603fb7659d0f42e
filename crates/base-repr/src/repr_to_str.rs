//! Numeral string to text.

use crate::{repr_to_bytes, BaseReprError, ByteOrder, TextEncoding};

/// Parses a numeral string in the `base` system and decodes the resulting
/// bytes with `encoding`.
///
/// # Errors
///
/// Same as [`repr_to_bytes`](crate::repr_to_bytes), plus
/// [`BaseReprError::DecodeError`] if the bytes are not valid text.
///
/// # Example
///
/// ```
/// use base_repr::{repr_to_str, ByteOrder, TextEncoding};
///
/// let text = repr_to_str("28DbjY", 62, ByteOrder::Little, TextEncoding::utf8()).unwrap();
/// assert_eq!(text, "test");
/// ```
pub fn repr_to_str(
    string: &str,
    base: u32,
    byteorder: ByteOrder,
    encoding: TextEncoding,
) -> Result<String, BaseReprError> {
    encoding.decode(&repr_to_bytes(string, base, byteorder)?)
}
