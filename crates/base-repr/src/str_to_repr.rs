//! Text to numeral string.

use crate::{bytes_to_repr, BaseReprError, ByteOrder, TextEncoding};

/// Encodes `text` with `encoding` and returns the representation of the
/// bytes in the `base` numeral system.
///
/// # Errors
///
/// Returns [`BaseReprError::EncodeError`] if `text` cannot be encoded and
/// [`BaseReprError::InvalidBase`] if `base` is outside 2..=62.
///
/// # Example
///
/// ```
/// use base_repr::{str_to_repr, ByteOrder, TextEncoding};
///
/// let utf8 = TextEncoding::utf8();
/// assert_eq!(str_to_repr("test", 62, 0, ByteOrder::Little, utf8).unwrap(), "28DbjY");
/// assert_eq!(str_to_repr("test", 36, 0, ByteOrder::Little, utf8).unwrap(), "WB6ZQS");
/// ```
pub fn str_to_repr(
    text: &str,
    base: u32,
    padding: usize,
    byteorder: ByteOrder,
    encoding: TextEncoding,
) -> Result<String, BaseReprError> {
    bytes_to_repr(&encoding.encode(text)?, base, padding, byteorder)
}
