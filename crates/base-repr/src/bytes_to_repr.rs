//! Byte sequence to numeral string.

use crate::{bytes_to_int, int_to_repr, BaseReprError, ByteOrder};

/// Returns the representation of `bytes`, read as an unsigned integer in
/// `byteorder`, in the `base` numeral system.
///
/// Empty input yields an empty string regardless of `padding`.
///
/// # Errors
///
/// Returns [`BaseReprError::InvalidBase`] if `base` is outside 2..=62.
///
/// # Example
///
/// ```
/// use base_repr::{bytes_to_repr, ByteOrder};
///
/// assert_eq!(bytes_to_repr(b"\x01", 62, 0, ByteOrder::Little).unwrap(), "1");
/// assert_eq!(bytes_to_repr(b"\xff\xff", 62, 0, ByteOrder::Little).unwrap(), "H31");
/// assert_eq!(bytes_to_repr(b"", 62, 4, ByteOrder::Little).unwrap(), "");
/// ```
pub fn bytes_to_repr(
    bytes: &[u8],
    base: u32,
    padding: usize,
    byteorder: ByteOrder,
) -> Result<String, BaseReprError> {
    if bytes.is_empty() {
        return Ok(String::new());
    }
    int_to_repr(bytes_to_int(bytes, byteorder), base, padding)
}
