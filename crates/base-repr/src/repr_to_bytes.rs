//! Numeral string to byte sequence.

use crate::{int_to_bytes, repr_to_int, BaseReprError, ByteOrder};

/// Parses a numeral string in the `base` system and returns the minimal
/// unsigned byte sequence of its value in `byteorder`.
///
/// Leading zero bytes of the original input are not recoverable: only the
/// magnitude is encoded in the string. An empty string yields no bytes.
///
/// # Errors
///
/// Same as [`repr_to_int`](crate::repr_to_int).
///
/// # Example
///
/// ```
/// use base_repr::{repr_to_bytes, ByteOrder};
///
/// assert_eq!(repr_to_bytes("H32", 62, ByteOrder::Little).unwrap(), b"\x00\x00\x01");
/// assert_eq!(repr_to_bytes("H32", 62, ByteOrder::Big).unwrap(), b"\x01\x00\x00");
/// assert_eq!(repr_to_bytes("", 62, ByteOrder::Big).unwrap(), b"");
/// ```
pub fn repr_to_bytes(
    string: &str,
    base: u32,
    byteorder: ByteOrder,
) -> Result<Vec<u8>, BaseReprError> {
    if string.is_empty() {
        return Ok(Vec::new());
    }
    Ok(int_to_bytes(&repr_to_int(string, base)?, byteorder))
}
