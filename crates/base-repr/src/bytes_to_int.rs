//! Byte sequence to unsigned integer.

use num_bigint::BigUint;

use crate::ByteOrder;

/// Interprets `bytes` as an unsigned magnitude in `byteorder`.
///
/// An empty sequence is zero.
///
/// # Example
///
/// ```
/// use base_repr::{bytes_to_int, ByteOrder};
/// use num_bigint::BigUint;
///
/// assert_eq!(bytes_to_int(&[1, 2], ByteOrder::Big), BigUint::from(0x0102u32));
/// assert_eq!(bytes_to_int(&[1, 2], ByteOrder::Little), BigUint::from(0x0201u32));
/// assert_eq!(bytes_to_int(&[], ByteOrder::Big), BigUint::from(0u8));
/// ```
pub fn bytes_to_int(bytes: &[u8], byteorder: ByteOrder) -> BigUint {
    match byteorder {
        ByteOrder::Big => BigUint::from_bytes_be(bytes),
        ByteOrder::Little => BigUint::from_bytes_le(bytes),
    }
}
