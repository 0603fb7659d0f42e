//! Unsigned integer to byte sequence.

use num_bigint::BigUint;

use crate::ByteOrder;

/// Encodes `number` as its minimal unsigned byte sequence in `byteorder`.
///
/// Zero encodes as a single zero byte, never as an empty sequence.
///
/// # Example
///
/// ```
/// use base_repr::{int_to_bytes, ByteOrder};
/// use num_bigint::BigUint;
///
/// let n = BigUint::from(0x0102u32);
/// assert_eq!(int_to_bytes(&n, ByteOrder::Big), vec![1, 2]);
/// assert_eq!(int_to_bytes(&n, ByteOrder::Little), vec![2, 1]);
/// assert_eq!(int_to_bytes(&BigUint::from(0u8), ByteOrder::Big), vec![0]);
/// ```
pub fn int_to_bytes(number: &BigUint, byteorder: ByteOrder) -> Vec<u8> {
    let bytes = match byteorder {
        ByteOrder::Big => number.to_bytes_be(),
        ByteOrder::Little => number.to_bytes_le(),
    };
    if bytes.is_empty() {
        return vec![0];
    }
    bytes
}
