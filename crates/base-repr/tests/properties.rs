//! Round-trip, zero and padding invariants over generated inputs.

use base_repr::{
    bytes_to_repr, int_to_repr, repr_to_bytes, repr_to_int, repr_to_str, str_to_repr,
    ByteOrder, TextEncoding,
};
use num_bigint::BigUint;
use proptest::prelude::*;

fn byte_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Big), Just(ByteOrder::Little)]
}

/// Drops the superfluous zero bytes at the most significant end.
fn minimal(bytes: &[u8], byteorder: ByteOrder) -> Vec<u8> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let mut out = bytes.to_vec();
    if byteorder == ByteOrder::Big {
        out.reverse();
    }
    while out.len() > 1 && out.last() == Some(&0) {
        out.pop();
    }
    if byteorder == ByteOrder::Big {
        out.reverse();
    }
    out
}

fn natural_digit_count(mut n: u128, base: u32) -> usize {
    let mut count = 1;
    while n >= u128::from(base) {
        n /= u128::from(base);
        count += 1;
    }
    count
}

proptest! {
    #[test]
    fn int_round_trip(n in any::<u128>(), base in 2u32..=62) {
        let encoded = int_to_repr(n, base, 0).unwrap();
        prop_assert_eq!(repr_to_int(&encoded, base).unwrap(), BigUint::from(n));
    }

    #[test]
    fn zero_is_single_digit(base in 2u32..=62) {
        prop_assert_eq!(int_to_repr(0u8, base, 0).unwrap(), "0");
    }

    #[test]
    fn padding_sets_minimum_length(n in any::<u128>(), base in 2u32..=62, padding in 0usize..64) {
        let encoded = int_to_repr(n, base, padding).unwrap();
        prop_assert_eq!(encoded.len(), padding.max(natural_digit_count(n, base)));
    }

    #[test]
    fn bytes_round_trip_to_minimal_form(
        bytes in proptest::collection::vec(any::<u8>(), 0..48),
        base in 2u32..=62,
        byteorder in byte_order(),
    ) {
        let encoded = bytes_to_repr(&bytes, base, 0, byteorder).unwrap();
        let decoded = repr_to_bytes(&encoded, base, byteorder).unwrap();
        prop_assert_eq!(decoded, minimal(&bytes, byteorder));
    }

    #[test]
    fn text_round_trip(text in "[^\\x00]*", base in 2u32..=62) {
        // A leading NUL is a superfluous zero byte and does not survive.
        let utf8 = TextEncoding::utf8();
        let encoded = str_to_repr(&text, base, 0, ByteOrder::Big, utf8).unwrap();
        prop_assert_eq!(repr_to_str(&encoded, base, ByteOrder::Big, utf8).unwrap(), text);
    }
}
