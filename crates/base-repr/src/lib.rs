//! Positional numeral-system representations of integers, bytes and text.
//!
//! This crate converts between:
//! - Integers (any size, signed on the way out) and numeral strings
//! - Byte sequences, read as unsigned integers in big or little endian
//! - Text, encoded to bytes with a named codec
//!
//! in any base from 2 to 62, using the digits `0-9A-Za-z`.
//!
//! # Example
//!
//! ```
//! use base_repr::{BaseRepr, ByteOrder};
//!
//! let base36 = BaseRepr::base36().with_byteorder(ByteOrder::Little);
//! let encoded = base36.str_to_repr("test").unwrap();
//! assert_eq!(encoded, "WB6ZQS");
//! assert_eq!(base36.repr_to_str(&encoded).unwrap(), "test");
//! ```

mod base_repr;
mod byte_order;
mod bytes_to_int;
mod bytes_to_repr;
mod check_base;
mod constants;
mod int_to_bytes;
mod int_to_repr;
mod options;
mod repr_to_bytes;
mod repr_to_int;
mod repr_to_str;
mod str_to_repr;
mod text_encoding;
mod to_repr;
mod value;

pub use base_repr::BaseRepr;
pub use byte_order::ByteOrder;
pub use bytes_to_int::bytes_to_int;
pub use bytes_to_repr::bytes_to_repr;
pub use check_base::check_base;
pub use constants::{DIGITS, DIGITS_BYTES, MAX_BASE, MIN_BASE};
pub use int_to_bytes::int_to_bytes;
pub use int_to_repr::int_to_repr;
pub use options::Options;
pub use repr_to_bytes::repr_to_bytes;
pub use repr_to_int::repr_to_int;
pub use repr_to_str::repr_to_str;
pub use str_to_repr::str_to_repr;
pub use text_encoding::TextEncoding;
pub use to_repr::{json_to_repr, to_repr};
pub use value::Value;

use thiserror::Error;

/// Error type for numeral-system conversions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BaseReprError {
    /// The base is outside [`MIN_BASE`]..=[`MAX_BASE`].
    #[error("base must be between 2 and 62, got {0}")]
    InvalidBase(u32),
    /// A character of the input is not a digit of the base.
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },
    #[error("cannot decode bytes as {encoding}: {reason}")]
    DecodeError {
        encoding: &'static str,
        reason: String,
    },
    #[error("cannot encode text as {encoding}: {reason}")]
    EncodeError {
        encoding: &'static str,
        reason: String,
    },
    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),
    #[error("unknown byte order: {0} (expected \"big\" or \"little\")")]
    UnknownByteOrder(String),
    /// The dispatcher was given a value it has no representation for.
    #[error("unsupported value type: {0}")]
    UnsupportedType(&'static str),
}
