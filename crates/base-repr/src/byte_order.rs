//! Byte order used to map byte sequences to unsigned integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BaseReprError;

/// Order of the bytes of an unsigned integer magnitude.
///
/// Defaults to [`ByteOrder::Little`] on every platform. Use
/// [`ByteOrder::native`] to follow the host instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    #[default]
    Little,
}

impl ByteOrder {
    /// The byte order of the host platform.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ByteOrder::Big => "big",
            ByteOrder::Little => "little",
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrder {
    type Err = BaseReprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("big") {
            Ok(ByteOrder::Big)
        } else if s.eq_ignore_ascii_case("little") {
            Ok(ByteOrder::Little)
        } else {
            Err(BaseReprError::UnknownByteOrder(s.to_string()))
        }
    }
}
