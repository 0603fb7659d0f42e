//! Serializable converter settings.

use serde::{Deserialize, Serialize};

use crate::ByteOrder;

/// Plain settings for a [`BaseRepr`](crate::BaseRepr), e.g. read from a
/// config file. Missing fields take their defaults.
///
/// # Example
///
/// ```
/// use base_repr::{ByteOrder, Options};
///
/// let options: Options = serde_json::from_str(r#"{"base": 36, "byteorder": "big"}"#).unwrap();
/// assert_eq!(options.base, 36);
/// assert_eq!(options.padding, 0);
/// assert_eq!(options.byteorder, ByteOrder::Big);
/// assert_eq!(options.encoding, "utf-8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub base: u32,
    pub padding: usize,
    pub byteorder: ByteOrder,
    /// Text codec label, see [`TextEncoding::for_label`](crate::TextEncoding::for_label).
    pub encoding: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            base: 2,
            padding: 0,
            byteorder: ByteOrder::default(),
            encoding: "utf-8".to_string(),
        }
    }
}
