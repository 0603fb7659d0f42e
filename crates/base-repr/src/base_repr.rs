//! Converter with bound settings.

use num_bigint::{BigInt, BigUint};

use crate::{
    bytes_to_repr, check_base, int_to_repr, json_to_repr, repr_to_bytes, repr_to_int,
    repr_to_str, str_to_repr, to_repr, BaseReprError, ByteOrder, Options, TextEncoding, Value,
};

/// A numeral-system converter with fixed base, padding, byte order and text
/// encoding.
///
/// The base is validated when the converter is built, so the bound
/// operations only fail on bad input.
///
/// # Example
///
/// ```
/// use base_repr::{BaseRepr, ByteOrder};
///
/// let base62 = BaseRepr::base62().with_byteorder(ByteOrder::Little);
/// assert_eq!(base62.int_to_repr(65535).unwrap(), "H31");
/// assert_eq!(base62.str_to_repr("test").unwrap(), "28DbjY");
/// assert_eq!(base62.repr_to_str("28DbjY").unwrap(), "test");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseRepr {
    base: u32,
    padding: usize,
    byteorder: ByteOrder,
    encoding: TextEncoding,
}

impl BaseRepr {
    /// Creates a converter for `base` with no padding, little-endian bytes
    /// and UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`BaseReprError::InvalidBase`] if `base` is outside 2..=62.
    pub fn new(base: u32) -> Result<Self, BaseReprError> {
        check_base(base)?;
        Ok(BaseRepr::with_valid_base(base))
    }

    const fn with_valid_base(base: u32) -> Self {
        BaseRepr {
            base,
            padding: 0,
            byteorder: ByteOrder::Little,
            encoding: TextEncoding::UTF8,
        }
    }

    /// Base 62 converter (`0-9A-Za-z`).
    pub const fn base62() -> Self {
        BaseRepr::with_valid_base(62)
    }

    /// Base 36 converter (`0-9A-Z`).
    pub const fn base36() -> Self {
        BaseRepr::with_valid_base(36)
    }

    /// Builds a converter from deserialized settings.
    ///
    /// # Errors
    ///
    /// Returns [`BaseReprError::InvalidBase`] or
    /// [`BaseReprError::UnknownEncoding`].
    pub fn from_options(options: &Options) -> Result<Self, BaseReprError> {
        let converter = BaseRepr::new(options.base)?
            .with_padding(options.padding)
            .with_byteorder(options.byteorder)
            .with_encoding(TextEncoding::for_label(&options.encoding)?);
        log::trace!(
            "base repr: base={} padding={} byteorder={} encoding={}",
            converter.base,
            converter.padding,
            converter.byteorder,
            converter.encoding
        );
        Ok(converter)
    }

    pub const fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    pub const fn with_byteorder(mut self, byteorder: ByteOrder) -> Self {
        self.byteorder = byteorder;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub const fn base(&self) -> u32 {
        self.base
    }

    pub const fn padding(&self) -> usize {
        self.padding
    }

    pub const fn byteorder(&self) -> ByteOrder {
        self.byteorder
    }

    pub const fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Current settings as [`Options`].
    pub fn options(&self) -> Options {
        Options {
            base: self.base,
            padding: self.padding,
            byteorder: self.byteorder,
            encoding: self.encoding.name().to_string(),
        }
    }

    pub fn int_to_repr<N: Into<BigInt>>(&self, number: N) -> Result<String, BaseReprError> {
        int_to_repr(number, self.base, self.padding)
    }

    pub fn repr_to_int(&self, string: &str) -> Result<BigUint, BaseReprError> {
        repr_to_int(string, self.base)
    }

    pub fn bytes_to_repr(&self, bytes: &[u8]) -> Result<String, BaseReprError> {
        bytes_to_repr(bytes, self.base, self.padding, self.byteorder)
    }

    pub fn repr_to_bytes(&self, string: &str) -> Result<Vec<u8>, BaseReprError> {
        repr_to_bytes(string, self.base, self.byteorder)
    }

    pub fn str_to_repr(&self, text: &str) -> Result<String, BaseReprError> {
        str_to_repr(text, self.base, self.padding, self.byteorder, self.encoding)
    }

    pub fn repr_to_str(&self, string: &str) -> Result<String, BaseReprError> {
        repr_to_str(string, self.base, self.byteorder, self.encoding)
    }

    pub fn to_repr<V: Into<Value>>(&self, value: V) -> Result<String, BaseReprError> {
        to_repr(value, self.base, self.padding, self.byteorder, self.encoding)
    }

    pub fn json_to_repr(&self, value: &serde_json::Value) -> Result<String, BaseReprError> {
        json_to_repr(value, self.base, self.padding, self.byteorder, self.encoding)
    }
}

impl Default for BaseRepr {
    fn default() -> Self {
        BaseRepr::with_valid_base(Options::default().base)
    }
}

impl TryFrom<&Options> for BaseRepr {
    type Error = BaseReprError;

    fn try_from(options: &Options) -> Result<Self, Self::Error> {
        BaseRepr::from_options(options)
    }
}
