//! Text codecs used to turn strings into bytes and back.

use std::fmt;

use encoding::all::UTF_8;
use encoding::label::encoding_from_whatwg_label;
use encoding::{DecoderTrap, EncoderTrap, EncodingRef};

use crate::BaseReprError;

/// Name of the codec that rejects everything; not selectable.
const ERROR_CODEC: &str = "error";

/// A named text codec.
///
/// Both directions are strict: nothing is replaced or dropped.
#[derive(Clone, Copy)]
pub struct TextEncoding {
    codec: EncodingRef,
}

impl TextEncoding {
    pub const UTF8: TextEncoding = TextEncoding { codec: UTF_8 };

    /// UTF-8, the default codec.
    pub const fn utf8() -> Self {
        TextEncoding::UTF8
    }

    /// Looks up a codec by its own name (`"ascii"`, `"iso-8859-1"`, ...),
    /// then by WHATWG label (`"utf8"`, `"latin1"`, ...).
    ///
    /// # Example
    ///
    /// ```
    /// use base_repr::TextEncoding;
    ///
    /// assert_eq!(TextEncoding::for_label("UTF8").unwrap().name(), "utf-8");
    /// assert_eq!(TextEncoding::for_label("ascii").unwrap().name(), "ascii");
    /// assert_eq!(TextEncoding::for_label("latin1").unwrap().name(), "windows-1252");
    /// assert!(TextEncoding::for_label("klingon").is_err());
    /// ```
    pub fn for_label(label: &str) -> Result<Self, BaseReprError> {
        let label = label.trim();
        let by_name = encoding::all::encodings()
            .iter()
            .find(|codec| {
                codec.name() != ERROR_CODEC && codec.name().eq_ignore_ascii_case(label)
            })
            .copied();
        by_name
            .or_else(|| encoding_from_whatwg_label(label))
            .map(|codec| TextEncoding { codec })
            .ok_or_else(|| BaseReprError::UnknownEncoding(label.to_string()))
    }

    /// Canonical name of the codec.
    pub fn name(&self) -> &'static str {
        self.codec.name()
    }

    /// Encodes `text` to bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BaseReprError::EncodeError`] if `text` has characters the
    /// codec cannot represent.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, BaseReprError> {
        self.codec
            .encode(text, EncoderTrap::Strict)
            .map_err(|reason| BaseReprError::EncodeError {
                encoding: self.name(),
                reason: reason.into_owned(),
            })
    }

    /// Decodes `bytes` to text.
    ///
    /// # Errors
    ///
    /// Returns [`BaseReprError::DecodeError`] if `bytes` is not valid under
    /// the codec.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, BaseReprError> {
        self.codec
            .decode(bytes, DecoderTrap::Strict)
            .map_err(|reason| BaseReprError::DecodeError {
                encoding: self.name(),
                reason: reason.into_owned(),
            })
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding::utf8()
    }
}

impl PartialEq for TextEncoding {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for TextEncoding {}

impl fmt::Debug for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextEncoding").field(&self.name()).finish()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_utf8() {
        assert_eq!(TextEncoding::default().name(), "utf-8");
        assert_eq!(TextEncoding::default(), TextEncoding::for_label("utf-8").unwrap());
    }

    #[test]
    fn test_utf16() {
        let codec = TextEncoding::for_label("utf-16be").unwrap();
        assert_eq!(codec.encode("hi").unwrap(), vec![0, b'h', 0, b'i']);
        assert_eq!(codec.decode(&[0, b'h', 0, b'i']).unwrap(), "hi");
    }

    #[test]
    fn test_unrepresentable_text() {
        let codec = TextEncoding::for_label("windows-1252").unwrap();
        assert!(matches!(
            codec.encode("한글"),
            Err(BaseReprError::EncodeError { encoding: "windows-1252", .. })
        ));
    }

    #[test]
    fn test_invalid_bytes() {
        assert!(matches!(
            TextEncoding::utf8().decode(&[0xff, 0xfe, 0xfd]),
            Err(BaseReprError::DecodeError { encoding: "utf-8", .. })
        ));
    }

    #[test]
    fn test_codec_name_wins_over_whatwg_label() {
        let ascii = TextEncoding::for_label("ascii").unwrap();
        assert_eq!(ascii.name(), "ascii");
        assert_eq!(ascii.encode("abc").unwrap(), b"abc");
        assert!(matches!(
            ascii.encode("é"),
            Err(BaseReprError::EncodeError { encoding: "ascii", .. })
        ));
        assert_eq!(TextEncoding::for_label("latin1").unwrap().name(), "windows-1252");
    }

    #[test]
    fn test_error_codec_not_selectable() {
        assert_eq!(
            TextEncoding::for_label("error"),
            Err(BaseReprError::UnknownEncoding("error".to_string()))
        );
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(
            TextEncoding::for_label("no-such-codec"),
            Err(BaseReprError::UnknownEncoding("no-such-codec".to_string()))
        );
    }
}
