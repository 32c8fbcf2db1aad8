//! Text encoding of character string values,
//! following the Specific Character Set (0008,0005) of the data set.
//!
//! Only single-byte repertoires without code extensions,
//! UTF-8 and GB18030 are supported.
//! See [`SpecificCharacterSet`] for the full list.

use encoding::all::{ASCII, GB18030, ISO_8859_1, ISO_8859_2, ISO_8859_3, ISO_8859_4, ISO_8859_5, UTF_8};
use encoding::{EncoderTrap, Encoding, EncodingRef};
use snafu::{Backtrace, Snafu};
use std::borrow::Cow;

/// An error type for text encoding issues.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum EncodeTextError {
    /// The text holds characters outside of the repertoire.
    #[snafu(display("{}", message))]
    Unrepresentable {
        /// The message of the underlying encoder.
        message: Cow<'static, str>,
        backtrace: Backtrace,
    },
}

/// A way of turning text values into the bytes of a character string value.
pub trait TextCodec {
    /// The defined term of the character set,
    /// as written in Specific Character Set (0008,0005).
    fn name(&self) -> &'static str;

    /// Encode a text value into a byte vector.
    /// Backslashes delimiting multiple values are kept as is.
    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodeTextError>;
}

/// An enum type for all currently supported character sets.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum SpecificCharacterSet {
    /// **ISO-IR 6**: the default repertoire (ASCII).
    #[default]
    Default,
    /// **ISO-IR 100** (ISO-8859-1): Latin alphabet no. 1, Western Europe.
    IsoIr100,
    /// **ISO-IR 101** (ISO-8859-2): Latin alphabet no. 2, Central/Eastern Europe.
    IsoIr101,
    /// **ISO-IR 109** (ISO-8859-3): Latin alphabet no. 3, South Europe.
    IsoIr109,
    /// **ISO-IR 110** (ISO-8859-4): Latin alphabet no. 4, North Europe.
    IsoIr110,
    /// **ISO-IR 144** (ISO-8859-5): Latin/Cyrillic.
    IsoIr144,
    /// **ISO-IR 192**: Unicode in UTF-8.
    IsoIr192,
    /// **GB18030**: Simplified Chinese.
    Gb18030,
}

impl SpecificCharacterSet {
    /// Obtain the specific character set identified by the given code string.
    ///
    /// Supported code strings include the possible values
    /// in the respective DICOM element (0008, 0005).
    ///
    /// # Example
    ///
    /// ```
    /// # use dcmedit_encoding::text::SpecificCharacterSet;
    /// let character_set = SpecificCharacterSet::from_code("ISO_IR 100");
    /// assert_eq!(character_set, Some(SpecificCharacterSet::IsoIr100));
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        use self::SpecificCharacterSet::*;
        match code.trim_end() {
            "Default" | "ISO_IR_6" | "ISO_IR 6" | "ISO 2022 IR 6" => Some(Default),
            "ISO_IR_100" | "ISO_IR 100" | "ISO 2022 IR 100" => Some(IsoIr100),
            "ISO_IR_101" | "ISO_IR 101" | "ISO 2022 IR 101" => Some(IsoIr101),
            "ISO_IR_109" | "ISO_IR 109" | "ISO 2022 IR 109" => Some(IsoIr109),
            "ISO_IR_110" | "ISO_IR 110" | "ISO 2022 IR 110" => Some(IsoIr110),
            "ISO_IR_144" | "ISO_IR 144" | "ISO 2022 IR 144" => Some(IsoIr144),
            "ISO_IR_192" | "ISO_IR 192" => Some(IsoIr192),
            "GB18030" => Some(Gb18030),
            _ => None,
        }
    }

    /// Resolve the character set from the raw value
    /// of a Specific Character Set (0008,0005) element.
    ///
    /// An absent or empty value means the default repertoire.
    /// Values with more than one defined term
    /// (ISO 2022 code extensions)
    /// and unrecognized terms yield `None`.
    ///
    /// ```
    /// # use dcmedit_encoding::text::SpecificCharacterSet;
    /// assert_eq!(
    ///     SpecificCharacterSet::from_element_value(b"ISO_IR 192"),
    ///     Some(SpecificCharacterSet::IsoIr192),
    /// );
    /// assert_eq!(
    ///     SpecificCharacterSet::from_element_value(b""),
    ///     Some(SpecificCharacterSet::Default),
    /// );
    /// assert_eq!(
    ///     SpecificCharacterSet::from_element_value(b"\\ISO 2022 IR 87"),
    ///     None,
    /// );
    /// ```
    pub fn from_element_value(value: &[u8]) -> Option<Self> {
        let text = std::str::from_utf8(value).ok()?;
        let text = text.trim_matches(|c: char| c == ' ' || c == '\0');
        if text.is_empty() {
            return Some(SpecificCharacterSet::Default);
        }
        let mut terms = text.split('\\');
        let first = terms.next()?;
        if terms.next().is_some() {
            return None;
        }
        Self::from_code(first.trim())
    }

    fn encoding(self) -> EncodingRef {
        match self {
            SpecificCharacterSet::Default => ASCII,
            SpecificCharacterSet::IsoIr100 => ISO_8859_1,
            SpecificCharacterSet::IsoIr101 => ISO_8859_2,
            SpecificCharacterSet::IsoIr109 => ISO_8859_3,
            SpecificCharacterSet::IsoIr110 => ISO_8859_4,
            SpecificCharacterSet::IsoIr144 => ISO_8859_5,
            SpecificCharacterSet::IsoIr192 => UTF_8,
            SpecificCharacterSet::Gb18030 => GB18030,
        }
    }
}

impl TextCodec for SpecificCharacterSet {
    fn name(&self) -> &'static str {
        match self {
            SpecificCharacterSet::Default => "ISO_IR 6",
            SpecificCharacterSet::IsoIr100 => "ISO_IR 100",
            SpecificCharacterSet::IsoIr101 => "ISO_IR 101",
            SpecificCharacterSet::IsoIr109 => "ISO_IR 109",
            SpecificCharacterSet::IsoIr110 => "ISO_IR 110",
            SpecificCharacterSet::IsoIr144 => "ISO_IR 144",
            SpecificCharacterSet::IsoIr192 => "ISO_IR 192",
            SpecificCharacterSet::Gb18030 => "GB18030",
        }
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, EncodeTextError> {
        self.encoding()
            .encode(text, EncoderTrap::Strict)
            .map_err(|message| UnrepresentableSnafu { message }.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SpecificCharacterSet::*;

    #[test]
    fn default_repertoire_is_ascii() {
        assert_eq!(Default.encode("Smith^John").unwrap(), b"Smith^John");
        assert!(matches!(
            Default.encode("Simões^João"),
            Err(EncodeTextError::Unrepresentable { .. })
        ));
    }

    #[test]
    fn single_byte_repertoires() {
        assert_eq!(IsoIr100.encode("Simões^João").unwrap(), b"Sim\xF5es^Jo\xE3o");
        assert_eq!(IsoIr101.encode("Günther^Hans").unwrap(), b"G\xfcnther^Hans");
        assert_eq!(
            IsoIr144.encode("Иванков^Андрей").unwrap(),
            b"\xb8\xd2\xd0\xdd\xda\xde\xd2^\xb0\xdd\xd4\xe0\xd5\xd9"
        );
        // Cyrillic is not in Latin-1
        assert!(IsoIr100.encode("Иванков").is_err());
    }

    #[test]
    fn unicode_repertoires() {
        assert_eq!(
            IsoIr192.encode("Иванков^Андрей").unwrap(),
            "Иванков^Андрей".as_bytes()
        );
        assert_eq!(Gb18030.encode("王^小东").unwrap(), b"\xCD\xF5^\xD0\xA1\xB6\xAB");
    }

    #[test]
    fn character_set_from_element_value() {
        assert_eq!(SpecificCharacterSet::from_element_value(b"ISO_IR 100"), Some(IsoIr100));
        assert_eq!(SpecificCharacterSet::from_element_value(b"GB18030 "), Some(Gb18030));
        assert_eq!(SpecificCharacterSet::from_element_value(b"  "), Some(Default));
        assert_eq!(SpecificCharacterSet::from_element_value(b"KLINGON"), None);
        assert_eq!(
            SpecificCharacterSet::from_element_value(b"ISO 2022 IR 6\\ISO 2022 IR 87"),
            None
        );
        assert_eq!(IsoIr144.name(), "ISO_IR 144");
    }
}
