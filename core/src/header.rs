//! This module contains an assortment of types required for interpreting
//! DICOM data elements.
//! It comprises a variety of basic data types, such as the DICOM attribute
//! tag, the value representation, the element header,
//! and the element composite type.

use crate::value::{DataSetSequence, PixelFragmentSequence, Value, C};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for item delimiters.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

type Result<T, E = SequenceItemHeaderError> = std::result::Result<T, E>;

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item, in bytes.
    ///
    /// According to the standard, the concrete value size may be undefined,
    /// which can be the case for sequence elements or specific primitive
    /// values.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
#[allow(clippy::len_without_is_empty)]
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` tuple.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag::ITEM
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag::ITEM_DELIMITER
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag::SEQUENCE_DELIMITER
    }

    /// Check whether this is the header of an encapsulated pixel data.
    fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag() == Tag(0x7FE0, 0x0010) && self.length().is_undefined()
    }
}

/// Stub type representing a non-existing DICOM object.
///
/// This type implements `HasLength`, but cannot be instantiated.
/// This makes it so that `Value<EmptyObject>` is sure to be either a primitive
/// value or a sequence with no items.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum EmptyObject {}

impl HasLength for EmptyObject {
    fn length(&self) -> Length {
        match *self {}
    }
}

/// A data type that represents and owns a DICOM data element.
///
/// The value is either raw primitive bytes,
/// a nested data set sequence (where each item contains an object of type `I`),
/// or an encapsulated pixel data sequence.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement<I = EmptyObject> {
    header: DataElementHeader,
    value: Value<I>,
}

impl<I> HasLength for DataElement<I> {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl<I> Header for DataElement<I> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl<I> DataElement<I> {
    /// Create an empty data element.
    pub fn empty(tag: Tag, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: Length(0),
            },
            value: Value::Primitive(Vec::new()),
        }
    }

    /// Create a data element from the given parts,
    /// where the length is inferred from the value.
    ///
    /// Primitive values take their byte length.
    /// Sequences and pixel sequences keep the length they were declared with,
    /// which only decides whether they are encoded
    /// with explicit lengths or delimiters.
    ///
    /// This method will not check whether the value representation is
    /// compatible with the given value.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<Value<I>>,
    {
        let value = value.into();
        let len = match &value {
            Value::Primitive(bytes) => Length(bytes.len() as u32),
            Value::Sequence(seq) => seq.length(),
            Value::PixelSequence(_) => Length::UNDEFINED,
        };
        DataElement {
            header: DataElementHeader { tag, vr, len },
            value,
        }
    }

    /// Create a primitive data element from the given raw value bytes.
    pub fn new_primitive(tag: Tag, vr: VR, bytes: impl Into<Vec<u8>>) -> Self {
        DataElement::new(tag, vr, Value::Primitive(bytes.into()))
    }

    /// Create a data element with a nested data set sequence.
    pub fn new_sequence(tag: Tag, items: impl Into<C<I>>, length: Length) -> Self {
        DataElement::new(
            tag,
            VR::SQ,
            Value::Sequence(DataSetSequence::new(items, length)),
        )
    }

    /// Create an encapsulated pixel data element.
    pub fn new_pixel_sequence(tag: Tag, vr: VR, fragments: PixelFragmentSequence) -> Self {
        DataElement::new(tag, vr, Value::PixelSequence(fragments))
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the value representation.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value<I> {
        &self.value
    }

    /// Retrieve the raw primitive value bytes,
    /// or `None` if the value is a sequence.
    pub fn bytes(&self) -> Option<&[u8]> {
        self.value.primitive()
    }

    /// Retrieve the nested items, or `None` if the value is not a sequence.
    pub fn items(&self) -> Option<&[I]> {
        self.value.items()
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> Value<I> {
        self.value
    }

    /// Split the element into its header and value.
    pub fn into_parts(self) -> (DataElementHeader, Value<I>) {
        (self.header, self.value)
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    #[inline]
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    #[inline]
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's value representation.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Check whether the header suggests the value to be a sequence value:
    /// if the value representation is SQ or the length is undefined.
    #[inline]
    pub fn is_non_primitive(&self) -> bool {
        self.vr == VR::SQ || self.length().is_undefined()
    }
}

/// Data type for describing a sequence item data element.
/// If the element represents an item, it will also contain
/// the specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    /// The element ends here and should not be read any further.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    /// The element ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error can be raised if the given properties do not relate to a
    /// sequence item, a sequence item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader> {
        match tag.into() {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER => {
                // delimiters should not have a positive length
                ensure!(len == Length(0), UnexpectedDelimiterLengthSnafu { len });
                Ok(SequenceItemHeader::ItemDelimiter)
            }
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    #[inline]
    fn length(&self) -> Length {
        match *self {
            SequenceItemHeader::Item { len } => len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    #[inline]
    fn tag(&self) -> Tag {
        match *self {
            SequenceItemHeader::Item { .. } => Tag::ITEM,
            SequenceItemHeader::ItemDelimiter => Tag::ITEM_DELIMITER,
            SequenceItemHeader::SequenceDelimiter => Tag::SEQUENCE_DELIMITER,
        }
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// All value representations, in the order of their discriminants.
    pub const ALL: [VR; 34] = [
        VR::AE,
        VR::AS,
        VR::AT,
        VR::CS,
        VR::DA,
        VR::DS,
        VR::DT,
        VR::FL,
        VR::FD,
        VR::IS,
        VR::LO,
        VR::LT,
        VR::OB,
        VR::OD,
        VR::OF,
        VR::OL,
        VR::OV,
        VR::OW,
        VR::PN,
        VR::SH,
        VR::SL,
        VR::SQ,
        VR::SS,
        VR::ST,
        VR::SV,
        VR::TM,
        VR::UC,
        VR::UI,
        VR::UL,
        VR::UN,
        VR::UR,
        VR::US,
        VR::UT,
        VR::UV,
    ];

    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// Whether an element with this VR uses the 2-byte value length field
    /// in explicit VR transfer syntaxes (PS3.5 7.1.2).
    #[inline]
    pub fn has_short_length(self) -> bool {
        self.traits().short_length
    }
}

impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> std::result::Result<Self, Self::Err> {
        VR::ALL
            .iter()
            .copied()
            .find(|vr| vr.to_string() == string)
            .ok_or("no such value representation")
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are composed by a (group, element) pair of 16-bit unsigned integers.
/// Aside from writing a struct expression,
/// a `Tag` may also be built from a tuple or an array of two `u16` values,
/// or parsed from text.
///
/// Tags are ordered first by group, then by element,
/// which is the order data elements must appear in a data set.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// The tag of a sequence item header.
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// The tag of an item delimitation item.
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// The tag of a sequence delimitation item.
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this is a group length tag, `(gggg,0000)`.
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0x0000
    }

    /// Whether this tag belongs to a private group (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Combine the tag into a single 32-bit number,
    /// with the group in the most significant half.
    #[inline]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.0) << 16) | u32::from(self.1)
    }

    /// Parse a tag in its compact form of exactly eight hexadecimal digits,
    /// group first (e.g. `"00100010"` for Patient Name).
    ///
    /// This is the only form accepted by this function:
    /// punctuation, whitespace, signs or any other length fail.
    pub fn from_hex(text: &str) -> std::result::Result<Tag, ParseTagError> {
        ensure!(text.len() == 8, InvalidTagLengthSnafu { got: text.len() });
        ensure!(
            text.bytes().all(|c| c.is_ascii_hexdigit()),
            NonHexTagSnafu { text }
        );
        let group = u16::from_str_radix(&text[0..4], 16).context(ParseComponentSnafu)?;
        let element = u16::from_str_radix(&text[4..8], 16).context(ParseComponentSnafu)?;
        Ok(Tag(group, element))
    }
}

/// An error which may occur when parsing a DICOM tag from text.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseTagError {
    /// The compact form must have exactly 8 hexadecimal digits.
    #[snafu(display("expected 8 hexadecimal digits, got {} characters", got))]
    InvalidTagLength { got: usize, backtrace: Backtrace },
    /// The text contains characters which are not hexadecimal digits.
    #[snafu(display("`{}` is not a hexadecimal tag", text))]
    NonHexTag { text: String, backtrace: Backtrace },
    /// A tag component could not be parsed.
    #[snafu(display("invalid tag component"))]
    ParseComponent {
        source: std::num::ParseIntError,
        backtrace: Backtrace,
    },
}

impl FromStr for Tag {
    type Err = ParseTagError;

    /// Parse a tag in one of the forms
    /// `GGGGEEEE`, `GGGG,EEEE` or `(GGGG,EEEE)`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);
        match s.split_once(',') {
            Some((group, element)) if group.len() == 4 && element.len() == 4 => {
                Tag::from_hex(&[group, element].concat())
            }
            Some(_) => InvalidTagLengthSnafu { got: s.len() }.fail(),
            None => Tag::from_hex(s),
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

/// This implementation formats the tag as `(GGGG,EEEE)`.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

impl From<u32> for Tag {
    #[inline]
    fn from(value: u32) -> Tag {
        Tag((value >> 16) as u16, value as u16)
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
///
/// This also means that numeric comparisons and arithmetic
/// do not function the same way as primitive number types:
///
/// Two length of undefined length are not equal.
///
/// ```
/// # use dcmedit_core::Length;
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// ```
///
/// Any addition or subtraction with at least one undefined
/// length results in an undefined length.
///
/// ```
/// # use dcmedit_core::Length;
/// assert!((Length::defined(64) + Length::UNDEFINED).is_undefined());
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from its internal representation.
    /// This is equivalent to `Length(len)`.
    #[inline]
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// Create a new length value with the given number of bytes.
    ///
    /// # Panic
    ///
    /// This function will panic if `len` represents an undefined length.
    #[inline]
    pub fn defined(len: u32) -> Self {
        assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }

    /// Check whether the length is equally specified as another length.
    /// Unlike the implemented `PartialEq`, two undefined lengths are
    /// considered equivalent by this method.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl std::ops::Add<Length> for Length {
    type Output = Self;

    fn add(self, rhs: Length) -> Self::Output {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => Length::UNDEFINED,
            (l1, l2) => {
                let o = l1 + l2;
                debug_assert!(
                    o != UNDEFINED_LEN,
                    "integer overflow (0xFFFF_FFFF reserved for undefined length)"
                );
                Length(o)
            }
        }
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("Length(Undefined)"),
            l => f.debug_tuple("Length").field(&l).finish(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            UNDEFINED_LEN => f.write_str("U/L"),
            l => write!(f, "{}", &l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u32() {
        assert_eq!(Tag::from(0x0010_0010u32), Tag(0x0010, 0x0010));
        assert_eq!(Tag(0x7FE0, 0x0010).to_u32(), 0x7FE0_0010);
    }

    #[test]
    fn tag_display_and_ordering() {
        assert_eq!(Tag(0x0010, 0x0010).to_string(), "(0010,0010)");
        assert!(Tag(0x0008, 0xFFFF) < Tag(0x0010, 0x0000));
        assert!(Tag(0x0010, 0x0010) < Tag(0x0010, 0x0020));
    }

    #[test]
    fn tag_from_hex() {
        assert_eq!(Tag::from_hex("00100010").unwrap(), Tag(0x0010, 0x0010));
        assert_eq!(Tag::from_hex("7fe00010").unwrap(), Tag(0x7FE0, 0x0010));
        assert!(matches!(
            Tag::from_hex("ZZZZZZZZ"),
            Err(ParseTagError::NonHexTag { .. })
        ));
        assert!(matches!(
            Tag::from_hex("0010001"),
            Err(ParseTagError::InvalidTagLength { got: 7, .. })
        ));
        // sign characters are not digits
        assert!(Tag::from_hex("+0100010").is_err());
        assert!(Tag::from_hex("(0010,0010)").is_err());
    }

    #[test]
    fn tag_from_str_forms() {
        let expected = Tag(0x0008, 0x0060);
        assert_eq!("00080060".parse::<Tag>().unwrap(), expected);
        assert_eq!("0008,0060".parse::<Tag>().unwrap(), expected);
        assert_eq!("(0008,0060)".parse::<Tag>().unwrap(), expected);
        assert!("(0008,060)".parse::<Tag>().is_err());
        assert!("".parse::<Tag>().is_err());
    }

    #[test]
    fn vr_binary_round_trip() {
        for vr in VR::ALL {
            assert_eq!(VR::from_binary(vr.to_bytes()), Some(vr));
        }
        assert_eq!(VR::from_binary(*b"XX"), None);
    }

    #[test]
    fn vr_length_field_size() {
        assert!(VR::PN.has_short_length());
        assert!(VR::US.has_short_length());
        assert!(!VR::OB.has_short_length());
        assert!(!VR::UT.has_short_length());
        assert!(!VR::SQ.has_short_length());
        assert!(!VR::UC.has_short_length());
    }

    #[test]
    fn sequence_item_header_from_parts() {
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM, Length(12)).unwrap(),
            SequenceItemHeader::Item { len: Length(12) },
        );
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(0)).unwrap(),
            SequenceItemHeader::ItemDelimiter,
        );
        assert!(SequenceItemHeader::new(Tag::ITEM_DELIMITER, Length(2)).is_err());
        assert!(SequenceItemHeader::new(Tag(0x0010, 0x0010), Length(0)).is_err());
    }

    #[test]
    fn length_semantics() {
        assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
        assert!(Length::UNDEFINED.inner_eq(Length::UNDEFINED));
        assert_eq!(Length(4) + Length(8), Length(12));
        assert!((Length(4) + Length::UNDEFINED).is_undefined());
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }
}
