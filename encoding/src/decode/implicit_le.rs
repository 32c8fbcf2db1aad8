//! Implicit VR Little Endian syntax transfer implementation

use crate::decode::basic::LittleEndianBasicDecoder;
use crate::decode::{
    BadSequenceHeaderSnafu, BasicDecode, Decode, DecodeFrom, ReadHeaderTagSnafu,
    ReadLengthSnafu, ReadTagSnafu, Result,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmedit_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmedit_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcmedit_core::{Tag, VR};
use dcmedit_dictionary_std::StandardDataDictionary;
use snafu::ResultExt;
use std::fmt;
use std::io::Read;

/// An ImplicitVRLittleEndianDecoder which uses the standard data dictionary.
pub type StandardImplicitVRLittleEndianDecoder =
    ImplicitVRLittleEndianDecoder<StandardDataDictionary>;

/// A data element decoder for the Implicit VR Little Endian transfer syntax.
/// This type contains a reference to an attribute dictionary for resolving
/// value representations.
pub struct ImplicitVRLittleEndianDecoder<D> {
    dict: D,
    basic: LittleEndianBasicDecoder,
}

impl<D> fmt::Debug for ImplicitVRLittleEndianDecoder<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ImplicitVRLittleEndianDecoder")
            .field("dict", &"«omitted»")
            .field("basic", &self.basic)
            .finish()
    }
}

impl ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    /// Retrieve this decoder using the standard data dictionary.
    pub fn with_std_dict() -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: StandardDataDictionary,
            basic: LittleEndianBasicDecoder,
        }
    }

    /// Retrieve this decoder using the standard data dictionary.
    pub fn new() -> Self {
        Self::with_std_dict()
    }
}

impl Default for ImplicitVRLittleEndianDecoder<StandardDataDictionary> {
    fn default() -> Self {
        ImplicitVRLittleEndianDecoder::with_std_dict()
    }
}

impl<D> ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    /// Retrieve this decoder using a custom data dictionary.
    pub fn with_dict(dictionary: D) -> Self {
        ImplicitVRLittleEndianDecoder {
            dict: dictionary,
            basic: LittleEndianBasicDecoder,
        }
    }

    fn resolve_vr(&self, tag: Tag) -> VR {
        // In Implicit VR Little Endian,
        // the VR of OW must be used for Pixel Data (7FE0,0010)
        // and Overlay Data (60xx,3000).
        if tag == Tag(0x7FE0, 0x0010) || (tag.0 >> 8 == 0x60 && tag.1 == 0x3000) {
            return VR::OW;
        }
        if tag.group() == 0xFFFE {
            return VR::UN;
        }
        self.dict
            .by_tag(tag)
            .map(|entry| entry.vr().relaxed())
            .unwrap_or(VR::UN)
    }
}

impl<D> Decode for ImplicitVRLittleEndianDecoder<D>
where
    D: DataDictionary,
{
    fn decode_header<S>(&self, mut source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        // retrieve tag
        let tag = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadLengthSnafu)?;
        let len = LittleEndian::read_u32(&buf);

        // VR resolution is done with the help of the data dictionary
        let vr = self.resolve_vr(tag);
        Ok((DataElementHeader::new(tag, vr, Length(len)), 8))
    }

    fn decode_item_header<S>(&self, mut source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 4];

        // retrieve tag
        let tag = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        source.read_exact(&mut buf).context(ReadLengthSnafu)?;
        let len = LittleEndian::read_u32(&buf);
        SequenceItemHeader::new(tag, Length(len)).context(BadSequenceHeaderSnafu)
    }

    #[inline]
    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        self.basic.decode_tag(source).context(ReadTagSnafu)
    }
}

impl<S: ?Sized, D> DecodeFrom<S> for ImplicitVRLittleEndianDecoder<D>
where
    S: Read,
    D: DataDictionary,
{
    #[inline]
    fn decode_header(&self, source: &mut S) -> Result<(DataElementHeader, usize)> {
        Decode::decode_header(self, source)
    }

    #[inline]
    fn decode_item_header(&self, source: &mut S) -> Result<SequenceItemHeader> {
        Decode::decode_item_header(self, source)
    }

    #[inline]
    fn decode_tag(&self, source: &mut S) -> Result<Tag> {
        Decode::decode_tag(self, source)
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianDecoder;
    use crate::decode::Decode;
    use dcmedit_core::dictionary::StubDataDictionary;
    use dcmedit_core::header::{HasLength, Header, Length, SequenceItemHeader};
    use dcmedit_core::{Tag, VR};
    use std::io::{Cursor, Seek, SeekFrom};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            0x08, 0x00, 0x00, 0x00, // Length: 8
                b'D', b'O', b'E', b'^', b'J', b'A', b'N', b'E',
        0x20, 0x00, 0x0D, 0x00,     // (0020,000D) Study Instance UID
            0x04, 0x00, 0x00, 0x00, // Length: 4
                b'1', b'.', b'2', 0x00,
        0x09, 0x00, 0x42, 0x10,     // (0009,1042) private, not in dictionary
            0x02, 0x00, 0x00, 0x00, // Length: 2
                0xAA, 0xBB,
        0x02, 0x60, 0x00, 0x30,     // (6002,3000) Overlay Data
            0x02, 0x00, 0x00, 0x00, // Length: 2
                0x00, 0x00,
        0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
            0x04, 0x00, 0x00, 0x00, // Length: 4
                0x01, 0x02, 0x03, 0x04,
    ];

    #[test]
    fn implicit_vr_le_with_std_dict() {
        let dec = ImplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW);

        let expected = [
            (Tag(0x0010, 0x0010), VR::PN, 8),
            (Tag(0x0020, 0x000D), VR::UI, 4),
            (Tag(0x0009, 0x1042), VR::UN, 2),
            (Tag(0x6002, 0x3000), VR::OW, 2),
            (Tag(0x7FE0, 0x0010), VR::OW, 4),
        ];
        for (tag, vr, len) in expected {
            let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
            assert_eq!(elem.tag(), tag);
            assert_eq!(elem.vr(), vr);
            assert_eq!(elem.length(), Length(len));
            assert_eq!(bytes_read, 8);
            cursor.seek(SeekFrom::Current(i64::from(len))).unwrap();
        }
        assert_eq!(cursor.position() as usize, RAW.len());
    }

    #[test]
    fn implicit_vr_le_with_stub_dict() {
        let dec = ImplicitVRLittleEndianDecoder::with_dict(StubDataDictionary);
        let mut cursor = Cursor::new(RAW);
        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0010, 0x0010));
        assert_eq!(elem.vr(), VR::UN);
    }

    #[rustfmt::skip]
    const RAW_SEQUENCE_ITEMS: &[u8] = &[
        0x08, 0x00, 0x15, 0x11,     // (0008,1115) Referenced Series Sequence
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // item start
            0x00, 0x00, 0x00, 0x00, // length: 0
        0xFE, 0xFF, 0xDD, 0xE0,     // sequence end
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn implicit_vr_le_sequences() {
        let dec = ImplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_SEQUENCE_ITEMS);
        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x1115));
        assert_eq!(elem.vr(), VR::SQ);
        assert!(elem.length().is_undefined());

        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert_eq!(item, SequenceItemHeader::Item { len: Length(0) });
        let (elem, _) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_sequence_delimiter());
        assert_eq!(elem.vr(), VR::UN);
    }
}
