//! Explicit VR Little Endian syntax transfer implementation

use crate::decode::basic::LittleEndianBasicDecoder;
use crate::decode::{
    BadSequenceHeaderSnafu, BasicDecode, Decode, DecodeFrom, ReadHeaderTagSnafu,
    ReadItemHeaderSnafu, ReadItemLengthSnafu, ReadLengthSnafu, ReadReservedSnafu, ReadTagSnafu,
    ReadVrSnafu, Result,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmedit_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcmedit_core::{Tag, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR Little Endian transfer syntax.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRLittleEndianDecoder {
    basic: LittleEndianBasicDecoder,
}

impl Decode for ExplicitVRLittleEndianDecoder {
    fn decode_header<S>(&self, mut source: &mut S) -> Result<(DataElementHeader, usize)>
    where
        S: ?Sized + Read,
    {
        // retrieve tag
        let Tag(group, element) = self
            .basic
            .decode_tag(&mut source)
            .context(ReadHeaderTagSnafu)?;

        let mut buf = [0u8; 4];
        if group == 0xFFFE {
            // item delimiters do not have VR or reserved field
            source.read_exact(&mut buf).context(ReadItemLengthSnafu)?;
            let len = LittleEndian::read_u32(&buf);
            return Ok((
                DataElementHeader::new((group, element), VR::UN, Length(len)),
                8, // tag + len
            ));
        }

        // retrieve explicit VR
        source.read_exact(&mut buf[0..2]).context(ReadVrSnafu)?;
        let vr = VR::from_binary([buf[0], buf[1]]).unwrap_or(VR::UN);

        // PS3.5 7.1.2: a 16-bit length follows the VR for the short-length VRs,
        // all others have 2 reserved bytes and a 32-bit length
        let (len, bytes_read) = if vr.has_short_length() {
            source.read_exact(&mut buf[0..2]).context(ReadLengthSnafu)?;
            (u32::from(LittleEndian::read_u16(&buf[0..2])), 8)
        } else {
            source
                .read_exact(&mut buf[0..2])
                .context(ReadReservedSnafu)?;
            source.read_exact(&mut buf).context(ReadLengthSnafu)?;
            (LittleEndian::read_u32(&buf), 12)
        };

        Ok((
            DataElementHeader::new((group, element), vr, Length(len)),
            bytes_read,
        ))
    }

    fn decode_item_header<S>(&self, source: &mut S) -> Result<SequenceItemHeader>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 8];
        source.read_exact(&mut buf).context(ReadItemHeaderSnafu)?;
        // retrieve tag
        let group = LittleEndian::read_u16(&buf[0..2]);
        let element = LittleEndian::read_u16(&buf[2..4]);
        let len = LittleEndian::read_u32(&buf[4..8]);

        SequenceItemHeader::new((group, element), Length(len)).context(BadSequenceHeaderSnafu)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadTagSnafu)?;
        Ok(Tag(
            LittleEndian::read_u16(&buf[0..2]),
            LittleEndian::read_u16(&buf[2..4]),
        ))
    }
}

impl<S: ?Sized> DecodeFrom<S> for ExplicitVRLittleEndianDecoder
where
    S: Read,
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
    use super::ExplicitVRLittleEndianDecoder;
    use crate::decode::{Decode, Error};
    use dcmedit_core::header::{HasLength, Header, Length, SequenceItemHeader};
    use dcmedit_core::{Tag, VR};
    use std::io::{Cursor, Read};

    // manually crafting some DICOM data elements
    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x10, 0x00,     // (0002,0010) Transfer Syntax UID
            b'U', b'I',             // VR: UI
            0x14, 0x00,             // Length: 20 bytes
                b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8', b'.',
                b'1', b'.', b'2', b'.', b'1',
                0x00,               // Padding to make length even
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            b'P', b'N',             // VR: PN
            0x08, 0x00,             // Length: 8 bytes
                b'D', b'O', b'E', b'^', b'J', b'A', b'N', b'E',
        0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
            b'U', b'S',             // VR: US
            0x02, 0x00,             // Length: 2 bytes
                0x00, 0x02,         // 512
        0x09, 0x00, 0x10, 0x10,     // (0009,1010) private element
            b'O', b'B',             // VR: OB
            0x00, 0x00,             // Reserved, always 0
            0x04, 0x00, 0x00, 0x00, // Length: 4 bytes
                0x12, 0x34, 0x56, 0x78,
        0x08, 0x00, 0x19, 0x01,     // (0008,0119) Long Code Value
            b'U', b'C',             // VR: UC
            0x00, 0x00,             // Reserved, always 0
            0x04, 0x00, 0x00, 0x00, // Length: 4 bytes
                b'C', b'o', b'd', b'e',
        0x11, 0x00, 0x22, 0x00,     // (0011,0022) unrecognized VR
            b'?', b'?',
            0x00, 0x00,             // Reserved
            0x02, 0x00, 0x00, 0x00, // Length: 2 bytes
                0xAB, 0xCD,
    ];

    fn check_element(
        dec: &ExplicitVRLittleEndianDecoder,
        cursor: &mut Cursor<&[u8]>,
        tag: Tag,
        vr: VR,
        header_len: usize,
        value: &[u8],
    ) {
        let (elem, bytes_read) = dec.decode_header(cursor).expect("should find an element");
        assert_eq!(elem.tag(), tag);
        assert_eq!(elem.vr(), vr);
        assert_eq!(elem.length(), Length(value.len() as u32));
        assert_eq!(bytes_read, header_len);
        let mut buffer = vec![0; value.len()];
        cursor.read_exact(&mut buffer).unwrap();
        assert_eq!(buffer, value);
    }

    #[test]
    fn decode_data_elements() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW);

        check_element(
            &dec,
            &mut cursor,
            Tag(0x0002, 0x0010),
            VR::UI,
            8,
            b"1.2.840.10008.1.2.1\0",
        );
        check_element(&dec, &mut cursor, Tag(0x0010, 0x0010), VR::PN, 8, b"DOE^JANE");
        check_element(&dec, &mut cursor, Tag(0x0028, 0x0010), VR::US, 8, &[0x00, 0x02]);
        check_element(
            &dec,
            &mut cursor,
            Tag(0x0009, 0x1010),
            VR::OB,
            12,
            &[0x12, 0x34, 0x56, 0x78],
        );
        check_element(&dec, &mut cursor, Tag(0x0008, 0x0119), VR::UC, 12, b"Code");
        // unknown VR codes degrade to UN with a 4-byte length
        check_element(&dec, &mut cursor, Tag(0x0011, 0x0022), VR::UN, 12, &[0xAB, 0xCD]);

        assert_eq!(cursor.position() as usize, RAW.len());
    }

    #[rustfmt::skip]
    const RAW_SEQUENCE_ITEMS: &[u8] = &[
        0x08, 0x00, 0x3F, 0x10,     // (0008,103F) Series Description Code Sequence
            b'S', b'Q',             // VR: SQ
            0x00, 0x00,             // Reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // item start
            0xFF, 0xFF, 0xFF, 0xFF, // length: undefined
        0xFE, 0xFF, 0x0D, 0xE0,     // item end
            0x00, 0x00, 0x00, 0x00,
        0xFE, 0xFF, 0xDD, 0xE0,     // sequence end
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_items() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_SEQUENCE_ITEMS);

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x103F));
        assert_eq!(elem.vr(), VR::SQ);
        assert!(elem.length().is_undefined());
        assert_eq!(bytes_read, 12);

        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert_eq!(item, SequenceItemHeader::Item { len: Length::UNDEFINED });
        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert_eq!(item, SequenceItemHeader::ItemDelimiter);

        // delimiters also come through as regular headers
        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert!(elem.is_sequence_delimiter());
        assert_eq!(elem.vr(), VR::UN);
        assert_eq!(bytes_read, 8);
    }

    #[test]
    fn bad_item_header_is_reported() {
        let dec = ExplicitVRLittleEndianDecoder::default();
        let raw: &[u8] = &[0x10, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00];
        let err = dec.decode_item_header(&mut Cursor::new(raw)).unwrap_err();
        assert!(matches!(err, Error::BadSequenceHeader { .. }));
    }
}
