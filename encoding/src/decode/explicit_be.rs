//! Explicit VR Big Endian syntax transfer implementation.

use crate::decode::basic::BigEndianBasicDecoder;
use crate::decode::{
    BadSequenceHeaderSnafu, BasicDecode, Decode, DecodeFrom, ReadHeaderTagSnafu,
    ReadItemHeaderSnafu, ReadItemLengthSnafu, ReadLengthSnafu, ReadReservedSnafu, ReadTagSnafu,
    ReadVrSnafu, Result,
};
use byteordered::byteorder::{BigEndian, ByteOrder};
use dcmedit_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcmedit_core::{Tag, VR};
use snafu::ResultExt;
use std::io::Read;

/// A data element decoder for the Explicit VR Big Endian transfer syntax.
#[derive(Debug, Default, Clone)]
pub struct ExplicitVRBigEndianDecoder {
    basic: BigEndianBasicDecoder,
}

impl Decode for ExplicitVRBigEndianDecoder {
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
            let len = BigEndian::read_u32(&buf);
            return Ok((
                DataElementHeader::new((group, element), VR::UN, Length(len)),
                8, // tag + len
            ));
        }

        // retrieve explicit VR
        source.read_exact(&mut buf[0..2]).context(ReadVrSnafu)?;
        let vr = VR::from_binary([buf[0], buf[1]]).unwrap_or(VR::UN);

        let (len, bytes_read) = if vr.has_short_length() {
            source.read_exact(&mut buf[0..2]).context(ReadLengthSnafu)?;
            (u32::from(BigEndian::read_u16(&buf[0..2])), 8)
        } else {
            source
                .read_exact(&mut buf[0..2])
                .context(ReadReservedSnafu)?;
            source.read_exact(&mut buf).context(ReadLengthSnafu)?;
            (BigEndian::read_u32(&buf), 12)
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
        let group = BigEndian::read_u16(&buf[0..2]);
        let element = BigEndian::read_u16(&buf[2..4]);
        let len = BigEndian::read_u32(&buf[4..8]);

        SequenceItemHeader::new((group, element), Length(len)).context(BadSequenceHeaderSnafu)
    }

    fn decode_tag<S>(&self, source: &mut S) -> Result<Tag>
    where
        S: ?Sized + Read,
    {
        let mut buf = [0u8; 4];
        source.read_exact(&mut buf).context(ReadTagSnafu)?;
        Ok(Tag(
            BigEndian::read_u16(&buf[0..2]),
            BigEndian::read_u16(&buf[2..4]),
        ))
    }
}

impl<S: ?Sized> DecodeFrom<S> for ExplicitVRBigEndianDecoder
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
    use super::ExplicitVRBigEndianDecoder;
    use crate::decode::Decode;
    use dcmedit_core::header::{HasLength, Header, Length, SequenceItemHeader};
    use dcmedit_core::{Tag, VR};
    use std::io::{Cursor, Seek, SeekFrom};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x00, 0x08, 0x00, 0x60,     // (0008,0060) Modality
            b'C', b'S',             // VR: CS
            0x00, 0x02,             // Length: 2 bytes (BE)
                b'M', b'R',
        0x7F, 0xE0, 0x00, 0x10,     // (7FE0,0010) Pixel Data
            b'O', b'W',             // VR: OW
            0x00, 0x00,             // Reserved
            0x00, 0x00, 0x00, 0x04, // Length: 4 bytes (BE)
                0x12, 0x34, 0x56, 0x78,
    ];

    #[test]
    fn decode_explicit_vr_be() {
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut cursor = Cursor::new(RAW);

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x0008, 0x0060));
        assert_eq!(elem.vr(), VR::CS);
        assert_eq!(elem.length(), Length(2));
        assert_eq!(bytes_read, 8);
        cursor.seek(SeekFrom::Current(2)).unwrap();

        let (elem, bytes_read) = dec.decode_header(&mut cursor).unwrap();
        assert_eq!(elem.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(elem.vr(), VR::OW);
        assert_eq!(elem.length(), Length(4));
        assert_eq!(bytes_read, 12);
    }

    #[rustfmt::skip]
    const RAW_SEQUENCE_ITEMS: &[u8] = &[
        0xFF, 0xFE, 0xE0, 0x00,     // item start
            0x00, 0x00, 0x00, 0x0A, // length: 10 (BE)
        0xFF, 0xFE, 0xE0, 0xDD,     // sequence end
            0x00, 0x00, 0x00, 0x00,
    ];

    #[test]
    fn decode_items_be() {
        let dec = ExplicitVRBigEndianDecoder::default();
        let mut cursor = Cursor::new(RAW_SEQUENCE_ITEMS);
        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert_eq!(item, SequenceItemHeader::Item { len: Length(10) });
        let item = dec.decode_item_header(&mut cursor).unwrap();
        assert_eq!(item, SequenceItemHeader::SequenceDelimiter);
    }
}
