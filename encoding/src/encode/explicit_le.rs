//! Explicit VR Little Endian syntax transfer implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{
    BasicEncode, Encode, Result, UnrepresentableLengthSnafu, WriteHeaderSnafu,
    WriteItemDelimiterSnafu, WriteItemHeaderSnafu, WriteSequenceDelimiterSnafu, WriteTagSnafu,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use byteordered::Endianness;
use dcmedit_core::header::{DataElementHeader, HasLength, Header};
use dcmedit_core::Tag;
use snafu::{ensure, ResultExt};
use std::io::{self, Write};

/// A concrete encoder for the transfer syntax ExplicitVRLittleEndian
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl BasicEncode for ExplicitVRLittleEndianEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn encode_us<S>(&self, to: S, value: u16) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_us(to, value)
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_ul(to, value)
    }

    fn encode_uv<S>(&self, to: S, value: u64) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_uv(to, value)
    }

    fn encode_ss<S>(&self, to: S, value: i16) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_ss(to, value)
    }

    fn encode_sl<S>(&self, to: S, value: i32) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_sl(to, value)
    }

    fn encode_sv<S>(&self, to: S, value: i64) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_sv(to, value)
    }

    fn encode_fl<S>(&self, to: S, value: f32) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_fl(to, value)
    }

    fn encode_fd<S>(&self, to: S, value: f64) -> io::Result<()>
    where
        S: Write,
    {
        self.basic.encode_fd(to, value)
    }
}

impl Encode for ExplicitVRLittleEndianEncoder {
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 4];
        LittleEndian::write_u16(&mut buf[..], tag.group());
        LittleEndian::write_u16(&mut buf[2..], tag.element());
        to.write_all(&buf).context(WriteTagSnafu)
    }

    fn encode_element_header<W>(&self, mut to: W, de: DataElementHeader) -> Result<usize>
    where
        W: Write,
    {
        let vr_bytes = de.vr().to_bytes();
        if de.vr().has_short_length() {
            // PS3.5 7.1.2: 16-bit value length field
            let len = de.length().0;
            ensure!(
                len <= u32::from(u16::MAX),
                UnrepresentableLengthSnafu {
                    tag: de.tag(),
                    vr: de.vr(),
                    len,
                    field_size: 2u8,
                }
            );
            let mut buf = [0u8; 8];
            LittleEndian::write_u16(&mut buf[0..], de.tag().group());
            LittleEndian::write_u16(&mut buf[2..], de.tag().element());
            buf[4] = vr_bytes[0];
            buf[5] = vr_bytes[1];
            LittleEndian::write_u16(&mut buf[6..], len as u16);
            to.write_all(&buf).context(WriteHeaderSnafu)?;
            Ok(8)
        } else {
            // PS3.5 7.1.2: 2 reserved bytes, then a 32-bit value length field
            let mut buf = [0u8; 12];
            LittleEndian::write_u16(&mut buf[0..], de.tag().group());
            LittleEndian::write_u16(&mut buf[2..], de.tag().element());
            buf[4] = vr_bytes[0];
            buf[5] = vr_bytes[1];
            // buf[6..8] is kept zero'd
            LittleEndian::write_u32(&mut buf[8..], de.length().0);
            to.write_all(&buf).context(WriteHeaderSnafu)?;
            Ok(12)
        }
    }

    fn encode_item_header<W>(&self, mut to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf, 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE000);
        LittleEndian::write_u32(&mut buf[4..], len);
        to.write_all(&buf).context(WriteItemHeaderSnafu)
    }

    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf, 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE00D);
        to.write_all(&buf).context(WriteItemDelimiterSnafu)
    }

    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf, 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE0DD);
        to.write_all(&buf).context(WriteSequenceDelimiterSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRLittleEndianEncoder;
    use crate::encode::{Encode, Error};
    use dcmedit_core::header::{DataElementHeader, Length};
    use dcmedit_core::{Tag, VR};

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x02, 0x00, 0x10, 0x00,     // (0002,0010) Transfer Syntax UID
            b'U', b'I',             // VR: UI
            0x14, 0x00,             // Length: 20 bytes
        0x09, 0x00, 0x10, 0x10,     // (0009,1010) private element
            b'O', b'B',             // VR: OB
            0x00, 0x00,             // Reserved
            0x02, 0x01, 0x00, 0x00, // Length: 258 bytes
        0x08, 0x00, 0x15, 0x11,     // (0008,1115) Referenced Series Sequence
            b'S', b'Q',             // VR: SQ
            0x00, 0x00,             // Reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
    ];

    #[test]
    fn encode_element_headers() -> Result {
        let enc = ExplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();

        let n = enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x0002, 0x0010), VR::UI, Length(20)),
        )?;
        assert_eq!(n, 8);
        let n = enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x0009, 0x1010), VR::OB, Length(258)),
        )?;
        assert_eq!(n, 12);
        let n = enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x0008, 0x1115), VR::SQ, Length::UNDEFINED),
        )?;
        assert_eq!(n, 12);

        assert_eq!(out, RAW);
        Ok(())
    }

    #[test]
    fn encode_items_and_delimiters() -> Result {
        let enc = ExplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();
        enc.encode_item_header(&mut out, 0xFFFF_FFFF)?;
        enc.encode_item_delimiter(&mut out)?;
        enc.encode_sequence_delimiter(&mut out)?;

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(out, expected);
        Ok(())
    }

    #[test]
    fn short_length_overflow_is_rejected() {
        let enc = ExplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();
        let err = enc
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0010, 0x4000), VR::LT, Length(0x1_0000)),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnrepresentableLength { field_size: 2, len: 0x1_0000, .. }
        ));
        assert!(out.is_empty());

        // the same length is fine with a 4-byte field
        enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x0010, 0x4000), VR::UT, Length(0x1_0000)),
        )
        .unwrap();
        assert_eq!(out.len(), 12);
    }
}
