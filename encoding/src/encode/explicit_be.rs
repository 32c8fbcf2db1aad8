//! Explicit VR Big Endian syntax transfer implementation

use crate::encode::basic::BigEndianBasicEncoder;
use crate::encode::{
    BasicEncode, Encode, Result, UnrepresentableLengthSnafu, WriteHeaderSnafu,
    WriteItemDelimiterSnafu, WriteItemHeaderSnafu, WriteSequenceDelimiterSnafu, WriteTagSnafu,
};
use byteordered::byteorder::{BigEndian, ByteOrder};
use byteordered::Endianness;
use dcmedit_core::header::{DataElementHeader, HasLength, Header};
use dcmedit_core::Tag;
use snafu::{ensure, ResultExt};
use std::io::{self, Write};

/// A concrete encoder for the transfer syntax ExplicitVRBigEndian
#[derive(Debug, Default, Clone, Copy)]
pub struct ExplicitVRBigEndianEncoder {
    basic: BigEndianBasicEncoder,
}

impl BasicEncode for ExplicitVRBigEndianEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Big
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

impl Encode for ExplicitVRBigEndianEncoder {
    fn encode_tag<W>(&self, mut to: W, tag: Tag) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 4];
        BigEndian::write_u16(&mut buf[..], tag.group());
        BigEndian::write_u16(&mut buf[2..], tag.element());
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
            BigEndian::write_u16(&mut buf[0..], de.tag().group());
            BigEndian::write_u16(&mut buf[2..], de.tag().element());
            buf[4] = vr_bytes[0];
            buf[5] = vr_bytes[1];
            BigEndian::write_u16(&mut buf[6..], len as u16);
            to.write_all(&buf).context(WriteHeaderSnafu)?;
            Ok(8)
        } else {
            // PS3.5 7.1.2: 2 reserved bytes, then a 32-bit value length field
            let mut buf = [0u8; 12];
            BigEndian::write_u16(&mut buf[0..], de.tag().group());
            BigEndian::write_u16(&mut buf[2..], de.tag().element());
            buf[4] = vr_bytes[0];
            buf[5] = vr_bytes[1];
            // buf[6..8] is kept zero'd
            BigEndian::write_u32(&mut buf[8..], de.length().0);
            to.write_all(&buf).context(WriteHeaderSnafu)?;
            Ok(12)
        }
    }

    fn encode_item_header<W>(&self, mut to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        BigEndian::write_u16(&mut buf, 0xFFFE);
        BigEndian::write_u16(&mut buf[2..], 0xE000);
        BigEndian::write_u32(&mut buf[4..], len);
        to.write_all(&buf).context(WriteItemHeaderSnafu)
    }

    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        BigEndian::write_u16(&mut buf, 0xFFFE);
        BigEndian::write_u16(&mut buf[2..], 0xE00D);
        to.write_all(&buf).context(WriteItemDelimiterSnafu)
    }

    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        BigEndian::write_u16(&mut buf, 0xFFFE);
        BigEndian::write_u16(&mut buf[2..], 0xE0DD);
        to.write_all(&buf).context(WriteSequenceDelimiterSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::ExplicitVRBigEndianEncoder;
    use crate::encode::{BasicEncode, Encode};
    use byteordered::Endianness;
    use dcmedit_core::header::{DataElementHeader, Length};
    use dcmedit_core::{Tag, VR};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x00, 0x08, 0x00, 0x60,     // (0008,0060) Modality
            b'C', b'S',             // VR: CS
            0x00, 0x02,             // Length: 2 bytes (BE)
        0x7F, 0xE0, 0x00, 0x10,     // (7FE0,0010) Pixel Data
            b'O', b'W',             // VR: OW
            0x00, 0x00,             // Reserved
            0x00, 0x00, 0x01, 0x00, // Length: 256 bytes (BE)
        0xFF, 0xFE, 0xE0, 0x00,     // item start
            0x00, 0x00, 0x00, 0x08, // length: 8 (BE)
    ];

    #[test]
    fn encode_explicit_vr_be() {
        let enc = ExplicitVRBigEndianEncoder::default();
        assert_eq!(enc.endianness(), Endianness::Big);
        let mut out = Vec::new();
        enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x0008, 0x0060), VR::CS, Length(2)),
        )
        .unwrap();
        enc.encode_element_header(
            &mut out,
            DataElementHeader::new(Tag(0x7FE0, 0x0010), VR::OW, Length(256)),
        )
        .unwrap();
        enc.encode_item_header(&mut out, 8).unwrap();
        assert_eq!(out, RAW);
    }
}
