//! Implicit VR Little Endian syntax transfer implementation

use crate::encode::basic::LittleEndianBasicEncoder;
use crate::encode::{
    BasicEncode, Encode, Result, WriteHeaderSnafu, WriteItemDelimiterSnafu, WriteItemHeaderSnafu,
    WriteSequenceDelimiterSnafu, WriteTagSnafu,
};
use byteordered::byteorder::{ByteOrder, LittleEndian};
use byteordered::Endianness;
use dcmedit_core::header::{DataElementHeader, HasLength, Header};
use dcmedit_core::Tag;
use snafu::ResultExt;
use std::io::{self, Write};

/// A concrete encoder for the transfer syntax ImplicitVRLittleEndian
#[derive(Debug, Default, Clone, Copy)]
pub struct ImplicitVRLittleEndianEncoder {
    basic: LittleEndianBasicEncoder,
}

impl BasicEncode for ImplicitVRLittleEndianEncoder {
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

impl Encode for ImplicitVRLittleEndianEncoder {
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
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf[..], de.tag().group());
        LittleEndian::write_u16(&mut buf[2..], de.tag().element());
        LittleEndian::write_u32(&mut buf[4..], de.length().0);
        to.write_all(&buf).context(WriteHeaderSnafu)?;
        Ok(8)
    }

    fn encode_item_header<W>(&self, mut to: W, len: u32) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf[..], 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE000);
        LittleEndian::write_u32(&mut buf[4..], len);
        to.write_all(&buf).context(WriteItemHeaderSnafu)
    }

    fn encode_item_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf[..], 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE00D);
        to.write_all(&buf).context(WriteItemDelimiterSnafu)
    }

    fn encode_sequence_delimiter<W>(&self, mut to: W) -> Result<()>
    where
        W: Write,
    {
        let mut buf = [0u8; 8];
        LittleEndian::write_u16(&mut buf[..], 0xFFFE);
        LittleEndian::write_u16(&mut buf[2..], 0xE0DD);
        to.write_all(&buf).context(WriteSequenceDelimiterSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::ImplicitVRLittleEndianEncoder;
    use crate::encode::Encode;
    use dcmedit_core::header::{DataElementHeader, Length};
    use dcmedit_core::{Tag, VR};

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            0x08, 0x00, 0x00, 0x00, // Length: 8
        0x10, 0x00, 0x00, 0x40,     // (0010,4000) Patient Comments
            0x00, 0x00, 0x01, 0x00, // Length: 65536, no 2-byte limit here
        0x08, 0x00, 0x15, 0x11,     // (0008,1115) Referenced Series Sequence
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
    ];

    #[test]
    fn encode_implicit_vr_le() {
        let enc = ImplicitVRLittleEndianEncoder::default();
        let mut out = Vec::new();
        for (tag, vr, len) in [
            (Tag(0x0010, 0x0010), VR::PN, Length(8)),
            (Tag(0x0010, 0x4000), VR::LT, Length(0x1_0000)),
            (Tag(0x0008, 0x1115), VR::SQ, Length::UNDEFINED),
        ] {
            let n = enc
                .encode_element_header(&mut out, DataElementHeader::new(tag, vr, len))
                .unwrap();
            assert_eq!(n, 8);
        }
        assert_eq!(out, RAW);
    }
}
