//! This module provides implementations for basic encoders: little endian and big endian.
//!

use super::BasicEncode;
use byteordered::{ByteOrdered, Endianness};
use std::io::Write;

type Result<T> = std::io::Result<T>;

/// A basic encoder of primitive elements in little endian.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LittleEndianBasicEncoder;

impl BasicEncode for LittleEndianBasicEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Little
    }

    fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_u16(value)
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_u32(value)
    }

    fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_u64(value)
    }

    fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_i16(value)
    }

    fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_i32(value)
    }

    fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_i64(value)
    }

    fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_f32(value)
    }

    fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::le(to).write_f64(value)
    }
}

/// A basic encoder of primitive elements in big endian.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BigEndianBasicEncoder;

impl BasicEncode for BigEndianBasicEncoder {
    fn endianness(&self) -> Endianness {
        Endianness::Big
    }

    fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_u16(value)
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_u32(value)
    }

    fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_u64(value)
    }

    fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_i16(value)
    }

    fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_i32(value)
    }

    fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_i64(value)
    }

    fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_f32(value)
    }

    fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
    where
        S: Write,
    {
        ByteOrdered::be(to).write_f64(value)
    }
}

/// A basic encoder with support for both Little Endian an Big Endian
/// encoding, decided at run-time. Since only two values are possible,
/// this enum may become more practical and efficient than relying on trait objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasicEncoder {
    /// Encode in Little Endian
    LE(LittleEndianBasicEncoder),
    /// Encode in Big Endian
    BE(BigEndianBasicEncoder),
}

use self::BasicEncoder::{BE, LE};

impl BasicEncoder {
    /// Create a basic encoder for the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        match endianness {
            Endianness::Little => LE(LittleEndianBasicEncoder),
            Endianness::Big => BE(BigEndianBasicEncoder),
        }
    }
}

impl From<Endianness> for BasicEncoder {
    fn from(endianness: Endianness) -> Self {
        BasicEncoder::new(endianness)
    }
}

/// Handle multiple encoding tasks with the expected endianness. The parameter `$e` will
/// be either `LittleEndianBasicEncoder` or `BigEndianBasicEncoder`. When the specific basic encoder is still unknown in compile-time, this macro can be used
/// to resolve the endianess only once.
macro_rules! for_both {
    ($endianness: expr, |$e: ident| $f: expr) => {
        match *$endianness {
            LE(ref $e) => $f,
            BE(ref $e) => $f,
        }
    };
}

impl BasicEncode for BasicEncoder {
    fn endianness(&self) -> Endianness {
        match *self {
            LE(_) => Endianness::Little,
            BE(_) => Endianness::Big,
        }
    }

    fn encode_us<S>(&self, to: S, value: u16) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_us(to, value))
    }

    fn encode_ul<S>(&self, to: S, value: u32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_ul(to, value))
    }

    fn encode_uv<S>(&self, to: S, value: u64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_uv(to, value))
    }

    fn encode_ss<S>(&self, to: S, value: i16) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_ss(to, value))
    }

    fn encode_sl<S>(&self, to: S, value: i32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_sl(to, value))
    }

    fn encode_sv<S>(&self, to: S, value: i64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_sv(to, value))
    }

    fn encode_fl<S>(&self, to: S, value: f32) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_fl(to, value))
    }

    fn encode_fd<S>(&self, to: S, value: f64) -> Result<()>
    where
        S: Write,
    {
        for_both!(self, |e| e.encode_fd(to, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_one_value<E: BasicEncode, T, F>(encoder: E, value: T, expected: &[u8], encode_fn: F)
    where
        F: FnOnce(&E, &mut Vec<u8>, T) -> Result<()>,
    {
        let mut out = Vec::new();
        encode_fn(&encoder, &mut out, value).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_basic_encode_le() {
        let le = LittleEndianBasicEncoder;
        test_one_value(le, 0x3CC3u16, &[0xC3, 0x3C], |e, o, v| e.encode_us(o, v));
        test_one_value(le, 0xCC333CC3u32, &[0xC3, 0x3C, 0x33, 0xCC], |e, o, v| {
            e.encode_ul(o, v)
        });
        test_one_value(le, -2i16, &[0xFE, 0xFF], |e, o, v| e.encode_ss(o, v));
        test_one_value(le, 1.0f32, &[0x00, 0x00, 0x80, 0x3F], |e, o, v| {
            e.encode_fl(o, v)
        });
    }

    #[test]
    fn test_basic_encode_be() {
        let be = BigEndianBasicEncoder;
        test_one_value(be, 0x3CC3u16, &[0x3C, 0xC3], |e, o, v| e.encode_us(o, v));
        test_one_value(be, 0xCC333CC3u32, &[0xCC, 0x33, 0x3C, 0xC3], |e, o, v| {
            e.encode_ul(o, v)
        });
        test_one_value(be, -2i16, &[0xFF, 0xFE], |e, o, v| e.encode_ss(o, v));
        test_one_value(be, 1.0f32, &[0x3F, 0x80, 0x00, 0x00], |e, o, v| {
            e.encode_fl(o, v)
        });
    }

    #[test]
    fn test_runtime_encoder() {
        let enc = BasicEncoder::from(Endianness::Big);
        assert_eq!(enc.endianness(), Endianness::Big);
        test_one_value(enc, 0x0102_0304_0506_0708u64, &[1, 2, 3, 4, 5, 6, 7, 8], |e, o, v| {
            e.encode_uv(o, v)
        });
        let picked = enc.with_encoder(|_| "le", |_| "be");
        assert_eq!(picked, "be");
    }
}
