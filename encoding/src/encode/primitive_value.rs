//! Encoding of textual renditions into primitive value bytes.
//!
//! The text is expected to have been checked against
//! [`VrTraits::validate`](dcmedit_core::value::VrTraits::validate) beforehand.
//! The functions here still fail gracefully on malformed input.

use crate::encode::basic::BasicEncoder;
use crate::encode::BasicEncode;
use crate::text::{EncodeTextError, TextCodec};
use byteordered::Endianness;
use dcmedit_core::header::ParseTagError;
use dcmedit_core::value::ValueKind;
use dcmedit_core::{Tag, VR};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io;

/// An error occurring when a textual value cannot be turned into bytes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum EncodeValueError {
    /// The character set cannot represent the text.
    #[snafu(display("Could not encode text as {}", charset))]
    EncodeText {
        charset: &'static str,
        #[snafu(backtrace)]
        source: EncodeTextError,
    },
    /// A value is not a number of the expected type.
    #[snafu(display("`{}` is not a valid {} number", value, vr))]
    ParseNumber {
        value: String,
        vr: VR,
        backtrace: Backtrace,
    },
    /// A value is not an attribute tag.
    #[snafu(display("`{}` is not a valid attribute tag", value))]
    ParseAttributeTag {
        value: String,
        source: ParseTagError,
    },
    /// Bulk data and sequences have no textual form.
    #[snafu(display("{} values can not be written from text", vr))]
    NotTextual { vr: VR, backtrace: Backtrace },
    #[snafu(display("Failed to write binary value"))]
    WriteBinary {
        source: io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = EncodeValueError> = std::result::Result<T, E>;

/// Encode the textual rendition of a value
/// into the bytes of a primitive value of the given VR:
///
/// - character strings go through the text codec
///   and are padded to an even length;
/// - binary numbers and attribute tags are written
///   in the given byte order, one per backslash-separated value;
/// - the empty text always yields an empty value.
///
/// # Example
///
/// ```
/// # use dcmedit_core::VR;
/// # use dcmedit_encoding::encode::primitive_value::encode_text_value;
/// # use dcmedit_encoding::text::SpecificCharacterSet;
/// # use dcmedit_encoding::transfer_syntax::Endianness;
/// let cs = SpecificCharacterSet::Default;
/// let bytes = encode_text_value(VR::PN, "DOE^JOHN", Endianness::Little, &cs)?;
/// assert_eq!(bytes, b"DOE^JOHN");
/// let bytes = encode_text_value(VR::UI, "1.2.3", Endianness::Little, &cs)?;
/// assert_eq!(bytes, b"1.2.3\0");
/// let bytes = encode_text_value(VR::US, "512\\1", Endianness::Big, &cs)?;
/// assert_eq!(bytes, [0x02, 0x00, 0x00, 0x01]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn encode_text_value<C>(
    vr: VR,
    text: &str,
    endianness: Endianness,
    codec: &C,
) -> Result<Vec<u8>>
where
    C: ?Sized + TextCodec,
{
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let traits = vr.traits();
    let basic = BasicEncoder::new(endianness);
    let mut out = Vec::new();

    match traits.kind {
        ValueKind::Text => {
            let encoded = codec.encode(text).context(EncodeTextSnafu {
                charset: codec.name(),
            })?;
            out.extend(encoded);
        }
        ValueKind::Int { size, signed } => {
            for value in traits.values(text) {
                encode_int(&basic, &mut out, vr, value.trim(), size, signed)?;
            }
        }
        ValueKind::Float { size } => {
            for value in traits.values(text) {
                let value = value.trim();
                if size == 4 {
                    let v: f32 = value.parse().ok().context(ParseNumberSnafu { value, vr })?;
                    basic.encode_fl(&mut out, v).context(WriteBinarySnafu)?;
                } else {
                    let v: f64 = value.parse().ok().context(ParseNumberSnafu { value, vr })?;
                    basic.encode_fd(&mut out, v).context(WriteBinarySnafu)?;
                }
            }
        }
        ValueKind::Tag => {
            for value in traits.values(text) {
                let tag: Tag = value
                    .trim()
                    .parse()
                    .context(ParseAttributeTagSnafu { value })?;
                basic.encode_us(&mut out, tag.group()).context(WriteBinarySnafu)?;
                basic
                    .encode_us(&mut out, tag.element())
                    .context(WriteBinarySnafu)?;
            }
        }
        ValueKind::Bytes | ValueKind::Sequence => {
            return NotTextualSnafu { vr }.fail();
        }
    }

    traits.pad(&mut out);
    Ok(out)
}

fn encode_int(
    basic: &BasicEncoder,
    out: &mut Vec<u8>,
    vr: VR,
    value: &str,
    size: u8,
    signed: bool,
) -> Result<()> {
    let bad_number = || ParseNumberSnafu { value, vr };
    let written = if signed {
        let v: i64 = value.parse().ok().with_context(bad_number)?;
        match size {
            2 => {
                let v = i16::try_from(v).ok().with_context(bad_number)?;
                basic.encode_ss(out, v)
            }
            4 => {
                let v = i32::try_from(v).ok().with_context(bad_number)?;
                basic.encode_sl(out, v)
            }
            _ => basic.encode_sv(out, v),
        }
    } else {
        let v: u64 = value.parse().ok().with_context(bad_number)?;
        match size {
            2 => {
                let v = u16::try_from(v).ok().with_context(bad_number)?;
                basic.encode_us(out, v)
            }
            4 => {
                let v = u32::try_from(v).ok().with_context(bad_number)?;
                basic.encode_ul(out, v)
            }
            _ => basic.encode_uv(out, v),
        }
    };
    written.context(WriteBinarySnafu)
}
