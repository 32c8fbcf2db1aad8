//! Module holding a stateful DICOM data decoding abstraction.
//!
//! The [`StatefulDecoder`] binds a data element decoder to a source,
//! keeping track of how many bytes were read so far.
//! It can also be told to decode headers in implicit VR little endian,
//! which is how the contents of undefined length `UN` elements are encoded.

use dcmedit_core::header::{DataElementHeader, Length, SequenceItemHeader};
use dcmedit_core::Tag;
use dcmedit_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;
use dcmedit_encoding::decode::implicit_le::StandardImplicitVRLittleEndianDecoder;
use dcmedit_encoding::decode::DecodeFrom;
use dcmedit_encoding::transfer_syntax::{DynDecoder, TransferSyntax};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{self, Read};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Decoding in transfer syntax {} is unsupported", ts))]
    UnsupportedTransferSyntax {
        ts: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not decode element header at position {}", position))]
    DecodeElementHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dcmedit_encoding::decode::Error,
    },

    #[snafu(display("Could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: dcmedit_encoding::decode::Error,
    },

    #[snafu(display(
        "Undefined value length of element tagged {} at position {}",
        tag,
        position
    ))]
    UndefinedValueLength {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read {} value bytes at position {}", len, position))]
    ReadValueData {
        len: u32,
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Whether decoding stopped because the source ended
    /// exactly where the next element header was expected.
    pub fn is_clean_eof(&self) -> bool {
        matches!(self, Error::DecodeElementHeader { source, .. } if source.is_clean_eof())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub trait StatefulDecode {
    /// Same as `Decode::decode_header` over the bound source.
    fn decode_header(&mut self) -> Result<DataElementHeader>;

    /// Same as `Decode::decode_item_header` over the bound source.
    fn decode_item_header(&mut self) -> Result<SequenceItemHeader>;

    /// Eagerly read the following data in the source
    /// as the raw bytes of a primitive value.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O problems,
    /// or if the header's length is undefined.
    fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<Vec<u8>>;

    /// Read exactly `len` bytes from the source into the given vector.
    fn read_to_vec(&mut self, len: u32, vec: &mut Vec<u8>) -> Result<()>;

    /// Switch between the decoder of the transfer syntax
    /// and the implicit VR little endian decoder.
    fn set_implicit_vr(&mut self, implicit_vr: bool);

    /// Retrieve the exact number of bytes read so far by the stateful decoder,
    /// plus the base offset it was created with.
    fn position(&self) -> u64;
}

impl<T: ?Sized> StatefulDecode for &mut T
where
    T: StatefulDecode,
{
    fn decode_header(&mut self) -> Result<DataElementHeader> {
        (**self).decode_header()
    }

    fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        (**self).decode_item_header()
    }

    fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<Vec<u8>> {
        (**self).read_value_bytes(header)
    }

    fn read_to_vec(&mut self, len: u32, vec: &mut Vec<u8>) -> Result<()> {
        (**self).read_to_vec(len, vec)
    }

    fn set_implicit_vr(&mut self, implicit_vr: bool) {
        (**self).set_implicit_vr(implicit_vr)
    }

    fn position(&self) -> u64 {
        (**self).position()
    }
}

/// Alias for a dynamically resolved DICOM stateful decoder.
/// Although the data source may be known at compile time,
/// the required decoder may vary according to an object's transfer syntax.
pub type DynStatefulDecoder<S> = StatefulDecoder<DynDecoder<S>, S>;

/// Type alias for the DICOM parser of a file's Meta group.
pub type FileHeaderParser<S> = StatefulDecoder<ExplicitVRLittleEndianDecoder, S>;

/// A stateful abstraction for the full DICOM content reading process.
/// `S` is the generic parameter type for the original source,
/// whereas `D` is the data element decoder of the transfer syntax.
#[derive(Debug)]
pub struct StatefulDecoder<D, S> {
    from: S,
    decoder: D,
    implicit: StandardImplicitVRLittleEndianDecoder,
    implicit_vr: bool,
    position: u64,
}

impl<S> DynStatefulDecoder<S>
where
    S: Read,
{
    /// Create a new stateful decoder for the given transfer syntax,
    /// starting at the given position of the source.
    pub fn new_with(from: S, ts: &TransferSyntax, position: u64) -> Result<Self> {
        let decoder = ts
            .decoder_for::<S>()
            .context(UnsupportedTransferSyntaxSnafu { ts: ts.uid() })?;
        Ok(StatefulDecoder::new_with_position(from, decoder, position))
    }
}

impl<S> FileHeaderParser<S>
where
    S: Read,
{
    /// Create a new DICOM stateful decoder for reading the file meta header,
    /// which is always in _Explicit VR Little Endian_.
    pub fn file_header_parser(from: S) -> Self {
        StatefulDecoder::new(from, ExplicitVRLittleEndianDecoder::default())
    }
}

impl<D, S> StatefulDecoder<D, S> {
    /// Create a new DICOM stateful decoder from its parts.
    #[inline]
    pub fn new(from: S, decoder: D) -> Self {
        Self::new_with_position(from, decoder, 0)
    }

    /// Create a new DICOM stateful decoder from its parts,
    /// while assuming a base reading position.
    ///
    /// `position` should be calculated with care:
    /// reported positions and length checks depend on it.
    pub fn new_with_position(from: S, decoder: D, position: u64) -> Self {
        StatefulDecoder {
            from,
            decoder,
            implicit: StandardImplicitVRLittleEndianDecoder::default(),
            implicit_vr: false,
            position,
        }
    }

    /// Retrieve the inner source.
    pub fn into_inner(self) -> S {
        self.from
    }
}

impl<D, S> StatefulDecode for StatefulDecoder<D, S>
where
    D: DecodeFrom<S>,
    S: Read,
{
    fn decode_header(&mut self) -> Result<DataElementHeader> {
        let position = self.position;
        let (header, bytes_read) = if self.implicit_vr {
            DecodeFrom::<S>::decode_header(&self.implicit, &mut self.from)
        } else {
            self.decoder.decode_header(&mut self.from)
        }
        .context(DecodeElementHeaderSnafu { position })?;
        self.position += bytes_read as u64;
        Ok(header)
    }

    fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        let position = self.position;
        let header = if self.implicit_vr {
            DecodeFrom::<S>::decode_item_header(&self.implicit, &mut self.from)
        } else {
            self.decoder.decode_item_header(&mut self.from)
        }
        .context(DecodeItemHeaderSnafu { position })?;
        self.position += 8;
        Ok(header)
    }

    fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<Vec<u8>> {
        let len = header.len.get().context(UndefinedValueLengthSnafu {
            tag: header.tag,
            position: self.position,
        })?;
        let mut value = Vec::new();
        self.read_to_vec(len, &mut value)?;
        Ok(value)
    }

    fn read_to_vec(&mut self, len: u32, vec: &mut Vec<u8>) -> Result<()> {
        let position = self.position;
        let read = (&mut self.from)
            .take(u64::from(len))
            .read_to_end(vec)
            .context(ReadValueDataSnafu { len, position })?;
        if read < len as usize {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
                .context(ReadValueDataSnafu { len, position });
        }
        self.position += u64::from(len);
        Ok(())
    }

    #[inline]
    fn set_implicit_vr(&mut self, implicit_vr: bool) {
        self.implicit_vr = implicit_vr;
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }
}

/// Whether a length is odd, which is not allowed for primitive values.
pub(crate) fn is_odd_length(len: Length) -> bool {
    len.get().map_or(false, |l| l % 2 == 1)
}

#[cfg(test)]
mod tests {
    use super::{StatefulDecode, StatefulDecoder};
    use dcmedit_core::header::{DataElementHeader, Length, SequenceItemHeader};
    use dcmedit_core::{Tag, VR};
    use dcmedit_encoding::decode::explicit_be::ExplicitVRBigEndianDecoder;
    use dcmedit_encoding::decode::explicit_le::ExplicitVRLittleEndianDecoder;

    #[rustfmt::skip]
    const RAW: &[u8] = &[
        0x10, 0x00, 0x10, 0x00,     // (0010,0010) Patient Name
            b'P', b'N',             // VR: PN
            0x08, 0x00,             // Length: 8
                b'D', b'O', b'E', b'^', b'J', b'A', b'N', b'E',
        0x09, 0x00, 0x10, 0x10,     // (0009,1010) private
            b'U', b'N',             // VR: UN
            0x00, 0x00,             // Reserved
            0xFF, 0xFF, 0xFF, 0xFF, // Length: undefined
        0xFE, 0xFF, 0x00, 0xE0,     // item start
            0xFF, 0xFF, 0xFF, 0xFF, // length: undefined
        0x20, 0x00, 0x0D, 0x00,     // (0020,000D) Study Instance UID, implicit VR
            0x02, 0x00, 0x00, 0x00, // Length: 2
                b'1', 0x00,
    ];

    #[test]
    fn decode_and_track_position() {
        let mut source = RAW;
        let mut decoder =
            StatefulDecoder::new(&mut source, ExplicitVRLittleEndianDecoder::default());

        let header = decoder.decode_header().unwrap();
        assert_eq!(
            header,
            DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(8))
        );
        assert_eq!(decoder.position(), 8);
        let value = decoder.read_value_bytes(&header).unwrap();
        assert_eq!(value, b"DOE^JANE");
        assert_eq!(decoder.position(), 16);

        let header = decoder.decode_header().unwrap();
        assert_eq!(header.vr, VR::UN);
        assert!(header.len.is_undefined());
        assert_eq!(decoder.position(), 28);
        assert!(decoder.read_value_bytes(&header).is_err());

        // contents of undefined length UN are implicit VR
        decoder.set_implicit_vr(true);
        let item = decoder.decode_item_header().unwrap();
        assert!(matches!(item, SequenceItemHeader::Item { len } if len.is_undefined()));
        let header = decoder.decode_header().unwrap();
        assert_eq!(
            header,
            DataElementHeader::new(Tag(0x0020, 0x000D), VR::UI, Length(2))
        );
        assert_eq!(decoder.position(), 44);
    }

    #[test]
    fn truncated_value_is_an_error() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x00, 0x08, 0x00, 0x60, b'C', b'S', 0x00, 0x04, // (0008,0060) CS, len 4 (BE)
                b'M', b'R',
        ];
        let mut source = raw;
        let mut decoder =
            StatefulDecoder::new_with_position(&mut source, ExplicitVRBigEndianDecoder::default(), 132);
        let header = decoder.decode_header().unwrap();
        assert_eq!(decoder.position(), 140);
        let err = decoder.read_value_bytes(&header).unwrap_err();
        assert!(matches!(
            err,
            super::Error::ReadValueData {
                len: 4,
                position: 140,
                ..
            }
        ));
    }

    #[test]
    fn clean_eof_at_header_boundary() {
        let mut source: &[u8] = &[];
        let mut decoder =
            StatefulDecoder::new(&mut source, ExplicitVRLittleEndianDecoder::default());
        assert!(decoder.decode_header().unwrap_err().is_clean_eof());

        // a partial header is not a clean end
        let mut source: &[u8] = &[0x10, 0x00, 0x10, 0x00, b'P'];
        let mut decoder =
            StatefulDecoder::new(&mut source, ExplicitVRLittleEndianDecoder::default());
        assert!(!decoder.decode_header().unwrap_err().is_clean_eof());
    }
}
