//! Module holding a stateful DICOM data encoding abstraction.
//!
//! The [`StatefulEncoder`] writes headers, delimiters and raw value data,
//! keeping track of how many bytes were written.
//! Like its decoding counterpart,
//! it can switch to implicit VR little endian
//! for the contents of undefined length `UN` elements.

use dcmedit_core::header::DataElementHeader;
use dcmedit_encoding::encode::implicit_le::ImplicitVRLittleEndianEncoder;
use dcmedit_encoding::encode::EncodeTo;
use dcmedit_encoding::transfer_syntax::{DynEncoder, TransferSyntax};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Encoding in transfer syntax {} is unsupported", ts))]
    UnsupportedTransferSyntax {
        ts: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to encode a data piece at position {}", position))]
    EncodeData {
        position: u64,
        #[snafu(backtrace)]
        source: dcmedit_encoding::encode::Error,
    },

    #[snafu(display("Could not write value data at position {}", position))]
    WriteValueData {
        position: u64,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Also called a printer, this encoder type provides a stateful mid-level
/// abstraction for writing DICOM content.
/// `W` is the write target.
pub struct StatefulEncoder<'w, W: 'w> {
    to: W,
    encoder: DynEncoder<'w, W>,
    implicit: ImplicitVRLittleEndianEncoder,
    implicit_vr: bool,
    bytes_written: u64,
}

impl<'w, W: 'w> std::fmt::Debug for StatefulEncoder<'w, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatefulEncoder")
            .field("to", &"«omitted»")
            .field("encoder", &"«dynamic»")
            .field("implicit_vr", &self.implicit_vr)
            .field("bytes_written", &self.bytes_written)
            .finish()
    }
}

impl<'w, W: 'w> StatefulEncoder<'w, W>
where
    W: Write,
{
    /// Create a new stateful encoder from its parts.
    pub fn new(to: W, encoder: DynEncoder<'w, W>) -> Self {
        StatefulEncoder {
            to,
            encoder,
            implicit: ImplicitVRLittleEndianEncoder::default(),
            implicit_vr: false,
            bytes_written: 0,
        }
    }

    /// Create a new stateful encoder for the given transfer syntax.
    pub fn from_transfer_syntax(to: W, ts: &TransferSyntax) -> Result<Self> {
        let encoder = ts
            .encoder_for::<W>()
            .context(UnsupportedTransferSyntaxSnafu { ts: ts.uid() })?;
        Ok(StatefulEncoder::new(to, encoder))
    }

    /// Switch between the encoder of the transfer syntax
    /// and the implicit VR little endian encoder.
    #[inline]
    pub fn set_implicit_vr(&mut self, implicit_vr: bool) {
        self.implicit_vr = implicit_vr;
    }

    /// Encode and write a data element header.
    pub fn encode_element_header(&mut self, de: DataElementHeader) -> Result<()> {
        let position = self.bytes_written;
        let bytes = self
            .with_encoder(|encoder, to| encoder.encode_element_header(to, de))
            .context(EncodeDataSnafu { position })?;
        self.bytes_written += bytes as u64;
        Ok(())
    }

    /// Encode and write an item header,
    /// where `len` is the specified length of the item
    /// (can be `0xFFFF_FFFF` for undefined length).
    pub fn encode_item_header(&mut self, len: u32) -> Result<()> {
        let position = self.bytes_written;
        self.with_encoder(|encoder, to| encoder.encode_item_header(to, len))
            .context(EncodeDataSnafu { position })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write an item delimiter.
    pub fn encode_item_delimiter(&mut self) -> Result<()> {
        let position = self.bytes_written;
        self.with_encoder(|encoder, to| encoder.encode_item_delimiter(to))
            .context(EncodeDataSnafu { position })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write a sequence delimiter.
    pub fn encode_sequence_delimiter(&mut self) -> Result<()> {
        let position = self.bytes_written;
        self.with_encoder(|encoder, to| encoder.encode_sequence_delimiter(to))
            .context(EncodeDataSnafu { position })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Write the given bytes directly to the inner writer.
    ///
    /// No padding is applied:
    /// values are expected to be of even length already,
    /// unless the data set came with odd lengths to begin with.
    pub fn write_raw_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.to.write_all(bytes).context(WriteValueDataSnafu {
            position: self.bytes_written,
        })?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Retrieve the number of bytes written so far by this printer.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flush the inner writer.
    pub fn flush(&mut self) -> Result<()> {
        self.to.flush().context(WriteValueDataSnafu {
            position: self.bytes_written,
        })
    }

    /// Retrieve the inner writer.
    pub fn into_inner(self) -> W {
        self.to
    }

    fn with_encoder<T>(
        &mut self,
        f: impl FnOnce(
            &dyn EncodeTo<W>,
            &mut W,
        ) -> dcmedit_encoding::encode::Result<T>,
    ) -> dcmedit_encoding::encode::Result<T> {
        let StatefulEncoder {
            to,
            encoder,
            implicit,
            implicit_vr,
            ..
        } = self;
        let encoder: &dyn EncodeTo<W> = if *implicit_vr {
            &*implicit
        } else {
            &**encoder
        };
        f(encoder, to)
    }
}
