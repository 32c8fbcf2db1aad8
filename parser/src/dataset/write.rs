//! A stateful device for printing a DICOM data set in sequential order.
//!
//! This is the counterpart of the [`DataSetReader`](super::DataSetReader):
//! it turns a stream of data set tokens back into bytes.
//! Lengths in the tokens are written as given,
//! so they must already be consistent with the values that follow.
use crate::dataset::{DataToken, SeqTokenType};
use crate::stateful::encode::{Error as EncoderError, StatefulEncoder};
use dcmedit_core::header::{DataElementHeader, Length};
use dcmedit_core::VR;
use dcmedit_encoding::transfer_syntax::TransferSyntax;
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not create data set printer"))]
    CreatePrinter {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    #[snafu(display("Unexpected token {}", token))]
    UnexpectedToken {
        token: DataToken,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not write element header"))]
    WriteHeader {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    #[snafu(display("Could not write item header"))]
    WriteItemHeader {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    #[snafu(display("Could not write sequence delimiter"))]
    WriteSequenceDelimiter {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    #[snafu(display("Could not write item delimiter"))]
    WriteItemDelimiter {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    #[snafu(display("Could not write value data"))]
    WriteValue {
        #[snafu(backtrace)]
        source: EncoderError,
    },
    #[snafu(display("Could not flush the data set"))]
    FlushOutput {
        #[snafu(backtrace)]
        source: EncoderError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A token representing a sequence or item start.
#[derive(Debug, Copy, Clone)]
struct SeqToken {
    /// Whether it is the start of a sequence or the start of an item.
    typ: SeqTokenType,
    /// The length of the value, as indicated by the starting element,
    /// can be unknown.
    len: Length,
    /// Whether the contents are written in implicit VR little endian.
    implicit_vr: bool,
}

/// A stateful device for printing a DICOM data set in sequential order.
/// This is analogous to the `DataSetReader` type for converting data
/// set tokens to bytes.
#[derive(Debug)]
pub struct DataSetWriter<'w, W: 'w> {
    printer: StatefulEncoder<'w, W>,
    seq_tokens: Vec<SeqToken>,
}

impl<'w, W: 'w> DataSetWriter<'w, W>
where
    W: Write,
{
    /// Create a data set writer for the given transfer syntax.
    pub fn with_ts(to: W, ts: &TransferSyntax) -> Result<Self> {
        let printer = StatefulEncoder::from_transfer_syntax(to, ts).context(CreatePrinterSnafu)?;
        Ok(DataSetWriter::new(printer))
    }

    /// Create a data set writer over an existing stateful encoder.
    pub fn new(printer: StatefulEncoder<'w, W>) -> Self {
        DataSetWriter {
            printer,
            seq_tokens: Vec::new(),
        }
    }

    /// Feed the given sequence of tokens which are part of the same data set.
    pub fn write_sequence<I>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = DataToken>,
    {
        for token in tokens {
            self.write(token)?;
        }

        Ok(())
    }

    /// Feed the given data set token for writing the data set.
    pub fn write(&mut self, token: DataToken) -> Result<()> {
        // explicit length sequences or items do not print
        // the respective delimiter
        match token {
            DataToken::ElementHeader(header) => {
                self.printer
                    .encode_element_header(header)
                    .context(WriteHeaderSnafu)?;
            }
            DataToken::SequenceStart { tag, vr, len } => {
                self.printer
                    .encode_element_header(DataElementHeader::new(tag, vr, len))
                    .context(WriteHeaderSnafu)?;
                // undefined length UN content is in implicit VR little endian
                let implicit_vr = vr == VR::UN && len.is_undefined();
                self.push(SeqTokenType::Sequence, len, implicit_vr);
            }
            DataToken::PixelSequenceStart { tag, vr } => {
                self.printer
                    .encode_element_header(DataElementHeader::new(tag, vr, Length::UNDEFINED))
                    .context(WriteHeaderSnafu)?;
                self.push(SeqTokenType::Sequence, Length::UNDEFINED, false);
            }
            DataToken::ItemStart { len } => {
                self.printer
                    .encode_item_header(len.0)
                    .context(WriteItemHeaderSnafu)?;
                self.push(SeqTokenType::Item, len, false);
            }
            DataToken::ItemEnd => match self.seq_tokens.last() {
                Some(SeqToken {
                    typ: SeqTokenType::Item,
                    len,
                    ..
                }) => {
                    // only write if it's an unknown length item
                    if len.is_undefined() {
                        self.printer
                            .encode_item_delimiter()
                            .context(WriteItemDelimiterSnafu)?;
                    }
                    self.pop();
                }
                _ => return UnexpectedTokenSnafu { token }.fail(),
            },
            DataToken::SequenceEnd => match self.seq_tokens.last() {
                Some(SeqToken {
                    typ: SeqTokenType::Sequence,
                    len,
                    ..
                }) => {
                    // only write if it's an unknown length sequence
                    if len.is_undefined() {
                        self.printer
                            .encode_sequence_delimiter()
                            .context(WriteSequenceDelimiterSnafu)?;
                    }
                    self.pop();
                }
                _ => return UnexpectedTokenSnafu { token }.fail(),
            },
            DataToken::PrimitiveValue(value)
            | DataToken::OffsetTable(value)
            | DataToken::ItemValue(value) => {
                self.printer
                    .write_raw_bytes(&value)
                    .context(WriteValueSnafu)?;
            }
        }
        Ok(())
    }

    /// Retrieve the number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.printer.bytes_written()
    }

    /// Flush the inner writer.
    pub fn flush(&mut self) -> Result<()> {
        self.printer.flush().context(FlushOutputSnafu)
    }

    /// Retrieve the inner writer.
    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }

    fn push(&mut self, typ: SeqTokenType, len: Length, implicit_vr: bool) {
        // nested elements inherit implicit VR from the enclosing element
        let implicit_vr =
            implicit_vr || self.seq_tokens.last().map_or(false, |t| t.implicit_vr);
        self.seq_tokens.push(SeqToken {
            typ,
            len,
            implicit_vr,
        });
        self.printer.set_implicit_vr(implicit_vr);
    }

    fn pop(&mut self) {
        self.seq_tokens.pop();
        let implicit_vr = self.seq_tokens.last().map_or(false, |t| t.implicit_vr);
        self.printer.set_implicit_vr(implicit_vr);
    }
}
