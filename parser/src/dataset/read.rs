//! This module contains a mid-level abstraction for reading DICOM content
//! sequentially.
//!
//! The rest of the crate is used to obtain DICOM element headers and values.
//! At this level, headers and values are treated as tokens which can be used
//! to form a syntax tree of a full data set.
use crate::stateful::decode::{
    is_odd_length, DynStatefulDecoder, Error as DecoderError, StatefulDecode,
};
use dcmedit_core::header::{DataElementHeader, Header, Length, SequenceItemHeader};
use dcmedit_core::{Tag, VR};
use dcmedit_encoding::transfer_syntax::TransferSyntax;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::cmp::Ordering;
use std::io::Read;

use super::{DataToken, SeqTokenType};

/// The default maximum number of nested sequences.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not create decoder"))]
    CreateDecoder {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read item header"))]
    ReadItemHeader {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read element header"))]
    ReadHeader {
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read {} value bytes for element tagged {}", len, tag))]
    ReadValue {
        len: u32,
        tag: Tag,
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display("Could not read {} bytes for item value", len))]
    ReadItemValue {
        len: u32,
        #[snafu(backtrace)]
        source: DecoderError,
    },
    #[snafu(display(
        "Inconsistent sequence end: expected end at {} bytes but read {}",
        end_of_sequence,
        bytes_read
    ))]
    InconsistentSequenceEnd {
        end_of_sequence: u64,
        bytes_read: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected item tag {} at position {}", tag, position))]
    UnexpectedItemTag {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display("Undefined pixel data item length at position {}", position))]
    UndefinedItemLength { position: u64, backtrace: Backtrace },
    #[snafu(display(
        "Odd value length {} in element tagged {} at position {}",
        len,
        tag,
        position
    ))]
    OddLength {
        tag: Tag,
        len: u32,
        position: u64,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Data set ended at position {} with {} sequences or items left open",
        position,
        open
    ))]
    UnexpectedEndOfData {
        position: u64,
        open: usize,
        backtrace: Backtrace,
    },
    #[snafu(display(
        "Sequence nesting deeper than {} levels at position {}",
        max_depth,
        position
    ))]
    DepthLimitExceeded {
        max_depth: u32,
        position: u64,
        backtrace: Backtrace,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A reader-specific token representing a sequence or item start.
#[derive(Debug, Copy, Clone, PartialEq)]
struct SeqToken {
    /// Whether it is the start of a sequence or the start of an item.
    typ: SeqTokenType,
    /// The length of the value, as indicated by the starting element,
    /// can be unknown.
    len: Length,
    /// Whether this sequence token is part of an encapsulated pixel data.
    pixel_data: bool,
    /// Whether the contents are in implicit VR little endian
    /// regardless of the transfer syntax.
    implicit_vr: bool,
    /// The number of bytes the parser has read until it reached the
    /// beginning of the sequence or item value data.
    base_offset: u64,
}

/// What to do with primitive values of odd length.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum OddLength {
    /// Fail with [`Error::OddLength`].
    #[default]
    Reject,
    /// Read the value as is, with a warning.
    Accept,
}

/// The set of options for the data set reader.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct DataSetReaderOptions {
    /// what to do with odd length values
    pub odd_length: OddLength,
    /// the maximum number of nested sequences
    pub max_depth: u32,
    /// the position of the reader as received at building time
    pub base_offset: u64,
}

impl Default for DataSetReaderOptions {
    fn default() -> Self {
        DataSetReaderOptions {
            odd_length: OddLength::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            base_offset: 0,
        }
    }
}

impl DataSetReaderOptions {
    /// Replace the odd length policy of the options.
    pub fn odd_length(mut self, odd_length: OddLength) -> Self {
        self.odd_length = odd_length;
        self
    }
    /// Replace the maximum nesting depth of the options.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
    /// Replace the base reader offset of the options.
    pub fn base_offset(mut self, base_offset: u64) -> Self {
        self.base_offset = base_offset;
        self
    }
}

/// A higher-level reader for retrieving structure in a DICOM data set from an
/// arbitrary data source.
///
/// Iteration stops at the first error,
/// or when the source ends at the top level of the data set.
#[derive(Debug)]
pub struct DataSetReader<S> {
    /// the stateful decoder
    parser: S,
    /// the options of this reader
    options: DataSetReaderOptions,
    /// whether the reader is expecting an item header next (or a sequence delimiter)
    in_sequence: bool,
    /// whether the reader is expecting the first item value of a pixel sequence next
    /// (offset table)
    offset_table_next: bool,
    /// whether a check for a sequence or item delimitation is pending
    delimiter_check_pending: bool,
    /// a stack of delimiters
    seq_delimiters: Vec<SeqToken>,
    /// fuse the iteration process if true
    hard_break: bool,
    /// last decoded header
    last_header: Option<DataElementHeader>,
}

impl<R> DataSetReader<DynStatefulDecoder<R>>
where
    R: Read,
{
    /// Create a new iterator with the given source
    /// while considering the given transfer syntax.
    #[inline]
    pub fn new_with_ts(source: R, ts: &TransferSyntax) -> Result<Self> {
        Self::new_with_ts_options(source, ts, Default::default())
    }

    /// Create a new iterator with the given source, transfer syntax and options.
    pub fn new_with_ts_options(
        source: R,
        ts: &TransferSyntax,
        options: DataSetReaderOptions,
    ) -> Result<Self> {
        let parser = DynStatefulDecoder::new_with(source, ts, options.base_offset)
            .context(CreateDecoderSnafu)?;
        Ok(DataSetReader::new(parser, options))
    }
}

impl<S> DataSetReader<S> {
    /// Create a new iterator with the given stateful decoder and options.
    pub fn new(decoder: S, options: DataSetReaderOptions) -> Self {
        DataSetReader {
            parser: decoder,
            options,
            seq_delimiters: Vec::new(),
            delimiter_check_pending: false,
            offset_table_next: false,
            in_sequence: false,
            hard_break: false,
            last_header: None,
        }
    }
}

impl<S> DataSetReader<S>
where
    S: StatefulDecode,
{
    /// Retrieve the current position of the underlying decoder.
    pub fn position(&self) -> u64 {
        self.parser.position()
    }
}

impl<S> Iterator for DataSetReader<S>
where
    S: StatefulDecode,
{
    type Item = Result<DataToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.hard_break {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.hard_break = true;
                None
            }
            Err(e) => {
                self.hard_break = true;
                Some(Err(e))
            }
        }
    }
}

impl<S> DataSetReader<S>
where
    S: StatefulDecode,
{
    fn next_token(&mut self) -> Result<Option<DataToken>> {
        loop {
            // item or sequence delimitation logic for explicit lengths
            if self.delimiter_check_pending {
                if let Some(token) = self.update_seq_delimiters()? {
                    return Ok(Some(token));
                }
            }

            if self.in_sequence {
                // at sequence level, expecting item header
                return self.read_item_header().map(Some);
            }

            if let Some(SeqToken {
                typ: SeqTokenType::Item,
                pixel_data: true,
                len,
                ..
            }) = self.seq_delimiters.last()
            {
                let len = len.get().context(UndefinedItemLengthSnafu {
                    position: self.parser.position(),
                })?;
                let mut value = Vec::new();
                self.parser
                    .read_to_vec(len, &mut value)
                    .context(ReadItemValueSnafu { len })?;

                // need to pop item delimiter on the next iteration
                self.delimiter_check_pending = true;

                if self.offset_table_next {
                    self.offset_table_next = false;
                    return Ok(Some(DataToken::OffsetTable(value)));
                }
                return Ok(Some(DataToken::ItemValue(value)));
            }

            if let Some(header) = self.last_header.take() {
                if header.is_encapsulated_pixeldata() {
                    return self.read_pixel_sequence_start().map(Some);
                }

                // a plain element header was read, so a value is expected
                let value = self
                    .parser
                    .read_value_bytes(&header)
                    .context(ReadValueSnafu {
                        len: header.len.0,
                        tag: header.tag,
                    })?;

                // sequences can end after this token
                self.delimiter_check_pending = true;

                return Ok(Some(DataToken::PrimitiveValue(value)));
            }

            // a data element header or item delimiter is expected
            let position = self.parser.position();
            let header = match self.parser.decode_header() {
                Ok(header) => header,
                Err(e) if e.is_clean_eof() => {
                    // the end of the data set is only acceptable
                    // when no sequence or item is left open
                    ensure!(
                        self.seq_delimiters.is_empty(),
                        UnexpectedEndOfDataSnafu {
                            position,
                            open: self.seq_delimiters.len(),
                        }
                    );
                    return Ok(None);
                }
                Err(e) => return Err(e).context(ReadHeaderSnafu),
            };

            match header {
                DataElementHeader {
                    tag: Tag::ITEM_DELIMITER,
                    ..
                } => match self.seq_delimiters.last() {
                    None => {
                        // ignore delimiter, we are not in a sequence
                        tracing::warn!(
                            "Item delimitation item outside of a sequence in position {}",
                            position
                        );
                        continue;
                    }
                    Some(SeqToken {
                        typ: SeqTokenType::Item,
                        ..
                    }) => {
                        self.pop_sequence_token();
                        self.in_sequence = true;
                        // sequences can end after this token
                        self.delimiter_check_pending = true;
                        return Ok(Some(DataToken::ItemEnd));
                    }
                    Some(_) => {
                        return UnexpectedItemTagSnafu {
                            tag: header.tag,
                            position,
                        }
                        .fail();
                    }
                },
                DataElementHeader {
                    tag: tag @ (Tag::ITEM | Tag::SEQUENCE_DELIMITER),
                    ..
                } => {
                    return UnexpectedItemTagSnafu { tag, position }.fail();
                }
                DataElementHeader { tag, vr, len }
                    if vr == VR::SQ
                        || (len.is_undefined() && !header.is_encapsulated_pixeldata()) =>
                {
                    // undefined length elements other than pixel data
                    // are read as data set sequences;
                    // an undefined length UN holds implicit VR little endian
                    let implicit_vr = vr == VR::UN && len.is_undefined();
                    self.push_sequence_token(SeqTokenType::Sequence, len, false, implicit_vr)?;
                    self.in_sequence = true;

                    // sequences can end right after they start
                    if len == Length(0) {
                        self.delimiter_check_pending = true;
                    }

                    return Ok(Some(DataToken::SequenceStart { tag, vr, len }));
                }
                header if header.is_encapsulated_pixeldata() => {
                    // encapsulated pixel data conditions:
                    // expect a sequence of pixel data fragments

                    // save it for the next step
                    self.last_header = Some(header);
                    return Ok(Some(DataToken::PixelSequenceStart {
                        tag: header.tag,
                        vr: header.vr,
                    }));
                }
                header => {
                    if is_odd_length(header.len) {
                        match self.options.odd_length {
                            OddLength::Reject => {
                                return OddLengthSnafu {
                                    tag: header.tag,
                                    len: header.len.0,
                                    position,
                                }
                                .fail();
                            }
                            OddLength::Accept => {
                                tracing::warn!(
                                    "Element {} at position {} has odd length {}",
                                    header.tag,
                                    position,
                                    header.len
                                );
                            }
                        }
                    }

                    // save it for the next step
                    self.last_header = Some(header);
                    return Ok(Some(DataToken::ElementHeader(header)));
                }
            }
        }
    }

    fn read_item_header(&mut self) -> Result<DataToken> {
        let position = self.parser.position();
        let header = self
            .parser
            .decode_item_header()
            .context(ReadItemHeaderSnafu)?;
        match header {
            SequenceItemHeader::Item { len } => {
                // entered a new item
                self.in_sequence = false;
                let pixel_data = self
                    .seq_delimiters
                    .last()
                    .map_or(false, |token| token.pixel_data);
                self.push_sequence_token(SeqTokenType::Item, len, pixel_data, false)?;
                // items can be empty
                if len == Length(0) {
                    self.delimiter_check_pending = true;
                }
                Ok(DataToken::ItemStart { len })
            }
            SequenceItemHeader::ItemDelimiter => UnexpectedItemTagSnafu {
                tag: Tag::ITEM_DELIMITER,
                position,
            }
            .fail(),
            SequenceItemHeader::SequenceDelimiter => {
                // closed a sequence
                self.pop_sequence_token();
                self.in_sequence = false;
                // items can end after a nested sequence ends
                self.delimiter_check_pending = true;
                Ok(DataToken::SequenceEnd)
            }
        }
    }

    fn read_pixel_sequence_start(&mut self) -> Result<DataToken> {
        self.push_sequence_token(SeqTokenType::Sequence, Length::UNDEFINED, true, false)?;

        // encapsulated pixel data, expecting offset table
        let position = self.parser.position();
        let header = self
            .parser
            .decode_item_header()
            .context(ReadItemHeaderSnafu)?;
        match header {
            SequenceItemHeader::Item { len } => {
                self.push_sequence_token(SeqTokenType::Item, len, true, false)?;
                // items can be empty
                if len == Length(0) {
                    self.delimiter_check_pending = true;
                } else {
                    self.offset_table_next = true;
                }
                Ok(DataToken::ItemStart { len })
            }
            SequenceItemHeader::SequenceDelimiter => {
                // empty pixel data
                self.pop_sequence_token();
                self.delimiter_check_pending = true;
                Ok(DataToken::SequenceEnd)
            }
            item => UnexpectedItemTagSnafu {
                tag: item.tag(),
                position,
            }
            .fail(),
        }
    }

    fn update_seq_delimiters(&mut self) -> Result<Option<DataToken>> {
        if let Some(sd) = self.seq_delimiters.last() {
            if let Some(len) = sd.len.get() {
                let end_of_sequence = sd.base_offset + u64::from(len);
                let bytes_read = self.parser.position();
                match end_of_sequence.cmp(&bytes_read) {
                    Ordering::Equal => {
                        // end of delimiter, as indicated by the element's length
                        let token = match sd.typ {
                            SeqTokenType::Sequence => {
                                self.in_sequence = false;
                                DataToken::SequenceEnd
                            }
                            SeqTokenType::Item => {
                                self.in_sequence = true;
                                DataToken::ItemEnd
                            }
                        };
                        self.pop_sequence_token();
                        return Ok(Some(token));
                    }
                    Ordering::Less => {
                        return InconsistentSequenceEndSnafu {
                            end_of_sequence,
                            bytes_read,
                        }
                        .fail();
                    }
                    Ordering::Greater => {} // continue normally
                }
            }
        }
        self.delimiter_check_pending = false;
        Ok(None)
    }

    fn push_sequence_token(
        &mut self,
        typ: SeqTokenType,
        len: Length,
        pixel_data: bool,
        implicit_vr: bool,
    ) -> Result<()> {
        if typ == SeqTokenType::Sequence {
            let depth = self
                .seq_delimiters
                .iter()
                .filter(|token| token.typ == SeqTokenType::Sequence)
                .count()
                + 1;
            ensure!(
                depth <= self.options.max_depth as usize,
                DepthLimitExceededSnafu {
                    max_depth: self.options.max_depth,
                    position: self.parser.position(),
                }
            );
        }

        // nested elements inherit implicit VR from the enclosing element
        let implicit_vr =
            implicit_vr || self.seq_delimiters.last().map_or(false, |t| t.implicit_vr);
        self.seq_delimiters.push(SeqToken {
            typ,
            pixel_data,
            len,
            implicit_vr,
            base_offset: self.parser.position(),
        });
        self.parser.set_implicit_vr(implicit_vr);
        Ok(())
    }

    fn pop_sequence_token(&mut self) -> Option<SeqToken> {
        let token = self.seq_delimiters.pop();
        let implicit_vr = self
            .seq_delimiters
            .last()
            .map_or(false, |t| t.implicit_vr);
        self.parser.set_implicit_vr(implicit_vr);
        token
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSetReader, DataSetReaderOptions, DataToken, Error, OddLength};
    use crate::stateful::decode::{StatefulDecode, StatefulDecoder};
    use dcmedit_core::header::{DataElementHeader, Length};
    use dcmedit_core::{Tag, VR};
    use dcmedit_encoding::decode::{
        explicit_le::ExplicitVRLittleEndianDecoder, implicit_le::ImplicitVRLittleEndianDecoder,
    };

    fn validate_dataset_reader_implicit_vr<I>(data: &[u8], ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
    {
        let mut cursor = data;
        let parser = StatefulDecoder::new(&mut cursor, ImplicitVRLittleEndianDecoder::default());

        validate_dataset_reader(data, parser, ground_truth)
    }

    fn validate_dataset_reader_explicit_vr<I>(data: &[u8], ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
    {
        let mut cursor = data;
        let parser = StatefulDecoder::new(&mut cursor, ExplicitVRLittleEndianDecoder::default());

        validate_dataset_reader(data, parser, ground_truth)
    }

    fn validate_dataset_reader<I, D>(data: &[u8], parser: D, ground_truth: I)
    where
        I: IntoIterator<Item = DataToken>,
        D: StatefulDecode,
    {
        let mut dset_reader = DataSetReader::new(parser, Default::default());

        let iter = &mut dset_reader;
        let ground_truth = ground_truth.into_iter();

        for gt_token in ground_truth {
            let token = iter
                .next()
                .expect("expecting more tokens from reader")
                .expect("should fetch the next token without an error");
            assert_eq!(
                token, gt_token,
                "Got token {:2?} ; but expected {:2?}",
                token, gt_token
            );
        }

        let extra: Vec<_> = iter.collect();
        assert_eq!(
            extra.len(), // we have already read all of them
            0,
            "extraneous tokens remaining: {:?}",
            extra,
        );
        assert_eq!(
            dset_reader.parser.position(),
            data.len() as u64,
            "Decoder position did not match end of data",
        );
    }

    fn read_all_explicit(data: &[u8], options: DataSetReaderOptions) -> Result<Vec<DataToken>, Error> {
        let mut cursor = data;
        let parser = StatefulDecoder::new(&mut cursor, ExplicitVRLittleEndianDecoder::default());
        DataSetReader::new(parser, options).collect()
    }

    #[test]
    fn read_sequence_explicit() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, // sequence tag: (0018,6011) SequenceOfUltrasoundRegions
            b'S', b'Q', // VR
            0x00, 0x00, // reserved
            0x2e, 0x00, 0x00, 0x00, // length: 28 + 18 = 46 (#= 2)
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x14, 0x00, 0x00, 0x00, // item length: 20 (#= 2)
            // -- 20 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x01, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 1
            // -- 30 --
            0x18, 0x00, 0x14, 0x60, b'U', b'S', 0x02, 0x00, 0x02, 0x00, // (0018, 6012) RegionDataType, len = 2, value = 2
            // -- 40 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x0a, 0x00, 0x00, 0x00, // item length: 10 (#= 1)
            // -- 48 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x04, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 4
            // -- 58 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0018, 0x6011),
                vr: VR::SQ,
                len: Length(46),
            },
            DataToken::ItemStart { len: Length(20) },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0018, 0x6012),
                vr: VR::US,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(vec![0x01, 0x00]),
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0018, 0x6014),
                vr: VR::US,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(vec![0x02, 0x00]),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(10) },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0018, 0x6012),
                vr: VR::US,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(vec![0x04, 0x00]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0020, 0x4000),
                vr: VR::LT,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(b"TEST".to_vec()),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_empty_sequence_explicit() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // SequenceStart: (0008,2218) ; len = 0
            0x08, 0x00, 0x18, 0x22, // VR: SQ
            b'S', b'Q', // Reserved
            0x00, 0x00, // Length: 0
            0x00, 0x00, 0x00, 0x00,
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x2218),
                vr: VR::SQ,
                len: Length(0),
            },
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    /// Gracefully ignore a stray item end tag in the data set.
    #[test]
    fn ignore_trailing_item_delimitation_item() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item end
        ];

        let ground_truth = vec![
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0020, 0x4000),
                vr: VR::LT,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(b"TEST".to_vec()),
            // no item end
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_sequence_undefined_lengths() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x18, 0x00, 0x11, 0x60, // sequence tag: (0018,6011) SequenceOfUltrasoundRegions
            b'S', b'Q', // VR
            0x00, 0x00, // reserved
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0xff, 0xff, 0xff, 0xff, // item length: undefined
            // -- 20 --
            0x18, 0x00, 0x12, 0x60, b'U', b'S', 0x02, 0x00, 0x01, 0x00, // (0018, 6012) RegionSpatialformat, len = 2, value = 1
            // -- 30 --
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item end
            // -- 38 --
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00, // sequence end
            // -- 46 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T', // value = "TEST"
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0018, 0x6011),
                vr: VR::SQ,
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0018, 0x6012),
                vr: VR::US,
                len: Length(2),
            }),
            DataToken::PrimitiveValue(vec![0x01, 0x00]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0020, 0x4000),
                vr: VR::LT,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(b"TEST".to_vec()),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_implicit_len_sequence_implicit_vr_unknown() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x33, 0x55, 0x33, 0x55, // sequence tag: (5533,5533) «private, unknown attribute»
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 8 --
            0xfe, 0xff, 0x00, 0xe0, // item begin
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 16 --
            0xfe, 0xff, 0x0d, 0xe0, // item end
            0x00, 0x00, 0x00, 0x00, // length is always zero
            // -- 24 --
            0xfe, 0xff, 0xdd, 0xe0,
            0x00, 0x00, 0x00, 0x00, // sequence end
            // -- 32 --
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x5533, 0x5533),
                vr: VR::UN,
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_implicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_explicit_un_as_implicit_sequence() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x09, 0x00, 0x10, 0x10, // (0009,1010) private
            b'U', b'N', 0x00, 0x00, // VR: UN, reserved
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item begin
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 20 -- implicit VR from here on
            0x10, 0x00, 0x10, 0x00, // (0010,0010) PatientName
            0x04, 0x00, 0x00, 0x00, // length: 4
            b'D', b'O', b'E', b' ',
            // -- 32 --
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00, // item end
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00, // sequence end
            // -- 48 -- explicit VR again
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments, len = 4
            b'T', b'E', b'S', b'T',
        ];

        let ground_truth = vec![
            DataToken::SequenceStart {
                tag: Tag(0x0009, 0x1010),
                vr: VR::UN,
                len: Length::UNDEFINED,
            },
            DataToken::ItemStart {
                len: Length::UNDEFINED,
            },
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0010, 0x0010),
                vr: VR::PN,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(b"DOE ".to_vec()),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader {
                tag: Tag(0x0020, 0x4000),
                vr: VR::LT,
                len: Length(4),
            }),
            DataToken::PrimitiveValue(b"TEST".to_vec()),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_encapsulated_pixeldata() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0, 0010) PixelData
            b'O', b'B', // VR
            0x00, 0x00, // reserved
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 -- Basic offset table
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x00, 0x00, 0x00, 0x00, // item length: 0
            // -- 20 -- First fragment of pixel data
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x20, 0x00, 0x00, 0x00, // item length: 32
            // -- 28 -- Compressed Fragment
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99, 0x99,
            // -- 60 -- End of pixel data
            0xfe, 0xff, 0xdd, 0xe0, // sequence end tag
            0x00, 0x00, 0x00, 0x00,
            // -- 68 -- padding
            0xfc, 0xff, 0xfc, 0xff, // (fffc,fffc) DataSetTrailingPadding
            b'O', b'B', // VR
            0x00, 0x00, // reserved
            0x08, 0x00, 0x00, 0x00, // length: 8
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];

        let ground_truth = vec![
            DataToken::PixelSequenceStart {
                tag: Tag(0x7fe0, 0x0010),
                vr: VR::OB,
            },
            DataToken::ItemStart { len: Length(0) },
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(32) },
            DataToken::ItemValue(vec![0x99; 32]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
            DataToken::ElementHeader(DataElementHeader::new(
                Tag(0xfffc, 0xfffc),
                VR::OB,
                Length(8),
            )),
            DataToken::PrimitiveValue(vec![0x00; 8]),
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn read_encapsulated_pixeldata_with_offset_table() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xe0, 0x7f, 0x10, 0x00, // (7FE0, 0010) PixelData
            b'O', b'B', // VR
            0x00, 0x00, // reserved
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 -- Basic offset table
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x04, 0x00, 0x00, 0x00, // item length: 4
            // -- 20 -- item value
            0x10, 0x00, 0x00, 0x00, // 16
            // -- 24 -- First fragment of pixel data
            0xfe, 0xff, 0x00, 0xe0, // item start tag
            0x04, 0x00, 0x00, 0x00, // item length: 4
            // -- 32 -- Compressed Fragment
            0x99, 0x99, 0x99, 0x99,
            // -- 36 -- End of pixel data
            0xfe, 0xff, 0xdd, 0xe0, // sequence end tag
            0x00, 0x00, 0x00, 0x00,
        ];

        let ground_truth = vec![
            DataToken::PixelSequenceStart {
                tag: Tag(0x7fe0, 0x0010),
                vr: VR::OB,
            },
            DataToken::ItemStart { len: Length(4) },
            DataToken::OffsetTable(vec![0x10, 0x00, 0x00, 0x00]),
            DataToken::ItemEnd,
            DataToken::ItemStart { len: Length(4) },
            DataToken::ItemValue(vec![0x99; 4]),
            DataToken::ItemEnd,
            DataToken::SequenceEnd,
        ];

        validate_dataset_reader_explicit_vr(DATA, ground_truth);
    }

    #[test]
    fn odd_length_policy() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x10, 0x00, 0x20, 0x00, b'L', b'O', 0x03, 0x00, // (0010,0020) PatientID, len = 3
            b'1', b'2', b'3',
        ];

        let err = read_all_explicit(DATA, Default::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::OddLength {
                len: 3,
                position: 0,
                ..
            }
        ));

        let tokens =
            read_all_explicit(DATA, DataSetReaderOptions::default().odd_length(OddLength::Accept))
                .unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], DataToken::PrimitiveValue(b"123".to_vec()));
    }

    #[test]
    fn unterminated_sequence_is_an_error() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, // (0008,1115) SQ
            0xff, 0xff, 0xff, 0xff, // length: undefined
            0xfe, 0xff, 0x00, 0xe0, // item begin
            0xff, 0xff, 0xff, 0xff, // length: undefined
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments
            b'T', b'E', b'S', b'T',
            // data ends without delimiters
        ];

        let err = read_all_explicit(DATA, Default::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedEndOfData {
                position: 32,
                open: 2,
                ..
            }
        ));
    }

    #[test]
    fn overrunning_item_is_an_error() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, // (0008,1115) SQ
            0xff, 0xff, 0xff, 0xff, // length: undefined
            // -- 12 --
            0xfe, 0xff, 0x00, 0xe0, // item begin
            0x06, 0x00, 0x00, 0x00, // length: 6, but the element inside takes 12
            // -- 20 --
            0x20, 0x00, 0x00, 0x40, b'L', b'T', 0x04, 0x00, // (0020,4000) ImageComments
            b'T', b'E', b'S', b'T',
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00, // sequence end
        ];

        let err = read_all_explicit(DATA, Default::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::InconsistentSequenceEnd {
                end_of_sequence: 26,
                bytes_read: 32,
                ..
            }
        ));
    }

    #[test]
    fn nesting_is_limited() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0x00, 0xe0, 0xff, 0xff, 0xff, 0xff,
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0x00, 0xe0, 0xff, 0xff, 0xff, 0xff,
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0x0d, 0xe0, 0x00, 0x00, 0x00, 0x00,
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
        ];

        let tokens = read_all_explicit(DATA, DataSetReaderOptions::default().max_depth(3)).unwrap();
        assert_eq!(tokens.len(), 10);

        let err = read_all_explicit(DATA, DataSetReaderOptions::default().max_depth(2)).unwrap_err();
        assert!(matches!(
            err,
            Error::DepthLimitExceeded {
                max_depth: 2,
                position: 52,
                ..
            }
        ));
    }

    #[test]
    fn stray_item_tag_is_an_error() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            0xfe, 0xff, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00, // item, outside of any sequence
        ];

        let err = read_all_explicit(DATA, Default::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedItemTag {
                tag: Tag(0xfffe, 0xe000),
                position: 0,
                ..
            }
        ));
    }
}
