//! Interpretation of DICOM data sets as streams of tokens.
use dcmedit_core::header::{DataElementHeader, Length};
use dcmedit_core::{Tag, VR};
use std::fmt;

pub mod read;
pub mod write;

pub use self::read::{DataSetReader, DataSetReaderOptions, OddLength};
pub use self::write::DataSetWriter;

/// A token of a DICOM data set stream. This is part of the interpretation of a
/// data set as a stream of symbols, which may either represent data headers or
/// actual value data.
#[derive(Debug, Clone)]
pub enum DataToken {
    /// A data header of a primitive value.
    ElementHeader(DataElementHeader),
    /// The beginning of a sequence element.
    ///
    /// The VR is usually SQ,
    /// but other undefined length elements are read as sequences too.
    /// Those with the VR UN hold their contents in implicit VR little endian.
    SequenceStart { tag: Tag, vr: VR, len: Length },
    /// The beginning of an encapsulated pixel data element.
    PixelSequenceStart { tag: Tag, vr: VR },
    /// The ending delimiter of a sequence or encapsulated pixel data.
    SequenceEnd,
    /// The beginning of a new item in the sequence.
    ItemStart { len: Length },
    /// The ending delimiter of an item.
    ItemEnd,
    /// A primitive data element value, as raw bytes.
    PrimitiveValue(Vec<u8>),
    /// The raw value of the basic offset table
    /// in encapsulated pixel data.
    /// Only emitted when the table is not empty.
    OffsetTable(Vec<u8>),
    /// An encapsulated pixel data fragment.
    ItemValue(Vec<u8>),
}

impl fmt::Display for DataToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataToken::PrimitiveValue(v) => write!(f, "PrimitiveValue({} bytes)", v.len()),
            DataToken::OffsetTable(v) => write!(f, "OffsetTable({} bytes)", v.len()),
            DataToken::ItemValue(v) => write!(f, "ItemValue({} bytes)", v.len()),
            other => write!(f, "{:?}", other),
        }
    }
}

/// This implementation treats undefined lengths as equal.
impl PartialEq<Self> for DataToken {
    fn eq(&self, other: &Self) -> bool {
        use DataToken::*;
        match (self, other) {
            (
                ElementHeader(DataElementHeader {
                    tag: tag1,
                    vr: vr1,
                    len: len1,
                }),
                ElementHeader(DataElementHeader {
                    tag: tag2,
                    vr: vr2,
                    len: len2,
                }),
            ) => tag1 == tag2 && vr1 == vr2 && len1.inner_eq(*len2),
            (
                SequenceStart {
                    tag: tag1,
                    vr: vr1,
                    len: len1,
                },
                SequenceStart {
                    tag: tag2,
                    vr: vr2,
                    len: len2,
                },
            ) => tag1 == tag2 && vr1 == vr2 && len1.inner_eq(*len2),
            (PixelSequenceStart { tag: tag1, vr: vr1 }, PixelSequenceStart { tag: tag2, vr: vr2 }) => {
                tag1 == tag2 && vr1 == vr2
            }
            (ItemStart { len: len1 }, ItemStart { len: len2 }) => len1.inner_eq(*len2),
            (PrimitiveValue(v1), PrimitiveValue(v2)) => v1 == v2,
            (OffsetTable(v1), OffsetTable(v2)) => v1 == v2,
            (ItemValue(v1), ItemValue(v2)) => v1 == v2,
            (ItemEnd, ItemEnd) | (SequenceEnd, SequenceEnd) => true,
            _ => false,
        }
    }
}

/// The type of delimiter: sequence or item.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SeqTokenType {
    Sequence,
    Item,
}
