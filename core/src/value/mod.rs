//! This module includes a high level abstraction over a DICOM data element's value.
//!
//! Primitive values are kept as the raw bytes found in the data set,
//! in the byte order of its transfer syntax.
//! Interpreting and producing those bytes is guided by
//! the per-VR capability table in [`repr`].

use crate::header::{HasLength, Length};
use smallvec::SmallVec;

pub mod repr;

pub use self::repr::{Padding, ValueKind, VrTraits};

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// A single encapsulated pixel data fragment.
pub type InMemFragment = Vec<u8>;

/// Representation of a full DICOM value, which may be either primitive or
/// another DICOM object.
///
/// `I` is the complex type for nest data set items, which should usually
/// implement [`HasLength`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I = crate::header::EmptyObject> {
    /// Primitive value: the raw value bytes,
    /// including any trailing padding.
    Primitive(Vec<u8>),
    /// A complex sequence of items.
    Sequence(DataSetSequence<I>),
    /// An encapsulated pixel data sequence.
    PixelSequence(PixelFragmentSequence),
}

impl<I> Value<I> {
    /// Construct a DICOM pixel sequence sequence value
    /// from a raw basic offset table and a list of fragments.
    pub fn new_pixel_sequence<T>(offset_table: Vec<u8>, fragments: T) -> Self
    where
        T: Into<C<InMemFragment>>,
    {
        Value::from(PixelFragmentSequence::new(offset_table, fragments))
    }

    /// Construct a full DICOM data set sequence value
    /// from a list of items and length.
    #[inline]
    pub fn new_sequence<T>(items: T, length: Length) -> Self
    where
        T: Into<C<I>>,
    {
        Self::from(DataSetSequence::new(items, length))
    }

    /// Obtain the number of individual values.
    /// A non-empty primitive value counts as 1,
    /// see [`VrTraits::multiplicity`] for backslash-separated text.
    /// In a sequence value, this is the number of items.
    /// In a pixel sequence, this is currently set to 1
    /// regardless of the number of compressed fragments or frames.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Primitive(v) => u32::from(!v.is_empty()),
            Value::Sequence(v) => v.multiplicity(),
            Value::PixelSequence(..) => 1,
        }
    }

    /// Gets a reference to the raw primitive value bytes,
    /// or `None` if this is not a primitive value.
    pub fn primitive(&self) -> Option<&[u8]> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a reference to the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items(&self) -> Option<&[I]> {
        match self {
            Value::Sequence(v) => Some(v.items()),
            _ => None,
        }
    }

    /// Gets a mutable reference to the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items_mut(&mut self) -> Option<&mut C<I>> {
        match self {
            Value::Sequence(v) => Some(v.items_mut()),
            _ => None,
        }
    }

    /// Gets a reference to the encapsulated pixel data,
    /// or `None` if this is not a pixel sequence.
    pub fn fragments(&self) -> Option<&PixelFragmentSequence> {
        match self {
            Value::PixelSequence(v) => Some(v),
            _ => None,
        }
    }

    /// Check whether this is a data set sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }
}

impl<I> From<Vec<u8>> for Value<I> {
    fn from(v: Vec<u8>) -> Self {
        Value::Primitive(v)
    }
}

impl<I> From<DataSetSequence<I>> for Value<I> {
    #[inline]
    fn from(value: DataSetSequence<I>) -> Self {
        Value::Sequence(value)
    }
}

impl<I> From<PixelFragmentSequence> for Value<I> {
    #[inline]
    fn from(value: PixelFragmentSequence) -> Self {
        Value::PixelSequence(value)
    }
}

/// A sequence of complex data set items of type `I`.
#[derive(Debug, Clone)]
pub struct DataSetSequence<I> {
    /// The item sequence.
    items: C<I>,
    /// The sequence length in bytes.
    ///
    /// The value may be [`UNDEFINED`](Length::UNDEFINED)
    /// if the sequence is delimited.
    /// A defined length only tells that the sequence
    /// is to be encoded with an explicit length,
    /// which is recomputed on output.
    length: Length,
}

impl<I> DataSetSequence<I> {
    /// Construct a DICOM data sequence
    /// using a sequence of items and a length.
    ///
    /// **Note:** This function does not validate the `length`
    /// against the items.
    #[inline]
    pub fn new(items: impl Into<C<I>>, length: Length) -> Self {
        DataSetSequence {
            items: items.into(),
            length,
        }
    }

    /// Construct an empty DICOM data sequence,
    /// with the length explicitly defined to zero.
    #[inline]
    pub fn empty() -> Self {
        DataSetSequence {
            items: Default::default(),
            length: Length(0),
        }
    }

    /// Gets a reference to the items of a sequence.
    #[inline]
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Gets a mutable reference to the items of a sequence.
    #[inline]
    pub fn items_mut(&mut self) -> &mut C<I> {
        &mut self.items
    }

    /// Obtain the number of items in the sequence.
    #[inline]
    pub fn multiplicity(&self) -> u32 {
        self.items.len() as u32
    }

    /// Retrieve the sequence of items,
    /// discarding the recorded length information.
    #[inline]
    pub fn into_items(self) -> C<I> {
        self.items
    }

    /// Get the value data's length
    /// as specified by the sequence's data element,
    /// in bytes.
    #[inline]
    pub fn length(&self) -> Length {
        self.length
    }
}

impl<I> HasLength for DataSetSequence<I> {
    #[inline]
    fn length(&self) -> Length {
        self.length
    }
}

impl<I> PartialEq<DataSetSequence<I>> for DataSetSequence<I>
where
    I: PartialEq,
{
    /// This method tests for `self` and `other` values to be equal,
    /// and is used by `==`.
    ///
    /// This implementation only checks for item equality,
    /// disregarding the byte length.
    #[inline]
    fn eq(&self, other: &DataSetSequence<I>) -> bool {
        self.items() == other.items()
    }
}

/// An encapsulated pixel data sequence:
/// the raw basic offset table item value followed by
/// the raw fragments, none of which are decoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PixelFragmentSequence {
    /// The raw value of the basic offset table item.
    offset_table: Vec<u8>,
    /// The sequence of pixel data fragments.
    fragments: C<InMemFragment>,
}

impl PixelFragmentSequence {
    /// Construct a pixel sequence
    /// from a raw basic offset table and a list of fragments.
    #[inline]
    pub fn new(offset_table: Vec<u8>, fragments: impl Into<C<InMemFragment>>) -> Self {
        PixelFragmentSequence {
            offset_table,
            fragments: fragments.into(),
        }
    }

    /// Gets the raw bytes of the basic offset table.
    #[inline]
    pub fn offset_table(&self) -> &[u8] {
        &self.offset_table
    }

    /// Gets a reference to the pixel data fragments.
    ///
    /// This sequence does not include the offset table.
    #[inline]
    pub fn fragments(&self) -> &[InMemFragment] {
        &self.fragments
    }

    /// Decompose the sequence into its constituent parts:
    /// the basic offset table and the pixel data fragments.
    pub fn into_parts(self) -> (Vec<u8>, C<InMemFragment>) {
        (self.offset_table, self.fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::EmptyObject;
    use smallvec::smallvec;

    #[test]
    fn primitive_value_accessors() {
        let v: Value<EmptyObject> = Value::from(b"DOE^JANE".to_vec());
        assert_eq!(v.primitive(), Some(&b"DOE^JANE"[..]));
        assert_eq!(v.multiplicity(), 1);
        assert!(!v.is_sequence());
        assert_eq!(v.items(), None);

        let empty: Value<EmptyObject> = Value::Primitive(vec![]);
        assert_eq!(empty.multiplicity(), 0);
    }

    #[test]
    fn sequence_equality_ignores_length() {
        let a: Value<u8> = Value::new_sequence(smallvec![1, 2], Length::UNDEFINED);
        let b: Value<u8> = Value::new_sequence(smallvec![1, 2], Length(36));
        assert_eq!(a, b);
        assert_eq!(a.multiplicity(), 2);
        assert_eq!(a.items(), Some(&[1u8, 2][..]));
    }

    #[test]
    fn pixel_sequence_parts() {
        let v: Value<EmptyObject> =
            Value::new_pixel_sequence(vec![], smallvec![vec![0x99; 8], vec![0x11; 4]]);
        let frags = v.fragments().unwrap();
        assert!(frags.offset_table().is_empty());
        assert_eq!(frags.fragments().len(), 2);
        assert_eq!(v.multiplicity(), 1);
    }
}
