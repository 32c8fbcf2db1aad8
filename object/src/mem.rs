//! This module contains the implementation for an in-memory DICOM object.
//!
//! [`InMemDataSet`] is an ordered collection of data elements,
//! keyed by tag, which owns nested sequence items and
//! encapsulated pixel data fragments.
//! It is built from a stream of [data set tokens](DataToken)
//! and turned back into one by [`to_tokens`](InMemDataSet::to_tokens).

use dcmedit_core::header::{HasLength, Header};
use dcmedit_core::value::{InMemFragment, PixelFragmentSequence, Value};
use dcmedit_core::{DataElement, Length, Tag, VR};
use dcmedit_encoding::transfer_syntax::TransferSyntax;
use dcmedit_parser::dataset::read::Error as ParserError;
use dcmedit_parser::dataset::{DataSetReader, DataSetReaderOptions, DataToken};
use snafu::{OptionExt, ResultExt};
use std::collections::{btree_map, BTreeMap};
use std::io::Read;

use crate::{
    AccessError, CreateParserSnafu, NoSuchDataElementTagSnafu, PrematureEndSnafu, ReadError,
    ReadTokenSnafu, UnexpectedTokenSnafu,
};

/// A full in-memory DICOM data element.
pub type InMemElement = DataElement<InMemDataSet>;

/// A DICOM object that is fully contained in memory.
///
/// Elements are kept in ascending tag order, with one element per tag.
#[derive(Debug, Clone)]
pub struct InMemDataSet {
    /// the element map
    entries: BTreeMap<Tag, InMemElement>,
    /// the length of the object as an item, as it was read
    len: Length,
}

impl PartialEq for InMemDataSet {
    // This implementation ignores the data set's length
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl HasLength for InMemDataSet {
    fn length(&self) -> Length {
        self.len
    }
}

impl Default for InMemDataSet {
    fn default() -> Self {
        InMemDataSet::new_empty()
    }
}

impl InMemDataSet {
    /// Create a new empty DICOM object,
    /// which would be written as an item of undefined length.
    pub fn new_empty() -> Self {
        InMemDataSet {
            entries: BTreeMap::new(),
            len: Length::UNDEFINED,
        }
    }

    /// Construct a DICOM object from an iterator of structured elements.
    ///
    /// A later element replaces an earlier one with the same tag.
    pub fn from_element_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = InMemElement>,
    {
        InMemDataSet {
            entries: iter.into_iter().map(|e| (e.tag(), e)).collect(),
            len: Length::UNDEFINED,
        }
    }

    /// Construct a DICOM object from an iterator of structured elements,
    /// keeping the given item length.
    pub fn from_element_iter_with_len<I>(iter: I, len: Length) -> Self
    where
        I: IntoIterator<Item = InMemElement>,
    {
        InMemDataSet {
            len,
            ..InMemDataSet::from_element_iter(iter)
        }
    }

    /// Read a data set from the given source,
    /// in the given transfer syntax,
    /// until the source ends.
    pub fn read_dataset_with_ts_options<S>(
        from: S,
        ts: &TransferSyntax,
        options: DataSetReaderOptions,
    ) -> Result<Self, ReadError>
    where
        S: Read,
    {
        let mut dataset =
            DataSetReader::new_with_ts_options(from, ts, options).context(CreateParserSnafu)?;
        InMemDataSet::build_object(&mut dataset, false, Length::UNDEFINED)
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element(&self, tag: Tag) -> Result<&InMemElement, AccessError> {
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve a particular DICOM element by its tag,
    /// or `None` if it is not present.
    pub fn get(&self, tag: Tag) -> Option<&InMemElement> {
        self.entries.get(&tag)
    }

    /// Insert a data element to the object, replacing (and returning) any
    /// previous element of the same attribute.
    pub fn put(&mut self, elt: InMemElement) -> Option<InMemElement> {
        self.entries.insert(elt.tag(), elt)
    }

    /// Remove a DICOM element by its tag,
    /// reporting whether it was present.
    pub fn remove_element(&mut self, tag: Tag) -> bool {
        self.entries.remove(&tag).is_some()
    }

    /// Remove a DICOM element by its tag,
    /// returning the element if it was present.
    pub fn take_element(&mut self, tag: Tag) -> Result<InMemElement, AccessError> {
        self.entries
            .remove(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Obtain an iterator over the elements of this object,
    /// in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = &InMemElement> + '_ {
        self.into_iter()
    }

    /// Obtain an iterator over the tags of this object,
    /// in ascending order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.entries.keys().copied()
    }

    /// The number of elements at the root of this object.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this object has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build an object by consuming a data set parser.
    ///
    /// When `in_item` is true, the object ends at the next item end token.
    /// Nesting is bounded by the depth limit of the parser.
    pub(crate) fn build_object<I>(
        dataset: &mut I,
        in_item: bool,
        len: Length,
    ) -> Result<Self, ReadError>
    where
        I: ?Sized + Iterator<Item = Result<DataToken, ParserError>>,
    {
        let mut entries: BTreeMap<Tag, InMemElement> = BTreeMap::new();
        // perform a structured parsing of incoming tokens
        while let Some(token) = dataset.next() {
            let elem = match token.context(ReadTokenSnafu)? {
                DataToken::PixelSequenceStart { tag, vr } => {
                    let fragments = InMemDataSet::build_encapsulated_data(&mut *dataset)?;
                    DataElement::new_pixel_sequence(tag, vr, fragments)
                }
                DataToken::ElementHeader(header) => {
                    // fetch respective value
                    let value = match dataset.next() {
                        Some(token) => match token.context(ReadTokenSnafu)? {
                            DataToken::PrimitiveValue(v) => v,
                            token => {
                                return UnexpectedTokenSnafu {
                                    token: Box::new(token),
                                }
                                .fail();
                            }
                        },
                        None => return PrematureEndSnafu.fail(),
                    };
                    DataElement::new(header.tag, header.vr, Value::Primitive(value))
                }
                DataToken::SequenceStart { tag, vr, len } => {
                    let items = InMemDataSet::build_sequence(&mut *dataset)?;
                    DataElement::new(tag, vr, Value::new_sequence(items, len))
                }
                DataToken::ItemEnd if in_item => {
                    // end of item, leave now
                    return Ok(InMemDataSet { entries, len });
                }
                token => {
                    return UnexpectedTokenSnafu {
                        token: Box::new(token),
                    }
                    .fail()
                }
            };
            match entries.entry(elem.tag()) {
                btree_map::Entry::Occupied(mut e) => {
                    tracing::warn!(
                        "Duplicate data element {}, keeping the last one",
                        elem.tag()
                    );
                    e.insert(elem);
                }
                btree_map::Entry::Vacant(e) => {
                    e.insert(elem);
                }
            }
        }

        if in_item {
            return PrematureEndSnafu.fail();
        }
        Ok(InMemDataSet { entries, len })
    }

    /// Build an encapsulated pixel data by collecting all fragments into an
    /// in-memory DICOM value.
    fn build_encapsulated_data<I>(dataset: &mut I) -> Result<PixelFragmentSequence, ReadError>
    where
        I: ?Sized + Iterator<Item = Result<DataToken, ParserError>>,
    {
        // continue fetching tokens to retrieve:
        // - the offset table
        // - the various compressed fragments
        let mut offset_table = Vec::new();
        let mut fragments: Vec<InMemFragment> = Vec::new();
        // the first item holds the offset table
        let mut first = true;

        while let Some(token) = dataset.next() {
            match token.context(ReadTokenSnafu)? {
                DataToken::ItemStart { .. } => {
                    if !first {
                        // empty fragments have no value token
                        fragments.push(Vec::new());
                    }
                }
                DataToken::OffsetTable(table) => {
                    offset_table = table;
                }
                DataToken::ItemValue(data) => match fragments.last_mut() {
                    Some(fragment) => *fragment = data,
                    None => fragments.push(data),
                },
                DataToken::ItemEnd => {
                    first = false;
                }
                DataToken::SequenceEnd => {
                    return Ok(PixelFragmentSequence::new(offset_table, fragments));
                }
                token => {
                    return UnexpectedTokenSnafu {
                        token: Box::new(token),
                    }
                    .fail()
                }
            };
        }

        PrematureEndSnafu.fail()
    }

    /// Build a DICOM sequence by consuming a data set parser.
    fn build_sequence<I>(dataset: &mut I) -> Result<Vec<InMemDataSet>, ReadError>
    where
        I: ?Sized + Iterator<Item = Result<DataToken, ParserError>>,
    {
        let mut items: Vec<InMemDataSet> = Vec::new();
        while let Some(token) = dataset.next() {
            match token.context(ReadTokenSnafu)? {
                DataToken::ItemStart { len } => {
                    items.push(InMemDataSet::build_object(&mut *dataset, true, len)?);
                }
                DataToken::SequenceEnd => {
                    return Ok(items);
                }
                token => {
                    return UnexpectedTokenSnafu {
                        token: Box::new(token),
                    }
                    .fail()
                }
            };
        }

        // iterator fully consumed without a sequence delimiter
        PrematureEndSnafu.fail()
    }
}

impl<'a> IntoIterator for &'a InMemDataSet {
    type Item = &'a InMemElement;
    type IntoIter = btree_map::Values<'a, Tag, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl IntoIterator for InMemDataSet {
    type Item = InMemElement;
    type IntoIter = btree_map::IntoValues<Tag, InMemElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl Extend<InMemElement> for InMemDataSet {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = InMemElement>,
    {
        self.entries.extend(iter.into_iter().map(|e| (e.tag(), e)));
    }
}

/// Whether the element is a sequence whose items are encoded
/// in implicit VR little endian regardless of the transfer syntax.
pub(crate) fn is_implicit_un_sequence(elem: &InMemElement) -> bool {
    elem.vr() == VR::UN && elem.length().is_undefined() && elem.value().is_sequence()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadError;
    use dcmedit_core::value::DataSetSequence;
    use dcmedit_dictionary_std::tags;
    use dcmedit_parser::dataset::OddLength;
    use dcmedit_transfer_syntax_registry::entries::{
        EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };

    #[test]
    fn inmem_object_compare() {
        let mut obj1 = InMemDataSet::new_empty();
        let mut obj2 = InMemDataSet::new_empty();
        assert_eq!(obj1, obj2);
        let empty_patient_name = DataElement::empty(tags::PATIENT_NAME, VR::PN);
        obj1.put(empty_patient_name.clone());
        assert_ne!(obj1, obj2);
        obj2.put(empty_patient_name);
        assert_eq!(obj1, obj2);
    }

    #[test]
    fn inmem_object_get_and_take() {
        let another_patient_name =
            DataElement::new_primitive(tags::PATIENT_NAME, VR::PN, &b"Doe^Robert"[..]);
        let mut obj = InMemDataSet::from_element_iter(vec![another_patient_name.clone()]);

        assert_eq!(obj.element(tags::PATIENT_NAME).unwrap(), &another_patient_name);
        assert!(obj.get(tags::PATIENT_ID).is_none());
        assert!(matches!(
            obj.element(tags::PATIENT_ID),
            Err(AccessError::NoSuchDataElementTag { .. })
        ));

        let elem = obj.take_element(tags::PATIENT_NAME).unwrap();
        assert_eq!(elem, another_patient_name);
        assert!(obj.is_empty());
        assert!(!obj.remove_element(tags::PATIENT_NAME));
    }

    #[test]
    fn elements_are_kept_in_tag_order() {
        let mut obj = InMemDataSet::new_empty();
        obj.put(DataElement::new_primitive(tags::PATIENT_ID, VR::LO, &b"1234"[..]));
        obj.put(DataElement::new_primitive(tags::MODALITY, VR::CS, &b"MR"[..]));
        obj.put(DataElement::new_primitive(tags::PATIENT_NAME, VR::PN, &b"Doe^John"[..]));
        let order: Vec<_> = obj.tags().collect();
        assert_eq!(
            order,
            vec![tags::MODALITY, tags::PATIENT_NAME, tags::PATIENT_ID]
        );
    }

    #[test]
    fn build_object_with_sequence() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0008,0060) Modality, CS, "MR"
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
            // (0008,2218) AnatomicRegionSequence, SQ, undefined length
            0x08, 0x00, 0x18, 0x22, b'S', b'Q', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            // item, length 24
            0xfe, 0xff, 0x00, 0xe0, 0x18, 0x00, 0x00, 0x00,
            // (0008,0100) CodeValue, SH, "T-D3000"
            0x08, 0x00, 0x00, 0x01, b'S', b'H', 0x08, 0x00,
            b'T', b'-', b'D', b'3', b'0', b'0', b'0', b' ',
            // (0008,0102) CodingSchemeDesignator, SH, empty
            0x08, 0x00, 0x02, 0x01, b'S', b'H', 0x00, 0x00,
            // sequence delimiter
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
            // (0010,0010) PatientName, PN, "Doe^John"
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00,
            b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
        ];

        let obj = InMemDataSet::read_dataset_with_ts_options(
            DATA,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Default::default(),
        )
        .unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(
            obj.element(tags::MODALITY).unwrap().bytes(),
            Some(&b"MR"[..])
        );
        let seq = obj.element(Tag(0x0008, 0x2218)).unwrap();
        assert_eq!(seq.vr(), VR::SQ);
        assert!(seq.length().is_undefined());
        let items = seq.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].length(), Length(18));
        assert_eq!(
            items[0].element(Tag(0x0008, 0x0100)).unwrap().bytes(),
            Some(&b"T-D3000 "[..])
        );
        assert_eq!(
            items[0].element(Tag(0x0008, 0x0102)).unwrap().bytes(),
            Some(&[][..])
        );
        assert_eq!(
            obj.element(tags::PATIENT_NAME).unwrap().bytes(),
            Some(&b"Doe^John"[..])
        );

        let expected_item = InMemDataSet::from_element_iter(vec![
            DataElement::new_primitive(Tag(0x0008, 0x0100), VR::SH, &b"T-D3000 "[..]),
            DataElement::empty(Tag(0x0008, 0x0102), VR::SH),
        ]);
        assert_eq!(
            seq.value(),
            &Value::Sequence(DataSetSequence::new(vec![expected_item], Length::UNDEFINED))
        );
    }

    #[test]
    fn build_encapsulated_pixel_data_with_empty_fragment() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (7FE0,0010) PixelData, OB, undefined length
            0xe0, 0x7f, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
            // offset table, 4 bytes
            0xfe, 0xff, 0x00, 0xe0, 0x04, 0x00, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
            // empty fragment
            0xfe, 0xff, 0x00, 0xe0, 0x00, 0x00, 0x00, 0x00,
            // fragment, 4 bytes
            0xfe, 0xff, 0x00, 0xe0, 0x04, 0x00, 0x00, 0x00,
            0x99, 0x88, 0x77, 0x66,
            // sequence delimiter
            0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00,
        ];

        let obj = InMemDataSet::read_dataset_with_ts_options(
            DATA,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Default::default(),
        )
        .unwrap();

        let pixel_data = obj.element(tags::PIXEL_DATA).unwrap();
        assert_eq!(pixel_data.vr(), VR::OB);
        let fragments = pixel_data.value().fragments().unwrap();
        assert_eq!(fragments.offset_table(), &[0, 0, 0, 0]);
        assert_eq!(
            fragments.fragments(),
            &[Vec::new(), vec![0x99_u8, 0x88, 0x77, 0x66]]
        );
    }

    #[test]
    fn duplicate_tags_keep_the_last_element() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0010,0020) PatientID, implicit VR, "AB"
            0x10, 0x00, 0x20, 0x00, 0x02, 0x00, 0x00, 0x00, b'A', b'B',
            // (0010,0020) PatientID, implicit VR, "CD"
            0x10, 0x00, 0x20, 0x00, 0x02, 0x00, 0x00, 0x00, b'C', b'D',
        ];

        let obj = InMemDataSet::read_dataset_with_ts_options(
            DATA,
            &IMPLICIT_VR_LITTLE_ENDIAN,
            Default::default(),
        )
        .unwrap();
        assert_eq!(obj.len(), 1);
        let elem = obj.element(tags::PATIENT_ID).unwrap();
        assert_eq!(elem.vr(), VR::LO);
        assert_eq!(elem.bytes(), Some(&b"CD"[..]));
    }

    #[test]
    fn odd_lengths_follow_the_options() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0010,0020) PatientID, LO, "ABC"
            0x10, 0x00, 0x20, 0x00, b'L', b'O', 0x03, 0x00, b'A', b'B', b'C',
        ];

        let err = InMemDataSet::read_dataset_with_ts_options(
            DATA,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Default::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReadError::ReadToken { .. }));

        let obj = InMemDataSet::read_dataset_with_ts_options(
            DATA,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            DataSetReaderOptions::default().odd_length(OddLength::Accept),
        )
        .unwrap();
        assert_eq!(
            obj.element(tags::PATIENT_ID).unwrap().bytes(),
            Some(&b"ABC"[..])
        );
    }

    #[test]
    fn truncated_value_is_an_error() {
        #[rustfmt::skip]
        static DATA: &[u8] = &[
            // (0010,0010) PatientName, PN, length 8 but only 4 bytes
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00, b'D', b'o', b'e', b'^',
        ];

        let err = InMemDataSet::read_dataset_with_ts_options(
            DATA,
            &EXPLICIT_VR_LITTLE_ENDIAN,
            Default::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReadError::ReadToken { .. }));
    }
}
