//! Conversion of in-memory objects into data set tokens.
//!
//! Defined lengths of sequences and items are recomputed from their contents,
//! as are the values of group length elements `(gggg,0000)`.
//! Undefined lengths stay undefined, so that the output keeps
//! the delimitation style of the input.
use crate::mem::{is_implicit_un_sequence, InMemDataSet, InMemElement};
use crate::{LengthOverflowSnafu, WriteError};
use dcmedit_core::header::{DataElementHeader, HasLength, Header};
use dcmedit_core::value::{PixelFragmentSequence, Value};
use dcmedit_core::{Length, Tag};
use dcmedit_encoding::transfer_syntax::{Endianness, TransferSyntax};
use dcmedit_parser::dataset::DataToken;
use snafu::ensure;
use std::collections::BTreeMap;

/// Size of an item header or of a delimiter.
const ITEM_HEADER_LEN: u64 = 8;

/// How the elements at a given level of the data set are encoded.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Encoding {
    explicit_vr: bool,
    endianness: Endianness,
}

impl Encoding {
    fn of(ts: &TransferSyntax) -> Self {
        Encoding {
            explicit_vr: ts.is_explicit_vr(),
            endianness: ts.endianness(),
        }
    }

    /// The encoding of the contents of an element.
    fn inner(self, elem: &InMemElement) -> Self {
        if is_implicit_un_sequence(elem) {
            Encoding {
                explicit_vr: false,
                endianness: Endianness::Little,
            }
        } else {
            self
        }
    }

    fn header_len(self, elem: &InMemElement) -> u64 {
        if !self.explicit_vr || elem.vr().has_short_length() {
            8
        } else {
            12
        }
    }
}

impl InMemDataSet {
    /// Convert the data set into a sequence of tokens
    /// for writing in the given transfer syntax.
    ///
    /// Fails if a recomputed length does not fit in 32 bits
    /// without colliding with the undefined length marker.
    pub fn to_tokens(&self, ts: &TransferSyntax) -> Result<Vec<DataToken>, WriteError> {
        let mut tokens = Vec::new();
        push_dataset_tokens(self, Encoding::of(ts), &mut tokens)?;
        Ok(tokens)
    }
}

fn defined_length(tag: Tag, length: u64) -> Result<Length, WriteError> {
    ensure!(length < u64::from(u32::MAX), LengthOverflowSnafu { tag });
    Ok(Length(length as u32))
}

/// The number of bytes of the given data set when encoded,
/// which is also the length of an item holding it.
fn dataset_len(dataset: &InMemDataSet, enc: Encoding) -> u64 {
    dataset.iter().map(|e| element_len(e, enc)).sum()
}

/// The number of bytes of the element's value when encoded.
fn value_len(elem: &InMemElement, enc: Encoding) -> u64 {
    if elem.tag().is_group_length() && elem.bytes().is_some() {
        return 4;
    }
    match elem.value() {
        Value::Primitive(bytes) => bytes.len() as u64,
        Value::Sequence(seq) => {
            let inner = enc.inner(elem);
            let items: u64 = seq
                .items()
                .iter()
                .map(|item| {
                    let delimiter = if item.length().is_undefined() {
                        ITEM_HEADER_LEN
                    } else {
                        0
                    };
                    ITEM_HEADER_LEN + dataset_len(item, inner) + delimiter
                })
                .sum();
            if seq.length().is_undefined() {
                items + ITEM_HEADER_LEN
            } else {
                items
            }
        }
        Value::PixelSequence(fragments) => pixel_sequence_len(fragments),
    }
}

fn pixel_sequence_len(fragments: &PixelFragmentSequence) -> u64 {
    let offset_table = ITEM_HEADER_LEN + fragments.offset_table().len() as u64;
    let items: u64 = fragments
        .fragments()
        .iter()
        .map(|f| ITEM_HEADER_LEN + f.len() as u64)
        .sum();
    offset_table + items + ITEM_HEADER_LEN
}

fn element_len(elem: &InMemElement, enc: Encoding) -> u64 {
    enc.header_len(elem) + value_len(elem, enc)
}

/// Calculate the value of each group length element in the data set.
fn group_lengths(dataset: &InMemDataSet, enc: Encoding) -> BTreeMap<u16, u64> {
    let mut lengths: BTreeMap<u16, u64> = dataset
        .tags()
        .filter(|tag| tag.is_group_length())
        .map(|tag| (tag.group(), 0))
        .collect();
    if lengths.is_empty() {
        return lengths;
    }
    for elem in dataset.iter().filter(|e| !e.tag().is_group_length()) {
        if let Some(len) = lengths.get_mut(&elem.tag().group()) {
            *len += element_len(elem, enc);
        }
    }
    lengths
}

fn push_dataset_tokens(
    dataset: &InMemDataSet,
    enc: Encoding,
    tokens: &mut Vec<DataToken>,
) -> Result<(), WriteError> {
    let group_lengths = group_lengths(dataset, enc);

    for elem in dataset {
        let tag = elem.tag();
        let vr = elem.vr();
        match elem.value() {
            Value::Primitive(_) if tag.is_group_length() => {
                let length = group_lengths.get(&tag.group()).copied().unwrap_or(0);
                let length = defined_length(tag, length)?.0;
                let bytes = match enc.endianness {
                    Endianness::Little => length.to_le_bytes(),
                    Endianness::Big => length.to_be_bytes(),
                };
                tokens.push(DataToken::ElementHeader(DataElementHeader::new(
                    tag,
                    vr,
                    Length(4),
                )));
                tokens.push(DataToken::PrimitiveValue(bytes.to_vec()));
            }
            Value::Primitive(bytes) => {
                let len = defined_length(tag, bytes.len() as u64)?;
                tokens.push(DataToken::ElementHeader(DataElementHeader::new(tag, vr, len)));
                tokens.push(DataToken::PrimitiveValue(bytes.clone()));
            }
            Value::Sequence(seq) => {
                let inner = enc.inner(elem);
                let len = if seq.length().is_undefined() {
                    Length::UNDEFINED
                } else {
                    defined_length(tag, value_len(elem, enc))?
                };
                tokens.push(DataToken::SequenceStart { tag, vr, len });
                for item in seq.items() {
                    let len = if item.length().is_undefined() {
                        Length::UNDEFINED
                    } else {
                        defined_length(tag, dataset_len(item, inner))?
                    };
                    tokens.push(DataToken::ItemStart { len });
                    push_dataset_tokens(item, inner, tokens)?;
                    tokens.push(DataToken::ItemEnd);
                }
                tokens.push(DataToken::SequenceEnd);
            }
            Value::PixelSequence(fragments) => {
                tokens.push(DataToken::PixelSequenceStart { tag, vr });
                let offset_table = fragments.offset_table();
                tokens.push(DataToken::ItemStart {
                    len: defined_length(tag, offset_table.len() as u64)?,
                });
                if !offset_table.is_empty() {
                    tokens.push(DataToken::OffsetTable(offset_table.to_vec()));
                }
                tokens.push(DataToken::ItemEnd);
                for fragment in fragments.fragments() {
                    tokens.push(DataToken::ItemStart {
                        len: defined_length(tag, fragment.len() as u64)?,
                    });
                    if !fragment.is_empty() {
                        tokens.push(DataToken::ItemValue(fragment.clone()));
                    }
                    tokens.push(DataToken::ItemEnd);
                }
                tokens.push(DataToken::SequenceEnd);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmedit_core::{DataElement, VR};
    use dcmedit_dictionary_std::tags;
    use dcmedit_transfer_syntax_registry::entries::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
    };

    fn sample_item(len: Length) -> InMemDataSet {
        InMemDataSet::from_element_iter_with_len(
            vec![DataElement::new_primitive(
                Tag(0x0008, 0x0100),
                VR::SH,
                &b"T-D3000 "[..],
            )],
            len,
        )
    }

    #[test]
    fn primitive_elements_to_tokens() {
        let obj = InMemDataSet::from_element_iter(vec![
            DataElement::new_primitive(tags::PATIENT_NAME, VR::PN, &b"Doe^John"[..]),
            DataElement::new_primitive(tags::MODALITY, VR::CS, &b"MR"[..]),
        ]);

        let tokens = obj.to_tokens(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(
            tokens,
            vec![
                DataToken::ElementHeader(DataElementHeader::new(
                    tags::MODALITY,
                    VR::CS,
                    Length(2)
                )),
                DataToken::PrimitiveValue(b"MR".to_vec()),
                DataToken::ElementHeader(DataElementHeader::new(
                    tags::PATIENT_NAME,
                    VR::PN,
                    Length(8)
                )),
                DataToken::PrimitiveValue(b"Doe^John".to_vec()),
            ]
        );
    }

    #[test]
    fn defined_sequence_lengths_are_recomputed() {
        // the recorded lengths are stale
        let obj = InMemDataSet::from_element_iter(vec![DataElement::new_sequence(
            Tag(0x0008, 0x2218),
            vec![sample_item(Length(2))],
            Length(4),
        )]);

        let tokens = obj.to_tokens(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(
            tokens,
            vec![
                DataToken::SequenceStart {
                    tag: Tag(0x0008, 0x2218),
                    vr: VR::SQ,
                    len: Length(24),
                },
                DataToken::ItemStart { len: Length(16) },
                DataToken::ElementHeader(DataElementHeader::new(
                    Tag(0x0008, 0x0100),
                    VR::SH,
                    Length(8)
                )),
                DataToken::PrimitiveValue(b"T-D3000 ".to_vec()),
                DataToken::ItemEnd,
                DataToken::SequenceEnd,
            ]
        );
    }

    #[test]
    fn undefined_lengths_stay_undefined() {
        let obj = InMemDataSet::from_element_iter(vec![DataElement::new_sequence(
            Tag(0x0008, 0x2218),
            vec![sample_item(Length::UNDEFINED)],
            Length::UNDEFINED,
        )]);

        let tokens = obj.to_tokens(&IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(
            tokens[0],
            DataToken::SequenceStart {
                tag: Tag(0x0008, 0x2218),
                vr: VR::SQ,
                len: Length::UNDEFINED,
            }
        );
        assert_eq!(tokens[1], DataToken::ItemStart { len: Length::UNDEFINED });
    }

    #[test]
    fn group_lengths_are_recomputed() {
        let obj = InMemDataSet::from_element_iter(vec![
            // stale group length
            DataElement::new_primitive(Tag(0x0008, 0x0000), VR::UL, vec![0xFF; 4]),
            DataElement::new_primitive(tags::MODALITY, VR::CS, &b"MR"[..]),
            // defined length sequence in the same group: 12 + 8 + (8 + 8)
            DataElement::new_sequence(
                Tag(0x0008, 0x2218),
                vec![sample_item(Length(16))],
                Length(24),
            ),
            DataElement::new_primitive(tags::PATIENT_NAME, VR::PN, &b"Doe^John"[..]),
        ]);

        let tokens = obj.to_tokens(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        // (0008,0060): 8 + 2, (0008,2218): 12 + 24
        assert_eq!(tokens[1], DataToken::PrimitiveValue(vec![46, 0, 0, 0]));

        let tokens = obj.to_tokens(&EXPLICIT_VR_BIG_ENDIAN).unwrap();
        assert_eq!(tokens[1], DataToken::PrimitiveValue(vec![0, 0, 0, 46]));

        // implicit VR headers are all 8 bytes long
        let tokens = obj.to_tokens(&IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(tokens[1], DataToken::PrimitiveValue(vec![42, 0, 0, 0]));
    }

    #[test]
    fn implicit_un_sequence_contents_use_short_headers() {
        let obj = InMemDataSet::from_element_iter(vec![DataElement::new(
            Tag(0x0009, 0x1010),
            VR::UN,
            Value::new_sequence(
                vec![InMemDataSet::from_element_iter_with_len(
                    vec![DataElement::new_primitive(
                        Tag(0x0009, 0x1011),
                        VR::OB,
                        vec![1, 2],
                    )],
                    Length(10),
                )],
                Length::UNDEFINED,
            ),
        )]);

        let tokens = obj.to_tokens(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        // an OB header would take 12 bytes in explicit VR
        assert_eq!(tokens[1], DataToken::ItemStart { len: Length(10) });
    }

    #[test]
    fn encapsulated_pixel_data_to_tokens() {
        let obj = InMemDataSet::from_element_iter(vec![DataElement::new_pixel_sequence(
            tags::PIXEL_DATA,
            VR::OB,
            PixelFragmentSequence::new(vec![], vec![vec![], vec![0x99, 0x88]]),
        )]);

        let tokens = obj.to_tokens(&EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(
            tokens,
            vec![
                DataToken::PixelSequenceStart {
                    tag: tags::PIXEL_DATA,
                    vr: VR::OB,
                },
                DataToken::ItemStart { len: Length(0) },
                DataToken::ItemEnd,
                DataToken::ItemStart { len: Length(0) },
                DataToken::ItemEnd,
                DataToken::ItemStart { len: Length(2) },
                DataToken::ItemValue(vec![0x99, 0x88]),
                DataToken::ItemEnd,
                DataToken::SequenceEnd,
            ]
        );
    }

    #[test]
    fn oversized_item_is_rejected() {
        let length = defined_length(tags::PIXEL_DATA, u64::from(u32::MAX));
        assert!(matches!(
            length,
            Err(WriteError::LengthOverflow {
                tag: tags::PIXEL_DATA,
                ..
            })
        ));
        assert_eq!(
            defined_length(tags::PIXEL_DATA, 0xFFFF_FFFE).unwrap(),
            Length(0xFFFF_FFFE)
        );
    }
}
