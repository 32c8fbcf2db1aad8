//! The tag mutator: validated attribute rewrites over a file object.
//!
//! Each [`TagEdit`] names an attribute by its compact tag (`GGGGEEEE`)
//! and carries the textual rendition of its new value.
//! [`TagMutator::apply`] plans every edit first,
//! and only touches the data set once all of them were found valid.
use dcmedit_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmedit_core::header::{Header, ParseTagError};
use dcmedit_core::value::repr::ValueError;
use dcmedit_core::value::{ValueKind, C};
use dcmedit_core::{DataElement, Length, Tag, VR};
use dcmedit_dictionary_std::{tags, StandardDataDictionary};
use dcmedit_encoding::encode::primitive_value::{encode_text_value, EncodeValueError};
use dcmedit_encoding::text::SpecificCharacterSet;
use dcmedit_encoding::transfer_syntax::Endianness;
use dcmedit_object::{DefaultDicomObject, InMemDataSet, InMemElement};
use snafu::{ensure, Backtrace, ResultExt, Snafu};
use std::fmt;
use tracing::{debug, warn};

/// An error which may occur when applying a list of edits.
///
/// The data set is left untouched whenever one of these is returned.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum EditError {
    /// The tag is not given as exactly 8 hexadecimal digits.
    #[snafu(display("Edit #{}: malformed tag `{}`", index, raw_tag))]
    MalformedTag {
        index: usize,
        raw_tag: String,
        #[snafu(backtrace)]
        source: ParseTagError,
    },
    /// The tag belongs to a group which can not be edited.
    #[snafu(display("Edit #{}: attribute {} can not be edited", index, tag))]
    ProtectedTag {
        index: usize,
        tag: Tag,
        backtrace: Backtrace,
    },
    /// The value is not admissible for the attribute.
    #[snafu(display("Edit #{}: invalid value for {} ({})", index, raw_tag, vr))]
    InvalidValue {
        index: usize,
        raw_tag: String,
        vr: VR,
        source: InvalidValueReason,
    },
}

/// Why a value was rejected.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum InvalidValueReason {
    #[snafu(display("value does not fit the representation"))]
    Representation { source: ValueError },
    #[snafu(display("value multiplicity not admitted by the attribute"))]
    Multiplicity { source: ValueError },
    #[snafu(display("value could not be encoded"))]
    Encode {
        #[snafu(backtrace)]
        source: EncodeValueError,
    },
}

pub type Result<T, E = EditError> = std::result::Result<T, E>;

/// A single attribute rewrite, as given by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEdit {
    /// The attribute tag as 8 hexadecimal digits, e.g. `00100010`
    pub tag: String,
    /// The textual rendition of the new value,
    /// multiple values separated by backslashes
    pub value: String,
}

impl TagEdit {
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        TagEdit {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for TagEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, self.value)
    }
}

/// Which rule decided the value representation of an edited attribute.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum VrSource {
    /// The attribute was already in the data set.
    Existing,
    /// The data dictionary knows the attribute.
    Dictionary,
    /// Neither, so the name based heuristic was used.
    Fallback,
}

/// The outcome of one edit.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedEdit {
    pub tag: Tag,
    pub vr: VR,
    pub vr_source: VrSource,
    /// Whether an attribute was replaced (`false` if inserted)
    pub replaced: bool,
}

/// The outcome of a successful [`TagMutator::apply`], one entry per edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditReport {
    pub edits: Vec<AppliedEdit>,
}

impl EditReport {
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Applies [`TagEdit`]s to the main data set of a file object.
///
/// # Example
///
/// ```no_run
/// # use dcmedit::{TagEdit, TagMutator};
/// # fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let mut obj = dcmedit_object::open_file("0001.dcm")?;
/// let report = TagMutator::new().apply(&mut obj, &[TagEdit::new("00100010", "DOE^JOHN")])?;
/// assert_eq!(report.len(), 1);
/// obj.write_to_file("0001.dcm")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct TagMutator<D = StandardDataDictionary> {
    dict: D,
}

impl TagMutator {
    /// Create a mutator backed by the standard data dictionary.
    pub fn new() -> Self {
        TagMutator {
            dict: StandardDataDictionary,
        }
    }
}

impl<D> TagMutator<D>
where
    D: DataDictionary,
{
    /// Create a mutator which resolves value representations
    /// and multiplicities with the given dictionary.
    pub fn with_dictionary(dict: D) -> Self {
        TagMutator { dict }
    }

    /// Validate all edits, then apply them in order.
    ///
    /// On error, `obj` is left as it was
    /// and the error names the index of the failing edit.
    pub fn apply(&self, obj: &mut DefaultDicomObject, edits: &[TagEdit]) -> Result<EditReport> {
        let endianness = obj.endianness();
        let planned = self.plan(obj, edits, endianness)?;

        let mut report = EditReport::default();
        for (element, vr_source) in planned {
            let tag = element.tag();
            let vr = element.vr();
            let replaced = obj.put(element).is_some();
            debug!(
                "{} {} as {} ({:?})",
                if replaced { "Replaced" } else { "Inserted" },
                tag,
                vr,
                vr_source
            );
            report.edits.push(AppliedEdit {
                tag,
                vr,
                vr_source,
                replaced,
            });
        }
        Ok(report)
    }

    fn plan(
        &self,
        obj: &InMemDataSet,
        edits: &[TagEdit],
        endianness: Endianness,
    ) -> Result<Vec<(InMemElement, VrSource)>> {
        let mut charset = dataset_charset(obj.get(tags::SPECIFIC_CHARACTER_SET));
        let mut planned: Vec<(InMemElement, VrSource)> = Vec::with_capacity(edits.len());

        for (index, edit) in edits.iter().enumerate() {
            let tag = Tag::from_hex(&edit.tag).context(MalformedTagSnafu {
                index,
                raw_tag: &edit.tag,
            })?;
            ensure!(!is_protected(tag), ProtectedTagSnafu { index, tag });

            // an earlier edit of the same tag takes the place of the stored one
            let current_vr = planned
                .iter()
                .rev()
                .find(|(e, _)| e.tag() == tag)
                .map(|(e, _)| e.vr())
                .or_else(|| obj.get(tag).map(|e| e.vr()));
            let (vr, vr_source) = self.resolve_vr(tag, current_vr);

            let element = self
                .encode(tag, vr, &edit.value, endianness, charset)
                .context(InvalidValueSnafu {
                    index,
                    raw_tag: &edit.tag,
                    vr,
                })?;

            if tag == tags::SPECIFIC_CHARACTER_SET {
                charset = dataset_charset(Some(&element));
            }
            planned.push((element, vr_source));
        }
        Ok(planned)
    }

    /// Decide the value representation of an edited attribute.
    fn resolve_vr(&self, tag: Tag, current: Option<VR>) -> (VR, VrSource) {
        if let Some(vr) = current.filter(|vr| *vr != VR::UN) {
            return (vr, VrSource::Existing);
        }
        if let Some(entry) = self.dict.by_tag(tag) {
            return (entry.vr().relaxed(), VrSource::Dictionary);
        }
        (fallback_vr(tag), VrSource::Fallback)
    }

    fn encode(
        &self,
        tag: Tag,
        vr: VR,
        text: &str,
        endianness: Endianness,
        charset: SpecificCharacterSet,
    ) -> Result<InMemElement, InvalidValueReason> {
        let traits = vr.traits();
        traits.validate(text).context(RepresentationSnafu)?;

        if let Some(entry) = self.dict.by_tag(tag) {
            let vm = entry.vm();
            let count = traits.multiplicity(text);
            if !vm.admits(count) {
                return Err(ValueError::Multiplicity {
                    count,
                    vm: vm.to_string(),
                })
                .context(MultiplicitySnafu);
            }
        }

        if traits.kind == ValueKind::Sequence {
            // only the empty value gets this far
            let items: C<InMemDataSet> = C::new();
            return Ok(DataElement::new_sequence(tag, items, Length(0)));
        }
        let bytes = encode_text_value(vr, text, endianness, &charset).context(EncodeSnafu)?;
        Ok(DataElement::new_primitive(tag, vr, bytes))
    }
}

/// Groups which are owned by the codec:
/// command group lengths, the file meta group and item delimitation.
fn is_protected(tag: Tag) -> bool {
    matches!(tag.group(), 0x0000 | 0x0002 | 0xFFFE)
}

/// The value representation of an attribute
/// which is neither in the data set nor in the dictionary.
/// Only the patient name and the study, series and instance UIDs
/// have a fixed one, everything else is LO.
pub fn fallback_vr(tag: Tag) -> VR {
    if tag == tags::PATIENT_NAME {
        VR::PN
    } else if tag == tags::STUDY_INSTANCE_UID
        || tag == tags::SERIES_INSTANCE_UID
        || tag == tags::SOP_INSTANCE_UID
    {
        VR::UI
    } else {
        VR::LO
    }
}

fn dataset_charset(element: Option<&InMemElement>) -> SpecificCharacterSet {
    let Some(bytes) = element.and_then(|e| e.bytes()) else {
        return SpecificCharacterSet::Default;
    };
    SpecificCharacterSet::from_element_value(bytes).unwrap_or_else(|| {
        warn!(
            "Unsupported specific character set {:?}, assuming the default repertoire",
            String::from_utf8_lossy(bytes)
        );
        SpecificCharacterSet::Default
    })
}
