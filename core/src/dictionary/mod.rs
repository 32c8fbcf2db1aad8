//! Core data element dictionary types.
//!
//! A dictionary maps a tag (or a keyword) to a record
//! with the attribute's typical value representation
//! and value multiplicity.
//! The standard dictionary lives in `dcmedit-dictionary-std`.

pub mod stub;

pub use self::stub::StubDataDictionary;

use std::fmt;
use std::str::FromStr;

use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};

use crate::{Tag, VR};

/// Specification of a range of tags pertaining to an attribute.
/// Very often, the dictionary of attributes indicates a unique
/// group part and element part `(group,elem)`,
/// but occasionally an attribute may cover
/// a range of groups or elements instead.
/// For example,
/// _Overlay Data_ (60xx,3000) has more than one possible tag,
/// since it is part of a repeating group.
/// Moreover, a unique variant is defined for group length tags
/// and another one for private creator tags.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TagRange {
    /// Only a specific tag
    Single(Tag),
    /// The two rightmost digits of the _group_ portion are open:
    /// `(GGxx,EEEE)`
    Group100(Tag),
    /// The two rightmost digits of the _element_ portion are open:
    /// `(GGGG,EExx)`
    Element100(Tag),
    /// Generic group length tag,
    /// refers to any attribute of the form `(GGGG,0000)`,
    /// save for _File Meta Information Group Length_ (0002,0000),
    /// which has its own record.
    GroupLength,
    /// Generic private creator tag,
    /// refers to any tag from (GGGG,0010) to (GGGG,00FF),
    /// where `GGGG` is an odd number.
    PrivateCreator,
}

impl TagRange {
    /// Retrieve the inner tag representation of this range.
    ///
    /// Open components are zeroed out.
    /// Returns `Tag(0x0000, 0x0000)` for a group length range
    /// and `Tag(0x0009, 0x0010)` for a private creator range.
    pub fn inner(self) -> Tag {
        match self {
            TagRange::Single(tag) => tag,
            TagRange::Group100(tag) => tag,
            TagRange::Element100(tag) => tag,
            TagRange::GroupLength => Tag(0x0000, 0x0000),
            TagRange::PrivateCreator => Tag(0x0009, 0x0010),
        }
    }

    /// Check whether the given tag falls in this range.
    pub fn contains(self, tag: Tag) -> bool {
        match self {
            TagRange::Single(t) => t == tag,
            TagRange::Group100(t) => t.1 == tag.1 && t.0 == tag.0 & 0xFF00,
            TagRange::Element100(t) => t.0 == tag.0 && t.1 == tag.1 & 0xFF00,
            TagRange::GroupLength => tag.1 == 0x0000,
            TagRange::PrivateCreator => tag.is_private() && (0x0010..=0x00FF).contains(&tag.1),
        }
    }
}

/// An error returned when parsing an invalid tag range.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum TagRangeParseError {
    #[snafu(display("Not enough tag components, expected tag (group, element)"))]
    MissingTag { backtrace: Backtrace },
    #[snafu(display("Not enough tag components, expected tag element"))]
    MissingTagElement { backtrace: Backtrace },
    #[snafu(display(
        "tag component `group` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidGroupLength { got: usize, backtrace: Backtrace },
    #[snafu(display(
        "tag component `element` has an invalid length: got {} but must be 4",
        got
    ))]
    InvalidElementLength { got: usize, backtrace: Backtrace },
    #[snafu(display("unsupported tag range"))]
    UnsupportedTagRange { backtrace: Backtrace },
    #[snafu(display("invalid tag component `group`"))]
    InvalidTagGroup {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
    #[snafu(display("invalid tag component `element`"))]
    InvalidTagElement {
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },
}

impl FromStr for TagRange {
    type Err = TagRangeParseError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('(') && s.ends_with(')') {
            s = &s[1..s.len() - 1];
        }
        let mut parts = s.split(',');
        let group = parts.next().context(MissingTagSnafu)?;
        let elem = parts.next().context(MissingTagElementSnafu)?;
        ensure!(
            group.len() == 4,
            InvalidGroupLengthSnafu { got: group.len() }
        );
        ensure!(
            elem.len() == 4,
            InvalidElementLengthSnafu { got: elem.len() }
        );

        match (&group.as_bytes()[2..], &elem.as_bytes()[2..]) {
            (b"xx", b"xx") => UnsupportedTagRangeSnafu.fail(),
            (b"xx", _) => {
                let group =
                    u16::from_str_radix(&group[..2], 16).context(InvalidTagGroupSnafu)? << 8;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Group100(Tag(group, elem)))
            }
            (_, b"xx") => {
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem =
                    u16::from_str_radix(&elem[..2], 16).context(InvalidTagElementSnafu)? << 8;
                Ok(TagRange::Element100(Tag(group, elem)))
            }
            (_, _) => {
                let group = u16::from_str_radix(group, 16).context(InvalidTagGroupSnafu)?;
                let elem = u16::from_str_radix(elem, 16).context(InvalidTagElementSnafu)?;
                Ok(TagRange::Single(Tag(group, elem)))
            }
        }
    }
}

/// A "virtual" value representation (VR) descriptor
/// which extends the standard enumeration with context-dependent VRs.
///
/// As an example, the _Pixel Data_ attribute
/// can have a value representation of either [`OB`](VR::OB) or [`OW`](VR::OW).
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum VirtualVr {
    /// The value representation is exactly known
    /// and does not depend on context.
    Exact(VR),
    /// A pixel sample value which is either
    /// [`US`](VR::US) or [`SS`](VR::SS),
    /// depending on _Pixel Representation_.
    Xs,
    /// Overlay data, either [`OB`](VR::OB) or [`OW`](VR::OW).
    Ox,
    /// Pixel data, either [`OB`](VR::OB) or [`OW`](VR::OW).
    Px,
    /// LUT data, either [`US`](VR::US) or [`OW`](VR::OW).
    Lt,
}

impl From<VR> for VirtualVr {
    fn from(value: VR) -> Self {
        VirtualVr::Exact(value)
    }
}

impl VirtualVr {
    /// Return the underlying value representation
    /// in the case that it can be unambiguously defined without context.
    pub fn exact(self) -> Option<VR> {
        match self {
            VirtualVr::Exact(vr) => Some(vr),
            _ => None,
        }
    }

    /// Return the underlying value representation,
    /// making a relaxed conversion if it cannot be
    /// accurately resolved without context.
    ///
    /// - [`Xs`](VirtualVr::Xs) is relaxed to [`US`](VR::US)
    /// - [`Ox`](VirtualVr::Ox) is relaxed to [`OW`](VR::OW)
    /// - [`Px`](VirtualVr::Px) is relaxed to [`OW`](VR::OW)
    /// - [`Lt`](VirtualVr::Lt) is relaxed to [`OW`](VR::OW)
    pub fn relaxed(self) -> VR {
        match self {
            VirtualVr::Exact(vr) => vr,
            VirtualVr::Xs => VR::US,
            VirtualVr::Ox => VR::OW,
            VirtualVr::Px => VR::OW,
            VirtualVr::Lt => VR::OW,
        }
    }
}

/// Value multiplicity of an attribute:
/// how many backslash-separated values it may hold.
///
/// `1-n` is `Vm { min: 1, max: None, step: 1 }`,
/// `2-2n` is `Vm { min: 2, max: None, step: 2 }`.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct Vm {
    /// Minimum number of values
    pub min: u32,
    /// Maximum number of values, `None` if unbounded
    pub max: Option<u32>,
    /// Increment between admissible counts
    pub step: u32,
}

impl Vm {
    /// Exactly one value.
    pub const ONE: Vm = Vm::exactly(1);
    /// One or more values.
    pub const ONE_OR_MORE: Vm = Vm {
        min: 1,
        max: None,
        step: 1,
    };

    /// A fixed multiplicity of `n` values.
    pub const fn exactly(n: u32) -> Vm {
        Vm {
            min: n,
            max: Some(n),
            step: 1,
        }
    }

    /// A bounded range of `min` to `max` values.
    pub const fn range(min: u32, max: u32) -> Vm {
        Vm {
            min,
            max: Some(max),
            step: 1,
        }
    }

    /// An unbounded multiplicity in multiples of `step`, e.g. `2-2n`.
    pub const fn multiples(step: u32) -> Vm {
        Vm {
            min: step,
            max: None,
            step,
        }
    }

    /// Check whether a value with `count` values is admissible.
    /// An empty value (0 values) is always admissible.
    pub fn admits(self, count: u32) -> bool {
        if count == 0 {
            return true;
        }
        count >= self.min
            && self.max.map_or(true, |max| count <= max)
            && (count - self.min) % self.step.max(1) == 0
    }
}

impl fmt::Display for Vm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.max, self.step) {
            (Some(max), _) if max == self.min => write!(f, "{}", max),
            (Some(max), _) => write!(f, "{}-{}", self.min, max),
            (None, 1) => write!(f, "{}-n", self.min),
            (None, step) => write!(f, "{}-{}n", self.min, step),
        }
    }
}

/// Type trait for a dictionary of DICOM attributes.
///
/// The main purpose of an attribute dictionary is
/// to retrieve a record containing additional information about a data element,
/// either by DICOM tag via [`by_tag`](DataDictionary::by_tag)
/// or by keyword via [`by_name`](DataDictionary::by_name).
/// These methods return `None`
/// when the tag or name is not recognized by the dictionary.
pub trait DataDictionary {
    /// The type of the dictionary entry.
    type Entry: DataDictionaryEntry;

    /// Fetch a data element entry by its tag.
    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry>;

    /// Fetch an entry by its usual alias
    /// (e.g. "PatientName" or "SOPInstanceUID").
    /// Aliases are case sensitive.
    fn by_name(&self, name: &str) -> Option<&Self::Entry>;

    /// Fetch an entry by its alias or by DICOM tag expression
    /// (`(gggg,eeee)`, `gggg,eeee` or `ggggeeee`).
    fn by_expr(&self, tag: &str) -> Option<&Self::Entry> {
        match tag.parse() {
            Ok(tag) => self.by_tag(tag),
            Err(_) => self.by_name(tag),
        }
    }

    /// Use this data element dictionary to interpret a DICOM tag,
    /// given either as a tag expression or as a keyword.
    fn parse_tag(&self, tag: &str) -> Option<Tag> {
        tag.parse().ok().or_else(|| self.by_name(tag).map(|e| e.tag()))
    }
}

impl<D: DataDictionary + ?Sized> DataDictionary for &D {
    type Entry = D::Entry;

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        (**self).by_tag(tag)
    }

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        (**self).by_name(name)
    }
}

/// The data element dictionary entry type,
/// representing a DICOM attribute.
pub trait DataDictionaryEntry {
    /// The full possible tag range of the attribute,
    /// which this dictionary entry can represent.
    fn tag_range(&self) -> TagRange;

    /// Fetch a single tag applicable to this attribute.
    ///
    /// Note that this is not necessarily
    /// the original tag used as key for this entry.
    fn tag(&self) -> Tag {
        self.tag_range().inner()
    }

    /// The alias of the attribute, with no spaces, usually in UpperCamelCase.
    fn alias(&self) -> &str;

    /// The extended value representation descriptor of the attribute.
    fn vr(&self) -> VirtualVr;

    /// The value multiplicity of the attribute.
    fn vm(&self) -> Vm;
}

/// A data type for a dictionary entry with a string slice for its alias.
#[derive(Debug, PartialEq, Clone)]
pub struct DataDictionaryEntryRef<'a> {
    /// The attribute tag or tag range
    pub tag: TagRange,
    /// The alias of the attribute, with no spaces, usually InCapitalizedCamelCase
    pub alias: &'a str,
    /// The extended value representation descriptor of the attribute
    pub vr: VirtualVr,
    /// The value multiplicity of the attribute
    pub vm: Vm,
}

impl<'a> DataDictionaryEntry for DataDictionaryEntryRef<'a> {
    fn tag_range(&self) -> TagRange {
        self.tag
    }
    fn alias(&self) -> &str {
        self.alias
    }
    fn vr(&self) -> VirtualVr {
        self.vr
    }
    fn vm(&self) -> Vm {
        self.vm
    }
}
