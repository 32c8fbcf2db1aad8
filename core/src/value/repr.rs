//! Value representation capabilities.
//!
//! Every [`VR`] has a static [`VrTraits`] record,
//! retrieved with [`VR::traits`],
//! describing what kind of value it holds,
//! how values are padded to even length,
//! their maximum length,
//! whether several values may be joined with a backslash,
//! the size of the explicit VR length field,
//! and how a textual rendition of the value is checked.

use crate::header::VR;
use snafu::{ensure, Snafu};

/// The broad category of values held by a value representation.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// Character strings.
    Text,
    /// Binary integers of `size` bytes.
    Int {
        /// byte size of each value
        size: u8,
        /// whether values are two's complement signed
        signed: bool,
    },
    /// IEEE 754 floating point numbers of `size` bytes.
    Float {
        /// byte size of each value
        size: u8,
    },
    /// Attribute tags, as pairs of 16-bit numbers.
    Tag,
    /// Opaque bulk bytes or words.
    Bytes,
    /// A sequence of items.
    Sequence,
}

/// The byte appended to a value of odd length.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Padding {
    /// A trailing space (`0x20`), for character strings.
    Space,
    /// A trailing null byte, for UIDs and binary values.
    Null,
}

impl Padding {
    /// The padding byte.
    pub fn byte(self) -> u8 {
        match self {
            Padding::Space => b' ',
            Padding::Null => 0,
        }
    }
}

/// An error describing why a textual value is not admissible
/// under a value representation.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[non_exhaustive]
pub enum ValueError {
    /// A single value exceeds the maximum length of its representation.
    #[snafu(display("value has {} characters, maximum is {}", len, max))]
    TooLong { len: usize, max: u32 },
    /// A character outside of the representation's repertoire.
    #[snafu(display("character {:?} not allowed in {}", ch, vr))]
    BadCharacter { ch: char, vr: VR },
    /// The value does not follow the representation's format.
    #[snafu(display("`{}` is not a valid {}: {}", value, vr, reason))]
    BadFormat {
        value: String,
        vr: VR,
        reason: &'static str,
    },
    /// More values than admitted by the attribute.
    #[snafu(display("{} values given, multiplicity is {}", count, vm))]
    Multiplicity { count: u32, vm: String },
    /// Bulk data and sequences have no textual form.
    #[snafu(display("{} values can not be written from text", vr))]
    NotTextual { vr: VR },
}

type CheckFn = fn(VR, &str) -> Result<(), ValueError>;

/// The capability record of a value representation.
#[derive(Debug, Clone, Copy)]
pub struct VrTraits {
    /// The value representation described.
    pub vr: VR,
    /// The kind of value held.
    pub kind: ValueKind,
    /// How odd-length values are padded.
    pub padding: Padding,
    /// Maximum number of characters of each single value,
    /// `None` when only bound by the length field.
    pub max_len: Option<u32>,
    /// Whether values are separated by backslashes.
    pub multi_valued: bool,
    /// Whether the explicit VR header uses a 2-byte length field
    /// (otherwise 2 reserved bytes and a 4-byte length field).
    pub short_length: bool,
    /// Whether the Specific Character Set applies,
    /// admitting characters outside of the default repertoire.
    pub extended_charset: bool,
    check: CheckFn,
}

impl VrTraits {
    const fn text(
        vr: VR,
        max_len: Option<u32>,
        multi_valued: bool,
        extended_charset: bool,
        check: CheckFn,
    ) -> Self {
        VrTraits {
            vr,
            kind: ValueKind::Text,
            padding: Padding::Space,
            max_len,
            multi_valued,
            short_length: true,
            extended_charset,
            check,
        }
    }

    const fn binary(vr: VR, kind: ValueKind, check: CheckFn) -> Self {
        VrTraits {
            vr,
            kind,
            padding: Padding::Null,
            max_len: None,
            multi_valued: true,
            short_length: true,
            extended_charset: false,
            check,
        }
    }

    const fn bulk(vr: VR, kind: ValueKind) -> Self {
        VrTraits {
            vr,
            kind,
            padding: Padding::Null,
            max_len: None,
            multi_valued: false,
            short_length: false,
            extended_charset: false,
            check: check_nothing,
        }
    }

    const fn long(mut self) -> Self {
        self.short_length = false;
        self
    }

    const fn null_padded(mut self) -> Self {
        self.padding = Padding::Null;
        self
    }

    /// Split a textual rendition into its individual values.
    ///
    /// Single-valued representations yield the whole text.
    pub fn values<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        let multi = self.multi_valued;
        text.split(move |c: char| multi && c == '\\')
    }

    /// Count the individual values in a textual rendition.
    /// The empty text holds no values.
    pub fn multiplicity(&self, text: &str) -> u32 {
        if text.is_empty() {
            0
        } else {
            self.values(text).count() as u32
        }
    }

    /// Check that the text is an admissible value of this representation:
    /// length of each value, character repertoire and format.
    ///
    /// Characters outside of ASCII pass here only for representations
    /// subject to the Specific Character Set,
    /// whether the data set's character set can encode them
    /// is decided by the text codec.
    /// The empty text is always admissible.
    pub fn validate(&self, text: &str) -> Result<(), ValueError> {
        if text.is_empty() {
            return Ok(());
        }
        if matches!(self.kind, ValueKind::Bytes | ValueKind::Sequence) {
            return NotTextualSnafu { vr: self.vr }.fail();
        }
        for value in self.values(text) {
            if value.is_empty() && self.kind == ValueKind::Text {
                continue;
            }
            if let Some(max) = self.max_len {
                let len = value.chars().count();
                ensure!(len <= max as usize, TooLongSnafu { len, max });
            }
            if !self.extended_charset {
                if let Some(ch) = value.chars().find(|c| !c.is_ascii()) {
                    return BadCharacterSnafu { ch, vr: self.vr }.fail();
                }
            }
            (self.check)(self.vr, value)?;
        }
        Ok(())
    }

    /// Append the padding byte if the value has an odd length.
    pub fn pad(&self, bytes: &mut Vec<u8>) {
        if bytes.len() % 2 == 1 {
            bytes.push(self.padding.byte());
        }
    }

    /// Strip trailing padding (spaces and null bytes)
    /// from a text value.
    pub fn trim<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        if self.kind != ValueKind::Text {
            return bytes;
        }
        let end = bytes
            .iter()
            .rposition(|b| *b != b' ' && *b != 0)
            .map_or(0, |i| i + 1);
        &bytes[..end]
    }
}

impl VR {
    /// Retrieve the capability record of this value representation.
    #[inline]
    pub fn traits(self) -> &'static VrTraits {
        &VR_TRAITS[self as usize]
    }
}

/// Capability records, in the order of the [`VR`] discriminants.
static VR_TRAITS: [VrTraits; 34] = [
    VrTraits::text(VR::AE, Some(16), true, false, check_printable),
    VrTraits::text(VR::AS, Some(4), true, false, check_age),
    VrTraits::binary(VR::AT, ValueKind::Tag, check_tag),
    VrTraits::text(VR::CS, Some(16), true, false, check_code_string),
    VrTraits::text(VR::DA, Some(8), true, false, check_date),
    VrTraits::text(VR::DS, Some(16), true, false, check_decimal),
    VrTraits::text(VR::DT, Some(26), true, false, check_date_time),
    VrTraits::binary(VR::FL, ValueKind::Float { size: 4 }, check_float),
    VrTraits::binary(VR::FD, ValueKind::Float { size: 8 }, check_float),
    VrTraits::text(VR::IS, Some(12), true, false, check_integer_string),
    VrTraits::text(VR::LO, Some(64), true, true, check_short_text),
    VrTraits::text(VR::LT, Some(10240), false, true, check_long_text),
    VrTraits::bulk(VR::OB, ValueKind::Bytes),
    VrTraits::bulk(VR::OD, ValueKind::Bytes),
    VrTraits::bulk(VR::OF, ValueKind::Bytes),
    VrTraits::bulk(VR::OL, ValueKind::Bytes),
    VrTraits::bulk(VR::OV, ValueKind::Bytes),
    VrTraits::bulk(VR::OW, ValueKind::Bytes),
    VrTraits::text(VR::PN, None, true, true, check_person_name),
    VrTraits::text(VR::SH, Some(16), true, true, check_short_text),
    VrTraits::binary(
        VR::SL,
        ValueKind::Int {
            size: 4,
            signed: true,
        },
        check_int,
    ),
    VrTraits::bulk(VR::SQ, ValueKind::Sequence),
    VrTraits::binary(
        VR::SS,
        ValueKind::Int {
            size: 2,
            signed: true,
        },
        check_int,
    ),
    VrTraits::text(VR::ST, Some(1024), false, true, check_long_text),
    VrTraits::binary(
        VR::SV,
        ValueKind::Int {
            size: 8,
            signed: true,
        },
        check_int,
    )
    .long(),
    VrTraits::text(VR::TM, Some(14), true, false, check_time),
    VrTraits::text(VR::UC, None, true, true, check_short_text).long(),
    VrTraits::text(VR::UI, Some(64), true, false, check_uid).null_padded(),
    VrTraits::binary(
        VR::UL,
        ValueKind::Int {
            size: 4,
            signed: false,
        },
        check_int,
    ),
    VrTraits::bulk(VR::UN, ValueKind::Bytes),
    VrTraits::text(VR::UR, None, false, false, check_uri).long(),
    VrTraits::binary(
        VR::US,
        ValueKind::Int {
            size: 2,
            signed: false,
        },
        check_int,
    ),
    VrTraits::text(VR::UT, None, false, true, check_long_text).long(),
    VrTraits::binary(
        VR::UV,
        ValueKind::Int {
            size: 8,
            signed: false,
        },
        check_int,
    )
    .long(),
];

fn check_nothing(_vr: VR, _value: &str) -> Result<(), ValueError> {
    Ok(())
}

fn bad_format(vr: VR, value: &str, reason: &'static str) -> ValueError {
    ValueError::BadFormat {
        value: value.to_string(),
        vr,
        reason,
    }
}

fn check_chars(vr: VR, value: &str, allowed: impl Fn(char) -> bool) -> Result<(), ValueError> {
    match value.chars().find(|c| !allowed(*c)) {
        Some(ch) => BadCharacterSnafu { ch, vr }.fail(),
        None => Ok(()),
    }
}

fn check_printable(vr: VR, value: &str) -> Result<(), ValueError> {
    check_chars(vr, value, |c| (' '..='~').contains(&c))
}

fn check_short_text(vr: VR, value: &str) -> Result<(), ValueError> {
    check_chars(vr, value, |c| c == '\x1B' || !c.is_control())
}

fn check_long_text(vr: VR, value: &str) -> Result<(), ValueError> {
    check_chars(vr, value, |c| {
        matches!(c, '\n' | '\r' | '\x0C' | '\t' | '\x1B') || !c.is_control()
    })
}

fn check_code_string(vr: VR, value: &str) -> Result<(), ValueError> {
    check_chars(vr, value, |c| {
        c.is_ascii_uppercase() || c.is_ascii_digit() || c == ' ' || c == '_'
    })
}

fn check_uri(vr: VR, value: &str) -> Result<(), ValueError> {
    check_printable(vr, value)?;
    ensure!(
        !value.starts_with(' '),
        BadFormatSnafu {
            value,
            vr,
            reason: "leading spaces are not allowed"
        }
    );
    Ok(())
}

fn check_person_name(vr: VR, value: &str) -> Result<(), ValueError> {
    check_short_text(vr, value)?;
    let groups: Vec<&str> = value.split('=').collect();
    if groups.len() > 3 {
        return Err(bad_format(vr, value, "more than 3 component groups"));
    }
    for group in groups {
        let len = group.chars().count();
        ensure!(len <= 64, TooLongSnafu { len, max: 64u32 });
        if group.split('^').count() > 5 {
            return Err(bad_format(vr, value, "more than 5 name components"));
        }
    }
    Ok(())
}

fn digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn in_range(text: &str, min: u32, max: u32) -> bool {
    text.parse::<u32>()
        .map_or(false, |v| (min..=max).contains(&v))
}

fn check_age(vr: VR, value: &str) -> Result<(), ValueError> {
    let ok = value.len() == 4
        && digits(&value[..3])
        && matches!(value.as_bytes()[3], b'D' | b'W' | b'M' | b'Y');
    if ok {
        Ok(())
    } else {
        Err(bad_format(vr, value, "expected nnnD, nnnW, nnnM or nnnY"))
    }
}

fn valid_date(value: &str) -> bool {
    value.len() == 8 && digits(value) && in_range(&value[4..6], 1, 12) && in_range(&value[6..8], 1, 31)
}

fn check_date(vr: VR, value: &str) -> Result<(), ValueError> {
    if valid_date(value) {
        Ok(())
    } else {
        Err(bad_format(vr, value, "expected YYYYMMDD"))
    }
}

/// `HH[MM[SS[.F{1,6}]]]`
fn valid_time(value: &str) -> bool {
    let (main, frac) = match value.split_once('.') {
        Some((main, frac)) => (main, Some(frac)),
        None => (value, None),
    };
    if !digits(main) || !matches!(main.len(), 2 | 4 | 6) {
        return false;
    }
    if let Some(frac) = frac {
        if main.len() != 6 || !digits(frac) || frac.len() > 6 {
            return false;
        }
    }
    in_range(&main[0..2], 0, 23)
        && (main.len() < 4 || in_range(&main[2..4], 0, 59))
        && (main.len() < 6 || in_range(&main[4..6], 0, 60))
}

fn check_time(vr: VR, value: &str) -> Result<(), ValueError> {
    if valid_time(value.trim_end()) {
        Ok(())
    } else {
        Err(bad_format(vr, value, "expected HH[MM[SS[.FFFFFF]]]"))
    }
}

/// `YYYY[MM[DD[HH[MM[SS[.F{1,6}]]]]]][&ZZXX]`
fn check_date_time(vr: VR, value: &str) -> Result<(), ValueError> {
    let fail = || Err(bad_format(vr, value, "expected YYYYMMDDHHMMSS.FFFFFF&ZZXX"));
    let value_trimmed = value.trim_end();
    let (main, offset) = match value_trimmed.find(|c: char| c == '+' || c == '-') {
        Some(i) => (&value_trimmed[..i], Some(&value_trimmed[i + 1..])),
        None => (value_trimmed, None),
    };
    if let Some(offset) = offset {
        if offset.len() != 4 || !in_range(&offset[..2], 0, 14) || !in_range(&offset[2..], 0, 59)
        {
            return fail();
        }
    }
    let date_len = main.len().min(8);
    let (date, time) = main.split_at(date_len);
    let date_ok = match date.len() {
        4 => digits(date),
        6 => digits(date) && in_range(&date[4..6], 1, 12),
        8 => valid_date(date),
        _ => false,
    };
    if !date_ok || (!time.is_empty() && (date.len() != 8 || !valid_time(time))) {
        return fail();
    }
    Ok(())
}

fn check_decimal(vr: VR, value: &str) -> Result<(), ValueError> {
    let trimmed = value.trim();
    check_chars(vr, value, |c| {
        c.is_ascii_digit() || matches!(c, '+' | '-' | 'E' | 'e' | '.' | ' ')
    })?;
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(()),
        _ => Err(bad_format(vr, value, "not a decimal number")),
    }
}

fn check_integer_string(vr: VR, value: &str) -> Result<(), ValueError> {
    let trimmed = value.trim();
    check_chars(vr, value, |c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' '))?;
    match trimmed.parse::<i64>() {
        Ok(v) if i64::from(i32::MIN) <= v && v <= i64::from(i32::MAX) => Ok(()),
        Ok(_) => Err(bad_format(vr, value, "out of the 32-bit integer range")),
        Err(_) => Err(bad_format(vr, value, "not an integer")),
    }
}

fn check_uid(vr: VR, value: &str) -> Result<(), ValueError> {
    check_chars(vr, value, |c| c.is_ascii_digit() || c == '.')?;
    for component in value.split('.') {
        if component.is_empty() {
            return Err(bad_format(vr, value, "empty UID component"));
        }
        if component.len() > 1 && component.starts_with('0') {
            return Err(bad_format(vr, value, "UID component with leading zero"));
        }
    }
    Ok(())
}

fn check_int(vr: VR, value: &str) -> Result<(), ValueError> {
    let (size, signed) = match vr.traits().kind {
        ValueKind::Int { size, signed } => (size, signed),
        _ => return Err(bad_format(vr, value, "not an integer representation")),
    };
    let text = value.trim();
    let ok = if signed {
        let bits = u32::from(size) * 8;
        text.parse::<i64>()
            .map_or(false, |v| bits == 64 || (v >> (bits - 1) == 0 || v >> (bits - 1) == -1))
    } else {
        let bits = u32::from(size) * 8;
        text.parse::<u64>()
            .map_or(false, |v| bits == 64 || v >> bits == 0)
    };
    if ok {
        Ok(())
    } else {
        Err(bad_format(vr, value, "not an integer in range"))
    }
}

fn check_float(vr: VR, value: &str) -> Result<(), ValueError> {
    let ok = match vr.traits().kind {
        ValueKind::Float { size: 4 } => value
            .trim()
            .parse::<f32>()
            .map_or(false, |v| v.is_finite()),
        _ => value
            .trim()
            .parse::<f64>()
            .map_or(false, |v| v.is_finite()),
    };
    if ok {
        Ok(())
    } else {
        Err(bad_format(vr, value, "not a finite number"))
    }
}

fn check_tag(vr: VR, value: &str) -> Result<(), ValueError> {
    match value.trim().parse::<crate::Tag>() {
        Ok(_) => Ok(()),
        Err(_) => Err(bad_format(vr, value, "expected a tag as GGGGEEEE")),
    }
}
