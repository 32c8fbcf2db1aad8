//! Rewrite attribute values of DICOM files.
//!
//! This crate puts the codec crates together into the editing workflow
//! of the `dcmedit` tool:
//! read a file, apply a list of [`TagEdit`]s with the [`TagMutator`],
//! and write the result back.
//!
//! ```no_run
//! use dcmedit::{modify_file, parse_edit_args};
//! use dcmedit_object::OpenFileOptions;
//! # fn run() -> Result<(), dcmedit::Error> {
//! let list = parse_edit_args(["00100010=DOE^JOHN", "00100020=12345"]);
//! let report = modify_file("in.dcm", "out.dcm", &list.edits, &OpenFileOptions::new())?;
//! println!("{} attributes changed", report.len());
//! # Ok(())
//! # }
//! ```
//!
//! Edits are all-or-nothing per file:
//! the file is only written if every edit was valid.
use dcmedit_object::{DefaultDicomObject, OpenFileOptions, ReadError, WriteError};
use snafu::{Backtrace, ResultExt, Snafu};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod anonymize;
pub mod batch;
pub mod mutate;

pub use crate::anonymize::anonymize_edits;
pub use crate::batch::{modify_tree, BatchReport};
pub use crate::mutate::{AppliedEdit, EditError, EditReport, TagEdit, TagMutator, VrSource};

/// An error which may occur while editing a file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not read '{}'", path.display()))]
    Read {
        path: PathBuf,
        #[snafu(backtrace)]
        source: ReadError,
    },
    #[snafu(display("Could not edit '{}'", path.display()))]
    Edit {
        path: PathBuf,
        #[snafu(backtrace)]
        source: EditError,
    },
    #[snafu(display("Could not write '{}'", path.display()))]
    Write {
        path: PathBuf,
        #[snafu(backtrace)]
        source: WriteError,
    },
    #[snafu(display("Could not create directory '{}'", path.display()))]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("'{}' is not inside '{}'", path.display(), base.display()))]
    OutsideBase {
        path: PathBuf,
        base: PathBuf,
        backtrace: Backtrace,
    },
}

impl Error {
    /// Whether reading failed because the input is not a DICOM file at all.
    pub fn is_not_dicom(&self) -> bool {
        matches!(
            self,
            Error::Read {
                source: ReadError::NotDicom { .. } | ReadError::ReadPreambleBytes { .. },
                ..
            }
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An edit list entry which is not in the `TAG=VALUE` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    /// Position of the entry in the argument list
    pub index: usize,
    pub raw: String,
}

/// The outcome of [`parse_edit_args`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditList {
    /// Well formed entries, in their original order
    pub edits: Vec<TagEdit>,
    /// Entries without a `=`, left out of `edits`
    pub malformed: Vec<MalformedEntry>,
}

/// Split `TAG=VALUE` arguments on their first `=`.
///
/// Entries without any `=` are reported and set aside,
/// the others are kept even if the tag is not well formed,
/// which the mutator will find out.
pub fn parse_edit_args<I, S>(args: I) -> EditList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = EditList::default();
    for (index, arg) in args.into_iter().enumerate() {
        let arg = arg.as_ref();
        match arg.split_once('=') {
            Some((tag, value)) => list.edits.push(TagEdit::new(tag, value)),
            None => {
                warn!("Ignoring edit #{} `{}`: expected TAG=VALUE", index, arg);
                list.malformed.push(MalformedEntry {
                    index,
                    raw: arg.to_string(),
                });
            }
        }
    }
    list
}

/// Read the DICOM file at `input`, apply `edits` to it
/// and write the result to `output`.
///
/// `input` and `output` may be the same path:
/// the destination is only replaced once the new file is complete.
pub fn modify_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    edits: &[TagEdit],
    options: &OpenFileOptions,
) -> Result<EditReport> {
    let output = output.as_ref();
    let (obj, report) = open_and_edit(input.as_ref(), edits, options)?;
    obj.write_to_file(output)
        .context(WriteSnafu { path: output })?;
    debug!("Wrote {}", output.display());
    Ok(report)
}

pub(crate) fn open_and_edit(
    input: &Path,
    edits: &[TagEdit],
    options: &OpenFileOptions,
) -> Result<(DefaultDicomObject, EditReport)> {
    let mut obj = options
        .clone()
        .open_file(input)
        .context(ReadSnafu { path: input })?;
    debug!(
        "Read {} ({} attributes, transfer syntax {})",
        input.display(),
        obj.len(),
        obj.meta().transfer_syntax()
    );

    let report = TagMutator::new()
        .apply(&mut obj, edits)
        .context(EditSnafu { path: input })?;
    Ok((obj, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_first_equals_sign() {
        let list = parse_edit_args(["00100010=DOE^JOHN", "00081030=A=B", "00100030="]);
        assert!(list.malformed.is_empty());
        assert_eq!(
            list.edits,
            vec![
                TagEdit::new("00100010", "DOE^JOHN"),
                TagEdit::new("00081030", "A=B"),
                TagEdit::new("00100030", ""),
            ]
        );
    }

    #[test]
    fn entries_without_equals_sign_are_set_aside() {
        let list = parse_edit_args(vec![
            "nope".to_string(),
            "00100010=DOE^JOHN".to_string(),
            "=x".to_string(),
        ]);
        assert_eq!(
            list.malformed,
            vec![MalformedEntry {
                index: 0,
                raw: "nope".to_string(),
            }]
        );
        // an empty tag is left to the mutator
        assert_eq!(
            list.edits,
            vec![TagEdit::new("00100010", "DOE^JOHN"), TagEdit::new("", "x")]
        );
    }
}
