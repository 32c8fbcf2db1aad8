//! This crate contains a high-level abstraction for reading, modifying
//! and writing DICOM files.
//! At this level, an object is an ordered collection of data elements,
//! in which some of them can hold nested collections themselves.
//!
//! Loading a DICOM file can be done with ease via the function [`open_file`].
//! For additional file reading options, use [`OpenFileOptions`].
//!
//! # Examples
//!
//! Read an object and fetch some attributes:
//!
//! ```no_run
//! use dcmedit_dictionary_std::tags;
//! use dcmedit_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//!
//! let patient_name = obj.element(tags::PATIENT_NAME)?.bytes();
//! let transfer_syntax = obj.meta().transfer_syntax();
//! # Ok(())
//! # }
//! ```
//!
//! Primitive values are kept as the raw bytes found in the file,
//! in the byte order of the file's transfer syntax.
//! Encapsulated pixel data is carried through without being decoded.
//!
//! Objects are written back with [`write_to_file`](FileDicomObject::write_to_file),
//! which replaces the destination atomically:
//!
//! ```no_run
//! # use dcmedit_object::DefaultDicomObject;
//! # fn something(obj: DefaultDicomObject) -> Result<(), Box<dyn std::error::Error>> {
//! obj.write_to_file("0001_new.dcm")?;
//! # Ok(())
//! # }
//! ```
//!
//! The file meta group length, the lengths of defined-length sequences
//! and items, and any group length elements in the data set
//! are recomputed when writing.
pub mod file;
pub mod mem;
pub mod meta;
pub mod tokens;

pub use crate::file::{from_reader, open_file, OpenFileOptions, ReadPreamble};
pub use crate::mem::{InMemDataSet, InMemElement};
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use dcmedit_core::Tag;
pub use dcmedit_parser::dataset::OddLength;

use dcmedit_encoding::transfer_syntax::{Endianness, TransferSyntaxIndex};
use dcmedit_parser::dataset::DataSetWriter;
use dcmedit_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::{BufWriter, Write};
use std::path::Path;

/// The default implementation of a root DICOM object.
pub type DefaultDicomObject = FileDicomObject<InMemDataSet>;

/// The implementation class UID written to the meta group of
/// files whose meta group is created by this library.
///
/// Automatically generated as per the standard, part 5, section B.2.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.207634927014312380415617355396812473115";

/// The implementation version name written to the meta group of
/// files whose meta group is created by this library.
pub const IMPLEMENTATION_VERSION_NAME: &str = "dcmedit 0.3";

/// An error which may occur when loading a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Invalid DICOM file: missing magic code `DICM`"))]
    NotDicom { backtrace: Backtrace },
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not build meta group for headerless data set"))]
    BuildMetaTable {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not create data set parser"))]
    CreateParser {
        #[snafu(backtrace)]
        source: dcmedit_parser::dataset::read::Error,
    },
    #[snafu(display("Could not read data set token"))]
    ReadToken {
        #[snafu(backtrace)]
        source: dcmedit_parser::dataset::read::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}` ({})", uid, name))]
    ReadUnsupportedTransferSyntax {
        uid: String,
        name: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Unexpected token {}", token))]
    UnexpectedToken {
        token: Box<dcmedit_parser::dataset::DataToken>,
        backtrace: Backtrace,
    },
    #[snafu(display("Premature data set end"))]
    PrematureEnd { backtrace: Backtrace },
}

/// An error which may occur when writing a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not create temporary file in '{}'", dir.display()))]
    CreateTempFile {
        dir: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not move temporary file to '{}'", filename.display()))]
    PersistFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: tempfile::PersistError,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not create data set printer"))]
    CreatePrinter {
        #[snafu(backtrace)]
        source: dcmedit_parser::dataset::write::Error,
    },
    #[snafu(display("Could not print meta group data set"))]
    PrintMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not print data set"))]
    PrintDataSet {
        #[snafu(backtrace)]
        source: dcmedit_parser::dataset::write::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display(
        "Data set values are in {:?} byte order, but the transfer syntax requires {:?}",
        found,
        expected
    ))]
    ByteOrderMismatch {
        expected: Endianness,
        found: Endianness,
        backtrace: Backtrace,
    },
    #[snafu(display("Length of element {} does not fit in 32 bits", tag))]
    LengthOverflow { tag: Tag, backtrace: Backtrace },
}

/// An error which may occur when looking up a DICOM object's attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
}

/// A root DICOM object retrieved from a standard DICOM file,
/// containing additional information from the file meta group
/// in a separate table value.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDicomObject<O> {
    meta: FileMetaTable,
    obj: O,
    /// the 128 bytes before the magic code, if the file had them
    preamble: Option<[u8; 128]>,
    /// the byte order of the primitive values in `obj`
    endianness: Endianness,
}

impl<O> FileDicomObject<O> {
    /// Create a file object from its meta group and data set,
    /// where the data set's primitive values are in the given byte order.
    pub fn new(meta: FileMetaTable, obj: O, endianness: Endianness) -> Self {
        FileDicomObject {
            meta,
            obj,
            preamble: None,
            endianness,
        }
    }

    /// Replace the preamble to write before the magic code.
    pub fn with_preamble(mut self, preamble: Option<[u8; 128]>) -> Self {
        self.preamble = preamble;
        self
    }

    /// Retrieve the processed meta header table.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// Retrieve a mutable reference to the processed meta header table.
    ///
    /// Considerable care should be taken when modifying this table,
    /// as it may influence object reading and writing operations.
    pub fn meta_mut(&mut self) -> &mut FileMetaTable {
        &mut self.meta
    }

    /// Retrieve the preamble, if the object was read with one.
    pub fn preamble(&self) -> Option<&[u8; 128]> {
        self.preamble.as_ref()
    }

    /// Retrieve the byte order of the data set's primitive values.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Retrieve the inner DICOM object structure, discarding the meta table.
    pub fn into_inner(self) -> O {
        self.obj
    }
}

impl FileDicomObject<InMemDataSet> {
    /// Write the entire object as a DICOM file
    /// into the given file path.
    ///
    /// The object is written to a temporary file next to the destination,
    /// which then replaces the destination.
    /// On failure, the destination is left untouched.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), WriteError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut file =
            tempfile::NamedTempFile::new_in(dir).context(CreateTempFileSnafu { dir })?;

        self.write_all(&mut file)?;
        file.as_file()
            .sync_all()
            .context(WriteFileSnafu { filename: path })?;

        // a failed persist drops the temporary file, which removes it
        file.persist(path)
            .context(PersistFileSnafu { filename: path })?;
        Ok(())
    }

    /// Write the entire object as a DICOM file
    /// into the given writer:
    /// the preamble (all zeros if the object was read without one),
    /// the magic code, the file meta group and the data set
    /// in the meta group's transfer syntax.
    pub fn write_all(&self, to: impl Write) -> Result<(), WriteError> {
        let mut to = BufWriter::new(to);

        let ts_uid = self.meta.transfer_syntax();
        let ts = TransferSyntaxRegistry
            .get(ts_uid)
            .filter(|ts| !ts.unsupported())
            .context(WriteUnsupportedTransferSyntaxSnafu { uid: ts_uid })?;
        ensure!(
            ts.endianness() == self.endianness,
            ByteOrderMismatchSnafu {
                expected: ts.endianness(),
                found: self.endianness,
            }
        );
        let tokens = self.obj.to_tokens(ts)?;

        // write preamble
        let preamble = self.preamble.unwrap_or([0; 128]);
        to.write_all(&preamble).context(WritePreambleSnafu)?;

        // write magic sequence
        to.write_all(b"DICM").context(WriteMagicCodeSnafu)?;

        // write meta group
        self.meta.write(&mut to).context(PrintMetaDataSetSnafu)?;

        // write all
        let mut dset = DataSetWriter::with_ts(to, ts).context(CreatePrinterSnafu)?;
        dset.write_sequence(tokens).context(PrintDataSetSnafu)?;
        dset.flush().context(PrintDataSetSnafu)?;

        tracing::debug!(
            "Wrote data set of {} bytes in {}",
            dset.bytes_written(),
            ts.name()
        );
        Ok(())
    }
}

impl<O> std::ops::Deref for FileDicomObject<O> {
    type Target = O;

    fn deref(&self) -> &Self::Target {
        &self.obj
    }
}

impl<O> std::ops::DerefMut for FileDicomObject<O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.obj
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmedit_core::{DataElement, VR};
    use dcmedit_dictionary_std::{tags, uids};

    fn sample_object(ts: &str) -> DefaultDicomObject {
        let meta = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
            .media_storage_sop_instance_uid("2.25.12")
            .transfer_syntax(ts)
            .build()
            .unwrap();
        let obj = InMemDataSet::from_element_iter(vec![
            DataElement::new_primitive(tags::SOP_INSTANCE_UID, VR::UI, &b"2.25.12\0"[..]),
            DataElement::new_primitive(tags::PATIENT_NAME, VR::PN, &b"Doe^John"[..]),
        ]);
        FileDicomObject::new(meta, obj, Endianness::Little)
    }

    #[test]
    fn write_all_then_read_back() {
        let obj = sample_object(uids::EXPLICIT_VR_LITTLE_ENDIAN);
        let mut out = Vec::new();
        obj.write_all(&mut out).unwrap();

        assert_eq!(&out[..128], &[0; 128][..]);
        assert_eq!(&out[128..132], b"DICM");

        let read = from_reader(&out[..]).unwrap();
        assert_eq!(read.meta(), obj.meta());
        assert_eq!(&*read, &*obj);
        assert_eq!(read.preamble(), Some(&[0; 128]));

        // writing again gives the same bytes
        let mut out2 = Vec::new();
        read.write_all(&mut out2).unwrap();
        assert_eq!(out, out2);
    }

    #[test]
    fn byte_order_mismatch_is_rejected() {
        let obj = sample_object(uids::EXPLICIT_VR_BIG_ENDIAN);
        let err = obj.write_all(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            WriteError::ByteOrderMismatch {
                expected: Endianness::Big,
                found: Endianness::Little,
                ..
            }
        ));
    }

    #[test]
    fn unknown_transfer_syntax_is_rejected_on_write() {
        let obj = sample_object("1.2.3.4.5.6");
        let err = obj.write_all(Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            WriteError::WriteUnsupportedTransferSyntax { .. }
        ));
    }

    #[test]
    fn write_to_file_replaces_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dcm");
        std::fs::write(&path, b"old contents").unwrap();

        let obj = sample_object(uids::IMPLICIT_VR_LITTLE_ENDIAN);
        obj.write_to_file(&path).unwrap();

        let read = open_file(&path).unwrap();
        assert_eq!(&*read, &*obj);
        // no temporary files are left behind
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn failed_write_leaves_destination_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dcm");
        std::fs::write(&path, b"old contents").unwrap();

        let obj = sample_object(uids::EXPLICIT_VR_BIG_ENDIAN);
        assert!(obj.write_to_file(&path).is_err());

        assert_eq!(std::fs::read(&path).unwrap(), b"old contents");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
