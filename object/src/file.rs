//! Opening DICOM files and reading DICOM objects from arbitrary sources.
use crate::mem::InMemDataSet;
use crate::meta::{FileMetaTable, FileMetaTableBuilder};
use crate::{
    BuildMetaTableSnafu, DefaultDicomObject, FileDicomObject, NotDicomSnafu, OpenFileSnafu,
    ParseMetaDataSetSnafu, ReadError, ReadPreambleBytesSnafu, ReadUnsupportedTransferSyntaxSnafu,
};
use dcmedit_core::Tag;
use dcmedit_dictionary_std::{tags, uids};
use dcmedit_encoding::transfer_syntax::{TransferSyntax, TransferSyntaxIndex};
use dcmedit_parser::dataset::{DataSetReaderOptions, OddLength};
use dcmedit_transfer_syntax_registry::TransferSyntaxRegistry;
use snafu::{OptionExt, ResultExt};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Size of the file preamble, in bytes.
const PREAMBLE_LEN: usize = 128;

/// Create a DICOM object by reading from a file.
///
/// This function assumes the standard file encoding structure:
/// an optional 128-byte preamble, file meta group,
/// and the rest of the data set.
pub fn open_file<P>(path: P) -> Result<DefaultDicomObject, ReadError>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// Create a DICOM object by reading from a byte source.
///
/// This function assumes the standard file encoding structure,
/// detecting whether the source starts with a 128-byte preamble.
pub fn from_reader<F>(file: F) -> Result<DefaultDicomObject, ReadError>
where
    F: Read,
{
    OpenFileOptions::new().from_reader(file)
}

/// How to handle the 128-byte preamble before the magic code.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Look for the magic code at the start of the source
    /// and after a preamble.
    #[default]
    Auto,
    /// Assume that the source starts with the magic code.
    Never,
    /// Assume that the source starts with a preamble.
    Always,
}

/// A builder type for opening a DICOM file with additional options.
///
/// # Example
///
/// ```no_run
/// # use dcmedit_object::{OddLength, OpenFileOptions, ReadPreamble};
/// let file = OpenFileOptions::new()
///     .read_preamble(ReadPreamble::Always)
///     .odd_length(OddLength::Accept)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), dcmedit_object::ReadError>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions {
    read_preamble: ReadPreamble,
    odd_length: OddLength,
    /// transfer syntax of a data set without preamble nor meta group
    headerless: Option<String>,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Set how the file preamble is to be handled.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set what to do with primitive values of odd length.
    pub fn odd_length(mut self, option: OddLength) -> Self {
        self.odd_length = option;
        self
    }

    /// Read a bare data set in the given transfer syntax,
    /// without preamble nor file meta group.
    ///
    /// The file meta group of the resulting object is created
    /// from the SOP class and instance UIDs in the data set.
    pub fn headerless(mut self, ts_uid: impl Into<String>) -> Self {
        self.headerless = Some(ts_uid.into());
        self
    }

    /// Read a bare data set in implicit VR little endian,
    /// without preamble nor file meta group.
    pub fn headerless_default(self) -> Self {
        self.headerless(uids::IMPLICIT_VR_LITTLE_ENDIAN)
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<DefaultDicomObject, ReadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { filename: path })?;
        self.from_reader(BufReader::new(file))
    }

    /// Obtain a DICOM object by reading from a byte source.
    pub fn from_reader<R>(self, mut from: R) -> Result<DefaultDicomObject, ReadError>
    where
        R: Read,
    {
        let options = DataSetReaderOptions::default().odd_length(self.odd_length);

        if let Some(ts_uid) = &self.headerless {
            let ts = lookup_transfer_syntax(ts_uid)?;
            let obj = InMemDataSet::read_dataset_with_ts_options(from, ts, options)?;
            let meta = synthesize_meta(&obj, ts_uid)?;
            return Ok(FileDicomObject::new(meta, obj, ts.endianness()));
        }

        // bytes read ahead while looking for the magic code
        let mut head = Vec::with_capacity(PREAMBLE_LEN + 4);
        let mut buffered: &[u8] = &[];
        let (preamble, offset, meta) = match self.read_preamble {
            ReadPreamble::Never => {
                let meta = FileMetaTable::from_reader(&mut from).context(ParseMetaDataSetSnafu)?;
                (None, 0, meta)
            }
            ReadPreamble::Always => {
                let mut preamble = [0; PREAMBLE_LEN];
                from.read_exact(&mut preamble)
                    .context(ReadPreambleBytesSnafu)?;
                let meta = FileMetaTable::from_reader(&mut from).context(ParseMetaDataSetSnafu)?;
                (Some(preamble), PREAMBLE_LEN, meta)
            }
            ReadPreamble::Auto => {
                (&mut from)
                    .take(PREAMBLE_LEN as u64 + 4)
                    .read_to_end(&mut head)
                    .context(ReadPreambleBytesSnafu)?;
                let (preamble, offset) = if head.get(PREAMBLE_LEN..) == Some(&b"DICM"[..]) {
                    let mut preamble = [0; PREAMBLE_LEN];
                    preamble.copy_from_slice(&head[..PREAMBLE_LEN]);
                    (Some(preamble), PREAMBLE_LEN)
                } else if head.starts_with(b"DICM") {
                    (None, 0)
                } else {
                    return NotDicomSnafu.fail();
                };
                let mut src = (&head[offset..]).chain(&mut from);
                let meta = FileMetaTable::from_reader(&mut src).context(ParseMetaDataSetSnafu)?;
                buffered = src.into_inner().0;
                (preamble, offset, meta)
            }
        };

        let ts = lookup_transfer_syntax(meta.transfer_syntax())?;

        // magic code, group length element and the rest of the group
        let meta_len = 4 + 12 + meta.group_length().context(ParseMetaDataSetSnafu)?;
        let options = options.base_offset(offset as u64 + u64::from(meta_len));
        let obj = InMemDataSet::read_dataset_with_ts_options(buffered.chain(from), ts, options)?;

        tracing::debug!(
            "Read {} data elements in {}",
            obj.len(),
            ts.name()
        );

        Ok(FileDicomObject::new(meta, obj, ts.endianness()).with_preamble(preamble))
    }
}

/// Find a transfer syntax which can be read and written.
fn lookup_transfer_syntax(uid: &str) -> Result<&'static TransferSyntax, ReadError> {
    let ts = TransferSyntaxRegistry
        .get(uid)
        .context(ReadUnsupportedTransferSyntaxSnafu {
            uid,
            name: "unknown",
        })?;
    if ts.unsupported() {
        return ReadUnsupportedTransferSyntaxSnafu {
            uid,
            name: ts.name(),
        }
        .fail();
    }
    Ok(ts)
}

/// Create a file meta group for a data set read without one.
fn synthesize_meta(obj: &InMemDataSet, ts_uid: &str) -> Result<FileMetaTable, ReadError> {
    let mut builder = FileMetaTableBuilder::new().transfer_syntax(ts_uid);
    if let Some(uid) = uid_value(obj, tags::SOP_CLASS_UID) {
        builder = builder.media_storage_sop_class_uid(uid);
    }
    if let Some(uid) = uid_value(obj, tags::SOP_INSTANCE_UID) {
        builder = builder.media_storage_sop_instance_uid(uid);
    }
    builder.build().context(BuildMetaTableSnafu)
}

fn uid_value(obj: &InMemDataSet, tag: Tag) -> Option<&str> {
    let bytes = obj.get(tag)?.bytes()?;
    std::str::from_utf8(bytes)
        .ok()
        .map(|s| s.trim_end_matches(|c| c == '\0' || c == ' '))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmedit_core::VR;
    use dcmedit_parser::dataset::read::Error as ParserError;

    #[rustfmt::skip]
    const META: &[u8] = &[
        b'D', b'I', b'C', b'M',
        // (0002,0000) group length, UL, 28
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x1c, 0x00, 0x00, 0x00,
        // (0002,0010) Transfer Syntax UID, UI, "1.2.840.10008.1.2.1\0"
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00,
        b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0',
        b'0', b'0', b'8', b'.', b'1', b'.', b'2', b'.', b'1', 0x00,
    ];

    #[rustfmt::skip]
    const BODY: &[u8] = &[
        // (0008,0060) Modality, CS, "MR"
        0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
        // (0010,0010) PatientName, PN, "Doe^John"
        0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00,
        b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
    ];

    fn file_bytes(preamble: Option<u8>) -> Vec<u8> {
        let mut data = Vec::new();
        if let Some(byte) = preamble {
            data.extend_from_slice(&[byte; PREAMBLE_LEN]);
        }
        data.extend_from_slice(META);
        data.extend_from_slice(BODY);
        data
    }

    #[test]
    fn detect_preamble() {
        let obj = from_reader(&file_bytes(Some(0xAB))[..]).unwrap();
        assert_eq!(obj.preamble(), Some(&[0xAB; PREAMBLE_LEN]));
        assert_eq!(obj.meta().transfer_syntax(), uids::EXPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(obj.len(), 2);
        assert_eq!(
            obj.element(tags::PATIENT_NAME).unwrap().bytes(),
            Some(&b"Doe^John"[..])
        );
    }

    #[test]
    fn detect_missing_preamble() {
        let obj = from_reader(&file_bytes(None)[..]).unwrap();
        assert_eq!(obj.preamble(), None);
        assert_eq!(obj.len(), 2);

        // written back with a zeroed preamble
        let mut out = Vec::new();
        obj.write_all(&mut out).unwrap();
        assert_eq!(out, file_bytes(Some(0)));
    }

    #[test]
    fn missing_preamble_with_long_data_set() {
        let mut data = file_bytes(None);
        // private block (0011,0010) onwards, all past the detection window
        for i in 0..10_u8 {
            data.extend_from_slice(&[0x11, 0x00, 0x10 + i, 0x00, b'L', b'O', 0x08, 0x00]);
            data.extend_from_slice(b"ACME 1.0");
        }
        assert!(data.len() > PREAMBLE_LEN + 4);

        let auto = from_reader(&data[..]).unwrap();
        assert_eq!(auto.len(), 12);
        assert_eq!(
            auto.element(Tag(0x0011, 0x0019)).unwrap().bytes(),
            Some(&b"ACME 1.0"[..])
        );

        let never = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Never)
            .from_reader(&data[..])
            .unwrap();
        assert_eq!(auto.tags().collect::<Vec<_>>(), never.tags().collect::<Vec<_>>());
    }

    #[test]
    fn explicit_preamble_options() {
        let obj = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Never)
            .from_reader(&file_bytes(None)[..])
            .unwrap();
        assert_eq!(obj.len(), 2);

        let obj = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Always)
            .from_reader(&file_bytes(Some(0))[..])
            .unwrap();
        assert_eq!(obj.preamble(), Some(&[0; PREAMBLE_LEN]));

        let err = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Always)
            .from_reader(&file_bytes(None)[..])
            .unwrap_err();
        // shorter than a preamble
        assert!(matches!(err, ReadError::ReadPreambleBytes { .. }));
    }

    #[test]
    fn not_dicom() {
        let err = from_reader(&b"this is not a DICOM file"[..]).unwrap_err();
        assert!(matches!(err, ReadError::NotDicom { .. }));
    }

    #[test]
    fn unsupported_transfer_syntaxes() {
        // "1.2.840.10008.1.2.9", not registered
        let mut data = file_bytes(None);
        data[42] = b'9';
        let err = from_reader(&data[..]).unwrap_err();
        match err {
            ReadError::ReadUnsupportedTransferSyntax { uid, name, .. } => {
                assert_eq!(uid, "1.2.840.10008.1.2.9");
                assert_eq!(name, "unknown");
            }
            e => panic!("unexpected error {:?}", e),
        }

        // deflated explicit VR little endian is known, but not readable
        let mut data = Vec::from(&META[..24]);
        data[12] = 0x1e;
        data[22] = 0x16;
        data.extend_from_slice(b"1.2.840.10008.1.2.1.99");
        data.extend_from_slice(BODY);
        let err = from_reader(&data[..]).unwrap_err();
        match err {
            ReadError::ReadUnsupportedTransferSyntax { uid, name, .. } => {
                assert_eq!(uid, uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN);
                assert_eq!(name, "Deflated Explicit VR Little Endian");
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn errors_report_file_offsets() {
        let mut data = file_bytes(Some(0));
        // stray sequence delimiter after the data set
        data.extend_from_slice(&[0xfe, 0xff, 0xdd, 0xe0, 0x00, 0x00, 0x00, 0x00]);
        let err = from_reader(&data[..]).unwrap_err();
        match err {
            ReadError::ReadToken {
                source: ParserError::UnexpectedItemTag { tag, position, .. },
            } => {
                assert_eq!(tag, Tag::SEQUENCE_DELIMITER);
                // preamble, meta group and two elements
                assert_eq!(position, 128 + 44 + 26);
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn read_headerless_data_set() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0008,0016) SOP Class UID, "1.2.840.10008.5.1.4.1.1.7\0"
            0x08, 0x00, 0x16, 0x00, 0x1a, 0x00, 0x00, 0x00,
            b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0', b'0', b'0', b'8',
            b'.', b'5', b'.', b'1', b'.', b'4', b'.', b'1', b'.', b'1', b'.', b'7', 0x00,
            // (0008,0018) SOP Instance UID, "2.25.12\0"
            0x08, 0x00, 0x18, 0x00, 0x08, 0x00, 0x00, 0x00,
            b'2', b'.', b'2', b'5', b'.', b'1', b'2', 0x00,
            // (0010,0010) PatientName, "Doe^John"
            0x10, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00,
            b'D', b'o', b'e', b'^', b'J', b'o', b'h', b'n',
        ];

        let obj = OpenFileOptions::new()
            .headerless_default()
            .from_reader(data)
            .unwrap();
        assert_eq!(obj.preamble(), None);
        assert_eq!(obj.len(), 3);
        assert_eq!(obj.element(tags::PATIENT_NAME).unwrap().vr(), VR::PN);

        let meta = obj.meta();
        assert_eq!(meta.transfer_syntax(), uids::IMPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(
            meta.media_storage_sop_class_uid(),
            Some("1.2.840.10008.5.1.4.1.1.7")
        );
        assert_eq!(meta.media_storage_sop_instance_uid(), Some("2.25.12"));
        assert_eq!(
            meta.implementation_class_uid(),
            Some(crate::IMPLEMENTATION_CLASS_UID)
        );
    }
}
