//! Module containing data structures and readers of DICOM file meta information tables.
//!
//! The table keeps every group 0002 attribute found in the file,
//! always encoded in explicit VR little endian.
//! The group length (0002,0000) is not stored:
//! it is checked while reading and recomputed on every write.
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmedit_core::header::{DataElement, HasLength, Header};
use dcmedit_core::{Length, Tag, VR};
use dcmedit_dictionary_std::tags;
use dcmedit_encoding::decode::{self, Decode};
use dcmedit_encoding::encode::explicit_le::ExplicitVRLittleEndianEncoder;
use dcmedit_parser::dataset::{DataSetWriter, DataToken};
use dcmedit_parser::stateful::encode::StatefulEncoder;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::collections::BTreeMap;
use std::io::{Read, Write};

use crate::{IMPLEMENTATION_CLASS_UID, IMPLEMENTATION_VERSION_NAME};

const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The file meta group parser could not read
    /// the magic code `DICM` from its source.
    #[snafu(display("Could not start reading DICOM data"))]
    ReadMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// The file meta group parser could not fetch
    /// the value of a data element from its source.
    #[snafu(display("Could not read data value of element tagged {}", tag))]
    ReadValueData {
        tag: Tag,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    /// Invalid DICOM data, detected from checking the `DICM` code.
    #[snafu(display("Invalid DICOM data: missing magic code `DICM`"))]
    NotDicom { backtrace: Backtrace },

    /// An issue occurred while decoding the next data element
    /// in the file meta data set.
    #[snafu(display("Could not decode file meta element header at position {}", position))]
    DecodeElement {
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },

    /// A data element with an unexpected tag was retrieved:
    /// the parser was expecting another tag first,
    /// or at least one that is part of the the file meta group.
    #[snafu(display("Unexpected data element tagged {} at position {}", tag, position))]
    UnexpectedTag {
        tag: Tag,
        position: u64,
        backtrace: Backtrace,
    },

    /// A required file meta data element is missing.
    #[snafu(display("Missing data element `{}`", alias))]
    MissingElement {
        alias: &'static str,
        backtrace: Backtrace,
    },

    /// The value length of a data elements in the file meta group
    /// was unexpected.
    #[snafu(display("Unexpected length {} for data element tagged {}", length, tag))]
    UnexpectedDataValueLength {
        tag: Tag,
        length: Length,
        backtrace: Backtrace,
    },

    /// The value length of a data element is undefined,
    /// but knowing the length is required in its context.
    #[snafu(display("Undefined value length for data element tagged {}", tag))]
    UndefinedValueLength { tag: Tag, backtrace: Backtrace },

    /// An element crosses the end of the group
    /// announced by the group length.
    #[snafu(display(
        "Element tagged {} ends past the file meta group length of {} bytes",
        tag,
        group_length
    ))]
    GroupLengthOverrun {
        tag: Tag,
        group_length: u32,
        backtrace: Backtrace,
    },

    /// The file meta group is too large for its group length element.
    #[snafu(display("File meta group length {} does not fit in 32 bits", length))]
    GroupLengthOverflow { length: u64, backtrace: Backtrace },

    /// The file meta group data set could not be written.
    #[snafu(display("Could not write file meta group data set"))]
    WriteSet {
        #[snafu(backtrace)]
        source: dcmedit_parser::dataset::write::Error,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// DICOM File Meta Information Table.
///
/// This data type holds the attributes of group 0002
/// as raw explicit VR little endian values,
/// with typed accessors for the attributes relevant to reading and writing.
///
/// See [PS3.10 chapter 7](http://dicom.nema.org/medical/dicom/current/output/chtml/part10/chapter_7.html).
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetaTable {
    /// the group 0002 elements, excluding the group length
    elements: BTreeMap<Tag, DataElement>,
}

impl FileMetaTable {
    /// Read the magic code and the file meta group from the given source.
    ///
    /// The source must be positioned right at the `DICM` magic code.
    pub fn from_reader<R: Read>(file: R) -> Result<Self> {
        FileMetaTable::read_from(file)
    }

    fn read_from<S: Read>(mut file: S) -> Result<Self> {
        let mut buff: [u8; 4] = [0; 4];
        {
            // check magic code
            file.read_exact(&mut buff).context(ReadMagicCodeSnafu)?;

            ensure!(buff == DICM_MAGIC_CODE, NotDicomSnafu);
        }

        let decoder = decode::file_header_decoder();
        // position relative to the start of the magic code
        let mut position: u64 = 4;

        let group_length: u32 = {
            let (elem, bytes_read) = decoder
                .decode_header(&mut file)
                .context(DecodeElementSnafu { position })?;
            ensure!(
                elem.tag() == tags::FILE_META_INFORMATION_GROUP_LENGTH,
                UnexpectedTagSnafu {
                    tag: elem.tag(),
                    position,
                }
            );
            ensure!(
                elem.length() == Length(4),
                UnexpectedDataValueLengthSnafu {
                    tag: elem.tag(),
                    length: elem.length(),
                }
            );
            let mut buff: [u8; 4] = [0; 4];
            file.read_exact(&mut buff).context(ReadValueDataSnafu {
                tag: elem.tag(),
            })?;
            position += bytes_read as u64 + 4;
            LittleEndian::read_u32(&buff)
        };

        let group_end = position + u64::from(group_length);
        let mut elements = BTreeMap::new();

        while position < group_end {
            let (header, bytes_read) = decoder
                .decode_header(&mut file)
                .context(DecodeElementSnafu { position })?;
            let tag = header.tag();
            ensure!(
                tag.group() == 0x0002 && tag != tags::FILE_META_INFORMATION_GROUP_LENGTH,
                UnexpectedTagSnafu { tag, position }
            );
            let len = header.length().get().context(UndefinedValueLengthSnafu { tag })?;
            let element_end = position + bytes_read as u64 + u64::from(len);
            ensure!(
                element_end <= group_end,
                GroupLengthOverrunSnafu { tag, group_length }
            );

            let mut value = Vec::new();
            let read = (&mut file)
                .take(u64::from(len))
                .read_to_end(&mut value)
                .context(ReadValueDataSnafu { tag })?;
            if read < len as usize {
                return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof))
                    .context(ReadValueDataSnafu { tag });
            }
            position = element_end;

            if elements
                .insert(tag, DataElement::new_primitive(tag, header.vr(), value))
                .is_some()
            {
                tracing::warn!("Duplicate file meta element {}, keeping the last one", tag);
            }
        }

        let table = FileMetaTable { elements };
        ensure!(
            table.elements.contains_key(&tags::TRANSFER_SYNTAX_UID),
            MissingElementSnafu {
                alias: "TransferSyntaxUID",
            }
        );
        Ok(table)
    }

    /// Retrieve the transfer syntax UID, without trailing padding.
    pub fn transfer_syntax(&self) -> &str {
        self.text_value(tags::TRANSFER_SYNTAX_UID).unwrap_or_default()
    }

    /// Retrieve the media storage SOP class UID, without trailing padding.
    pub fn media_storage_sop_class_uid(&self) -> Option<&str> {
        self.text_value(tags::MEDIA_STORAGE_SOP_CLASS_UID)
    }

    /// Retrieve the media storage SOP instance UID, without trailing padding.
    pub fn media_storage_sop_instance_uid(&self) -> Option<&str> {
        self.text_value(tags::MEDIA_STORAGE_SOP_INSTANCE_UID)
    }

    /// Retrieve the implementation class UID, without trailing padding.
    pub fn implementation_class_uid(&self) -> Option<&str> {
        self.text_value(tags::IMPLEMENTATION_CLASS_UID)
    }

    /// Retrieve the implementation version name, without trailing padding.
    pub fn implementation_version_name(&self) -> Option<&str> {
        self.text_value(tags::IMPLEMENTATION_VERSION_NAME)
    }

    /// Replace the transfer syntax UID.
    pub fn set_transfer_syntax(&mut self, uid: &str) {
        self.put_text(tags::TRANSFER_SYNTAX_UID, VR::UI, uid);
    }

    /// Retrieve a file meta element by tag.
    pub fn get(&self, tag: Tag) -> Option<&DataElement> {
        self.elements.get(&tag)
    }

    /// Iterate over the file meta elements in ascending tag order,
    /// excluding the group length.
    pub fn iter(&self) -> impl Iterator<Item = &DataElement> {
        self.elements.values()
    }

    /// Calculate the value of the group length element (0002,0000):
    /// the number of bytes of all other file meta elements.
    pub fn group_length(&self) -> Result<u32> {
        let length: u64 = self
            .elements
            .values()
            .map(|e| {
                let header_len = if e.vr().has_short_length() { 8 } else { 12 };
                header_len + e.bytes().map_or(0, |v| v.len() as u64)
            })
            .sum();
        u32::try_from(length)
            .ok()
            .filter(|l| *l != u32::MAX)
            .context(GroupLengthOverflowSnafu { length })
    }

    /// Write the file meta group, without the magic code,
    /// recomputing the group length.
    pub fn write<W: Write>(&self, writer: W) -> Result<()> {
        let group_length = self.group_length()?;
        let printer = StatefulEncoder::new(
            writer,
            Box::new(ExplicitVRLittleEndianEncoder::default()),
        );
        let mut dset = DataSetWriter::new(printer);

        let group_length_elem = DataElement::new_primitive(
            tags::FILE_META_INFORMATION_GROUP_LENGTH,
            VR::UL,
            group_length.to_le_bytes().to_vec(),
        );
        let tokens = std::iter::once(&group_length_elem)
            .chain(self.elements.values())
            .flat_map(|e| {
                let bytes = e.bytes().unwrap_or_default().to_vec();
                [
                    DataToken::ElementHeader(dcmedit_core::DataElementHeader::new(
                        e.tag(),
                        e.vr(),
                        Length(bytes.len() as u32),
                    )),
                    DataToken::PrimitiveValue(bytes),
                ]
            });
        dset.write_sequence(tokens).context(WriteSetSnafu)?;
        dset.flush().context(WriteSetSnafu)
    }

    fn text_value(&self, tag: Tag) -> Option<&str> {
        let bytes = self.elements.get(&tag)?.bytes()?;
        std::str::from_utf8(bytes)
            .ok()
            .map(|s| s.trim_end_matches(|c| c == '\0' || c == ' '))
    }

    fn put_text(&mut self, tag: Tag, vr: VR, text: &str) {
        let mut bytes = text.as_bytes().to_vec();
        vr.traits().pad(&mut bytes);
        self.elements
            .insert(tag, DataElement::new_primitive(tag, vr, bytes));
    }
}

/// A builder for DICOM meta information tables.
#[derive(Debug, Default, Clone)]
pub struct FileMetaTableBuilder {
    /// File Meta Information Version (OB)
    information_version: Option<[u8; 2]>,
    /// Media Storage SOP Class UID (UI)
    media_storage_sop_class_uid: Option<String>,
    /// Media Storage SOP Instance UID (UI)
    media_storage_sop_instance_uid: Option<String>,
    /// Transfer Syntax UID (UI)
    transfer_syntax: Option<String>,
    /// Implementation Class UID (UI)
    implementation_class_uid: Option<String>,
    /// Implementation Version Name (SH)
    implementation_version_name: Option<String>,
    /// Source Application Entity Title (AE)
    source_application_entity_title: Option<String>,
}

impl FileMetaTableBuilder {
    /// Create a new, empty builder.
    pub fn new() -> FileMetaTableBuilder {
        FileMetaTableBuilder::default()
    }

    /// Define the meta information version.
    pub fn information_version(mut self, value: [u8; 2]) -> FileMetaTableBuilder {
        self.information_version = Some(value);
        self
    }

    /// Define the media storage SOP class UID.
    pub fn media_storage_sop_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_class_uid = Some(value.into());
        self
    }

    /// Define the media storage SOP instance UID.
    pub fn media_storage_sop_instance_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.media_storage_sop_instance_uid = Some(value.into());
        self
    }

    /// Define the transfer syntax UID.
    pub fn transfer_syntax<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.transfer_syntax = Some(value.into());
        self
    }

    /// Define the implementation class UID.
    pub fn implementation_class_uid<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_class_uid = Some(value.into());
        self
    }

    /// Define the implementation version name.
    pub fn implementation_version_name<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.implementation_version_name = Some(value.into());
        self
    }

    /// Define the source application entity title.
    pub fn source_application_entity_title<T>(mut self, value: T) -> FileMetaTableBuilder
    where
        T: Into<String>,
    {
        self.source_application_entity_title = Some(value.into());
        self
    }

    /// Build the table.
    ///
    /// Only the transfer syntax is mandatory.
    /// The information version defaults to `[0, 1]`,
    /// and the implementation class UID and version name
    /// default to the ones of this library.
    pub fn build(self) -> Result<FileMetaTable> {
        let transfer_syntax = self.transfer_syntax.context(MissingElementSnafu {
            alias: "TransferSyntaxUID",
        })?;

        let mut table = FileMetaTable {
            elements: BTreeMap::new(),
        };
        let information_version = self.information_version.unwrap_or([0, 1]);
        table.elements.insert(
            tags::FILE_META_INFORMATION_VERSION,
            DataElement::new_primitive(
                tags::FILE_META_INFORMATION_VERSION,
                VR::OB,
                information_version.to_vec(),
            ),
        );
        if let Some(uid) = self.media_storage_sop_class_uid {
            table.put_text(tags::MEDIA_STORAGE_SOP_CLASS_UID, VR::UI, &uid);
        }
        if let Some(uid) = self.media_storage_sop_instance_uid {
            table.put_text(tags::MEDIA_STORAGE_SOP_INSTANCE_UID, VR::UI, &uid);
        }
        table.put_text(tags::TRANSFER_SYNTAX_UID, VR::UI, &transfer_syntax);
        table.put_text(
            tags::IMPLEMENTATION_CLASS_UID,
            VR::UI,
            self.implementation_class_uid
                .as_deref()
                .unwrap_or(IMPLEMENTATION_CLASS_UID),
        );
        table.put_text(
            tags::IMPLEMENTATION_VERSION_NAME,
            VR::SH,
            self.implementation_version_name
                .as_deref()
                .unwrap_or(IMPLEMENTATION_VERSION_NAME),
        );
        if let Some(title) = self.source_application_entity_title {
            table.put_text(tags::SOURCE_APPLICATION_ENTITY_TITLE, VR::AE, &title);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, FileMetaTable, FileMetaTableBuilder};
    use dcmedit_core::{Tag, VR};

    #[rustfmt::skip]
    const TEST_META_1: &[u8] = &[
        // magic code
        b'D', b'I', b'C', b'M',
        // File Meta Information Group Length: (0000,0002) ; UL ; 4 ; 200
        0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0xc8, 0x00, 0x00, 0x00,
        // File Meta Information Version: (0002, 0001) ; OB ; 2 ; [0x00, 0x01]
        0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        // Media Storage SOP Class UID (0002, 0002) ; UI ; 26 ; "1.2.840.10008.5.1.4.1.1.1\0" (ComputedRadiographyImageStorage)
        0x02, 0x00, 0x02, 0x00, b'U', b'I', 0x1a, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x35, 0x2e, 0x31, 0x2e, 0x34, 0x2e, 0x31, 0x2e,
        0x31, 0x2e, 0x31, 0x00,
        // Media Storage SOP Instance UID (0002, 0003) ; UI ; 56 ; "1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567\0"
        0x02, 0x00, 0x03, 0x00, b'U', b'I', 0x38, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x2e, 0x34,
        0x2e, 0x35, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x2e, 0x31, 0x32, 0x33,
        0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
        0x2e, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x2e, 0x31, 0x32, 0x33, 0x34,
        0x35, 0x36, 0x37, 0x00,
        // Transfer Syntax UID (0002, 0010) ; UI ; 20 ; "1.2.840.10008.1.2.1\0" (LittleEndianExplicit)
        0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x38, 0x34, 0x30,
        0x2e, 0x31, 0x30, 0x30, 0x30, 0x38, 0x2e, 0x31, 0x2e, 0x32, 0x2e, 0x31, 0x00,
        // Implementation Class UID (0002, 0012) ; UI ; 20 ; "1.2.345.6.7890.1.234"
        0x02, 0x00, 0x12, 0x00, b'U', b'I', 0x14, 0x00, 0x31, 0x2e, 0x32, 0x2e, 0x33, 0x34, 0x35,
        0x2e, 0x36, 0x2e, 0x37, 0x38, 0x39, 0x30, 0x2e, 0x31, 0x2e, 0x32, 0x33, 0x34,
        // optional elements:

        // Implementation Version Name (0002,0013) ; SH ; "RUSTY_DICOM_269"
        0x02, 0x00, 0x13, 0x00, b'S', b'H', 0x10, 0x00, 0x52, 0x55, 0x53, 0x54, 0x59, 0x5f, 0x44,
        0x49, 0x43, 0x4f, 0x4d, 0x5f, 0x32, 0x36, 0x39, 0x20,
        // Source Application Entity Title (0002, 0016) ; AE ; 0 (no data)
        0x02, 0x00, 0x16, 0x00, b'A', b'E', 0x00, 0x00,
    ];

    #[test]
    fn read_meta_table_from_reader() {
        let mut source = TEST_META_1;

        let table = FileMetaTable::from_reader(&mut source).unwrap();

        assert_eq!(table.group_length().unwrap(), 200);
        assert_eq!(
            table.get(Tag(0x0002, 0x0001)).and_then(|e| e.bytes()),
            Some(&[0x00, 0x01][..])
        );
        assert_eq!(
            table.media_storage_sop_class_uid(),
            Some("1.2.840.10008.5.1.4.1.1.1")
        );
        assert_eq!(
            table.media_storage_sop_instance_uid(),
            Some("1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567")
        );
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.1");
        assert_eq!(table.implementation_class_uid(), Some("1.2.345.6.7890.1.234"));
        assert_eq!(table.implementation_version_name(), Some("RUSTY_DICOM_269"));
        assert_eq!(
            table.get(Tag(0x0002, 0x0016)).map(|e| e.vr()),
            Some(VR::AE)
        );
        assert_eq!(table.iter().count(), 7);
        // nothing was left unread
        assert!(source.is_empty());
    }

    #[test]
    fn write_meta_table_back() {
        let table = FileMetaTable::from_reader(TEST_META_1).unwrap();
        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        assert_eq!(&out[..], &TEST_META_1[4..]);
    }

    #[test]
    fn group_length_is_recomputed() {
        let mut table = FileMetaTable::from_reader(TEST_META_1).unwrap();
        // same padded length
        table.set_transfer_syntax("1.2.840.10008.1.2.2");
        assert_eq!(table.transfer_syntax(), "1.2.840.10008.1.2.2");
        assert_eq!(table.group_length().unwrap(), 200);
        table.set_transfer_syntax("1.2.840.10008.1.2");
        assert_eq!(table.group_length().unwrap(), 198);

        let mut out = Vec::new();
        table.write(&mut out).unwrap();
        assert_eq!(&out[8..12], &[198, 0, 0, 0]);
    }

    #[test]
    fn missing_magic_code() {
        let err = FileMetaTable::from_reader(&b"DICN\x02\x00\x00\x00"[..]).unwrap_err();
        assert!(matches!(err, Error::NotDicom { .. }));
    }

    #[test]
    fn element_past_group_end() {
        let mut data = TEST_META_1.to_vec();
        // claim a group length which ends in the middle of the last element
        data[12] = 196;
        let err = FileMetaTable::from_reader(&data[..]).unwrap_err();
        assert!(matches!(
            err,
            Error::GroupLengthOverrun {
                tag: Tag(0x0002, 0x0016),
                group_length: 196,
                ..
            }
        ));
    }

    #[test]
    fn foreign_group_in_meta() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            b'D', b'I', b'C', b'M',
            0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x0a, 0x00, 0x00, 0x00,
            // (0008,0060) Modality, CS, "MR"
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00, b'M', b'R',
        ];
        let err = FileMetaTable::from_reader(data).unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedTag {
                tag: Tag(0x0008, 0x0060),
                position: 16,
                ..
            }
        ));
    }

    #[test]
    fn transfer_syntax_is_required() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            b'D', b'I', b'C', b'M',
            0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00, 0x0e, 0x00, 0x00, 0x00,
            0x02, 0x00, 0x01, 0x00, b'O', b'B', 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x01,
        ];
        let err = FileMetaTable::from_reader(data).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingElement {
                alias: "TransferSyntaxUID",
                ..
            }
        ));
    }

    #[test]
    fn create_meta_table_with_builder() {
        let table = FileMetaTableBuilder::new()
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
            .media_storage_sop_instance_uid("1.2.3.4.5.12345678.1234567890.1234567.123456789.1234567")
            .transfer_syntax("1.2.840.10008.1.2.1")
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .implementation_version_name("RUSTY_DICOM_269")
            .source_application_entity_title("")
            .build()
            .unwrap();

        // same contents as the reference data set
        let gt = FileMetaTable::from_reader(TEST_META_1).unwrap();
        assert_eq!(table, gt);
        assert_eq!(table.group_length().unwrap(), 200);

        let err = FileMetaTableBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::MissingElement { .. }));
    }
}
