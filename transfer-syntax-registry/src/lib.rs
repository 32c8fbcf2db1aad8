//! This crate contains the DICOM transfer syntax registry.
//!
//! The transfer syntax registry maps a DICOM UID of a transfer syntax
//! into the respective transfer syntax specifier.
//! Unknown UIDs are not in the registry,
//! and UIDs of transfer syntaxes which cannot be read
//! map to a descriptor whose codec is [`Codec::Unsupported`].
//!
//! ```
//! use dcmedit_encoding::TransferSyntaxIndex;
//! use dcmedit_transfer_syntax_registry::TransferSyntaxRegistry;
//!
//! let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.1\0").unwrap();
//! assert_eq!(ts.name(), "Explicit VR Little Endian");
//! assert!(TransferSyntaxRegistry.get("1.2.3.4").is_none());
//! ```

use byteordered::Endianness;
use dcmedit_encoding::transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
use lazy_static::lazy_static;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

pub mod entries;

/// Main implementation of a registry of DICOM transfer syntaxes.
///
/// Consumers would generally use [`TransferSyntaxRegistry`] instead.
pub struct TransferSyntaxRegistryImpl {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistryImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistryImpl")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistryImpl {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }

    /// Obtain a DICOM codec by transfer syntax UID.
    fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        let ts_uid = uid
            .as_ref()
            .trim_end_matches(|c: char| c.is_whitespace() || c == '\0');
        self.m.get(ts_uid)
    }

    /// Register the given transfer syntax (TS) to the system.
    /// A transfer syntax with the same UID is only replaced
    /// when the new one offers more support than the old one.
    fn register(&mut self, ts: TransferSyntax) -> bool {
        match self.m.entry(ts.uid()) {
            Entry::Occupied(mut e) => {
                let replace = matches!(
                    (e.get().codec(), ts.codec()),
                    (Codec::Unsupported, Codec::EncapsulatedPixelData | Codec::None)
                        | (Codec::EncapsulatedPixelData, Codec::None)
                );
                if replace {
                    tracing::debug!("Replacing transfer syntax {}", ts.uid());
                    e.insert(ts);
                }
                replace
            }
            Entry::Vacant(e) => {
                e.insert(ts);
                true
            }
        }
    }
}

/// Zero-sized representative of the main transfer syntax registry.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct TransferSyntaxRegistry;

impl TransferSyntaxRegistry {
    /// Obtain an iterator of all registered transfer syntaxes.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        get_registry().iter()
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    #[inline]
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        get_registry().get(uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistryImpl = {
        let mut registry = TransferSyntaxRegistryImpl { m: HashMap::new() };
        for ts in initialize_codecs() {
            registry.register(ts);
        }
        registry
    };
}

/// Retrieve a reference to the global codec registry.
#[inline]
pub(crate) fn get_registry() -> &'static TransferSyntaxRegistryImpl {
    &REGISTRY
}

/// Retrieve the default transfer syntax.
pub fn default() -> TransferSyntax {
    entries::IMPLICIT_VR_LITTLE_ENDIAN
}

fn initialize_codecs() -> Vec<TransferSyntax> {
    use crate::entries::*;

    vec![
        // the three base transfer syntaxes, fully supported
        IMPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_BIG_ENDIAN,
        // pixel data is encapsulated, the rest of the data set is readable
        ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN,
        JPEG_BASELINE,
        JPEG_EXTENDED,
        JPEG_LOSSLESS_NON_HIERARCHICAL,
        JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
        JPEG_LS_LOSSLESS_IMAGE_COMPRESSION,
        JPEG_LS_LOSSY_IMAGE_COMPRESSION,
        JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_IMAGE_COMPRESSION,
        JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION,
        MPEG2_MAIN_PROFILE_MAIN_LEVEL,
        MPEG2_MAIN_PROFILE_HIGH_LEVEL,
        MPEG4_AVC_H264_HIGH_PROFILE,
        MPEG4_AVC_H264_BD_COMPATIBLE_HIGH_PROFILE,
        MPEG4_AVC_H264_HIGH_PROFILE_FOR_2D_VIDEO,
        MPEG4_AVC_H264_HIGH_PROFILE_FOR_3D_VIDEO,
        MPEG4_AVC_H264_STEREO_HIGH_PROFILE,
        HEVC_H265_MAIN_PROFILE,
        HEVC_H265_MAIN_10_PROFILE,
        HIGH_THROUGHPUT_JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        HIGH_THROUGHPUT_JPEG_2000_WITH_RPCL_OPTIONS_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        HIGH_THROUGHPUT_JPEG_2000_IMAGE_COMPRESSION,
        RLE_LOSSLESS,
        // known, but not readable
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
        JPIP_REFERENCED_DEFLATE,
    ]
}

/// create a TS with an encapsulated pixel data codec
pub(crate) const fn create_ts_stub(uid: &'static str, name: &'static str) -> TransferSyntax {
    TransferSyntax::new(
        uid,
        name,
        Endianness::Little,
        true,
        Codec::EncapsulatedPixelData,
    )
}
