//! UID declarations
//!
//! Transfer syntaxes known to the codec,
//! plus a selection of storage SOP classes.

/// Transfer Syntax: Implicit VR Little Endian: Default Transfer Syntax for DICOM
#[rustfmt::skip]
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Explicit VR Little Endian
#[rustfmt::skip]
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Encapsulated Uncompressed Explicit VR Little Endian
#[rustfmt::skip]
pub const ENCAPSULATED_UNCOMPRESSED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.98";
/// Transfer Syntax: Deflated Explicit VR Little Endian
#[rustfmt::skip]
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
#[rustfmt::skip]
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: JPEG Baseline (Process 1)
#[rustfmt::skip]
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG Extended (Process 2 & 4)
#[rustfmt::skip]
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 14)
#[rustfmt::skip]
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1])
#[rustfmt::skip]
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// Transfer Syntax: JPEG-LS Lossless Image Compression
#[rustfmt::skip]
pub const JPEGLS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// Transfer Syntax: JPEG-LS Lossy (Near-Lossless) Image Compression
#[rustfmt::skip]
pub const JPEGLS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
/// Transfer Syntax: JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const JPEG2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// Transfer Syntax: JPEG 2000 Image Compression
#[rustfmt::skip]
pub const JPEG2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: MPEG2 Main Profile / Main Level
#[rustfmt::skip]
pub const MPEG2MPML: &str = "1.2.840.10008.1.2.4.100";
/// Transfer Syntax: MPEG-4 AVC/H.264 High Profile / Level 4.1
#[rustfmt::skip]
pub const MPEG4HP41: &str = "1.2.840.10008.1.2.4.102";
/// Transfer Syntax: HEVC/H.265 Main Profile / Level 5.1
#[rustfmt::skip]
pub const HEVCMP51: &str = "1.2.840.10008.1.2.4.107";
/// Transfer Syntax: High-Throughput JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const HTJ2K_LOSSLESS: &str = "1.2.840.10008.1.2.4.201";
/// Transfer Syntax: High-Throughput JPEG 2000 Image Compression
#[rustfmt::skip]
pub const HTJ2K: &str = "1.2.840.10008.1.2.4.203";
/// Transfer Syntax: RLE Lossless
#[rustfmt::skip]
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";

/// SOP Class: Computed Radiography Image Storage
#[rustfmt::skip]
pub const COMPUTED_RADIOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.1";
/// SOP Class: CT Image Storage
#[rustfmt::skip]
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
/// SOP Class: Ultrasound Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.1";
/// SOP Class: Secondary Capture Image Storage
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
/// SOP Class: MR Image Storage
#[rustfmt::skip]
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
/// SOP Class: Digital X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.1";
