//! Stateful decoding and encoding of DICOM data elements.
pub mod decode;
pub mod encode;
