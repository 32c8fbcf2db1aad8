//! This crate implements the standard DICOM attribute dictionary
//! and related constants.
//!
//! - [`data_element`]: the run-time data element dictionary,
//!   a process-wide registry behind the unit type
//!   [`StandardDataDictionary`],
//!   built on first use and never mutated afterwards.
//!   It covers the file meta group,
//!   the common patient, study, series, equipment, image and pixel attributes,
//!   repeating groups such as overlays,
//!   plus the generic group length and private creator rules.
//! - [`tags`]: constants mapping an attribute keyword to its DICOM tag.
//! - [`uids`]: transfer syntax and storage SOP class UIDs.
//!
//! The records are collected from [DICOM PS3.6].
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
pub mod data_element;

pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
