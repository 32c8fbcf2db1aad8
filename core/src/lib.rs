#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmedit, containing the concepts and data
//! structures shared by the codec crates.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises various data types for DICOM element headers,
//!   including common definitions for DICOM tags and value representations.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing the default value representation and multiplicity.
//! - [`value`] holds the in-memory value of a data element,
//!   plus the per-VR capability table used to validate and pad values.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod dictionary;
pub mod header;
pub mod prelude;
pub mod value;

pub use dictionary::DataDictionary;
pub use header::{DataElement, DataElementHeader, Length, Tag, VR};
pub use value::Value as DicomValue;

// re-export crates that are part of the public API
pub use smallvec;
