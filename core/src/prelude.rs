//! Prelude module.
//!
//! You may import all symbols within for convenience.
pub use crate::dictionary::{DataDictionary as _, DataDictionaryEntry as _};
pub use crate::header::{HasLength as _, Header as _};
pub use crate::{DataElement, DicomValue, Length, Tag, VR};
