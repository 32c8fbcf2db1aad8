//! This crate works on top of DICOM encoding primitives
//! to provide a sequential, token-based view of DICOM data sets.
//!
//! - The [`stateful`] module contains the decoder and encoder
//!   which keep track of the byte position in the stream
//!   and of the data element encoding currently in effect.
//! - At the [`dataset`] level, a data set is a flat stream of tokens
//!   (element headers, values, sequence and item boundaries),
//!   read by a [`DataSetReader`] and written by a [`DataSetWriter`].
//!   Nesting is tracked with an explicit stack,
//!   so arbitrarily deep input cannot exhaust the call stack.
//!
//! Primitive values are never interpreted here:
//! they are carried as the raw bytes found in the source.

pub mod dataset;
pub mod stateful;

pub use dataset::{DataSetReader, DataSetWriter, DataToken, OddLength};
pub use stateful::decode::{DynStatefulDecoder, StatefulDecode, StatefulDecoder};
pub use stateful::encode::StatefulEncoder;
