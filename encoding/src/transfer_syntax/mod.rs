//! Module containing the DICOM Transfer Syntax data structure and related methods.
//! Similar to the DcmCodec in DCMTK, the `TransferSyntax` contains all of the necessary
//! algorithms for decoding and encoding DICOM data in a certain transfer syntax.
//!
//! This crate does not host specific transfer syntaxes. Instead, they are
//! declared in the `dcmedit-transfer-syntax-registry` crate,
//! which implements [`TransferSyntaxIndex`].

use crate::decode::basic::BasicDecoder;
use crate::decode::{explicit_be, explicit_le, implicit_le, DecodeFrom};
use crate::encode::basic::BasicEncoder;
use crate::encode::{
    explicit_be::ExplicitVRBigEndianEncoder, explicit_le::ExplicitVRLittleEndianEncoder,
    implicit_le::ImplicitVRLittleEndianEncoder, EncodeTo, EncoderFor,
};
use std::io::{Read, Write};

pub use byteordered::Endianness;

/// A decoder with its type erased.
pub type DynDecoder<S> = Box<dyn DecodeFrom<S>>;

/// An encoder with its type erased.
pub type DynEncoder<'w, W> = Box<dyn EncodeTo<W> + 'w>;

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The transfer syntax' requirements and implemented capabilities.
    codec: Codec,
}

/// Trait for containers of transfer syntax specifiers.
///
/// Types implementing this trait are held responsible for populating
/// themselves with a set of transfer syntaxes, which can be fully supported,
/// partially supported, or not supported. Usually, only one implementation
/// of this trait is used for the entire program.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of a trailing null characters (`\0`) in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

/// A description of the encoding and decoding requirements
/// of a transfer syntax.
/// This is also used as a means to describe whether pixel data is encapsulated.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum Codec {
    /// No codec is given, nor is it required.
    None,
    /// Custom encoding and decoding of the entire data set is required, but
    /// not supported. This is the case of
    /// _Deflated Explicit VR Little Endian_, for example.
    Unsupported,
    /// Pixel data is encapsulated in fragments,
    /// which are carried through without being decoded.
    /// The rest of the data set can be read and written.
    EncapsulatedPixelData,
}

impl TransferSyntax {
    /** Create a new transfer syntax descriptor.
     *
     * Note that only transfer syntax implementors are expected to construct
     * TS descriptors from scratch. For a practical usage of transfer syntaxes,
     * one should look up an existing transfer syntax registry by UID.
     */
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        codec: Codec,
    ) -> Self {
        TransferSyntax {
            uid,
            name,
            byte_order,
            explicit_vr,
            codec,
        }
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether value representations are written in element headers.
    pub const fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Obtain this transfer syntax' codec specification.
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Check whether no codecs are required for this transfer syntax,
    /// meaning that a complete implementation is available
    /// and no pixel data conversion is required.
    pub fn is_codec_free(&self) -> bool {
        matches!(self.codec, Codec::None)
    }

    /// Check whether reading and writing of data sets is unsupported.
    /// If this is `true`, encoding and decoding will not be available.
    pub fn unsupported(&self) -> bool {
        matches!(self.codec, Codec::Unsupported)
    }

    /// Check whether the pixel data of this transfer syntax
    /// is only available in its encapsulated form.
    pub fn unsupported_pixel_encapsulation(&self) -> bool {
        matches!(
            self.codec,
            Codec::Unsupported | Codec::EncapsulatedPixelData
        )
    }

    /// Retrieve the appropriate data element decoder for this transfer syntax.
    /// Can yield none if decoding is not supported.
    pub fn decoder<'s>(&self) -> Option<DynDecoder<dyn Read + 's>> {
        self.decoder_for()
    }

    /// Retrieve the appropriate data element decoder for this transfer syntax
    /// and given reader type (this method is not object safe).
    /// Can yield none if decoding is not supported.
    pub fn decoder_for<S>(&self) -> Option<DynDecoder<S>>
    where
        Self: Sized,
        S: ?Sized + Read,
    {
        if self.unsupported() {
            return None;
        }
        match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => Some(Box::new(
                implicit_le::ImplicitVRLittleEndianDecoder::default(),
            )),
            (Endianness::Little, true) => Some(Box::new(
                explicit_le::ExplicitVRLittleEndianDecoder::default(),
            )),
            (Endianness::Big, true) => {
                Some(Box::new(explicit_be::ExplicitVRBigEndianDecoder::default()))
            }
            _ => None,
        }
    }

    /// Retrieve the appropriate data element encoder for this transfer syntax.
    /// Can yield none if encoding is not supported.
    pub fn encoder<'w>(&self) -> Option<DynEncoder<'w, dyn Write + 'w>> {
        self.encoder_for()
    }

    /// Retrieve the appropriate data element encoder for this transfer syntax
    /// and the given writer type (this method is not object safe).
    /// Can yield none if encoding is not supported.
    pub fn encoder_for<'w, W: 'w>(&self) -> Option<DynEncoder<'w, W>>
    where
        Self: Sized,
        W: ?Sized + Write,
    {
        if self.unsupported() {
            return None;
        }
        match (self.byte_order, self.explicit_vr) {
            (Endianness::Little, false) => Some(Box::new(EncoderFor::new(
                ImplicitVRLittleEndianEncoder::default(),
            ))),
            (Endianness::Little, true) => Some(Box::new(EncoderFor::new(
                ExplicitVRLittleEndianEncoder::default(),
            ))),
            (Endianness::Big, true) => Some(Box::new(EncoderFor::new(
                ExplicitVRBigEndianEncoder::default(),
            ))),
            _ => None,
        }
    }

    /// Obtain a dynamic basic decoder, based on this transfer syntax' expected endianness.
    pub fn basic_decoder(&self) -> BasicDecoder {
        BasicDecoder::from(self.endianness())
    }

    /// Obtain a dynamic basic encoder, based on this transfer syntax' expected endianness.
    pub fn basic_encoder(&self) -> BasicEncoder {
        BasicEncoder::from(self.endianness())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::BasicDecode;
    use dcmedit_core::header::{DataElementHeader, Header, Length};
    use dcmedit_core::{Tag, VR};

    const EXPLICIT_BE: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2.2",
        "Explicit VR Big Endian",
        Endianness::Big,
        true,
        Codec::None,
    );

    const DEFLATED: TransferSyntax = TransferSyntax::new(
        "1.2.840.10008.1.2.1.99",
        "Deflated Explicit VR Little Endian",
        Endianness::Little,
        true,
        Codec::Unsupported,
    );

    #[test]
    fn codecs_follow_the_syntax() {
        let mut out: Vec<u8> = Vec::new();
        let encoder = EXPLICIT_BE.encoder_for::<Vec<u8>>().unwrap();
        encoder
            .encode_element_header(
                &mut out,
                DataElementHeader::new(Tag(0x0008, 0x0060), VR::CS, Length(2)),
            )
            .unwrap();
        assert_eq!(out, [0x00, 0x08, 0x00, 0x60, b'C', b'S', 0x00, 0x02]);

        let decoder = EXPLICIT_BE.decoder_for::<&[u8]>().unwrap();
        let (header, _) = decoder.decode_header(&mut &out[..]).unwrap();
        assert_eq!(header.tag(), Tag(0x0008, 0x0060));
        assert_eq!(EXPLICIT_BE.basic_decoder().endianness(), Endianness::Big);
    }

    #[test]
    fn unsupported_syntax_has_no_codecs() {
        assert!(DEFLATED.unsupported());
        assert!(DEFLATED.decoder().is_none());
        assert!(DEFLATED.encoder().is_none());
        assert!(EXPLICIT_BE.is_codec_free());
        assert!(!EXPLICIT_BE.unsupported_pixel_encapsulation());
    }
}
