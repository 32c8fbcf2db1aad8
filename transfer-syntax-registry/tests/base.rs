//! Registry tests, to ensure that transfer syntaxes are properly
//! registered when linked together in a separate program.

use dcmedit_encoding::transfer_syntax::{Codec, Endianness, TransferSyntaxIndex};
use dcmedit_transfer_syntax_registry::TransferSyntaxRegistry;

fn assert_fully_supported<T>(registry: T, mut uid: &'static str)
where
    T: TransferSyntaxIndex,
{
    let ts = registry.get(uid);
    assert!(ts.is_some());
    let ts = ts.unwrap();
    if uid.ends_with('\0') {
        uid = &uid[0..uid.len() - 1];
    }
    assert_eq!(ts.uid(), uid);
    assert!(!ts.unsupported());
    assert!(ts.is_codec_free());
}

#[test]
fn contains_base_ts() {
    let registry = TransferSyntaxRegistry;

    // contains implicit VR little endian and is fully supported
    assert_fully_supported(registry, "1.2.840.10008.1.2");

    // should work the same for trailing null characters
    assert_fully_supported(registry, "1.2.840.10008.1.2\0");

    // contains explicit VR little endian and is fully supported
    assert_fully_supported(registry, "1.2.840.10008.1.2.1");

    // contains explicit VR big endian and is fully supported
    assert_fully_supported(registry, "1.2.840.10008.1.2.2");
}

#[test]
fn base_ts_have_the_right_encoding() {
    let registry = TransferSyntaxRegistry;

    let ts = registry.get("1.2.840.10008.1.2").unwrap();
    assert!(!ts.is_explicit_vr());
    assert_eq!(ts.endianness(), Endianness::Little);

    let ts = registry.get("1.2.840.10008.1.2.2").unwrap();
    assert!(ts.is_explicit_vr());
    assert_eq!(ts.endianness(), Endianness::Big);
}

#[test]
fn encapsulated_ts_are_readable() {
    let registry = TransferSyntaxRegistry;

    for uid in [
        "1.2.840.10008.1.2.4.50",
        "1.2.840.10008.1.2.4.70",
        "1.2.840.10008.1.2.4.90",
        "1.2.840.10008.1.2.4.201",
        "1.2.840.10008.1.2.5",
    ] {
        let ts = registry.get(uid).unwrap();
        assert_eq!(ts.codec(), &Codec::EncapsulatedPixelData);
        assert!(!ts.unsupported());
        assert!(ts.unsupported_pixel_encapsulation());
        assert!(ts.decoder().is_some());
    }
}

#[test]
fn deflated_ts_is_known_but_unsupported() {
    let ts = TransferSyntaxRegistry.get("1.2.840.10008.1.2.1.99").unwrap();
    assert!(ts.unsupported());
    assert!(ts.decoder().is_none());
    assert!(ts.encoder().is_none());
}

#[test]
fn unknown_ts_is_absent() {
    assert!(TransferSyntaxRegistry.get("1.2.3.4.5").is_none());
    assert!(TransferSyntaxRegistry.get("").is_none());
}

#[test]
fn registry_can_be_listed() {
    let uids: Vec<_> = TransferSyntaxRegistry.iter().map(|ts| ts.uid()).collect();
    assert!(uids.contains(&"1.2.840.10008.1.2.1"));
    assert!(uids.len() >= 4);
}
