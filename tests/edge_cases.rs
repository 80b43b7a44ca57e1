#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the associated-metadata record
//! Covers boundary validation, length handling, reserved-bit tolerance,
//! sign handling, and accessor isolation

use bytes::{Buf, Bytes};
use exposure_wire::config::{AM_LENGTH, MAX_TX_POWER_LEVEL, MIN_TX_POWER_LEVEL};
use exposure_wire::{AssociatedMetadata, WireError};

// ============================================================================
// SEMANTIC CONSTRUCTION
// ============================================================================

#[test]
fn test_canonical_encoding_is_byte_exact() {
    let am = AssociatedMetadata::new(2, 1, 10).expect("valid fields");
    assert_eq!(am.to_bytes(), [0b1001_0000, 10]);
}

#[test]
fn test_canonical_encoding_zeroes_reserved_nibble() {
    for major in 0..=3 {
        for minor in 0..=3 {
            let am = AssociatedMetadata::new(major, minor, 0).expect("valid fields");
            assert_eq!(
                am.to_bytes()[0] & 0x0F,
                0,
                "low nibble must be zero for {major}.{minor}"
            );
        }
    }
}

#[test]
fn test_major_version_above_field_range_rejected() {
    let result = AssociatedMetadata::new(4, 0, 0);
    assert!(
        matches!(result, Err(WireError::MajorVersionOutOfRange(4))),
        "Should reject major version 4"
    );
}

#[test]
fn test_minor_version_above_field_range_rejected() {
    let result = AssociatedMetadata::new(0, 4, 0);
    assert!(
        matches!(result, Err(WireError::MinorVersionOutOfRange(4))),
        "Should reject minor version 4"
    );
}

#[test]
fn test_power_level_negative_128_rejected() {
    // -128 fits a signed byte but is excluded as an input value
    let result = AssociatedMetadata::new(0, 0, -128);
    assert!(
        matches!(result, Err(WireError::PowerLevelOutOfRange(-128))),
        "Should reject -128 power level"
    );
}

#[test]
fn test_power_level_extremes_accepted() {
    let low = AssociatedMetadata::new(0, 0, MIN_TX_POWER_LEVEL).expect("-127 is legal");
    assert_eq!(low.transmit_power_level(), -127);
    assert_eq!(low.to_bytes()[1], 0x81);

    let high = AssociatedMetadata::new(0, 0, MAX_TX_POWER_LEVEL).expect("127 is legal");
    assert_eq!(high.transmit_power_level(), 127);
    assert_eq!(high.to_bytes()[1], 0x7F);
}

#[test]
fn test_version_fields_accepted_across_full_range() {
    for major in 0..=3 {
        for minor in 0..=3 {
            let am = AssociatedMetadata::new(major, minor, 0).expect("valid fields");
            assert_eq!(am.major_version(), major);
            assert_eq!(am.minor_version(), minor);
        }
    }
}

// ============================================================================
// RAW DECODING
// ============================================================================

#[test]
fn test_empty_buffer_rejected() {
    let result = AssociatedMetadata::from_bytes(&[]);
    assert!(matches!(result, Err(WireError::LengthMismatch(0))));
}

#[test]
fn test_short_buffer_rejected() {
    let result = AssociatedMetadata::from_bytes(&[0x00]);
    assert!(matches!(result, Err(WireError::LengthMismatch(1))));
}

#[test]
fn test_long_buffer_rejected() {
    let result = AssociatedMetadata::from_bytes(&[0x00, 0x00, 0x00]);
    assert!(matches!(result, Err(WireError::LengthMismatch(3))));
}

#[test]
fn test_reserved_bits_tolerated_on_decode() {
    let am = AssociatedMetadata::from_bytes(&[0b1001_1111, 10]).expect("2 bytes");
    assert_eq!(am.major_version(), 2);
    assert_eq!(am.minor_version(), 1);
    // the nibble is preserved, not cleared
    assert_eq!(am.to_bytes(), [0b1001_1111, 10]);
}

#[test]
fn test_decode_accepts_negative_128_power_level() {
    let am = AssociatedMetadata::from_bytes(&[0x00, 0x80]).expect("2 bytes");
    assert_eq!(am.transmit_power_level(), -128);
}

#[test]
fn test_sign_handling() {
    let minus_one = AssociatedMetadata::from_bytes(&[0x00, 0xFF]).expect("2 bytes");
    assert_eq!(minus_one.transmit_power_level(), -1);

    let minus_127 = AssociatedMetadata::from_bytes(&[0x00, 0x81]).expect("2 bytes");
    assert_eq!(minus_127.transmit_power_level(), -127);
}

#[test]
fn test_version_fields_unaffected_by_sign_of_versioning_byte() {
    // 0xFF has the sign bit set; unsigned shifts must not drag it into the fields
    let am = AssociatedMetadata::from_bytes(&[0xFF, 0x00]).expect("2 bytes");
    assert_eq!(am.major_version(), 3);
    assert_eq!(am.minor_version(), 3);
}

#[test]
fn test_try_from_slice() {
    let am = AssociatedMetadata::try_from([0x40u8, 0xD8].as_slice()).expect("2 bytes");
    assert_eq!(am.transmit_power_level(), -40);

    let result = AssociatedMetadata::try_from([0x40u8].as_slice());
    assert!(matches!(result, Err(WireError::LengthMismatch(1))));
}

// ============================================================================
// ACCESSOR ISOLATION
// ============================================================================

#[test]
fn test_returned_buffer_is_independent() {
    let am = AssociatedMetadata::new(2, 1, 10).expect("valid fields");

    let mut first = am.to_bytes();
    first[0] = 0xFF;
    first[1] = 0xFF;

    // mutation of the first copy must not reach the record or later copies
    let second = am.to_bytes();
    assert_eq!(second, [0b1001_0000, 10]);
    assert_eq!(am.major_version(), 2);
}

#[test]
fn test_accessors_never_fail_after_construction() {
    // any bit pattern decodes, and all accessors are total from then on
    let am = AssociatedMetadata::from_bytes(&[0xFF, 0x80]).expect("2 bytes");
    assert_eq!(am.major_version(), 3);
    assert_eq!(am.minor_version(), 3);
    assert_eq!(am.transmit_power_level(), -128);
    assert!(!am.version().is_supported());
}

// ============================================================================
// BUFFER INTEGRATION
// ============================================================================

#[test]
fn test_read_from_consumes_exactly_record_length() {
    let mut buf = Bytes::from_static(&[0x40, 0xD8, 0xDE, 0xAD]);
    let am = AssociatedMetadata::read_from(&mut buf).expect("enough bytes");
    assert_eq!(am.to_bytes(), [0x40, 0xD8]);
    assert_eq!(buf.remaining(), 4 - AM_LENGTH);
}

#[test]
fn test_read_from_short_buffer_reports_remaining() {
    let mut buf = Bytes::from_static(&[0x40]);
    let result = AssociatedMetadata::read_from(&mut buf);
    assert!(matches!(result, Err(WireError::LengthMismatch(1))));
}
