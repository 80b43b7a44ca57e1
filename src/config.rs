//! # Protocol Constants
//!
//! Wire-level constants shared with the radio-layer collaborator.
//!
//! These values are fixed by the advertisement format: the metadata record
//! size, the version pair this implementation speaks, and the legal
//! transmit-power input range. Changing any of them is a wire-format change.

/// Fixed size of the associated-metadata record in bytes
pub const AM_LENGTH: usize = 2;

/// Major protocol version broadcast by this implementation
pub const PROTOCOL_MAJOR_VERSION: u8 = 1;

/// Minor protocol version broadcast by this implementation
pub const PROTOCOL_MINOR_VERSION: u8 = 0;

/// Ceiling of each 2-bit version field
pub const MAX_VERSION_FIELD: u8 = 3;

/// Lowest transmit power level accepted when building metadata.
/// The wire can carry -128 (any signed byte), but it is excluded as an
/// input value; it only ever surfaces when decoding a received record.
pub const MIN_TX_POWER_LEVEL: i8 = -127;

/// Highest transmit power level accepted when building metadata
pub const MAX_TX_POWER_LEVEL: i8 = 127;
