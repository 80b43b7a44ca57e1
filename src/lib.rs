//! # Exposure Wire
//!
//! Wire-format core for Bluetooth exposure-notification advertisement payloads.
//!
//! Every advertisement in the protocol carries a rotating proximity identifier
//! followed by a fixed 2-byte **associated metadata** record. This crate owns
//! that record: the canonical byte layout, strict validation when building it
//! from semantic fields, and lenient decoding of whatever arrives over the air.
//! Radio scanning/advertising, key schedules, and storage belong to the
//! surrounding collaborators and are out of scope here.
//!
//! ## Components
//! - **AssociatedMetadata**: the 2-byte record with its two construction paths
//!   (validated fields, raw bytes) and copy-returning accessors
//! - **ProtocolVersion**: typed (major, minor) version pair with support and
//!   compatibility checks
//! - **WireError**: construction-time range and length failures
//!
//! ## Wire Format
//! ```text
//! [Major(2 bits)] [Minor(2 bits)] [Reserved(4 bits)] [TxPower(signed byte)]
//! ```
//!
//! ## Validation Model
//! - Building from semantic fields is strict: out-of-range versions and the
//!   -128 power level are rejected, never truncated or wrapped
//! - Decoding raw bytes is lenient: only the length is checked, reserved bits
//!   and any power byte (including -128) are preserved as-is
//!
//! ## Example
//! ```rust
//! use exposure_wire::{AssociatedMetadata, ProtocolVersion};
//!
//! # fn main() -> exposure_wire::Result<()> {
//! // Encode metadata for an outgoing advertisement.
//! let am = AssociatedMetadata::new(1, 0, -40)?;
//! assert_eq!(am.to_bytes(), [0b0100_0000, 0xD8]);
//!
//! // Decode a received record; reserved bits set by future revisions survive.
//! let received = AssociatedMetadata::from_bytes(&[0b0101_1010, 0xFF])?;
//! assert_eq!(received.version(), ProtocolVersion::new(1, 1)?);
//! assert_eq!(received.transmit_power_level(), -1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::metadata::AssociatedMetadata;
pub use crate::core::version::ProtocolVersion;
pub use crate::error::{Result, WireError};
