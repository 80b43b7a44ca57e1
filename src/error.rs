//! # Error Types
//!
//! Construction-time failures for the wire layer.
//!
//! Both failure kinds are raised synchronously while building an
//! [`AssociatedMetadata`](crate::AssociatedMetadata) value and never from an
//! accessor. Neither is recoverable at this layer: on the decode path the
//! caller discards the malformed packet, on the encode path it rejects the
//! configuration.
//!
//! ## Error Categories
//! - **Range Errors**: a semantic constructor argument outside its documented
//!   inclusive bound (`MajorVersionOutOfRange`, `MinorVersionOutOfRange`,
//!   `PowerLevelOutOfRange`)
//! - **Length Errors**: a raw buffer that is not exactly the fixed record
//!   size (`LengthMismatch`)
//!
//! All errors implement `std::error::Error` for interoperability and
//! serialize with serde so collaborators can forward them.
//!
//! ## Example Usage
//! ```rust
//! use exposure_wire::AssociatedMetadata;
//! use tracing::debug;
//!
//! // Decode the metadata trailing a received advertisement, dropping
//! // malformed records the way the scanner drops malformed packets.
//! fn parse_received(raw: &[u8]) -> Option<AssociatedMetadata> {
//!     match AssociatedMetadata::from_bytes(raw) {
//!         Ok(am) => Some(am),
//!         Err(e) => {
//!             debug!(error = %e, "discarding malformed metadata record");
//!             None
//!         }
//!     }
//! }
//!
//! assert!(parse_received(&[0x40, 0xD8]).is_some());
//! assert!(parse_received(&[0x40]).is_none());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// WireError is the primary error type for all wire-format operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireError {
    /// Major version outside the 2-bit field range.
    #[error("major version out of range: {0} (expected 0..=3)")]
    MajorVersionOutOfRange(u8),

    /// Minor version outside the 2-bit field range.
    #[error("minor version out of range: {0} (expected 0..=3)")]
    MinorVersionOutOfRange(u8),

    /// Transmit power level outside the legal input range. Only -128 is
    /// reachable here; the rest of the illegal space is unrepresentable in
    /// the parameter type.
    #[error("transmit power level out of range: {0} (expected -127..=127)")]
    PowerLevelOutOfRange(i8),

    /// Raw buffer is not exactly the fixed record size.
    #[error("associated metadata must be exactly 2 bytes, got {0}")]
    LengthMismatch(usize),
}

/// Type alias for Results using WireError
pub type Result<T> = std::result::Result<T, WireError>;
