//! # Associated Metadata
//!
//! The 2-byte metadata record accompanying a rotating proximity identifier.
//!
//! Byte 0 packs the protocol version pair into its high nibble and leaves the
//! low nibble reserved; byte 1 carries the transmit power level as a signed
//! byte. The record is immutable once built and every accessor that exposes
//! the buffer returns an independent copy.
//!
//! Construction is asymmetric on purpose: building from semantic fields is
//! strict (out-of-range values are errors, never masked into range) while
//! decoding received bytes is lenient (only the length is checked, so records
//! from future protocol revisions survive a round-trip unchanged).

use std::fmt;

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};

use crate::config::{AM_LENGTH, MAX_VERSION_FIELD, MIN_TX_POWER_LEVEL};
use crate::core::version::ProtocolVersion;
use crate::error::{Result, WireError};

/// Offset of the byte holding both version fields and the reserved nibble.
const VERSIONING_BYTE: usize = 0;
/// Offset of the byte holding the transmit power level.
const POWER_LEVEL_BYTE: usize = 1;
/// Bit position of the major version field within the versioning byte.
const MAJOR_BIT_POS: u32 = 6;
/// Bit position of the minor version field within the versioning byte.
const MINOR_BIT_POS: u32 = 4;
/// Mask for a 2-bit version field after shifting.
const VERSION_MASK: u8 = 0b11;

/// Associated metadata broadcast alongside a rotating proximity identifier.
///
/// # Wire Format
/// ```text
/// offset 0: [major:2][minor:2][reserved:4]
/// offset 1: [transmit power: signed 8-bit]
/// ```
///
/// # Example
/// ```rust
/// use exposure_wire::AssociatedMetadata;
///
/// let am = AssociatedMetadata::new(2, 1, 10)?;
/// assert_eq!(am.to_bytes(), [0b1001_0000, 10]);
/// assert_eq!(am.transmit_power_level(), 10);
/// # Ok::<(), exposure_wire::WireError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssociatedMetadata {
    data: [u8; AM_LENGTH],
}

impl AssociatedMetadata {
    /// Builds the canonical record from semantic fields.
    ///
    /// Both version fields must fit their 2-bit slots (0..=3) and the power
    /// level must lie in -127..=127. The reserved nibble of the canonical
    /// encoding is always zero.
    ///
    /// # Errors
    /// Returns a range error naming the offending parameter. Inputs are never
    /// silently truncated or wrapped into range.
    pub fn new(major_version: u8, minor_version: u8, power_level: i8) -> Result<Self> {
        if major_version > MAX_VERSION_FIELD {
            return Err(WireError::MajorVersionOutOfRange(major_version));
        }
        if minor_version > MAX_VERSION_FIELD {
            return Err(WireError::MinorVersionOutOfRange(minor_version));
        }
        // i8 makes anything above 127 unrepresentable; only the wire-legal
        // but input-illegal -128 needs rejecting.
        if power_level < MIN_TX_POWER_LEVEL {
            return Err(WireError::PowerLevelOutOfRange(power_level));
        }

        let mut data = [0u8; AM_LENGTH];
        data[VERSIONING_BYTE] =
            (major_version << MAJOR_BIT_POS) | (minor_version << MINOR_BIT_POS);
        data[POWER_LEVEL_BYTE] = power_level as u8;
        Ok(Self { data })
    }

    /// Builds the record for a typed version pair.
    ///
    /// # Errors
    /// Same conditions as [`AssociatedMetadata::new`]; the version pair is
    /// already in range by construction, so only the power level can fail.
    pub fn with_version(version: ProtocolVersion, power_level: i8) -> Result<Self> {
        Self::new(version.major(), version.minor(), power_level)
    }

    /// Decodes a received record from raw bytes.
    ///
    /// Only the length is validated. Reserved bits and any power byte
    /// (including -128, which [`AssociatedMetadata::new`] rejects) are copied
    /// through untouched, so re-encoding yields the exact input bytes.
    ///
    /// # Errors
    /// [`WireError::LengthMismatch`] unless `raw` is exactly 2 bytes.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        if raw.len() != AM_LENGTH {
            return Err(WireError::LengthMismatch(raw.len()));
        }
        let mut data = [0u8; AM_LENGTH];
        data.copy_from_slice(raw);
        Ok(Self { data })
    }

    /// Reads one record from the front of a buffer, consuming exactly
    /// [`AM_LENGTH`] bytes and leaving any remainder for the caller.
    ///
    /// # Errors
    /// [`WireError::LengthMismatch`] with the remaining byte count when the
    /// buffer holds fewer than 2 bytes; nothing is consumed in that case.
    pub fn read_from<B: Buf>(buf: &mut B) -> Result<Self> {
        if buf.remaining() < AM_LENGTH {
            return Err(WireError::LengthMismatch(buf.remaining()));
        }
        let mut data = [0u8; AM_LENGTH];
        buf.copy_to_slice(&mut data);
        Ok(Self { data })
    }

    /// Appends the canonical 2 bytes to a buffer.
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.data);
    }

    /// Returns the canonical byte buffer.
    ///
    /// The array is an independent copy on every call; callers cannot reach
    /// or mutate the internal state through it.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; AM_LENGTH] {
        self.data
    }

    /// Major version field of byte 0 (bits 7-6).
    #[must_use]
    pub const fn major_version(&self) -> u8 {
        (self.data[VERSIONING_BYTE] >> MAJOR_BIT_POS) & VERSION_MASK
    }

    /// Minor version field of byte 0 (bits 5-4).
    #[must_use]
    pub const fn minor_version(&self) -> u8 {
        (self.data[VERSIONING_BYTE] >> MINOR_BIT_POS) & VERSION_MASK
    }

    /// Transmit power level, byte 1 as a signed two's-complement byte.
    ///
    /// This is the one place -128 can surface: it cannot be produced through
    /// the validated constructor but decodes fine from raw bytes.
    #[must_use]
    pub const fn transmit_power_level(&self) -> i8 {
        self.data[POWER_LEVEL_BYTE] as i8
    }

    /// Decoded version pair as a typed value.
    #[must_use]
    pub const fn version(&self) -> ProtocolVersion {
        ProtocolVersion::from_packed(self.major_version(), self.minor_version())
    }
}

impl TryFrom<&[u8]> for AssociatedMetadata {
    type Error = WireError;

    fn try_from(raw: &[u8]) -> Result<Self> {
        Self::from_bytes(raw)
    }
}

impl fmt::Display for AssociatedMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} dBm", self.version(), self.transmit_power_level())
    }
}
