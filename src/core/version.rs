//! # Protocol Versioning
//!
//! Typed (major, minor) version pair carried in the metadata record.
//!
//! Each field occupies 2 bits of the versioning byte, so both range over
//! 0..=3. Minor revisions share the wire layout by construction; a different
//! major version may not, which is what the support and compatibility checks
//! key on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{MAX_VERSION_FIELD, PROTOCOL_MAJOR_VERSION, PROTOCOL_MINOR_VERSION};
use crate::error::{Result, WireError};

/// Protocol version pair as packed into the versioning byte.
///
/// # Example
/// ```
/// use exposure_wire::ProtocolVersion;
///
/// let version = ProtocolVersion::current();
/// assert!(version.is_supported());
/// assert_eq!(version.to_string(), "v1.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProtocolVersion {
    major: u8,
    minor: u8,
}

impl ProtocolVersion {
    /// Creates a version pair, rejecting fields that overflow their 2-bit
    /// slots.
    ///
    /// # Errors
    /// [`WireError::MajorVersionOutOfRange`] or
    /// [`WireError::MinorVersionOutOfRange`] when a field exceeds 3.
    pub fn new(major: u8, minor: u8) -> Result<Self> {
        if major > MAX_VERSION_FIELD {
            return Err(WireError::MajorVersionOutOfRange(major));
        }
        if minor > MAX_VERSION_FIELD {
            return Err(WireError::MinorVersionOutOfRange(minor));
        }
        Ok(Self { major, minor })
    }

    /// Version pair already reduced to 2-bit fields by the wire decoder.
    pub(crate) const fn from_packed(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Returns the version this implementation broadcasts.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            major: PROTOCOL_MAJOR_VERSION,
            minor: PROTOCOL_MINOR_VERSION,
        }
    }

    /// Major version field.
    #[must_use]
    pub const fn major(&self) -> u8 {
        self.major
    }

    /// Minor version field.
    #[must_use]
    pub const fn minor(&self) -> u8 {
        self.minor
    }

    /// Checks whether records with this version can be interpreted by the
    /// current implementation.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.major == PROTOCOL_MAJOR_VERSION
    }

    /// Checks whether two versions share a wire layout.
    #[must_use]
    pub const fn is_compatible_with(&self, other: &Self) -> bool {
        self.major == other.major
    }
}

impl Default for ProtocolVersion {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}", self.major, self.minor)
    }
}
