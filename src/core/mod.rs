//! # Core Wire Components
//!
//! The fixed-layout metadata record and its version pair.
//!
//! This module owns the binary form of the associated metadata broadcast with
//! every proximity advertisement: field packing and unpacking, validation at
//! the semantic boundary, and tolerance at the byte boundary.
//!
//! ## Components
//! - **AssociatedMetadata**: immutable 2-byte record with strict semantic
//!   construction and lenient raw decoding
//! - **ProtocolVersion**: typed (major, minor) pair packed into the record's
//!   first byte
//!
//! ## Wire Format
//! ```text
//! [Major(2 bits)] [Minor(2 bits)] [Reserved(4 bits)] [TxPower(signed byte)]
//! ```
//!
//! ## Validation
//! - Length checked before any copy (exactly 2 bytes)
//! - Semantic inputs never truncated or wrapped into range
//! - Reserved bits pass through decode untouched, canonical encode zeroes them

pub mod metadata;
pub mod version;
