//! Core types for the Vouch key format
//!
//! This module defines the fundamental types used throughout the crate,
//! using newtype patterns for semantic validation and type safety.

use core::fmt;
use core::str::FromStr;

use crate::errors::VouchError;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Size of raw Ed25519 key material (secret scalar or public point)
pub const KEY_MATERIAL_SIZE: usize = 32;

/// Size of an Ed25519 signature
pub const SIGNATURE_SIZE: usize = 64;

/// Current key file format version, carried in the high nibble of the
/// header byte
pub const FORMAT_VERSION: u8 = 1;

// ----------------------------------------------------------------------------
// Key Identifier
// ----------------------------------------------------------------------------

/// Short identifier for key material (last 8 bytes of its SHA-512 digest)
///
/// Displays as a 16-character uppercase hex string, which is also the form
/// written into key and signature files. The identifier is a display and
/// lookup label only; authentication always flows through a verified
/// signature, never through identifier equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyId([u8; 8]);

impl KeyId {
    /// Create a KeyId from its raw 8 bytes
    pub fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl FromStr for KeyId {
    type Err = VouchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 16 {
            return Err(VouchError::format(format!(
                "key identifier must be 16 hex characters, got {}",
                s.len()
            )));
        }

        let bytes = hex::decode(s)
            .map_err(|_| VouchError::format("key identifier contains non-hex characters"))?;

        let mut id = [0u8; 8];
        id.copy_from_slice(&bytes);
        Ok(Self(id))
    }
}

// ----------------------------------------------------------------------------
// Timestamp
// ----------------------------------------------------------------------------

/// Second-resolution timestamp since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a new timestamp from epoch seconds
    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current wall-clock timestamp
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self(duration.as_secs())
    }

    /// Get the raw epoch seconds
    pub fn as_secs(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----------------------------------------------------------------------------
// Key Kind
// ----------------------------------------------------------------------------

/// The two kinds of key record; every key file holds exactly one of these
///
/// The kind travels in the low nibble of the file header byte, next to the
/// format version in the high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Public key material plus metadata and certifications
    Public = 1,
    /// Secret key material; the only kind able to produce signatures
    Private = 2,
}

impl KeyKind {
    /// Parse a kind from the low nibble of a header byte
    pub fn from_nibble(value: u8) -> Result<Self, VouchError> {
        match value {
            1 => Ok(Self::Public),
            2 => Ok(Self::Private),
            other => Err(VouchError::format(format!(
                "unsupported key type {other:#x}"
            ))),
        }
    }

    /// The low-nibble wire value for this kind
    pub fn as_nibble(self) -> u8 {
        self as u8
    }

    /// Pack this kind with the current format version into a header byte
    pub fn header_byte(self) -> u8 {
        (FORMAT_VERSION << 4) | (self.as_nibble() & 0x0f)
    }

    /// Unpack a header byte, rejecting unsupported versions and kinds
    pub fn from_header_byte(byte: u8) -> Result<Self, VouchError> {
        let version = (byte >> 4) & 0x0f;
        if version != FORMAT_VERSION {
            return Err(VouchError::format(format!(
                "unsupported key version {version}"
            )));
        }
        Self::from_nibble(byte & 0x0f)
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_id_displays_as_uppercase_hex() {
        let id = KeyId::new([0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45, 0x67]);
        assert_eq!(id.to_string(), "DEADBEEF01234567");
    }

    #[test]
    fn key_id_roundtrips_through_display() {
        let id = KeyId::new([0xab, 0xcd, 0x00, 0xff, 0x10, 0x20, 0x30, 0x40]);
        let parsed: KeyId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn key_id_parsing_accepts_lowercase() {
        let parsed: KeyId = "deadbeef01234567".parse().unwrap();
        assert_eq!(parsed.to_string(), "DEADBEEF01234567");
    }

    #[test]
    fn key_id_parsing_rejects_bad_input() {
        assert!("".parse::<KeyId>().is_err());
        assert!("DEADBEEF".parse::<KeyId>().is_err());
        assert!("DEADBEEF0123456Z".parse::<KeyId>().is_err());
        assert!("DEADBEEF012345678".parse::<KeyId>().is_err());
    }

    #[test]
    fn header_byte_packs_version_and_kind() {
        assert_eq!(KeyKind::Public.header_byte(), 0x11);
        assert_eq!(KeyKind::Private.header_byte(), 0x12);
    }

    #[test]
    fn header_byte_roundtrips() {
        for kind in [KeyKind::Public, KeyKind::Private] {
            assert_eq!(KeyKind::from_header_byte(kind.header_byte()).unwrap(), kind);
        }
    }

    #[test]
    fn header_byte_rejects_unknown_version() {
        // Version nibble 2 is not supported.
        assert!(KeyKind::from_header_byte(0x21).is_err());
        assert!(KeyKind::from_header_byte(0x01).is_err());
    }

    #[test]
    fn header_byte_rejects_unknown_kind() {
        assert!(KeyKind::from_header_byte(0x10).is_err());
        assert!(KeyKind::from_header_byte(0x13).is_err());
    }
}
