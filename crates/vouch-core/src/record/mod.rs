//! Key record kinds and their shared file envelope
//!
//! Every key file is a container with a `t` header entry whose low nibble
//! discriminates public from private. [`KeyRecord`] is the closed
//! two-variant decode result; narrow it by pattern matching or with the
//! `into_*` helpers, which surface a role mismatch when the wrong kind is
//! required.

pub mod certification;
pub mod metadata;
pub mod private;
pub mod public;
pub mod signature;

pub use certification::CertificationRecord;
pub use metadata::KeyMetadata;
pub use private::{create_key_pair, create_key_pair_with_rng, PrivateKeyRecord};
pub use public::PublicKeyRecord;
pub use signature::SignatureRecord;

use crate::container::Container;
use crate::errors::{Result, VouchError};
use crate::types::KeyKind;

// ----------------------------------------------------------------------------
// Container Entry Names
// ----------------------------------------------------------------------------

/// Header entry: `(version << 4) | type`
pub(crate) const HEADER_ENTRY: &str = "t";
/// Raw key material entry
pub(crate) const KEY_ENTRY: &str = "k";
/// Nested metadata entry
pub(crate) const INFO_ENTRY: &str = "i";
/// Self/envelope signature entry
pub(crate) const SELF_SIGNATURE_ENTRY: &str = "is";
/// Certifications map entry (public keys only)
pub(crate) const CERTIFICATIONS_ENTRY: &str = "c";
/// Encoded public metadata inside a private key's `i` container
pub(crate) const PUBLIC_INFO_ENTRY: &str = "pi";
/// Metadata proof inside a private key's `i` container
pub(crate) const PUBLIC_INFO_SIGNATURE_ENTRY: &str = "pis";

// ----------------------------------------------------------------------------
// Key Record
// ----------------------------------------------------------------------------

/// A decoded key file: exactly one of the two record kinds
#[derive(Debug, Clone)]
pub enum KeyRecord {
    /// Secret key material with its public metadata
    Private(PrivateKeyRecord),
    /// Public key material with metadata and certifications
    Public(PublicKeyRecord),
}

impl KeyRecord {
    /// Decode a key file, dispatching on the header byte
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let container = Container::decode(bytes)?;
        let header = container.require_array::<1>(HEADER_ENTRY)?;

        match KeyKind::from_header_byte(header[0])? {
            KeyKind::Private => Ok(Self::Private(PrivateKeyRecord::from_container(&container)?)),
            KeyKind::Public => Ok(Self::Public(PublicKeyRecord::from_container(&container)?)),
        }
    }

    /// Encode the record as a key file
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Self::Private(record) => record.to_bytes(),
            Self::Public(record) => record.to_bytes(),
        }
    }

    /// The kind of record held
    pub fn kind(&self) -> KeyKind {
        match self {
            Self::Private(_) => KeyKind::Private,
            Self::Public(_) => KeyKind::Public,
        }
    }

    /// True when this is a private record
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }

    /// True when this is a public record
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public(_))
    }

    /// Narrow to a private record, failing with a role mismatch otherwise
    pub fn into_private(self) -> Result<PrivateKeyRecord> {
        match self {
            Self::Private(record) => Ok(record),
            Self::Public(_) => Err(VouchError::RoleMismatch {
                expected: KeyKind::Private,
                found: KeyKind::Public,
            }),
        }
    }

    /// Narrow to a public record, failing with a role mismatch otherwise
    pub fn into_public(self) -> Result<PublicKeyRecord> {
        match self {
            Self::Public(record) => Ok(record),
            Self::Private(_) => Err(VouchError::RoleMismatch {
                expected: KeyKind::Public,
                found: KeyKind::Private,
            }),
        }
    }
}
