//! Human-readable key metadata and its canonical encoding

use crate::container::Container;
use crate::crypto;
use crate::errors::Result;
use crate::types::Timestamp;

/// Container entry holding the UTF-8 name
const NAME_ENTRY: &str = "n";
/// Container entry holding the 8-byte big-endian expiry
const EXPIRES_ENTRY: &str = "e";

/// Name and expiry carried by every public identity
///
/// The expiry is immutable after creation; there is no renewal operation.
/// "Expired" is always a pure function of a clock reading against the
/// stored value, never a stored state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMetadata {
    /// Human-readable holder name
    pub name: String,
    /// Expiration as seconds since the Unix epoch
    pub expires: Timestamp,
}

impl KeyMetadata {
    /// Create metadata from a name and expiry
    pub fn new(name: impl Into<String>, expires: Timestamp) -> Self {
        Self {
            name: name.into(),
            expires,
        }
    }

    /// True when `at` is past the stored expiry
    pub fn is_expired_at(&self, at: Timestamp) -> bool {
        at > self.expires
    }

    /// True when the wall clock is past the stored expiry
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Timestamp::now())
    }

    /// Canonical container encoding: `n` = name bytes, `e` = expiry
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut container = Container::new();
        container.insert_str(NAME_ENTRY, &self.name)?;
        container.insert_u64(EXPIRES_ENTRY, self.expires.as_secs())?;
        Ok(container.encode())
    }

    /// Decode metadata from its canonical encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let container = Container::decode(bytes)?;
        Ok(Self {
            name: container.require_str(NAME_ENTRY)?,
            expires: Timestamp::new(container.require_u64(EXPIRES_ENTRY)?),
        })
    }

    /// SHA-512 digest of the canonical encoding
    ///
    /// This digest, not the raw encoded bytes, is the message every
    /// metadata signature is computed over.
    pub fn signing_digest(&self) -> Result<[u8; 64]> {
        Ok(crypto::digest(self.to_bytes()?))
    }
}
