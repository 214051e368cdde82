//! Error types for the Vouch core
//!
//! Every variant here is a deterministic caller or data error with no
//! recovery path inside the core. Verification failures are not errors:
//! `verify`/`is_valid` return `bool` and never fail.

use crate::types::{KeyKind, Timestamp};

/// Core error types for Vouch key handling
#[derive(Debug, thiserror::Error)]
pub enum VouchError {
    /// Container or key file is malformed: truncated bytes, a missing or
    /// wrong-length entry, or an unsupported version/type header
    #[error("Invalid file format: {0}")]
    Format(String),

    /// An embedded self-signature failed verification against the freshly
    /// derived public key while loading a private key
    #[error("Integrity check failed: {0}")]
    Integrity(String),

    /// Attempt to sign with a key whose expiry has passed
    #[error("Key expired at {expires}")]
    ExpiredKey {
        /// Expiration carried by the key's metadata
        expires: Timestamp,
    },

    /// Operation invoked on the wrong kind of key record
    #[error("Operation requires a {expected} key, found a {found} key")]
    RoleMismatch {
        /// Kind the operation needs
        expected: KeyKind,
        /// Kind the record actually holds
        found: KeyKind,
    },
}

impl VouchError {
    /// Construct a format error from any message
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Construct an integrity error from any message
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity(message.into())
    }
}

/// Result type for Vouch core operations
pub type Result<T> = core::result::Result<T, VouchError>;
