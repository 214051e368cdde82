//! Vouch core: data model, binary container codec, and trust logic for
//! public-key identities and one-hop certifications
//!
//! A private key record is the origin of everything: it derives its public
//! record, self-certifies it, and is the only producer of signatures and
//! certifications. Public key records and signature records are consumed
//! for verification. Underneath, the container codec and identifier
//! derivation are pure, stateless services.
//!
//! Every operation is a blocking, bounded computation over in-memory
//! buffers; durability and transport belong to callers.

// ----------------------------------------------------------------------------
// Module Declarations
// ----------------------------------------------------------------------------

pub mod container;
pub mod crypto;
pub mod errors;
pub mod record;
pub mod types;

// ----------------------------------------------------------------------------
// Public API
// ----------------------------------------------------------------------------

pub use container::Container;
pub use crypto::{derive_key_id, digest, verify, IdentityKeyPair};
pub use errors::{Result, VouchError};
pub use record::{
    create_key_pair, create_key_pair_with_rng, CertificationRecord, KeyMetadata, KeyRecord,
    PrivateKeyRecord, PublicKeyRecord, SignatureRecord,
};
pub use types::{KeyId, KeyKind, Timestamp, FORMAT_VERSION, KEY_MATERIAL_SIZE, SIGNATURE_SIZE};
