//! Private key records: the sole producer of signatures and certifications

use std::collections::BTreeMap;

use rand_core::{CryptoRng, RngCore};

use crate::container::Container;
use crate::crypto::{self, IdentityKeyPair};
use crate::errors::{Result, VouchError};
use crate::record::certification::CertificationRecord;
use crate::record::metadata::KeyMetadata;
use crate::record::public::PublicKeyRecord;
use crate::record::signature::SignatureRecord;
use crate::record::{
    HEADER_ENTRY, INFO_ENTRY, KEY_ENTRY, PUBLIC_INFO_ENTRY, PUBLIC_INFO_SIGNATURE_ENTRY,
    SELF_SIGNATURE_ENTRY,
};
use crate::types::{KeyId, KeyKind, Timestamp, KEY_MATERIAL_SIZE, SIGNATURE_SIZE};

/// Secret key material bound to the metadata of its derived public key
///
/// A private record is created once and never mutated. Certifications it
/// issues travel with the recipient public record, never with this one.
#[derive(Debug, Clone)]
pub struct PrivateKeyRecord {
    keypair: IdentityKeyPair,
    info: KeyMetadata,
    id: KeyId,
    public_id: KeyId,
}

impl PrivateKeyRecord {
    /// Wrap an existing key pair with its public metadata
    pub fn new(keypair: IdentityKeyPair, info: KeyMetadata) -> Self {
        let id = crypto::derive_key_id(keypair.private_key_bytes());
        let public_id = crypto::derive_key_id(keypair.public_key_bytes());
        Self {
            keypair,
            info,
            id,
            public_id,
        }
    }

    /// Identifier derived from the secret key material
    pub fn id(&self) -> KeyId {
        self.id
    }

    /// Identifier derived from the public key material
    pub fn public_id(&self) -> KeyId {
        self.public_id
    }

    /// Raw public key material derived from the secret scalar
    pub fn public_key_bytes(&self) -> [u8; KEY_MATERIAL_SIZE] {
        self.keypair.public_key_bytes()
    }

    /// Name and expiry metadata of the derived public key
    pub fn info(&self) -> &KeyMetadata {
        &self.info
    }

    /// True when the wall clock is past the key's expiry
    pub fn is_expired(&self) -> bool {
        self.info.is_expired()
    }

    /// Raw signing gated on expiry; every signature this record produces
    /// passes through here
    fn sign_raw(&self, data: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
        if self.info.is_expired() {
            return Err(VouchError::ExpiredKey {
                expires: self.info.expires,
            });
        }
        Ok(self.keypair.sign(data))
    }

    /// The self-signature for this key's public metadata
    fn metadata_signature(&self) -> Result<[u8; SIGNATURE_SIZE]> {
        self.sign_raw(&self.info.signing_digest()?)
    }

    /// Sign arbitrary data, wrapping the result with this record's public
    /// identifier
    pub fn sign(&self, data: &[u8]) -> Result<SignatureRecord> {
        Ok(SignatureRecord::new(self.public_id, self.sign_raw(data)?))
    }

    /// Derive the public record: self-signed metadata plus an immediate
    /// self-certification
    ///
    /// This is the only way a public record is produced from a private one.
    pub fn create_public_key(&self) -> Result<PublicKeyRecord> {
        let mut public = PublicKeyRecord::new(
            self.keypair.public_key_bytes(),
            self.info.clone(),
            self.metadata_signature()?,
            BTreeMap::new(),
        );
        self.certify(&mut public)?;
        Ok(public)
    }

    /// Endorse `public`'s current self-signature, replacing any earlier
    /// certification from this key
    ///
    /// Self-certification and third-party certification are the same
    /// operation; only the ownership relationship differs.
    pub fn certify(&self, public: &mut PublicKeyRecord) -> Result<()> {
        let holder_signature = *public.signature();
        let signature = self.sign_raw(&holder_signature)?;
        public.insert_certification(CertificationRecord::new(
            self.public_id,
            signature,
            holder_signature,
        ));
        Ok(())
    }

    /// Encode as a private key file: `t`, `k`, `i` = {`pi`, `pis`}, `is`
    ///
    /// `pis` proves the metadata alone; the envelope signature `is` covers
    /// the whole `i` container, so a loader can check metadata authenticity
    /// before trusting the envelope.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut inner = Container::new();
        inner.insert(PUBLIC_INFO_ENTRY, self.info.to_bytes()?)?;
        inner.insert(
            PUBLIC_INFO_SIGNATURE_ENTRY,
            self.metadata_signature()?.to_vec(),
        )?;
        let inner_bytes = inner.encode();

        let envelope_signature = self.sign_raw(&crypto::digest(&inner_bytes))?;

        let mut container = Container::new();
        container.insert(HEADER_ENTRY, vec![KeyKind::Private.header_byte()])?;
        container.insert(KEY_ENTRY, self.keypair.private_key_bytes().to_vec())?;
        container.insert(INFO_ENTRY, inner_bytes)?;
        container.insert(SELF_SIGNATURE_ENTRY, envelope_signature.to_vec())?;
        Ok(container.encode())
    }

    /// Decode the private branch of a key file whose header was already read
    ///
    /// The public key is recomputed from the secret scalar, and both
    /// embedded signatures must verify against it before the record is
    /// accepted.
    pub(crate) fn from_container(container: &Container) -> Result<Self> {
        let secret = container.require_array::<KEY_MATERIAL_SIZE>(KEY_ENTRY)?;
        let envelope_signature = container.require_array::<SIGNATURE_SIZE>(SELF_SIGNATURE_ENTRY)?;
        let inner_bytes = container.require(INFO_ENTRY)?;

        let inner = Container::decode(inner_bytes)?;
        let info_bytes = inner.require(PUBLIC_INFO_ENTRY)?;
        let info_signature = inner.require_array::<SIGNATURE_SIZE>(PUBLIC_INFO_SIGNATURE_ENTRY)?;

        let keypair = IdentityKeyPair::from_bytes(&secret);
        let public_key = keypair.public_key_bytes();

        if !crypto::verify(&public_key, crypto::digest(info_bytes), &info_signature) {
            return Err(VouchError::integrity(
                "metadata signature does not verify under the derived public key",
            ));
        }
        if !crypto::verify(&public_key, crypto::digest(inner_bytes), &envelope_signature) {
            return Err(VouchError::integrity(
                "envelope signature does not verify under the derived public key",
            ));
        }

        let info = KeyMetadata::from_bytes(info_bytes)?;
        Ok(Self::new(keypair, info))
    }
}

// ----------------------------------------------------------------------------
// Key Pair Creation
// ----------------------------------------------------------------------------

/// Generate a fresh key pair bound to `name` and `expires`
///
/// The returned public record is self-signed and carries its
/// self-certification; an already-past expiry fails with an expired-key
/// error because the self-signature cannot be produced.
pub fn create_key_pair(
    name: impl Into<String>,
    expires: Timestamp,
) -> Result<(PrivateKeyRecord, PublicKeyRecord)> {
    let mut rng = rand_core::OsRng;
    create_key_pair_with_rng(&mut rng, name, expires)
}

/// [`create_key_pair`] with a custom RNG
pub fn create_key_pair_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    name: impl Into<String>,
    expires: Timestamp,
) -> Result<(PrivateKeyRecord, PublicKeyRecord)> {
    let keypair = IdentityKeyPair::generate_with_rng(rng);
    let private = PrivateKeyRecord::new(keypair, KeyMetadata::new(name, expires));
    let public = private.create_public_key()?;
    Ok((private, public))
}
