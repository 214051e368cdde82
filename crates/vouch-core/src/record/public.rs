//! Public key records: key material, metadata, self-signature, and the
//! certifications received from other identities

use std::collections::BTreeMap;

use crate::container::Container;
use crate::crypto;
use crate::errors::Result;
use crate::record::certification::CertificationRecord;
use crate::record::metadata::KeyMetadata;
use crate::record::{
    CERTIFICATIONS_ENTRY, HEADER_ENTRY, INFO_ENTRY, KEY_ENTRY, SELF_SIGNATURE_ENTRY,
};
use crate::types::{KeyId, KeyKind, Timestamp, KEY_MATERIAL_SIZE, SIGNATURE_SIZE};

/// Public key material, its self-signed metadata, and the certifications
/// received so far
///
/// The record is immutable except for certification growth, which happens
/// only through a private record's `certify`. Keeping at most one
/// certification per certifier is a map property: re-certifying overwrites.
#[derive(Debug, Clone)]
pub struct PublicKeyRecord {
    key: [u8; KEY_MATERIAL_SIZE],
    info: KeyMetadata,
    signature: [u8; SIGNATURE_SIZE],
    certifications: BTreeMap<KeyId, CertificationRecord>,
    id: KeyId,
}

impl PublicKeyRecord {
    /// Assemble a record from its parts, deriving the identifier from `key`
    pub fn new(
        key: [u8; KEY_MATERIAL_SIZE],
        info: KeyMetadata,
        signature: [u8; SIGNATURE_SIZE],
        certifications: BTreeMap<KeyId, CertificationRecord>,
    ) -> Self {
        let id = crypto::derive_key_id(key);
        Self {
            key,
            info,
            signature,
            certifications,
            id,
        }
    }

    /// Identifier derived from the public key material
    pub fn id(&self) -> KeyId {
        self.id
    }

    /// Raw public key material
    pub fn key(&self) -> &[u8; KEY_MATERIAL_SIZE] {
        &self.key
    }

    /// Name and expiry metadata
    pub fn info(&self) -> &KeyMetadata {
        &self.info
    }

    /// Self-signature over the metadata digest
    pub fn signature(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.signature
    }

    /// Certifications received, keyed by certifier identifier
    pub fn certifications(&self) -> &BTreeMap<KeyId, CertificationRecord> {
        &self.certifications
    }

    /// Look up the certification from one certifier
    pub fn certification(&self, certifier_id: &KeyId) -> Option<&CertificationRecord> {
        self.certifications.get(certifier_id)
    }

    /// Verify the self-signature against the metadata digest
    ///
    /// Unconditionally false once the key is expired, regardless of
    /// signature correctness.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Timestamp::now())
    }

    /// [`is_valid`](Self::is_valid) against an explicit clock reading
    pub fn is_valid_at(&self, at: Timestamp) -> bool {
        let digest = match self.info.signing_digest() {
            Ok(digest) => digest,
            Err(_) => return false,
        };
        self.verify_at(at, &self.signature, &digest)
    }

    /// Verify an externally supplied signature over `data` under this key
    ///
    /// Unconditionally false once the key is expired, regardless of
    /// signature correctness.
    pub fn verify(&self, signature: &[u8; SIGNATURE_SIZE], data: &[u8]) -> bool {
        self.verify_at(Timestamp::now(), signature, data)
    }

    /// [`verify`](Self::verify) against an explicit clock reading
    pub fn verify_at(&self, at: Timestamp, signature: &[u8; SIGNATURE_SIZE], data: &[u8]) -> bool {
        if self.info.is_expired_at(at) {
            return false;
        }
        crypto::verify(&self.key, data, signature)
    }

    /// True when the record carries a valid certification keyed by its own
    /// identifier
    ///
    /// A true self-certification means the record was produced by its
    /// matching private key: it is internally consistent.
    pub fn is_self_certified(&self) -> bool {
        self.certifications
            .get(&self.id)
            .map(|certification| certification.is_valid(&self.key))
            .unwrap_or(false)
    }

    /// Insert a certification, replacing any earlier one from the same
    /// certifier
    pub(crate) fn insert_certification(&mut self, certification: CertificationRecord) {
        self.certifications
            .insert(certification.certifier_id, certification);
    }

    /// Encode as a public key file: `t`, `k`, `i`, `is`, `c`
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut certifications = Container::new();
        for (certifier_id, certification) in &self.certifications {
            certifications.insert(&certifier_id.to_string(), certification.signature.to_vec())?;
        }

        let mut container = Container::new();
        container.insert(HEADER_ENTRY, vec![KeyKind::Public.header_byte()])?;
        container.insert(KEY_ENTRY, self.key.to_vec())?;
        container.insert(INFO_ENTRY, self.info.to_bytes()?)?;
        container.insert(SELF_SIGNATURE_ENTRY, self.signature.to_vec())?;
        container.insert_container(CERTIFICATIONS_ENTRY, &certifications)?;
        Ok(container.encode())
    }

    /// Decode the public branch of a key file whose header was already read
    pub(crate) fn from_container(container: &Container) -> Result<Self> {
        let key = container.require_array::<KEY_MATERIAL_SIZE>(KEY_ENTRY)?;
        let info = KeyMetadata::from_bytes(container.require(INFO_ENTRY)?)?;
        let signature = container.require_array::<SIGNATURE_SIZE>(SELF_SIGNATURE_ENTRY)?;

        let encoded = container.require_container(CERTIFICATIONS_ENTRY)?;
        let mut certifications = BTreeMap::new();
        for (id_text, _) in encoded.iter() {
            let certifier_id: KeyId = id_text.parse()?;
            let certifier_signature = encoded.require_array::<SIGNATURE_SIZE>(id_text)?;
            certifications.insert(
                certifier_id,
                CertificationRecord::new(certifier_id, certifier_signature, signature),
            );
        }

        Ok(Self::new(key, info, signature, certifications))
    }
}
