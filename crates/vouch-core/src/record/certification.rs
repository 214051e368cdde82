//! Certification records: signed endorsements of a public key

use crate::crypto;
use crate::types::{KeyId, KEY_MATERIAL_SIZE, SIGNATURE_SIZE};

/// A certifier's endorsement of one exact version of a holder's
/// self-signed metadata
///
/// The certifier signs the holder's self-signature bytes, so a change to
/// the holder's metadata (and therefore its self-signature) invalidates
/// every certification issued against the old value and forces
/// re-certification. There is no revocation primitive; invalidation is
/// implicit through this binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationRecord {
    /// Identifier of the certifying key
    pub certifier_id: KeyId,
    /// Certifier's signature over `holder_signature`
    pub signature: [u8; SIGNATURE_SIZE],
    /// The holder self-signature this certification endorses
    pub holder_signature: [u8; SIGNATURE_SIZE],
}

impl CertificationRecord {
    /// Assemble a certification from its parts
    pub fn new(
        certifier_id: KeyId,
        signature: [u8; SIGNATURE_SIZE],
        holder_signature: [u8; SIGNATURE_SIZE],
    ) -> Self {
        Self {
            certifier_id,
            signature,
            holder_signature,
        }
    }

    /// True when `signature` verifies over `holder_signature` under the
    /// certifier's public key material
    pub fn is_valid(&self, certifier_public_key: &[u8; KEY_MATERIAL_SIZE]) -> bool {
        crypto::verify(certifier_public_key, self.holder_signature, &self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{derive_key_id, IdentityKeyPair};
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn test_keypair(seed: u64) -> IdentityKeyPair {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        IdentityKeyPair::generate_with_rng(&mut rng)
    }

    #[test]
    fn valid_under_the_certifier_key_only() {
        let certifier = test_keypair(1);
        let holder_signature = test_keypair(2).sign(b"holder metadata digest");

        let certification = CertificationRecord::new(
            derive_key_id(certifier.public_key_bytes()),
            certifier.sign(holder_signature),
            holder_signature,
        );

        assert!(certification.is_valid(&certifier.public_key_bytes()));
        assert!(!certification.is_valid(&test_keypair(3).public_key_bytes()));
    }

    #[test]
    fn invalid_against_a_different_holder_signature() {
        let certifier = test_keypair(4);
        let old_signature = test_keypair(5).sign(b"old metadata digest");
        let new_signature = test_keypair(5).sign(b"new metadata digest");

        let certification = CertificationRecord::new(
            derive_key_id(certifier.public_key_bytes()),
            certifier.sign(old_signature),
            new_signature,
        );

        // The endorsement was produced over the old self-signature; carried
        // over to the new one it no longer verifies.
        assert!(!certification.is_valid(&certifier.public_key_bytes()));
    }
}
