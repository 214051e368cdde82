//! Cryptographic primitives for Vouch
//!
//! This module provides clean, safe wrappers around the cryptographic
//! operations the key format needs: Ed25519 signing and verification,
//! SHA-512 digests, and identifier derivation.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};

use crate::types::{KeyId, KEY_MATERIAL_SIZE, SIGNATURE_SIZE};

// ----------------------------------------------------------------------------
// Identity Key Pair (Ed25519)
// ----------------------------------------------------------------------------

/// Ed25519 signing key pair for an identity
#[derive(Debug, Clone)]
pub struct IdentityKeyPair {
    signing_key: SigningKey,
    verifying_key: VerifyingKey,
}

impl IdentityKeyPair {
    /// Generate a new random identity key pair
    pub fn generate() -> Self {
        let mut rng = rand_core::OsRng;
        Self::generate_with_rng(&mut rng)
    }

    /// Generate a new identity key pair with a custom RNG
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut secret_bytes = [0u8; KEY_MATERIAL_SIZE];
        rng.fill_bytes(&mut secret_bytes);
        Self::from_bytes(&secret_bytes)
    }

    /// Reconstruct a key pair from raw secret key bytes
    pub fn from_bytes(private_key: &[u8; KEY_MATERIAL_SIZE]) -> Self {
        let signing_key = SigningKey::from_bytes(private_key);
        let verifying_key = signing_key.verifying_key();

        Self {
            signing_key,
            verifying_key,
        }
    }

    /// Get the public key bytes
    pub fn public_key_bytes(&self) -> [u8; KEY_MATERIAL_SIZE] {
        self.verifying_key.to_bytes()
    }

    /// Get the private key bytes
    pub fn private_key_bytes(&self) -> [u8; KEY_MATERIAL_SIZE] {
        self.signing_key.to_bytes()
    }

    /// Sign data with flexible input types
    pub fn sign<T: AsRef<[u8]>>(&self, data: T) -> [u8; SIGNATURE_SIZE] {
        self.signing_key.sign(data.as_ref()).to_bytes()
    }
}

// ----------------------------------------------------------------------------
// Verification
// ----------------------------------------------------------------------------

/// Verify an Ed25519 signature over `data` under `public_key`
///
/// Any failure, including key material that does not decode to a valid
/// curve point, is `false`. Verification outcomes are never errors.
pub fn verify<D: AsRef<[u8]>>(
    public_key: &[u8; KEY_MATERIAL_SIZE],
    data: D,
    signature: &[u8; SIGNATURE_SIZE],
) -> bool {
    let verifying_key = match VerifyingKey::from_bytes(public_key) {
        Ok(key) => key,
        Err(_) => return false,
    };
    let signature = Signature::from_bytes(signature);

    verifying_key.verify(data.as_ref(), &signature).is_ok()
}

// ----------------------------------------------------------------------------
// Digests and Identifier Derivation
// ----------------------------------------------------------------------------

/// SHA-512 digest; the canonical pre-signing hash for encoded metadata
pub fn digest<T: AsRef<[u8]>>(data: T) -> [u8; 64] {
    let mut hasher = Sha512::new();
    hasher.update(data.as_ref());
    let hash = hasher.finalize();

    let mut out = [0u8; 64];
    out.copy_from_slice(&hash);
    out
}

/// Derive the display identifier for raw key material
///
/// The identifier is the last 8 bytes of the material's SHA-512 digest,
/// rendered by [`KeyId`] as 16 uppercase hex characters.
pub fn derive_key_id<T: AsRef<[u8]>>(material: T) -> KeyId {
    let hash = digest(material);

    let mut tail = [0u8; 8];
    tail.copy_from_slice(&hash[hash.len() - 8..]);
    KeyId::new(tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn test_keypair(seed: u64) -> IdentityKeyPair {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        IdentityKeyPair::generate_with_rng(&mut rng)
    }

    #[test]
    fn keypair_roundtrips_through_bytes() {
        let keypair = test_keypair(1);
        let restored = IdentityKeyPair::from_bytes(&keypair.private_key_bytes());
        assert_eq!(restored.public_key_bytes(), keypair.public_key_bytes());
    }

    #[test]
    fn sign_and_verify() {
        let keypair = test_keypair(2);
        let signature = keypair.sign(b"hello");
        assert!(verify(&keypair.public_key_bytes(), b"hello", &signature));
        assert!(!verify(&keypair.public_key_bytes(), b"goodbye", &signature));
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let keypair = test_keypair(3);
        let other = test_keypair(4);
        let signature = keypair.sign(b"hello");
        assert!(!verify(&other.public_key_bytes(), b"hello", &signature));
    }

    #[test]
    fn verify_is_false_for_undecodable_key_material() {
        let keypair = test_keypair(5);
        let signature = keypair.sign(b"hello");
        // Not a valid curve point.
        let garbage = [0xff; KEY_MATERIAL_SIZE];
        assert!(!verify(&garbage, b"hello", &signature));
    }

    #[test]
    fn key_id_is_deterministic() {
        let material = [0x42u8; KEY_MATERIAL_SIZE];
        assert_eq!(derive_key_id(material), derive_key_id(material));
    }

    #[test]
    fn key_id_differs_across_material() {
        assert_ne!(
            derive_key_id([1u8; KEY_MATERIAL_SIZE]),
            derive_key_id([2u8; KEY_MATERIAL_SIZE])
        );
    }

    #[test]
    fn key_id_matches_sha512_tail() {
        let material = b"known material";
        let hash = digest(material);
        let expected = hex::encode_upper(&hash[56..]);
        assert_eq!(derive_key_id(material).to_string(), expected);
    }
}
