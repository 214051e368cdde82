//! Detached signature records and their file encoding

use crate::container::Container;
use crate::crypto;
use crate::errors::Result;
use crate::types::{KeyId, KEY_MATERIAL_SIZE, SIGNATURE_SIZE};

/// Container entry holding the signer identifier as ASCII bytes
const SIGNER_ENTRY: &str = "i";
/// Container entry holding the raw signature
const SIGNATURE_ENTRY: &str = "s";

/// A raw signature together with the identifier of its signer
///
/// The identifier names the signer for lookup and display; it carries no
/// authentication of its own. Expiration is not handled here either —
/// callers combine verification with the signer's public record state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureRecord {
    /// Identifier of the signing key's public half
    pub signer_id: KeyId,
    /// Raw Ed25519 signature over the signed payload
    pub signature: [u8; SIGNATURE_SIZE],
}

impl SignatureRecord {
    /// Wrap a signature with its signer identifier
    pub fn new(signer_id: KeyId, signature: [u8; SIGNATURE_SIZE]) -> Self {
        Self {
            signer_id,
            signature,
        }
    }

    /// Verify this signature over `data` under the given public key
    pub fn verify(&self, public_key: &[u8; KEY_MATERIAL_SIZE], data: &[u8]) -> bool {
        crypto::verify(public_key, data, &self.signature)
    }

    /// Encode as a signature file: `i` = signer id, `s` = signature
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut container = Container::new();
        container.insert_str(SIGNER_ENTRY, &self.signer_id.to_string())?;
        container.insert(SIGNATURE_ENTRY, self.signature.to_vec())?;
        Ok(container.encode())
    }

    /// Decode a signature file
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let container = Container::decode(bytes)?;
        let signer_id: KeyId = container.require_str(SIGNER_ENTRY)?.parse()?;
        let signature = container.require_array::<SIGNATURE_SIZE>(SIGNATURE_ENTRY)?;

        Ok(Self {
            signer_id,
            signature,
        })
    }
}
