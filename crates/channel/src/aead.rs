//! AES-128-GCM with a 128-bit tag

use tracing::warn;
use vau_algorithms::aead::Gcm;
use vau_algorithms::block::Aes128;
use vau_algorithms::types::Nonce;
use vau_api::{Error, Result, ResultExt};
use vau_params::vau::{VAU_NONCE_SIZE, VAU_TAG_SIZE};

use crate::derivation::SymmetricKey;

/// AES-128-GCM keyed for one message or one session
pub struct AeadCipher {
    gcm: Gcm<Aes128>,
}

impl AeadCipher {
    pub fn new(key: &SymmetricKey) -> Result<Self> {
        let gcm = Gcm::<Aes128>::from_key(key.as_bytes()).with_context("AeadCipher::new")?;
        Ok(Self { gcm })
    }

    /// Encrypt and return `ciphertext || tag`
    pub fn encrypt(
        &self,
        nonce: &Nonce<VAU_NONCE_SIZE>,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>> {
        self.gcm
            .encrypt(nonce, plaintext, aad)
            .map_err(|e| Error::Other {
                context: "AeadCipher::encrypt",
                message: e.to_string(),
            })
    }

    /// Verify the tag, then decrypt
    ///
    /// Any verification failure, including input too short to hold a tag,
    /// is [`Error::Authentication`] and releases no plaintext.
    pub fn decrypt(
        &self,
        nonce: &Nonce<VAU_NONCE_SIZE>,
        aad: Option<&[u8]>,
        ciphertext_and_tag: &[u8],
    ) -> Result<Vec<u8>> {
        if ciphertext_and_tag.len() < VAU_TAG_SIZE {
            warn!(len = ciphertext_and_tag.len(), "ciphertext shorter than tag");
            return Err(Error::Authentication {
                context: "AeadCipher::decrypt",
            });
        }
        self.gcm
            .decrypt(nonce, ciphertext_and_tag, aad)
            .map_err(|_| {
                warn!("AES-GCM tag mismatch");
                Error::Authentication {
                    context: "AeadCipher::decrypt",
                }
            })
    }
}
