//! Authenticated encryption with associated data

use crate::error::Result;

pub mod gcm;

pub use gcm::Gcm;

/// One-shot AEAD interface; the nonce is supplied per call
pub trait AuthenticatedCipher {
    /// Nonce type accepted by the cipher
    type Nonce;

    /// Tag length in bytes
    const TAG_SIZE: usize;

    /// Encrypt `plaintext`, returning ciphertext with the tag appended
    fn encrypt(&self, nonce: &Self::Nonce, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Verify and decrypt `ciphertext || tag`; no plaintext is produced when
    /// verification fails
    fn decrypt(&self, nonce: &Self::Nonce, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>>;
}
