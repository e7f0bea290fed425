//! The VAU channel: ECIES over Brainpool P256r1, HKDF-SHA256 and AES-128-GCM
//!
//! Requests are encrypted to the Fachdienst's static key with a fresh
//! ephemeral key pair and nonce per message. Responses come back under a
//! session key the client chose and sent inside the request; they are
//! `nonce || ciphertext || tag` without any header.

use tracing::{debug, warn};
use vau_algorithms::types::Nonce;
use vau_api::{Error, ErrorKind, Result};
use vau_params::vau::{VAU_NONCE_SIZE, VAU_TAG_SIZE, VAU_VERSION_1};

use crate::aead::AeadCipher;
use crate::agreement::{generate_ephemeral_keypair, shared_secret, KeyPair};
use crate::backend::CryptoBackend;
use crate::codec::CipherMessage;
use crate::derivation::{derive_key, SymmetricKey};
use crate::domain::CurvePoint;
use crate::fetch::PublicKeyFetcher;

/// Stateless encryptor bound to a backend handle
///
/// Holds no per-message state, so one channel can serve many threads.
#[derive(Debug, Clone, Copy)]
pub struct VauChannel<'b> {
    backend: &'b CryptoBackend,
}

impl<'b> VauChannel<'b> {
    pub fn new(backend: &'b CryptoBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &'b CryptoBackend {
        self.backend
    }

    /// Encrypt `plaintext` to the key supplied by `fetcher`
    ///
    /// A fetcher failure surfaces as [`Error::RemoteKeyFetch`] whatever its
    /// original kind. A fetched key that is not on the curve is
    /// [`Error::InvalidPoint`].
    pub fn encrypt_for_backend<F>(&self, plaintext: &[u8], fetcher: &F) -> Result<CipherMessage>
    where
        F: PublicKeyFetcher + ?Sized,
    {
        debug!(plaintext_len = plaintext.len(), "encrypting for backend");

        let remote = fetcher.fetch_public_key().map_err(|e| {
            warn!(error = %e, "backend key unavailable");
            match e.kind() {
                ErrorKind::RemoteKeyFetch => e,
                _ => Error::RemoteKeyFetch {
                    context: "VauChannel::encrypt_for_backend",
                    message: e.to_string(),
                },
            }
        })?;
        remote.to_point()?;

        let ephemeral = generate_ephemeral_keypair(self.backend)?;
        let nonce = self.backend.random_nonce()?;
        self.encrypt_with(plaintext, &ephemeral, &remote, &nonce)
    }

    /// Deterministic encryption with caller-chosen key pair and nonce
    ///
    /// Reusing a (key pair, nonce) combination for different plaintexts
    /// breaks confidentiality; this entry point exists for known-answer
    /// testing and interoperability checks.
    pub fn encrypt_with(
        &self,
        plaintext: &[u8],
        ephemeral: &KeyPair,
        remote: &CurvePoint,
        nonce: &Nonce<VAU_NONCE_SIZE>,
    ) -> Result<CipherMessage> {
        let key = {
            let secret = shared_secret(ephemeral, remote)?;
            derive_key(&secret)?
        };

        let ciphertext = AeadCipher::new(&key)?.encrypt(nonce, plaintext, None)?;
        let message = CipherMessage::new(VAU_VERSION_1, *ephemeral.public(), *nonce, ciphertext)?;

        debug!(
            version = message.version(),
            wire_len = message.encoded_len(),
            "backend message sealed"
        );
        Ok(message)
    }

    /// Decrypt a response sealed under the session key
    ///
    /// `blob` is `nonce(12) || ciphertext || tag(16)`; no associated data.
    pub fn decrypt_with_session_key(key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
        let key = SymmetricKey::from_slice(key)?;
        if blob.is_empty() {
            return Err(Error::EmptyMessage {
                context: "VauChannel::decrypt_with_session_key",
            });
        }
        if blob.len() < VAU_NONCE_SIZE {
            return Err(Error::Framing {
                context: "VauChannel::decrypt_with_session_key",
                message: format!("{} bytes, need a {VAU_NONCE_SIZE}-byte nonce", blob.len()),
            });
        }
        if blob.len() < VAU_NONCE_SIZE + VAU_TAG_SIZE {
            warn!(blob_len = blob.len(), "session response shorter than a tag");
            return Err(Error::Authentication {
                context: "VauChannel::decrypt_with_session_key",
            });
        }

        debug!(blob_len = blob.len(), "decrypting session response");
        let (nonce, ciphertext) = blob.split_at(VAU_NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce).map_err(|e| Error::Framing {
            context: "VauChannel::decrypt_with_session_key",
            message: e.to_string(),
        })?;

        AeadCipher::new(&key)?.decrypt(&nonce, None, ciphertext)
    }

    /// Open a request message with the Fachdienst's static private key
    ///
    /// This is the receiving side of [`VauChannel::encrypt_for_backend`]:
    /// decode, agree with the embedded ephemeral key, derive, verify and
    /// decrypt.
    pub fn decrypt_as_backend(static_private: &KeyPair, wire: &[u8]) -> Result<Vec<u8>> {
        let message = CipherMessage::decode(wire)?;
        debug!(wire_len = wire.len(), "opening backend message");

        let key = {
            let secret = shared_secret(static_private, message.ephemeral_public_key())?;
            derive_key(&secret)?
        };

        AeadCipher::new(&key)?.decrypt(message.nonce(), None, message.ciphertext_and_tag())
    }
}
