//! HKDF-SHA256 key derivation

use std::fmt;

use vau_algorithms::hash::Sha256;
use vau_algorithms::kdf::{Hkdf, KdfOperation, KeyDerivationFunction};
use vau_api::{Error, Result, SecretBytes};
use vau_params::vau::{VAU_HKDF_INFO, VAU_KEY_SIZE};
use zeroize::Zeroizing;

use crate::agreement::SharedSecret;
use crate::backend::CryptoBackend;

/// AES-128 key
#[derive(Clone, PartialEq)]
pub struct SymmetricKey(SecretBytes<VAU_KEY_SIZE>);

impl SymmetricKey {
    pub fn new(bytes: [u8; VAU_KEY_SIZE]) -> Self {
        Self(SecretBytes::new(bytes))
    }

    /// Accept exactly 16 bytes; anything else is [`Error::InvalidKeyLength`]
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SecretBytes::from_slice(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidKeyLength {
                context: "SymmetricKey",
                expected: VAU_KEY_SIZE,
                actual: bytes.len(),
            })
    }

    /// Fresh session key for a response the backend will seal
    pub fn generate(backend: &CryptoBackend) -> Result<Self> {
        let mut key = Zeroizing::new([0u8; VAU_KEY_SIZE]);
        backend.fill_random(&mut key[..])?;
        Ok(Self::new(*key))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

/// HKDF-SHA256 per RFC 5869
///
/// An absent salt is treated as a string of HashLen zeros, which yields the
/// same PRK as an empty salt.
pub fn hkdf_sha256(
    ikm: &[u8],
    salt: Option<&[u8]>,
    info: &[u8],
    length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let kdf = Hkdf::<Sha256>::new();
    let mut op = kdf.builder().with_ikm(ikm).with_info(info).with_output_length(length);
    if let Some(salt) = salt {
        op = op.with_salt(salt);
    }
    op.derive().map(Zeroizing::new).map_err(|e| Error::Derivation {
        context: "hkdf_sha256",
        message: e.to_string(),
    })
}

/// Content encryption key for one message
///
/// Empty salt, info `"ecies-vau-transport"`, 16 bytes of output.
pub fn derive_key(secret: &SharedSecret) -> Result<SymmetricKey> {
    let okm = hkdf_sha256(secret.as_bytes(), None, VAU_HKDF_INFO, VAU_KEY_SIZE)?;
    SymmetricKey::from_slice(&okm).map_err(|e| Error::Derivation {
        context: "derive_key",
        message: e.to_string(),
    })
}
