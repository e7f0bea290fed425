//! Ephemeral key pairs and ECDH shared secrets

use std::fmt;

use tracing::trace;
use vau_algorithms::bp256::{self, Scalar};
use vau_api::{Error, Result};
use vau_common::security::{SecretBuffer, SecretVec};
use vau_internal::bytes::{left_pad, trim_leading_zeros};
use vau_params::traditional::ecdh::BP256_SHARED_SECRET_SIZE;
use zeroize::Zeroize;

use crate::backend::CryptoBackend;
use crate::domain::CurvePoint;

/// Private scalar in [1, n-1] and its public point
///
/// The scalar is wiped when the pair is dropped.
#[derive(Clone)]
pub struct KeyPair {
    private: Scalar,
    public: CurvePoint,
}

impl KeyPair {
    /// Rebuild a pair from a big-endian private scalar
    pub fn from_private_bytes(bytes: &[u8]) -> Result<Self> {
        let private = Scalar::deserialize(bytes).map_err(|e| Error::InvalidParameter {
            context: "KeyPair::from_private_bytes",
            message: e.to_string(),
        })?;
        Self::from_scalar(private)
    }

    fn from_scalar(private: Scalar) -> Result<Self> {
        let public = bp256::scalar_mult_base_g(&private).map_err(|e| Error::KeyGeneration {
            context: "KeyPair",
            message: e.to_string(),
        })?;
        Ok(Self {
            private,
            public: CurvePoint::from_point(&public),
        })
    }

    pub fn public(&self) -> &CurvePoint {
        &self.public
    }

    pub(crate) fn private(&self) -> &Scalar {
        &self.private
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("private", &"[REDACTED]")
            .finish()
    }
}

/// X coordinate of the shared point, exactly 32 bytes
#[derive(Clone)]
pub struct SharedSecret(SecretBuffer<BP256_SHARED_SECRET_SIZE>);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

/// Draw a fresh key pair with the scalar uniform in [1, n-1]
///
/// Rejection sampling is done by [`bp256::generate_keypair`] over the
/// backend's entropy. Fails with [`Error::KeyGeneration`] only if the
/// entropy source fails.
pub fn generate_ephemeral_keypair(backend: &CryptoBackend) -> Result<KeyPair> {
    let (private, public) =
        bp256::generate_keypair(&mut backend.rng()).map_err(|e| Error::KeyGeneration {
            context: "generate_ephemeral_keypair",
            message: e.to_string(),
        })?;
    trace!("ephemeral key pair drawn");

    Ok(KeyPair {
        private,
        public: CurvePoint::from_point(&public),
    })
}

/// ECDH on the curve, returning the minimal big-endian X coordinate
///
/// The remote point must be a finite point on the curve; anything else is
/// [`Error::InvalidPoint`].
pub fn agree(keypair: &KeyPair, remote: &CurvePoint) -> Result<SecretVec> {
    let remote_point = remote.to_point()?;
    let x = bp256::shared_secret(keypair.private(), &remote_point).map_err(|e| {
        Error::InvalidPoint {
            context: "agree",
            message: e.to_string(),
        }
    })?;
    Ok(SecretVec::from_slice(trim_leading_zeros(x.as_ref())))
}

/// Re-encode a big-endian unsigned integer as exactly 32 bytes
///
/// Short input is left-padded with zeros. Long input may only carry
/// leading zero bytes beyond the 32 significant ones; the numeric value is
/// never altered, so any other excess is [`Error::Derivation`].
pub fn canonicalize(raw: &[u8]) -> Result<SharedSecret> {
    let mut fixed = left_pad::<BP256_SHARED_SECRET_SIZE>(raw).ok_or_else(|| Error::Derivation {
        context: "canonicalize",
        message: format!(
            "value needs {} bytes, more than {}",
            trim_leading_zeros(raw).len(),
            BP256_SHARED_SECRET_SIZE
        ),
    })?;
    let secret = SharedSecret(SecretBuffer::new(fixed));
    fixed.zeroize();
    Ok(secret)
}

/// [`agree`] followed by [`canonicalize`]
pub fn shared_secret(keypair: &KeyPair, remote: &CurvePoint) -> Result<SharedSecret> {
    let raw = agree(keypair, remote)?;
    canonicalize(raw.as_slice())
}
