//! Cryptographic primitives behind the VAU channel
//!
//! This crate provides the building blocks the channel composes:
//! Brainpool P256r1 key agreement, SHA-256, HMAC, HKDF and AES-128-GCM.
//! All of them are implemented here in constant-time style, without
//! table lookups indexed by secret data.
//!
//! # Security Features
//!
//! - Secret material lives in zeroizing buffers
//! - Tag and MAC comparisons are constant time
//! - Scalar multiplication runs a fixed ladder independent of the key

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, BlockCipher};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha256};

// AEAD cipher implementations
pub mod aead;
pub use aead::{AuthenticatedCipher, Gcm};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// KDF implementations
pub mod kdf;
pub use kdf::{Hkdf, KdfOperation, KeyDerivationFunction};

// Elliptic curve primitives
pub mod ec;
pub use ec::bp256;

// Type system
pub mod types;
pub use types::{Digest, Nonce, SecretBuffer, SecretVec, ZeroizeGuard};
