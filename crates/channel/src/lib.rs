//! ECIES transport encryption for the e-prescription VAU endpoint
//!
//! A client encrypts each HTTP request to the Fachdienst's static
//! Brainpool P256r1 key, taken from the certificate published at
//! `<fachdienst>/VAUCertificate`. The request carries a fresh session key;
//! the response comes back sealed under it.
//!
//! ```text
//! 0x01 || X(32) || Y(32) || nonce(12) || AES-128-GCM(ciphertext || tag)
//! ```
//!
//! The content key is `HKDF-SHA256(ikm = ECDH x-coordinate, salt = empty,
//! info = "ecies-vau-transport", L = 16)`.
//!
//! # Example
//!
//! ```
//! use vau_channel::{CryptoBackend, KeyPair, StaticKeyFetcher, VauChannel};
//!
//! # fn main() -> vau_api::Result<()> {
//! let fachdienst = KeyPair::from_private_bytes(&[0x42; 32])?;
//! let backend = CryptoBackend::new()?;
//! let channel = VauChannel::new(&backend);
//!
//! let fetcher = StaticKeyFetcher::new(*fachdienst.public());
//! let wire = channel.encrypt_for_backend(b"GET /Task HTTP/1.1", &fetcher)?.encode();
//!
//! let request = VauChannel::decrypt_as_backend(&fachdienst, &wire)?;
//! assert_eq!(request, b"GET /Task HTTP/1.1");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod aead;
pub mod agreement;
pub mod backend;
pub mod certificate;
pub mod channel;
pub mod codec;
pub mod config;
pub mod derivation;
pub mod domain;
pub mod fetch;

pub use agreement::{KeyPair, SharedSecret};
pub use backend::{CryptoBackend, EntropySource, SeededEntropy, SystemEntropy};
pub use certificate::{public_key_from_certificate, public_key_from_spki, CertificateError};
pub use channel::VauChannel;
pub use codec::CipherMessage;
pub use config::VauConfig;
pub use derivation::SymmetricKey;
pub use domain::{CurveDomain, CurvePoint};
pub use fetch::{PublicKeyFetcher, StaticKeyFetcher};

#[cfg(feature = "http")]
pub use fetch::HttpCertificateFetcher;
