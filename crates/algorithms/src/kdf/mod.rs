//! Key derivation functions
//!
//! Only HKDF is provided. It is reachable both through the static
//! extract/expand functions and through the operation builder:
//!
//! ```
//! use vau_algorithms::hash::Sha256;
//! use vau_algorithms::kdf::{Hkdf, KdfOperation, KeyDerivationFunction};
//!
//! let kdf = Hkdf::<Sha256>::new();
//! let key: [u8; 16] = kdf
//!     .builder()
//!     .with_ikm(b"shared secret")
//!     .with_info(b"context")
//!     .with_output_length(16)
//!     .derive_array()
//!     .unwrap();
//! assert_eq!(key.len(), 16);
//! ```

use crate::error::Result;

pub mod hkdf;

pub use hkdf::Hkdf;

/// Builder for a single derivation
pub trait KdfOperation<'a>: Sized {
    /// Set the input keying material
    fn with_ikm(self, ikm: &'a [u8]) -> Self;

    /// Set the salt; absent means the all-zero salt of RFC 5869
    fn with_salt(self, salt: &'a [u8]) -> Self;

    /// Set the context info
    fn with_info(self, info: &'a [u8]) -> Self;

    /// Set the number of output bytes
    fn with_output_length(self, length: usize) -> Self;

    /// Run the derivation
    fn derive(self) -> Result<Vec<u8>>;

    /// Run the derivation into a fixed-size array; the configured length
    /// must equal `N`
    fn derive_array<const N: usize>(self) -> Result<[u8; N]>;
}

/// Common interface for key derivation functions
pub trait KeyDerivationFunction {
    /// Operation builder type
    type Operation<'a>: KdfOperation<'a>
    where
        Self: 'a;

    fn new() -> Self;

    /// Start a builder-style derivation
    fn builder(&self) -> Self::Operation<'_>;
}
