//! # vau
//!
//! Transport encryption for the e-prescription VAU endpoint.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vau = "0.3"
//! ```
//!
//! ## Features
//!
//! - `http` (default): download the Fachdienst certificate with `reqwest`
//! - `serde`: serialize [`channel::VauConfig`]
//! - `toml`: load [`channel::VauConfig`] from a TOML document
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`vau-api`]: Error taxonomy and fixed-size secret bytes
//! - [`vau-common`]: Zeroizing containers
//! - [`vau-algorithms`]: Brainpool P256r1, SHA-256, HKDF and AES-GCM
//! - [`vau-channel`]: The request/response encryption itself
//!
//! ```
//! use vau::prelude::*;
//!
//! # fn main() -> vau::api::Result<()> {
//! let key = [0x11; 16];
//! let err = VauChannel::decrypt_with_session_key(&key, &[]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::EmptyMessage);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

// Core re-exports
pub use vau_api as api;
pub use vau_common as common;
pub use vau_internal as internal;
pub use vau_params as params;

pub use vau_algorithms as algorithms;
pub use vau_channel as channel;

/// Common imports for vau users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result, ResultExt};

    // Re-export the channel surface
    pub use crate::channel::{
        CipherMessage, CryptoBackend, CurvePoint, KeyPair, PublicKeyFetcher, StaticKeyFetcher,
        SymmetricKey, VauChannel, VauConfig,
    };

    #[cfg(feature = "http")]
    pub use crate::channel::HttpCertificateFetcher;

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretVec, ZeroizeGuard};
}
