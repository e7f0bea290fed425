//! Type-safe wrappers for cryptographic values
//!
//! Fixed-size containers with length checks at the boundary, so a 15-byte
//! slice can never reach a primitive that expects 16.

pub mod digest;
pub mod nonce;

pub(crate) mod sealed;

pub use digest::Digest;
pub use nonce::{AesGcmCompatible, Nonce};

pub use vau_common::security::{SecretBuffer, SecretVec, ZeroizeGuard};
