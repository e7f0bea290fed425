//! Shared functionality for the vau crates
//!
//! Containers for key material that wipe themselves when dropped.

pub mod security;

pub use security::{SecretBuffer, SecretVec, ZeroizeGuard};
