//! Public API types for the vau channel
//!
//! This crate holds the error taxonomy surfaced by every channel operation
//! and the fixed-size secret container shared by the other crates.

pub mod error;
pub mod types;

pub use error::{Error, ErrorKind, Result, ResultExt};
pub use types::SecretBytes;
