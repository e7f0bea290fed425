//! Cryptographic hash functions

use crate::error::Result;

pub mod sha2;

pub use sha2::Sha256;

/// Common interface for incremental hash functions
pub trait HashFunction: Clone {
    /// Fixed-size digest type
    type Output: AsRef<[u8]> + Clone;

    /// Fresh hash state
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest; the state is wiped afterwards
    fn finalize(&mut self) -> Result<Self::Output>;

    fn output_size() -> usize;

    fn block_size() -> usize;

    fn name() -> String;

    /// One-shot convenience
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }
}
