//! Block ciphers

use crate::error::Result;

pub mod aes;

pub use aes::Aes128;

/// A keyed block cipher usable in forward direction
///
/// Counter-based modes only ever call the forward transform, so no inverse
/// cipher is part of this interface.
pub trait BlockCipher: Sized {
    /// Key length in bytes
    const KEY_SIZE: usize;

    /// Block length in bytes
    const BLOCK_SIZE: usize;

    /// Expand `key`; fails if the length is not [`Self::KEY_SIZE`]
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    fn name() -> &'static str;
}
