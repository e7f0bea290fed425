//! HMAC (RFC 2104 / FIPS 198-1) over a block-oriented hash
//!
//! Key preparation hashes the key unconditionally and selects per byte with
//! a mask, so timing depends only on the public key length.

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use subtle::ConstantTimeEq;
use vau_common::security::SecretBuffer;
use vau_params::utils::hash::SHA256_BLOCK_SIZE;

const MAX_BLOCK: usize = SHA256_BLOCK_SIZE;

/// Constant-time HMAC implementation
#[derive(Clone)]
pub struct Hmac<H: HashFunction> {
    hash: H,
    opad: SecretBuffer<MAX_BLOCK>,
    block_size: usize,
    is_finalized: bool,
}

impl<H: HashFunction> Hmac<H> {
    const IPAD_BYTE: u8 = 0x36;
    const OPAD_BYTE: u8 = 0x5c;

    /// Create a new HMAC instance from `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        let bs = H::block_size();
        if bs > MAX_BLOCK {
            return Err(Error::param("hash", "block size exceeds HMAC buffer"));
        }

        let mut hk = H::new();
        hk.update(key)?;
        let hashed = hk.finalize()?;

        let mut k_prime = SecretBuffer::<MAX_BLOCK>::zeroed();
        let long = (key.len() > bs) as u8;
        let mask = long.wrapping_neg();
        for (i, b) in k_prime.as_mut_slice().iter_mut().take(bs).enumerate() {
            let k = key.get(i).copied().unwrap_or(0);
            let hk = hashed.as_ref().get(i).copied().unwrap_or(0);
            *b = (hk & mask) | (k & !mask);
        }

        let mut ipad = SecretBuffer::<MAX_BLOCK>::zeroed();
        let mut opad = SecretBuffer::<MAX_BLOCK>::zeroed();
        for i in 0..bs {
            let k = k_prime.as_slice()[i];
            ipad.as_mut_slice()[i] = k ^ Self::IPAD_BYTE;
            opad.as_mut_slice()[i] = k ^ Self::OPAD_BYTE;
        }

        let mut hash = H::new();
        hash.update(&ipad.as_slice()[..bs])?;

        Ok(Self {
            hash,
            opad,
            block_size: bs,
            is_finalized: false,
        })
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "Cannot update after finalization"));
        }
        self.hash.update(data).map(|_| ())
    }

    /// Finalise and return the tag
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "HMAC already finalized"));
        }
        self.is_finalized = true;

        let inner_hash = self.hash.finalize()?;

        let mut outer = H::new();
        outer.update(&self.opad.as_slice()[..self.block_size])?;
        outer.update(inner_hash.as_ref())?;

        outer.finalize().map(|out| out.as_ref().to_vec())
    }

    /// One-shot MAC helper
    pub fn mac(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let mut h = Self::new(key)?;
        h.update(data)?;
        h.finalize()
    }

    /// Constant-time verification of `tag` against `key` / `data`
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
        if tag.len() != H::output_size() {
            return Ok(false);
        }
        let expected = Self::mac(key, data)?;
        Ok(expected.as_slice().ct_eq(tag).into())
    }
}
