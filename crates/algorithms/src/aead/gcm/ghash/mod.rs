//! GHASH universal hash for GCM (NIST SP 800-38D, section 6.4)
//!
//! Multiplication in GF(2^128) uses the bit-reflected convention of the
//! standard: the most significant bit of byte 0 is the x^0 coefficient.
//! Every bit of the multiplier is processed with masks, no branches.

use crate::error::{validate, Result};
use byteorder::{BigEndian, ByteOrder};
use std::sync::atomic::{compiler_fence, Ordering};
use vau_params::utils::symmetric::AES_BLOCK_SIZE as GCM_BLOCK_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Running GHASH state keyed by H
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct GHash {
    h: [u8; GCM_BLOCK_SIZE],
    y: [u8; GCM_BLOCK_SIZE],
}

impl GHash {
    pub fn new(h: &[u8; GCM_BLOCK_SIZE]) -> Self {
        Self {
            h: *h,
            y: [0u8; GCM_BLOCK_SIZE],
        }
    }

    /// Absorb `data`, zero-padding the final partial block
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        for chunk in data.chunks(GCM_BLOCK_SIZE) {
            self.update_block(chunk)?;
        }
        Ok(())
    }

    /// Absorb a single block of at most 16 bytes
    pub fn update_block(&mut self, block: &[u8]) -> Result<()> {
        validate::max_length("GHASH block", block.len(), GCM_BLOCK_SIZE)?;

        for (y, b) in self.y.iter_mut().zip(block) {
            *y ^= *b;
        }
        self.y = Self::gf_multiply(&self.y, &self.h);
        Ok(())
    }

    /// Absorb the final `len(A) || len(C)` block, lengths in bits
    pub fn update_lengths(&mut self, aad_len: u64, cipher_len: u64) -> Result<()> {
        let mut length_block = [0u8; GCM_BLOCK_SIZE];
        BigEndian::write_u64(&mut length_block[0..8], aad_len * 8);
        BigEndian::write_u64(&mut length_block[8..16], cipher_len * 8);
        self.update_block(&length_block)
    }

    pub fn finalize(&self) -> [u8; GCM_BLOCK_SIZE] {
        self.y
    }

    fn gf_multiply(x: &[u8; 16], y: &[u8; 16]) -> [u8; 16] {
        let mut z = [0u8; 16];
        let mut v = *y;

        for byte in x.iter() {
            for j in 0..8 {
                let mask = 0u8.wrapping_sub((byte >> (7 - j)) & 1);
                for k in 0..16 {
                    z[k] ^= v[k] & mask;
                }

                let lsb_mask = 0u8.wrapping_sub(v[15] & 1);

                let mut carry = 0;
                for b in v.iter_mut() {
                    let next_carry = *b & 1;
                    *b = (*b >> 1) | (carry << 7);
                    carry = next_carry;
                }

                // R = 11100001 || 0^120
                v[0] ^= 0xE1 & lsb_mask;
            }
        }

        compiler_fence(Ordering::SeqCst);
        z
    }
}

/// GHASH over `aad`, `ciphertext` and their lengths
pub fn process_ghash(
    h: &[u8; GCM_BLOCK_SIZE],
    aad: &[u8],
    ciphertext: &[u8],
) -> Result<[u8; GCM_BLOCK_SIZE]> {
    let mut ghash = GHash::new(h);
    ghash.update(aad)?;
    ghash.update(ciphertext)?;
    ghash.update_lengths(aad.len() as u64, ciphertext.len() as u64)?;
    Ok(ghash.finalize())
}
