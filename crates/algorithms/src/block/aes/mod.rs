//! AES-128 block cipher (FIPS 197), forward direction
//!
//! The S-box is computed arithmetically (inversion in GF(2^8) followed by the
//! affine map) instead of a table lookup, keeping memory access independent of
//! secret bytes.

use super::BlockCipher;
use crate::error::{validate, Result};
use std::sync::atomic::{compiler_fence, Ordering};
use vau_common::security::SecretBuffer;
use vau_params::utils::symmetric::{AES128_KEY_SIZE, AES128_ROUNDS, AES_BLOCK_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

const ROUND_KEYS_SIZE: usize = AES_BLOCK_SIZE * (AES128_ROUNDS + 1);

/// Round constants for AES key expansion
const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Multiply by x in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1
#[inline(always)]
fn xtime(b: u8) -> u8 {
    (b << 1) ^ ((b >> 7).wrapping_neg() & 0x1b)
}

/// Multiply two bytes in GF(2^8)
#[inline(always)]
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;
    for _ in 0..8 {
        p ^= a & (b & 1).wrapping_neg();
        a = xtime(a);
        b >>= 1;
    }
    p
}

/// x^254, the multiplicative inverse in GF(2^8) (0 maps to 0)
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x3 = gf_mul(x2, x);
    let x6 = gf_mul(x3, x3);
    let x12 = gf_mul(x6, x6);
    let x15 = gf_mul(x12, x3);
    let x30 = gf_mul(x15, x15);
    let x60 = gf_mul(x30, x30);
    let x120 = gf_mul(x60, x60);
    let x126 = gf_mul(x120, x6);
    let x127 = gf_mul(x126, x);
    gf_mul(x127, x127)
}

#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// AES-128 block cipher with round keys held in a zeroizing buffer
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<ROUND_KEYS_SIZE>,
}

impl Aes128 {
    fn expand_key(key: &[u8]) -> Result<SecretBuffer<ROUND_KEYS_SIZE>> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;

        let mut rk = SecretBuffer::<ROUND_KEYS_SIZE>::zeroed();
        let w = rk.as_mut_slice();
        w[..AES128_KEY_SIZE].copy_from_slice(key);

        for i in 4..4 * (AES128_ROUNDS + 1) {
            let mut temp = [w[4 * i - 4], w[4 * i - 3], w[4 * i - 2], w[4 * i - 1]];
            if i % 4 == 0 {
                temp = [
                    sbox(temp[1]) ^ RCON[i / 4 - 1],
                    sbox(temp[2]),
                    sbox(temp[3]),
                    sbox(temp[0]),
                ];
            }
            for j in 0..4 {
                w[4 * i + j] = w[4 * (i - 4) + j] ^ temp[j];
            }
        }

        Ok(rk)
    }

    fn sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = sbox(*byte);
        }
        compiler_fence(Ordering::SeqCst);
    }

    fn shift_rows(state: &mut [u8; 16]) {
        let t = *state;
        for c in 0..4 {
            for r in 0..4 {
                state[4 * c + r] = t[4 * ((c + r) % 4) + r];
            }
        }
    }

    fn mix_columns(state: &mut [u8; 16]) {
        for col in state.chunks_exact_mut(4) {
            let (s0, s1, s2, s3) = (col[0], col[1], col[2], col[3]);
            let all = s0 ^ s1 ^ s2 ^ s3;
            col[0] ^= all ^ xtime(s0 ^ s1);
            col[1] ^= all ^ xtime(s1 ^ s2);
            col[2] ^= all ^ xtime(s2 ^ s3);
            col[3] ^= all ^ xtime(s3 ^ s0);
        }
    }

    fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
        for (s, k) in state.iter_mut().zip(round_key) {
            *s ^= *k;
        }
    }
}

impl BlockCipher for Aes128 {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn new(key: &[u8]) -> Result<Self> {
        Ok(Aes128 {
            round_keys: Self::expand_key(key)?,
        })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;

        let rk = self.round_keys.as_slice();
        let mut state = [0u8; 16];
        state.copy_from_slice(block);

        Self::add_round_key(&mut state, &rk[..16]);
        for round in 1..AES128_ROUNDS {
            Self::sub_bytes(&mut state);
            Self::shift_rows(&mut state);
            Self::mix_columns(&mut state);
            Self::add_round_key(&mut state, &rk[round * 16..(round + 1) * 16]);
        }
        Self::sub_bytes(&mut state);
        Self::shift_rows(&mut state);
        Self::add_round_key(&mut state, &rk[AES128_ROUNDS * 16..]);

        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }

    fn name() -> &'static str {
        "AES-128"
    }
}

#[cfg(test)]
mod tests;
