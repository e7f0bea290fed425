//! SHA-256 as specified in FIPS PUB 180-4

use crate::error::Result;
use crate::hash::HashFunction;
use crate::types::{Digest, ZeroizeGuard};
use byteorder::{BigEndian, ByteOrder};
use std::sync::atomic::{compiler_fence, Ordering};
use zeroize::Zeroize;

use vau_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};

const K256: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const INIT_STATE: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Incremental SHA-256; the chaining state is wiped on drop
#[derive(Clone, Zeroize)]
pub struct Sha256 {
    state: [u32; 8],
    pending: [u8; SHA256_BLOCK_SIZE],
    pending_len: usize,
    /// Bytes already folded into `state`
    processed: u64,
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// One compression of a 64-byte block into `state`
fn compress(state: &mut [u32; 8], block: &[u8]) {
    debug_assert_eq!(block.len(), SHA256_BLOCK_SIZE);

    let mut schedule = [0u32; 64];
    let mut w = ZeroizeGuard::new(&mut schedule);
    compiler_fence(Ordering::SeqCst);

    BigEndian::read_u32_into(block, &mut w[..16]);
    for t in 16..64 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let mut regs = *state;
    let mut r = ZeroizeGuard::new(&mut regs);

    for (k, wt) in K256.iter().zip(w.iter()) {
        let [a, b, c, d, e, f, g, h] = *r;
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add((e & f) ^ (!e & g))
            .wrapping_add(*k)
            .wrapping_add(*wt);
        let t2 = big_sigma0(a).wrapping_add((a & b) ^ (a & c) ^ (b & c));
        *r = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    for (s, x) in state.iter_mut().zip(r.iter()) {
        *s = s.wrapping_add(*x);
    }
    compiler_fence(Ordering::SeqCst);
}

impl Sha256 {
    fn absorb(&mut self, mut input: &[u8]) {
        if self.pending_len > 0 {
            let take = input.len().min(SHA256_BLOCK_SIZE - self.pending_len);
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&input[..take]);
            self.pending_len += take;
            input = &input[take..];

            if self.pending_len < SHA256_BLOCK_SIZE {
                return;
            }
            let block = self.pending;
            compress(&mut self.state, &block);
            self.processed += SHA256_BLOCK_SIZE as u64;
            self.pending_len = 0;
        }

        let mut blocks = input.chunks_exact(SHA256_BLOCK_SIZE);
        for block in &mut blocks {
            compress(&mut self.state, block);
            self.processed += SHA256_BLOCK_SIZE as u64;
        }

        let rest = blocks.remainder();
        self.pending[..rest.len()].copy_from_slice(rest);
        self.pending_len = rest.len();
    }

    /// Pad with 0x80, zeros and the 64-bit bit length, then read the state
    fn pad_and_output(&mut self) -> [u8; SHA256_OUTPUT_SIZE] {
        let bit_len = (self.processed + self.pending_len as u64) * 8;

        let mut tail = [0u8; 2 * SHA256_BLOCK_SIZE];
        tail[..self.pending_len].copy_from_slice(&self.pending[..self.pending_len]);
        tail[self.pending_len] = 0x80;
        let tail_len = if self.pending_len < SHA256_BLOCK_SIZE - 8 {
            SHA256_BLOCK_SIZE
        } else {
            2 * SHA256_BLOCK_SIZE
        };
        BigEndian::write_u64(&mut tail[tail_len - 8..tail_len], bit_len);

        for block in tail[..tail_len].chunks_exact(SHA256_BLOCK_SIZE) {
            compress(&mut self.state, block);
        }
        tail.zeroize();

        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);
        self.zeroize();
        out
    }
}

impl HashFunction for Sha256 {
    type Output = Digest<SHA256_OUTPUT_SIZE>;

    fn new() -> Self {
        Self {
            state: INIT_STATE,
            pending: [0u8; SHA256_BLOCK_SIZE],
            pending_len: 0,
            processed: 0,
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.absorb(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        Ok(Digest::new(self.pad_and_output()))
    }

    fn output_size() -> usize {
        SHA256_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        SHA256_BLOCK_SIZE
    }

    fn name() -> String {
        "SHA-256".to_string()
    }
}
