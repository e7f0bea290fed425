//! Galois/Counter Mode (NIST SP 800-38D) over a 128-bit block cipher
//!
//! Only 96-bit nonces are accepted, so the pre-counter block is always
//! `nonce || 0x00000001`. Tags are full length (16 bytes).

use crate::aead::AuthenticatedCipher;
use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};
use crate::types::nonce::AesGcmCompatible;
use crate::types::Nonce;
use byteorder::{BigEndian, ByteOrder};
use vau_internal::constant_time::ct_eq;
use vau_params::utils::symmetric::{AES_BLOCK_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE};
use zeroize::Zeroize;

pub mod ghash;

use ghash::process_ghash;

/// GCM instance bound to a keyed block cipher
pub struct Gcm<B: BlockCipher> {
    cipher: B,
    h: [u8; AES_BLOCK_SIZE],
}

impl<B: BlockCipher> Gcm<B> {
    /// Wrap a keyed cipher, deriving the hash subkey H = E(K, 0^128)
    pub fn new(cipher: B) -> Result<Self> {
        validate::parameter(
            B::BLOCK_SIZE == AES_BLOCK_SIZE,
            "block_size",
            "GCM requires a 128-bit block cipher",
        )?;

        let mut h = [0u8; AES_BLOCK_SIZE];
        cipher.encrypt_block(&mut h)?;
        Ok(Self { cipher, h })
    }

    /// Key a fresh cipher and wrap it
    pub fn from_key(key: &[u8]) -> Result<Self> {
        Self::new(B::new(key)?)
    }

    fn j0<const N: usize>(nonce: &Nonce<N>) -> [u8; AES_BLOCK_SIZE]
    where
        Nonce<N>: AesGcmCompatible,
    {
        let mut j0 = [0u8; AES_BLOCK_SIZE];
        j0[..GCM_NONCE_SIZE].copy_from_slice(nonce.as_ref());
        j0[AES_BLOCK_SIZE - 1] = 1;
        j0
    }

    /// XOR `data` with the keystream starting at inc32(J0)
    fn apply_keystream(&self, j0: &[u8; AES_BLOCK_SIZE], data: &mut [u8]) -> Result<()> {
        let mut counter = *j0;
        let mut block = [0u8; AES_BLOCK_SIZE];

        for chunk in data.chunks_mut(AES_BLOCK_SIZE) {
            let ctr = BigEndian::read_u32(&counter[12..16]).wrapping_add(1);
            BigEndian::write_u32(&mut counter[12..16], ctr);

            block.copy_from_slice(&counter);
            self.cipher.encrypt_block(&mut block)?;
            for (d, k) in chunk.iter_mut().zip(block.iter()) {
                *d ^= *k;
            }
        }

        block.zeroize();
        Ok(())
    }

    fn tag(
        &self,
        j0: &[u8; AES_BLOCK_SIZE],
        aad: &[u8],
        ciphertext: &[u8],
    ) -> Result<[u8; GCM_TAG_SIZE]> {
        let mut s = process_ghash(&self.h, aad, ciphertext)?;
        let mut mask = *j0;
        self.cipher.encrypt_block(&mut mask)?;

        for (t, m) in s.iter_mut().zip(mask.iter()) {
            *t ^= *m;
        }
        mask.zeroize();
        Ok(s)
    }

    /// Encrypt and return `ciphertext || tag`
    pub fn encrypt<const N: usize>(
        &self,
        nonce: &Nonce<N>,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>
    where
        Nonce<N>: AesGcmCompatible,
    {
        let aad = aad.unwrap_or(&[]);
        let j0 = Self::j0(nonce);

        let mut out = Vec::with_capacity(plaintext.len() + GCM_TAG_SIZE);
        out.extend_from_slice(plaintext);
        self.apply_keystream(&j0, &mut out)?;

        let tag = self.tag(&j0, aad, &out)?;
        out.extend_from_slice(&tag);
        Ok(out)
    }

    /// Verify the tag over `ciphertext || tag` and only then decrypt
    pub fn decrypt<const N: usize>(
        &self,
        nonce: &Nonce<N>,
        ciphertext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>>
    where
        Nonce<N>: AesGcmCompatible,
    {
        validate::min_length("GCM ciphertext", ciphertext.len(), GCM_TAG_SIZE)?;

        let aad = aad.unwrap_or(&[]);
        let j0 = Self::j0(nonce);
        let (body, received_tag) = ciphertext.split_at(ciphertext.len() - GCM_TAG_SIZE);

        let expected_tag = self.tag(&j0, aad, body)?;
        if !ct_eq(expected_tag, received_tag) {
            return Err(Error::Authentication { algorithm: "AES-GCM" });
        }

        let mut plaintext = body.to_vec();
        self.apply_keystream(&j0, &mut plaintext)?;
        Ok(plaintext)
    }
}

impl<B: BlockCipher> AuthenticatedCipher for Gcm<B> {
    type Nonce = Nonce<GCM_NONCE_SIZE>;
    const TAG_SIZE: usize = GCM_TAG_SIZE;

    fn encrypt(&self, nonce: &Self::Nonce, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        Gcm::encrypt(self, nonce, plaintext, aad)
    }

    fn decrypt(&self, nonce: &Self::Nonce, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        Gcm::decrypt(self, nonce, ciphertext, aad)
    }
}

impl<B: BlockCipher> Drop for Gcm<B> {
    fn drop(&mut self) {
        self.h.zeroize();
    }
}
