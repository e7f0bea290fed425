//! Nonces with their size fixed at compile time

use core::fmt;
use core::ops::Deref;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;

/// `N`-byte nonce; only sizes marked [`AesGcmCompatible`] reach GCM
#[derive(Clone, Copy, Zeroize)]
pub struct Nonce<const N: usize>([u8; N]);

impl<const N: usize> Sealed for Nonce<N> {}

impl<const N: usize> Nonce<N> {
    pub fn new(data: [u8; N]) -> Self {
        Self(data)
    }

    /// Length-checked copy, [`Error::Length`](crate::Error::Length) otherwise
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Nonce", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self(data))
    }

    pub fn to_bytes(&self) -> [u8; N] {
        self.0
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> core::hash::Hash for Nonce<N> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", hex::encode(self.0))
    }
}

/// Nonce sizes GCM accepts without GHASH-ing the IV; only 96 bits
pub trait AesGcmCompatible: Sealed {}

impl AesGcmCompatible for Nonce<12> {}
