//! Fixed-size secrets shared across the crates
//!
//! Wiped on drop, never printed, compared in constant time.

use core::fmt;
use core::ops::Deref;
use vau_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Result};

/// `N` bytes of key material
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBytes<const N: usize>([u8; N]);

impl<const N: usize> SecretBytes<N> {
    pub fn new(data: [u8; N]) -> Self {
        Self(data)
    }

    /// Copy out of a slice that must be exactly `N` bytes long
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let data: [u8; N] = slice.try_into().map_err(|_| Error::InvalidLength {
            context: "SecretBytes::from_slice",
            expected: N,
            actual: slice.len(),
        })?;
        Ok(Self(data))
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> Deref for SecretBytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

impl<const N: usize> fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}
