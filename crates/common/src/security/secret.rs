//! Owned key material that wipes itself on drop
//!
//! Round keys, scalars and ECDH outputs live in these containers. Their
//! `Debug` output never shows the contents.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

fn redacted(f: &mut fmt::Formatter<'_>, name: &str, len: usize) -> fmt::Result {
    write!(f, "{name}(len={len}, [REDACTED])")
}

/// `N` secret bytes on the stack
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize>([u8; N]);

impl<const N: usize> SecretBuffer<N> {
    pub fn new(data: [u8; N]) -> Self {
        Self(data)
    }

    /// All-zero buffer to be filled in place
    pub fn zeroed() -> Self {
        Self([0u8; N])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        redacted(f, "SecretBuffer", N)
    }
}

/// Secret bytes whose length is only known at runtime
///
/// Used for the minimal big-endian encoding of an ECDH result before it is
/// padded back to the field width.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec(Vec<u8>);

impl SecretVec {
    pub fn from_slice(slice: &[u8]) -> Self {
        Self(slice.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        redacted(f, "SecretVec", self.0.len())
    }
}

/// Wipes a borrowed scratch value when it goes out of scope
///
/// Covers early returns through `?`, which a trailing `zeroize()` call
/// would miss.
pub struct ZeroizeGuard<'a, T: Zeroize>(&'a mut T);

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    pub fn new(value: &'a mut T) -> Self {
        Self(value)
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0
    }
}
