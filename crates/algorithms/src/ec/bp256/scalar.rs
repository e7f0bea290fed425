//! Brainpool P256r1 scalars

use crate::ec::bp256::constants::BP256_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};
use vau_common::security::SecretBuffer;
use vau_params::traditional::brainpool::BRAINPOOL_P256R1;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Integer in [1, n-1], where n is the order of the base point
///
/// Held in a zeroizing buffer; used for private keys.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(SecretBuffer<BP256_SCALAR_SIZE>);

impl Scalar {
    /// Accept big-endian bytes only if they already lie in [1, n-1]
    ///
    /// Out-of-range values are rejected rather than reduced, which keeps
    /// key generation by rejection sampling uniform.
    pub fn new(mut data: [u8; BP256_SCALAR_SIZE]) -> Result<Self> {
        let in_range = Self::is_below_order(&data) & !Self::bytes_are_zero(&data);
        let scalar = Scalar(SecretBuffer::new(data));
        data.zeroize();
        if bool::from(in_range) {
            Ok(scalar)
        } else {
            Err(Error::param("Brainpool P256r1 scalar", "value outside [1, n-1]"))
        }
    }

    /// Big-endian encoding
    pub fn serialize(&self) -> [u8; BP256_SCALAR_SIZE] {
        let mut out = [0u8; BP256_SCALAR_SIZE];
        out.copy_from_slice(self.0.as_ref());
        out
    }

    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("Brainpool P256r1 scalar", bytes.len(), BP256_SCALAR_SIZE)?;
        let mut data = [0u8; BP256_SCALAR_SIZE];
        data.copy_from_slice(bytes);
        Self::new(data)
    }

    /// Bit `i`, counted from the most significant bit
    #[inline(always)]
    pub(crate) fn bit_be(&self, i: usize) -> Choice {
        let byte = self.0.as_ref()[i / 8];
        Choice::from((byte >> (7 - (i % 8))) & 1)
    }

    fn bytes_are_zero(data: &[u8; BP256_SCALAR_SIZE]) -> Choice {
        data[..].ct_eq(&[0u8; BP256_SCALAR_SIZE][..])
    }

    /// Constant-time big-endian comparison against n
    fn is_below_order(data: &[u8; BP256_SCALAR_SIZE]) -> Choice {
        let n = &BRAINPOOL_P256R1.n;
        let mut less = Choice::from(0);
        let mut equal_so_far = Choice::from(1);
        for (d, m) in data.iter().zip(n.iter()) {
            less |= equal_so_far & d.ct_lt(m);
            equal_so_far &= d.ct_eq(m);
        }
        less
    }
}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
