//! Brainpool P256r1 field arithmetic
//!
//! Elements are kept in Montgomery form (a·R mod p, R = 2^256) as four
//! little-endian 64-bit limbs. The prime has no special shape, so reduction
//! is generic CIOS Montgomery multiplication.

use crate::ec::bp256::constants::BP256_FIELD_ELEMENT_SIZE;
use crate::error::{Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const NLIMBS: usize = 4;

/// p = A9FB57DBA1EEA9BC3E660A909D838D726E3BF623D52620282013481D1F6E5377
const P: [u64; NLIMBS] = [
    0x2013481d1f6e5377,
    0x6e3bf623d5262028,
    0x3e660a909d838d72,
    0xa9fb57dba1eea9bc,
];

/// -p^-1 mod 2^64
const P_INV: u64 = 0xc6a75590cefd89b9;

/// R^2 mod p
const R2: [u64; NLIMBS] = [
    0x8cfedf7ba6465b6c,
    0x5cce4c26614d4f4d,
    0xa1ecdacd6b1ac807,
    0x4717aa21e5957fa8,
];

/// R mod p
const ONE: [u64; NLIMBS] = [
    0xdfecb7e2e091ac89,
    0x91c409dc2ad9dfd7,
    0xc199f56f627c728d,
    0x5604a8245e115643,
];

/// a·R mod p
const A: [u64; NLIMBS] = [
    0xd5d18edf69696261,
    0xa68123f1c1d20c64,
    0x95ec1e5e6398556e,
    0x1e4676abd666bc17,
];

/// b·R mod p
const B: [u64; NLIMBS] = [
    0x05d24d72c0c0f36f,
    0x0ac34a49cc51bf59,
    0x64ca989357f2e9d9,
    0x1634f57646a3c93e,
];

const P_MINUS_2: [u8; 32] = [
    0xa9, 0xfb, 0x57, 0xdb, 0xa1, 0xee, 0xa9, 0xbc, 0x3e, 0x66, 0x0a, 0x90, 0x9d, 0x83, 0x8d, 0x72,
    0x6e, 0x3b, 0xf6, 0x23, 0xd5, 0x26, 0x20, 0x28, 0x20, 0x13, 0x48, 0x1d, 0x1f, 0x6e, 0x53, 0x75,
];

/// (p + 1) / 4, valid square-root exponent since p = 3 (mod 4)
const SQRT_EXP: [u8; 32] = [
    0x2a, 0x7e, 0xd5, 0xf6, 0xe8, 0x7b, 0xaa, 0x6f, 0x0f, 0x99, 0x82, 0xa4, 0x27, 0x60, 0xe3, 0x5c,
    0x9b, 0x8e, 0xfd, 0x88, 0xf5, 0x49, 0x88, 0x0a, 0x08, 0x04, 0xd2, 0x07, 0x47, 0xdb, 0x94, 0xde,
];

/// Element of the Brainpool P256r1 base field, Montgomery representation
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct FieldElement(pub(crate) [u64; NLIMBS]);

#[inline(always)]
fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

#[inline(always)]
fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (t as u64, (t >> 64) as u64)
}

/// a + b·c + carry
#[inline(always)]
fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Subtract p from `(hi, limbs)` if the value is at least p
#[inline(always)]
fn reduce_once(limbs: [u64; NLIMBS], hi: u64) -> [u64; NLIMBS] {
    let mut r = [0u64; NLIMBS];
    let mut borrow = 0u64;
    for i in 0..NLIMBS {
        let (d, b) = sbb(limbs[i], P[i], borrow);
        r[i] = d;
        borrow = b;
    }
    // keep the difference when there was a carry out or no borrow
    let keep_diff = Choice::from((hi != 0) as u8) | !Choice::from((borrow >> 63) as u8);
    let mut out = [0u64; NLIMBS];
    for i in 0..NLIMBS {
        out[i] = u64::conditional_select(&limbs[i], &r[i], keep_diff);
    }
    out
}

fn mont_mul(a: &[u64; NLIMBS], b: &[u64; NLIMBS]) -> [u64; NLIMBS] {
    let mut t = [0u64; NLIMBS + 2];

    for i in 0..NLIMBS {
        let mut carry = 0u64;
        for j in 0..NLIMBS {
            let (lo, hi) = mac(t[j], a[j], b[i], carry);
            t[j] = lo;
            carry = hi;
        }
        let (s, c) = adc(t[NLIMBS], carry, 0);
        t[NLIMBS] = s;
        t[NLIMBS + 1] = c;

        let m = t[0].wrapping_mul(P_INV);
        let (_, mut carry) = mac(t[0], m, P[0], 0);
        for j in 1..NLIMBS {
            let (lo, hi) = mac(t[j], m, P[j], carry);
            t[j - 1] = lo;
            carry = hi;
        }
        let (s, c) = adc(t[NLIMBS], carry, 0);
        t[NLIMBS - 1] = s;
        t[NLIMBS] = t[NLIMBS + 1] + c;
    }

    reduce_once([t[0], t[1], t[2], t[3]], t[NLIMBS])
}

impl FieldElement {
    pub fn zero() -> Self {
        FieldElement([0u64; NLIMBS])
    }

    pub fn one() -> Self {
        FieldElement(ONE)
    }

    /// Curve coefficient a
    pub(crate) fn curve_a() -> Self {
        FieldElement(A)
    }

    /// Curve coefficient b
    pub(crate) fn curve_b() -> Self {
        FieldElement(B)
    }

    /// Parse a big-endian value; values not below p are rejected
    pub fn from_bytes(bytes: &[u8; BP256_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let mut limbs = [0u64; NLIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let start = 24 - 8 * i;
            let mut word = [0u8; 8];
            word.copy_from_slice(&bytes[start..start + 8]);
            *limb = u64::from_be_bytes(word);
        }

        let mut borrow = 0u64;
        for i in 0..NLIMBS {
            let (_, b) = sbb(limbs[i], P[i], borrow);
            borrow = b;
        }
        if borrow == 0 {
            return Err(Error::param("Brainpool P256r1 field", "value not below p"));
        }

        Ok(FieldElement(mont_mul(&limbs, &R2)))
    }

    /// Canonical big-endian encoding
    pub fn to_bytes(&self) -> [u8; BP256_FIELD_ELEMENT_SIZE] {
        let canonical = mont_mul(&self.0, &[1, 0, 0, 0]);
        let mut out = [0u8; BP256_FIELD_ELEMENT_SIZE];
        for (i, limb) in canonical.iter().enumerate() {
            let start = 24 - 8 * i;
            out[start..start + 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::zero()).into()
    }

    /// Parity of the canonical value, used for point compression
    pub fn is_odd(&self) -> bool {
        self.to_bytes()[BP256_FIELD_ELEMENT_SIZE - 1] & 1 == 1
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut r = [0u64; NLIMBS];
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let (s, c) = adc(self.0[i], other.0[i], carry);
            r[i] = s;
            carry = c;
        }
        FieldElement(reduce_once(r, carry))
    }

    pub fn sub(&self, other: &Self) -> Self {
        let mut r = [0u64; NLIMBS];
        let mut borrow = 0u64;
        for i in 0..NLIMBS {
            let (d, b) = sbb(self.0[i], other.0[i], borrow);
            r[i] = d;
            borrow = b;
        }
        // borrow is all-ones on underflow; add p back under that mask
        let mut carry = 0u64;
        for i in 0..NLIMBS {
            let (s, c) = adc(r[i], P[i] & borrow, carry);
            r[i] = s;
            carry = c;
        }
        FieldElement(r)
    }

    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(mont_mul(&self.0, &other.0))
    }

    pub fn square(&self) -> Self {
        self.mul(self)
    }

    pub fn double(&self) -> Self {
        self.add(self)
    }

    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Square-and-multiply over a public big-endian exponent
    fn pow_vartime(&self, exp: &[u8; 32]) -> Self {
        let mut result = Self::one();
        for &byte in exp.iter() {
            for bit in (0..8).rev() {
                result = result.square();
                if (byte >> bit) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }

    /// Multiplicative inverse via Fermat: a^(p-2)
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::param("Brainpool P256r1 field", "inverse of zero"));
        }
        Ok(self.pow_vartime(&P_MINUS_2))
    }

    /// Square root if one exists
    pub fn sqrt(&self) -> Option<Self> {
        let candidate = self.pow_vartime(&SQRT_EXP);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; NLIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(limbs)
    }
}
