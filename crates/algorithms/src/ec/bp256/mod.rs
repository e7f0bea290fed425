//! Brainpool P256r1 elliptic curve primitives (RFC 5639)
//!
//! The curve is y^2 = x^3 + a·x + b over F_p with a general coefficient a,
//! so doubling uses the full Jacobian formula rather than the a = -3
//! shortcut of the NIST curves. The implementation uses:
//! - Montgomery multiplication for field arithmetic
//! - Jacobian projective coordinates for point operations
//! - branch-free point addition and doubling
//! - a double-and-add-always ladder with constant-time selection

mod constants;
mod field;
mod point;
mod scalar;

pub use constants::{
    BP256_FIELD_ELEMENT_SIZE, BP256_POINT_COMPRESSED_SIZE, BP256_POINT_UNCOMPRESSED_SIZE,
    BP256_SCALAR_SIZE, BP256_SHARED_SECRET_SIZE,
};
pub use field::FieldElement;
pub use point::{Point, PointFormat};
pub use scalar::Scalar;

use crate::error::{Error, Result};
use rand::{CryptoRng, RngCore};
use vau_common::security::SecretBuffer;
use vau_params::traditional::brainpool::BRAINPOOL_P256R1;
use zeroize::Zeroize;

/// The standard generator G
pub fn base_point_g() -> Result<Point> {
    Point::new_uncompressed(&BRAINPOOL_P256R1.g_x, &BRAINPOOL_P256R1.g_y)
}

/// scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Result<Point> {
    base_point_g()?.mul(scalar)
}

/// scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Result<Point> {
    if point.is_identity() {
        return Ok(Point::identity());
    }
    point.mul(scalar)
}

/// Generate a key pair with the private scalar uniform in [1, n-1]
///
/// Candidates are drawn 32 bytes at a time and discarded when out of range.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Scalar, Point)> {
    let mut candidate = [0u8; BP256_SCALAR_SIZE];
    loop {
        rng.try_fill_bytes(&mut candidate)
            .map_err(|_| Error::Other("random source failed during key generation"))?;
        if let Ok(private_key) = Scalar::new(candidate) {
            candidate.zeroize();
            let public_key = scalar_mult_base_g(&private_key)?;
            return Ok((private_key, public_key));
        }
    }
}

/// Raw ECDH: the affine x coordinate of private · peer, big-endian
///
/// Fails if the peer point is the identity or the product degenerates to it.
pub fn shared_secret(
    private_key: &Scalar,
    peer: &Point,
) -> Result<SecretBuffer<BP256_SHARED_SECRET_SIZE>> {
    if peer.is_identity() {
        return Err(Error::param("Brainpool P256r1 ECDH", "peer point is the identity"));
    }
    let product = scalar_mult(private_key, peer)?;
    if product.is_identity() {
        return Err(Error::Processing {
            operation: "Brainpool P256r1 ECDH",
            details: "shared point is the identity",
        });
    }
    Ok(SecretBuffer::new(product.x_coordinate_bytes()))
}
