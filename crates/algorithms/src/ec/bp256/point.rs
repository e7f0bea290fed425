//! Brainpool P256r1 point operations

use crate::ec::bp256::{
    constants::{
        BP256_FIELD_ELEMENT_SIZE, BP256_POINT_COMPRESSED_SIZE, BP256_POINT_UNCOMPRESSED_SIZE,
        BP256_SCALAR_SIZE,
    },
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Format of a serialized point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Identity point (all zeros)
    Identity,
    /// Uncompressed: 0x04 || x || y
    Uncompressed,
    /// Compressed: 0x02/0x03 || x
    Compressed,
}

/// Affine point (x, y) or the identity
#[derive(Clone, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Jacobian coordinates (X:Y:Z), affine x = X/Z^2, y = Y/Z^3
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Build an affine point from big-endian coordinates, rejecting points
    /// that are not on the curve
    pub fn new_uncompressed(
        x_bytes: &[u8; BP256_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; BP256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = FieldElement::from_bytes(x_bytes)?;
        let y = FieldElement::from_bytes(y_bytes)?;
        if !Self::is_on_curve(&x, &y) {
            return Err(Error::param("Brainpool P256r1 point", "point not on curve"));
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    /// The point at infinity
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    pub fn x_coordinate_bytes(&self) -> [u8; BP256_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    pub fn y_coordinate_bytes(&self) -> [u8; BP256_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        if bytes.is_empty() {
            return Err(Error::param("Brainpool P256r1 point", "empty encoding"));
        }
        match (bytes[0], bytes.len()) {
            (0x00, BP256_POINT_UNCOMPRESSED_SIZE) => {
                if bytes.iter().all(|&b| b == 0) {
                    Ok(PointFormat::Identity)
                } else {
                    Err(Error::param("Brainpool P256r1 point", "invalid identity encoding"))
                }
            }
            (0x04, BP256_POINT_UNCOMPRESSED_SIZE) => Ok(PointFormat::Uncompressed),
            (0x02 | 0x03, BP256_POINT_COMPRESSED_SIZE) => Ok(PointFormat::Compressed),
            _ => Err(Error::param("Brainpool P256r1 point", "unknown or malformed format")),
        }
    }

    /// SEC1 uncompressed encoding; the identity encodes as all zeros
    pub fn serialize_uncompressed(&self) -> [u8; BP256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; BP256_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..1 + BP256_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[1 + BP256_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "Brainpool P256r1 point",
            bytes.len(),
            BP256_POINT_UNCOMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        if bytes[0] != 0x04 {
            return Err(Error::param(
                "Brainpool P256r1 point",
                "invalid prefix for uncompressed point",
            ));
        }
        let mut xb = [0u8; BP256_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; BP256_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..1 + BP256_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[1 + BP256_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&xb, &yb)
    }

    pub fn serialize_compressed(&self) -> [u8; BP256_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; BP256_POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = if self.y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "Brainpool P256r1 compressed point",
            bytes.len(),
            BP256_POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != 0x02 && tag != 0x03 {
            return Err(Error::param("Brainpool P256r1 point", "invalid compressed prefix"));
        }
        let mut xb = [0u8; BP256_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..]);
        let x = FieldElement::from_bytes(&xb)?;

        let y = Self::curve_rhs(&x)
            .sqrt()
            .ok_or_else(|| Error::param("Brainpool P256r1 point", "x has no matching y"))?;
        let y = if y.is_odd() == (tag == 0x03) {
            y
        } else {
            y.negate()
        };

        Ok(Point {
            is_identity: Choice::from(0),
            x,
            y,
        })
    }

    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Scalar multiplication with a fixed double-and-add-always ladder
    ///
    /// Every bit costs one doubling and one addition, neither of which
    /// branches on its inputs; the sum is kept or discarded with a
    /// constant-time select. Only the final affine conversion branches, on
    /// the public fact that the product is the identity.
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        if self.is_identity() {
            return Ok(Self::identity());
        }
        let base = self.to_projective();
        let mut acc = ProjectivePoint::identity();

        for i in 0..BP256_SCALAR_SIZE * 8 {
            acc = acc.double();
            let sum = acc.add(&base);
            acc = ProjectivePoint::conditional_select(&acc, &sum, scalar.bit_be(i));
        }

        Ok(acc.to_affine())
    }

    /// x^3 + a·x + b
    fn curve_rhs(x: &FieldElement) -> FieldElement {
        let x3 = x.square().mul(x);
        let ax = FieldElement::curve_a().mul(x);
        x3.add(&ax).add(&FieldElement::curve_b())
    }

    /// y^2 = x^3 + a·x + b
    pub(crate) fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        y.square() == Self::curve_rhs(x)
    }

    fn to_projective(&self) -> ProjectivePoint {
        if self.is_identity() {
            ProjectivePoint::identity()
        } else {
            ProjectivePoint {
                is_identity: Choice::from(0),
                x: self.x,
                y: self.y,
                z: FieldElement::one(),
            }
        }
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            is_identity: Choice::conditional_select(&a.is_identity, &b.is_identity, choice),
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ProjectivePoint {
    /// (1 : 1 : 0)
    pub fn identity() -> Self {
        ProjectivePoint {
            is_identity: Choice::from(1),
            x: FieldElement::one(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Jacobian addition (add-1998-cmo-2)
    ///
    /// The generic sum, the doubling and the identity cases are all
    /// computed; the result is chosen with constant-time selects so the
    /// ladder's identity accumulator does not show up in the timing.
    pub fn add(&self, other: &Self) -> Self {
        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let u1 = self.x.mul(&z2_sq);
        let u2 = other.x.mul(&z1_sq);
        let s1 = self.y.mul(&z2_sq.mul(&other.z));
        let s2 = other.y.mul(&z1_sq.mul(&self.z));

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);
        let h_zero = h.ct_eq(&FieldElement::zero());
        let r_zero = r.ct_eq(&FieldElement::zero());

        let h2 = h.square();
        let h3 = h2.mul(&h);
        let v = u1.mul(&h2);

        // X3 = r^2 - h^3 - 2v
        let x3 = r.square().sub(&h3).sub(&v.double());
        // Y3 = r(v - X3) - s1·h^3
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&h3));
        // Z3 = Z1·Z2·h
        let z3 = self.z.mul(&other.z).mul(&h);

        let mut sum = ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        };
        sum = Self::conditional_select(&sum, &self.double(), h_zero & r_zero);
        sum = Self::conditional_select(&sum, &Self::identity(), h_zero & !r_zero);
        sum = Self::conditional_select(&sum, self, other.is_identity);
        Self::conditional_select(&sum, other, self.is_identity)
    }

    /// Jacobian doubling for a general coefficient a (dbl-1998-cmo-2)
    pub fn double(&self) -> Self {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        // S = 4·X·Y^2
        let s = self.x.mul(&yy).double().double();
        // M = 3·X^2 + a·Z^4
        let m = xx
            .double()
            .add(&xx)
            .add(&FieldElement::curve_a().mul(&zz.square()));

        // X3 = M^2 - 2S
        let x3 = m.square().sub(&s.double());
        // Y3 = M(S - X3) - 8·Y^4
        let eight_y4 = yy.square().double().double().double();
        let y3 = m.mul(&s.sub(&x3)).sub(&eight_y4);
        // Z3 = 2·Y·Z
        let z3 = self.y.mul(&self.z).double();

        let doubled = ProjectivePoint {
            is_identity: Choice::from(0),
            x: x3,
            y: y3,
            z: z3,
        };
        // 2·O = O, and a point with y = 0 has order two
        let degenerate = self.is_identity | self.y.ct_eq(&FieldElement::zero());
        Self::conditional_select(&doubled, &Self::identity(), degenerate)
    }

    pub fn to_affine(&self) -> Point {
        if self.is_identity.into() {
            return Point::identity();
        }
        let z_inv = match self.z.invert() {
            Ok(z_inv) => z_inv,
            Err(_) => return Point::identity(),
        };
        let z_inv_sq = z_inv.square();
        Point {
            is_identity: Choice::from(0),
            x: self.x.mul(&z_inv_sq),
            y: self.y.mul(&z_inv_sq.mul(&z_inv)),
        }
    }
}
