//! Brainpool P256r1 domain parameters and public points

use std::fmt;

use vau_algorithms::bp256::{self, Point};
use vau_api::{Error, Result};
use vau_params::traditional::brainpool::{CurveParams, BRAINPOOL_P256R1};
use vau_params::vau::VAU_COORDINATE_SIZE;

/// Affine public point as two 32-byte big-endian coordinates
///
/// This is the shape in which points travel: on the wire, out of a
/// certificate, into a pinned-key fetcher. It is not validated until it is
/// turned into a [`Point`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    pub x: [u8; VAU_COORDINATE_SIZE],
    pub y: [u8; VAU_COORDINATE_SIZE],
}

impl CurvePoint {
    pub fn new(x: [u8; VAU_COORDINATE_SIZE], y: [u8; VAU_COORDINATE_SIZE]) -> Self {
        Self { x, y }
    }

    pub fn from_point(point: &Point) -> Self {
        Self {
            x: point.x_coordinate_bytes(),
            y: point.y_coordinate_bytes(),
        }
    }

    /// Validate the coordinates as a finite point on the curve
    pub fn to_point(&self) -> Result<Point> {
        Point::new_uncompressed(&self.x, &self.y).map_err(|e| Error::InvalidPoint {
            context: "CurvePoint::to_point",
            message: e.to_string(),
        })
    }

    /// Parse a SEC1 encoding, compressed or uncompressed
    pub fn from_sec1(bytes: &[u8]) -> Result<Self> {
        let invalid = |e: vau_algorithms::Error| Error::InvalidPoint {
            context: "CurvePoint::from_sec1",
            message: e.to_string(),
        };
        let point = match Point::detect_format(bytes).map_err(invalid)? {
            bp256::PointFormat::Uncompressed => Point::deserialize_uncompressed(bytes),
            bp256::PointFormat::Compressed => Point::deserialize_compressed(bytes),
            bp256::PointFormat::Identity => {
                return Err(Error::InvalidPoint {
                    context: "CurvePoint::from_sec1",
                    message: "point at infinity".into(),
                })
            }
        }
        .map_err(invalid)?;
        Ok(Self::from_point(&point))
    }

    /// 0x04 || x || y
    pub fn to_sec1_uncompressed(&self) -> [u8; 1 + 2 * VAU_COORDINATE_SIZE] {
        let mut out = [0u8; 1 + 2 * VAU_COORDINATE_SIZE];
        out[0] = 0x04;
        out[1..1 + VAU_COORDINATE_SIZE].copy_from_slice(&self.x);
        out[1 + VAU_COORDINATE_SIZE..].copy_from_slice(&self.y);
        out
    }
}

impl fmt::Debug for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurvePoint")
            .field("x", &hex::encode(self.x))
            .field("y", &hex::encode(self.y))
            .finish()
    }
}

/// Public description of the curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParameters {
    pub prime: [u8; 32],
    pub generator: CurvePoint,
    pub order: [u8; 32],
    pub cofactor: u32,
    pub field_byte_width: usize,
}

/// The fixed Brainpool P256r1 domain
#[derive(Debug, Clone)]
pub struct CurveDomain {
    parameters: CurveParameters,
    generator: Point,
}

impl CurveDomain {
    /// Load and check the built-in parameters
    ///
    /// Fails with [`Error::CurveUnavailable`] if the generator does not lie on
    /// the curve or the parameters are not those of a 256-bit prime-order
    /// curve.
    pub fn brainpool_p256r1() -> Result<Self> {
        Self::from_params(&BRAINPOOL_P256R1)
    }

    fn from_params(params: &CurveParams) -> Result<Self> {
        if params.field_byte_width != VAU_COORDINATE_SIZE || params.h != 1 {
            return Err(Error::CurveUnavailable {
                context: "CurveDomain",
                message: "unsupported field width or cofactor".into(),
            });
        }

        let generator =
            Point::new_uncompressed(&params.g_x, &params.g_y).map_err(|e| {
                Error::CurveUnavailable {
                    context: "CurveDomain",
                    message: e.to_string(),
                }
            })?;

        Ok(Self {
            parameters: CurveParameters {
                prime: params.p,
                generator: CurvePoint::new(params.g_x, params.g_y),
                order: params.n,
                cofactor: params.h,
                field_byte_width: params.field_byte_width,
            },
            generator,
        })
    }

    pub fn parameters(&self) -> &CurveParameters {
        &self.parameters
    }

    pub fn generator(&self) -> &Point {
        &self.generator
    }

    pub fn name(&self) -> &'static str {
        "brainpoolP256r1"
    }
}
