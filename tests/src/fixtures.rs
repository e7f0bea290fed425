//! Keys and certificates shared by the integration suites

use vau_api::{Error, Result};
use vau_channel::{CurvePoint, KeyPair};

/// Certificate of the test Fachdienst, ECDH key on brainpoolP256r1
pub const VAU_CERTIFICATE: &[u8] = include_bytes!("../../crates/channel/testdata/vau_brainpool.der");

/// Bare SubjectPublicKeyInfo carrying the same key
pub const VAU_SPKI: &[u8] = include_bytes!("../../crates/channel/testdata/vau_brainpool_spki.der");

/// A certificate for a NIST P-256 key, which the channel must refuse
pub const NIST_CERTIFICATE: &[u8] = include_bytes!("../../crates/channel/testdata/nist_p256.der");

/// Private scalar matching [`VAU_CERTIFICATE`]
pub const BACKEND_PRIVATE: &str =
    "5cafe0ddba11c0de5cafe0ddba11c0de5cafe0ddba11c0de5cafe0ddba11c0de";

pub const BACKEND_X: &str = "4e0d90e522b8b10ceedd4e7c4c521537d7a393a3b68ad3e62a6f8b330528b3ef";
pub const BACKEND_Y: &str = "86e9e2adc6a1179fb68cc676c79beca289b869c5e756c19fdb3d60ae7871c265";

fn unhex(context: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| Error::InvalidParameter {
        context,
        message: e.to_string(),
    })
}

pub fn backend_keypair() -> Result<KeyPair> {
    KeyPair::from_private_bytes(&unhex("BACKEND_PRIVATE", BACKEND_PRIVATE)?)
}

pub fn backend_public() -> Result<CurvePoint> {
    let mut sec1 = vec![0x04];
    sec1.extend(unhex("BACKEND_X", BACKEND_X)?);
    sec1.extend(unhex("BACKEND_Y", BACKEND_Y)?);
    CurvePoint::from_sec1(&sec1)
}
