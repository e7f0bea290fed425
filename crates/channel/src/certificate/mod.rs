//! Extraction of the backend ECDH key from its X.509 certificate
//!
//! Only enough DER is understood to walk from the certificate to the
//! SubjectPublicKeyInfo. Signatures, validity and chains are not examined.

use thiserror::Error;
use tracing::trace;
use vau_params::traditional::brainpool::{BRAINPOOL_P256R1_OID, EC_PUBLIC_KEY_OID};

use crate::domain::CurvePoint;

const TAG_INTEGER: u8 = 0x02;
const TAG_BIT_STRING: u8 = 0x03;
const TAG_OID: u8 = 0x06;
const TAG_SEQUENCE: u8 = 0x30;
const TAG_VERSION: u8 = 0xa0;

/// Reasons a certificate does not yield a usable key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertificateError {
    #[error("DER input truncated")]
    Truncated,

    #[error("unexpected DER tag 0x{found:02x}, expected 0x{expected:02x}")]
    UnexpectedTag { expected: u8, found: u8 },

    #[error("malformed DER: {0}")]
    Malformed(&'static str),

    #[error("public key algorithm is not id-ecPublicKey")]
    UnsupportedAlgorithm,

    #[error("curve is not brainpoolP256r1")]
    UnsupportedCurve,

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),
}

impl From<CertificateError> for vau_api::Error {
    fn from(err: CertificateError) -> Self {
        vau_api::Error::RemoteKeyFetch {
            context: "VAU certificate",
            message: err.to_string(),
        }
    }
}

/// One DER element
struct Tlv<'a> {
    tag: u8,
    value: &'a [u8],
}

/// Read one element, returning it and the remaining input
fn read_tlv(input: &[u8]) -> Result<(Tlv<'_>, &[u8]), CertificateError> {
    let (&tag, rest) = input.split_first().ok_or(CertificateError::Truncated)?;
    let (&first, mut rest) = rest.split_first().ok_or(CertificateError::Truncated)?;

    let len = if first < 0x80 {
        first as usize
    } else {
        let count = (first & 0x7f) as usize;
        if count == 0 || count > 4 {
            return Err(CertificateError::Malformed("unsupported length encoding"));
        }
        if rest.len() < count {
            return Err(CertificateError::Truncated);
        }
        let (len_bytes, tail) = rest.split_at(count);
        rest = tail;
        len_bytes.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize)
    };

    if rest.len() < len {
        return Err(CertificateError::Truncated);
    }
    let (value, rest) = rest.split_at(len);
    Ok((Tlv { tag, value }, rest))
}

fn expect_tlv(input: &[u8], expected: u8) -> Result<(&[u8], &[u8]), CertificateError> {
    let (tlv, rest) = read_tlv(input)?;
    if tlv.tag != expected {
        return Err(CertificateError::UnexpectedTag {
            expected,
            found: tlv.tag,
        });
    }
    Ok((tlv.value, rest))
}

/// Public key from a DER certificate
///
/// The key must be an EC key on brainpoolP256r1, encoded as a compressed or
/// uncompressed SEC1 point that lies on the curve.
pub fn public_key_from_certificate(der: &[u8]) -> Result<CurvePoint, CertificateError> {
    trace!(len = der.len(), "parsing VAU certificate");

    let (certificate, _) = expect_tlv(der, TAG_SEQUENCE)?;
    let (tbs, _) = expect_tlv(certificate, TAG_SEQUENCE)?;

    let mut fields = tbs;
    if fields.first() == Some(&TAG_VERSION) {
        fields = read_tlv(fields)?.1;
    }
    let (_, fields) = expect_tlv(fields, TAG_INTEGER)?; // serialNumber
    let (_, fields) = expect_tlv(fields, TAG_SEQUENCE)?; // signature
    let (_, fields) = expect_tlv(fields, TAG_SEQUENCE)?; // issuer
    let (_, fields) = expect_tlv(fields, TAG_SEQUENCE)?; // validity
    let (_, fields) = expect_tlv(fields, TAG_SEQUENCE)?; // subject
    let (spki, _) = read_tlv(fields)?;
    if spki.tag != TAG_SEQUENCE {
        return Err(CertificateError::UnexpectedTag {
            expected: TAG_SEQUENCE,
            found: spki.tag,
        });
    }

    parse_spki_body(spki.value)
}

/// Public key from a DER SubjectPublicKeyInfo
pub fn public_key_from_spki(der: &[u8]) -> Result<CurvePoint, CertificateError> {
    let (spki, rest) = expect_tlv(der, TAG_SEQUENCE)?;
    if !rest.is_empty() {
        return Err(CertificateError::Malformed("trailing data after SubjectPublicKeyInfo"));
    }
    parse_spki_body(spki)
}

fn parse_spki_body(spki: &[u8]) -> Result<CurvePoint, CertificateError> {
    let (algorithm, rest) = expect_tlv(spki, TAG_SEQUENCE)?;
    let (key_bits, _) = expect_tlv(rest, TAG_BIT_STRING)?;

    let (algorithm_oid, params) = expect_tlv(algorithm, TAG_OID)?;
    if algorithm_oid != EC_PUBLIC_KEY_OID {
        return Err(CertificateError::UnsupportedAlgorithm);
    }
    let curve_oid = match read_tlv(params)? {
        (Tlv { tag: TAG_OID, value }, _) => value,
        _ => return Err(CertificateError::UnsupportedCurve),
    };
    if curve_oid != BRAINPOOL_P256R1_OID {
        return Err(CertificateError::UnsupportedCurve);
    }

    let (&unused_bits, point) = key_bits
        .split_first()
        .ok_or(CertificateError::Malformed("empty public key bit string"))?;
    if unused_bits != 0 {
        return Err(CertificateError::Malformed("public key bit string not octet aligned"));
    }

    CurvePoint::from_sec1(point).map_err(|e| CertificateError::InvalidPublicKey(e.to_string()))
}
