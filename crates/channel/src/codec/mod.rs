//! Binary framing of the version 1 transport message
//!
//! ```text
//! offset  len  field
//!      0    1  version (0x01)
//!      1   32  ephemeral X
//!     33   32  ephemeral Y
//!     65   12  nonce
//!     77    *  ciphertext || tag
//! ```
//!
//! No length prefixes; the ciphertext runs to the end of the buffer.

use vau_algorithms::types::Nonce;
use vau_api::{Error, Result};
use vau_params::vau::{VAU_COORDINATE_SIZE, VAU_HEADER_SIZE, VAU_NONCE_SIZE, VAU_VERSION_1};

use crate::domain::CurvePoint;

const X_OFFSET: usize = 1;
const Y_OFFSET: usize = X_OFFSET + VAU_COORDINATE_SIZE;
const NONCE_OFFSET: usize = Y_OFFSET + VAU_COORDINATE_SIZE;

/// Decoded transport message
#[derive(Debug, Clone, PartialEq)]
pub struct CipherMessage {
    version: u8,
    ephemeral: CurvePoint,
    nonce: Nonce<VAU_NONCE_SIZE>,
    ciphertext: Vec<u8>,
}

impl CipherMessage {
    /// Assemble a message; only version 1 is known
    pub fn new(
        version: u8,
        ephemeral: CurvePoint,
        nonce: Nonce<VAU_NONCE_SIZE>,
        ciphertext: Vec<u8>,
    ) -> Result<Self> {
        check_version(version)?;
        Ok(Self {
            version,
            ephemeral,
            nonce,
            ciphertext,
        })
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn ephemeral_public_key(&self) -> &CurvePoint {
        &self.ephemeral
    }

    pub fn nonce(&self) -> &Nonce<VAU_NONCE_SIZE> {
        &self.nonce
    }

    /// AES-GCM output, tag included
    pub fn ciphertext_and_tag(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Total encoded length
    pub fn encoded_len(&self) -> usize {
        VAU_HEADER_SIZE + self.ciphertext.len()
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(self.version);
        out.extend_from_slice(&self.ephemeral.x);
        out.extend_from_slice(&self.ephemeral.y);
        out.extend_from_slice(self.nonce.as_ref());
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Split a wire message into its fields
    ///
    /// Fails with [`Error::Framing`] if the header is incomplete or the
    /// version byte is unknown. The point is not validated here.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < VAU_HEADER_SIZE {
            return Err(Error::Framing {
                context: "CipherMessage::decode",
                message: format!(
                    "{} bytes, header needs {}",
                    bytes.len(),
                    VAU_HEADER_SIZE
                ),
            });
        }
        check_version(bytes[0])?;

        let mut x = [0u8; VAU_COORDINATE_SIZE];
        let mut y = [0u8; VAU_COORDINATE_SIZE];
        x.copy_from_slice(&bytes[X_OFFSET..Y_OFFSET]);
        y.copy_from_slice(&bytes[Y_OFFSET..NONCE_OFFSET]);
        let nonce = Nonce::from_slice(&bytes[NONCE_OFFSET..VAU_HEADER_SIZE]).map_err(|e| {
            Error::Framing {
                context: "CipherMessage::decode",
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            version: bytes[0],
            ephemeral: CurvePoint::new(x, y),
            nonce,
            ciphertext: bytes[VAU_HEADER_SIZE..].to_vec(),
        })
    }
}

fn check_version(version: u8) -> Result<()> {
    if version != VAU_VERSION_1 {
        return Err(Error::Framing {
            context: "CipherMessage",
            message: format!("unknown version 0x{:02x}", version),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
