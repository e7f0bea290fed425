//! Constants of the VAU transport message, protocol version 1

use crate::traditional::ecdh::BP256_FIELD_ELEMENT_SIZE;
use crate::utils::symmetric::{AES128_KEY_SIZE, GCM_NONCE_SIZE, GCM_TAG_SIZE};

/// Version byte that opens every version 1 message
pub const VAU_VERSION_1: u8 = 0x01;

/// HKDF info string
pub const VAU_HKDF_INFO: &[u8] = b"ecies-vau-transport";

/// Length of the derived AES key
pub const VAU_KEY_SIZE: usize = AES128_KEY_SIZE;

/// Length of the AES-GCM nonce
pub const VAU_NONCE_SIZE: usize = GCM_NONCE_SIZE;

/// Length of the AES-GCM tag
pub const VAU_TAG_SIZE: usize = GCM_TAG_SIZE;

/// Width of one public key coordinate on the wire
pub const VAU_COORDINATE_SIZE: usize = BP256_FIELD_ELEMENT_SIZE;

/// version || x || y || nonce
pub const VAU_HEADER_SIZE: usize = 1 + 2 * VAU_COORDINATE_SIZE + VAU_NONCE_SIZE;

/// Path of the certificate endpoint, relative to the Fachdienst base URL
pub const VAU_CERTIFICATE_PATH: &str = "/VAUCertificate";

/// Largest certificate body accepted from the certificate endpoint
pub const VAU_CERTIFICATE_MAX_SIZE: usize = 16 * 1024;
