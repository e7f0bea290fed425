//! Constants for Elliptic Curve Diffie-Hellman over Brainpool P256r1

/// Size of a field element / coordinate in bytes
pub const BP256_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of a scalar in bytes
pub const BP256_SCALAR_SIZE: usize = 32;

/// Size of the canonical shared secret (x coordinate) in bytes
pub const BP256_SHARED_SECRET_SIZE: usize = 32;

/// Size of an uncompressed SEC1 point: 0x04 || x || y
pub const BP256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * BP256_FIELD_ELEMENT_SIZE;

/// Size of a compressed SEC1 point: 0x02/0x03 || x
pub const BP256_POINT_COMPRESSED_SIZE: usize = 1 + BP256_FIELD_ELEMENT_SIZE;
