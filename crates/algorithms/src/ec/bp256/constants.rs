//! Sizes used by Brainpool P256r1 operations

pub use vau_params::traditional::ecdh::{
    BP256_FIELD_ELEMENT_SIZE, BP256_POINT_COMPRESSED_SIZE, BP256_POINT_UNCOMPRESSED_SIZE,
    BP256_SCALAR_SIZE, BP256_SHARED_SECRET_SIZE,
};
