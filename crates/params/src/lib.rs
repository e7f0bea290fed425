//! Constant values for vau cryptographic operations
//!
//! Curve parameters, primitive sizes and the fixed layout of the version 1
//! wire message.

pub mod traditional;
pub mod utils;
pub mod vau;
