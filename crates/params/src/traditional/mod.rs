//! Constants for elliptic curve algorithms

pub mod brainpool;
pub mod ecdh;
