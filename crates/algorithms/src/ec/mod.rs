//! Elliptic curve primitives

pub mod bp256;
