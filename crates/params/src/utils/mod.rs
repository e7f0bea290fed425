//! Sizes of the symmetric primitives

pub mod hash;
pub mod symmetric;
