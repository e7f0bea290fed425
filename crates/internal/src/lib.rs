//! Internal utilities shared by the vau crates

pub mod bytes;
pub mod constant_time;
