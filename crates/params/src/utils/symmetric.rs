//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of AES-128 rounds
pub const AES128_ROUNDS: usize = 10;

/// GCM nonce size in bytes (96-bit IV)
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;
