//! Error handling for the vau channel

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, ErrorKind, Result};

impl std::error::Error for Error {}
