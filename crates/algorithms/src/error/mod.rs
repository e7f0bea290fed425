//! Primitive-level errors
//!
//! Everything here carries only `&'static str` detail so the primitives never
//! allocate on the failure path. Conversion into [`vau_api::Error`] happens at
//! the crate boundary.

use std::fmt;

use vau_api::Error as CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input was rejected, e.g. an off-curve point or out-of-range scalar
    Parameter {
        name: &'static str,
        reason: &'static str,
    },
    Length {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Tag mismatch; no plaintext was produced
    Authentication { algorithm: &'static str },
    /// An operation on valid inputs reached an unusable state
    Processing {
        operation: &'static str,
        details: &'static str,
    },
    Other(&'static str),
}

impl Error {
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => write!(f, "{name}: {reason}"),
            Error::Length {
                context,
                expected,
                actual,
            } => write!(f, "{context}: expected {expected} bytes, got {actual}"),
            Error::Authentication { algorithm } => write!(f, "{algorithm}: tag mismatch"),
            Error::Processing { operation, details } => write!(f, "{operation}: {details}"),
            Error::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Authentication { algorithm } => CoreError::Authentication { context: algorithm },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.into(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "vau-algorithms",
                message: msg.into(),
            },
        }
    }
}

pub mod validate;
