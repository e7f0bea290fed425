//! Error type definitions for channel operations

/// Primary error type for channel operations
///
/// Every failure a caller can observe maps to exactly one variant, so a
/// transport problem while fetching the backend key is never confused with a
/// tampered ciphertext or a wrong key length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The curve parameters could not be loaded or failed validation
    CurveUnavailable {
        context: &'static str,
        message: String,
    },

    /// The random source failed while generating key material
    KeyGeneration {
        context: &'static str,
        message: String,
    },

    /// A public point is not on the curve or is the point at infinity
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// The backend public key could not be obtained
    RemoteKeyFetch {
        context: &'static str,
        message: String,
    },

    /// Shared secret handling or HKDF failed
    Derivation {
        context: &'static str,
        message: String,
    },

    /// Tag verification failed
    Authentication {
        context: &'static str,
    },

    /// Wire message is truncated or carries an unknown version
    Framing {
        context: &'static str,
        message: String,
    },

    /// Symmetric key of the wrong length
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Nothing to decrypt
    EmptyMessage {
        context: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Fieldless discriminant of [`Error`], convenient for matching in callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CurveUnavailable,
    KeyGeneration,
    InvalidPoint,
    RemoteKeyFetch,
    Derivation,
    Authentication,
    Framing,
    InvalidKeyLength,
    EmptyMessage,
    InvalidLength,
    InvalidParameter,
    Other,
}

/// Result type for channel operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CurveUnavailable { .. } => ErrorKind::CurveUnavailable,
            Self::KeyGeneration { .. } => ErrorKind::KeyGeneration,
            Self::InvalidPoint { .. } => ErrorKind::InvalidPoint,
            Self::RemoteKeyFetch { .. } => ErrorKind::RemoteKeyFetch,
            Self::Derivation { .. } => ErrorKind::Derivation,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Framing { .. } => ErrorKind::Framing,
            Self::InvalidKeyLength { .. } => ErrorKind::InvalidKeyLength,
            Self::EmptyMessage { .. } => ErrorKind::EmptyMessage,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// The static context recorded when the error was raised
    pub fn context(&self) -> &'static str {
        match self {
            Self::CurveUnavailable { context, .. }
            | Self::KeyGeneration { context, .. }
            | Self::InvalidPoint { context, .. }
            | Self::RemoteKeyFetch { context, .. }
            | Self::Derivation { context, .. }
            | Self::Authentication { context }
            | Self::Framing { context, .. }
            | Self::InvalidKeyLength { context, .. }
            | Self::EmptyMessage { context }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::CurveUnavailable { message, .. } => Self::CurveUnavailable { context, message },
            Self::KeyGeneration { message, .. } => Self::KeyGeneration { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::RemoteKeyFetch { message, .. } => Self::RemoteKeyFetch { context, message },
            Self::Derivation { message, .. } => Self::Derivation { context, message },
            Self::Authentication { .. } => Self::Authentication { context },
            Self::Framing { message, .. } => Self::Framing { context, message },
            Self::InvalidKeyLength { expected, actual, .. } => Self::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            Self::EmptyMessage { .. } => Self::EmptyMessage { context },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Attach a message to an existing error
    ///
    /// Variants without a message slot are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::CurveUnavailable { context, .. } => Self::CurveUnavailable { context, message },
            Self::KeyGeneration { context, .. } => Self::KeyGeneration { context, message },
            Self::InvalidPoint { context, .. } => Self::InvalidPoint { context, message },
            Self::RemoteKeyFetch { context, .. } => Self::RemoteKeyFetch { context, message },
            Self::Derivation { context, .. } => Self::Derivation { context, message },
            Self::Framing { context, .. } => Self::Framing { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
            other => other,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CurveUnavailable { context, message } => {
                write!(f, "Curve unavailable: {}: {}", context, message)
            }
            Self::KeyGeneration { context, message } => {
                write!(f, "Key generation failed: {}: {}", context, message)
            }
            Self::InvalidPoint { context, message } => {
                write!(f, "Invalid point: {}: {}", context, message)
            }
            Self::RemoteKeyFetch { context, message } => {
                write!(f, "Remote key fetch failed: {}: {}", context, message)
            }
            Self::Derivation { context, message } => {
                write!(f, "Key derivation failed: {}: {}", context, message)
            }
            Self::Authentication { context } => {
                write!(f, "Authentication failed: {}", context)
            }
            Self::Framing { context, message } => {
                write!(f, "Framing error: {}: {}", context, message)
            }
            Self::InvalidKeyLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid key length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::EmptyMessage { context } => {
                write!(f, "Empty message: {}", context)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
