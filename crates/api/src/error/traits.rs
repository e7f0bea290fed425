use super::types::{Error, Result};

/// Context helpers for results whose error converts into [`Error`]
///
/// ```
/// use vau_api::{Error, ResultExt};
///
/// let raw: Result<(), Error> = Err(Error::Authentication { context: "gcm" });
/// let err = raw.with_context("decrypt_with_session_key").unwrap_err();
/// assert_eq!(err.context(), "decrypt_with_session_key");
/// ```
pub trait ResultExt<T> {
    /// Convert the error and name the operation that failed
    fn with_context(self, context: &'static str) -> Result<T>;

    /// Convert the error and replace its message
    fn with_message(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for core::result::Result<T, E> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(context))
    }

    fn with_message(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().with_message(message))
    }
}
