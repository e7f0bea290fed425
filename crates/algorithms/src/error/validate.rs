//! Guard clauses shared by the primitives
//!
//! Each helper returns `Ok(())` when the check holds, so call sites read as
//! a list of preconditions followed by `?`.

use super::{Error, Result};

fn ensure(ok: bool, err: impl FnOnce() -> Error) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(err())
    }
}

#[inline]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    ensure(condition, || Error::param(name, reason))
}

/// `actual` must equal `expected`, e.g. a key or nonce size
#[inline]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    ensure(actual == expected, || Error::Length {
        context,
        expected,
        actual,
    })
}

/// At least `min` bytes; used for ciphertexts that must carry a tag
#[inline]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    ensure(actual >= min, || Error::Length {
        context,
        expected: min,
        actual,
    })
}

/// At most `max` bytes, such as HKDF output or a GHASH block
#[inline]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    ensure(actual <= max, || Error::Length {
        context,
        expected: max,
        actual,
    })
}

/// Tag comparison result; `false` becomes [`Error::Authentication`]
#[inline]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    ensure(is_valid, || Error::Authentication { algorithm })
}
