use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("case {id}: missing input '{field}'")]
    MissingField { id: u64, field: &'static str },

    #[error("case {id}: input '{field}' is not hex: {source}")]
    Hex {
        id: u64,
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    #[error("case {id}: {message}")]
    Mismatch { id: u64, message: String },

    #[error("case {id}: unexpected failure: {error}")]
    Unexpected { id: u64, error: vau_api::Error },
}
