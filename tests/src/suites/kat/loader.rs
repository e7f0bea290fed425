//! Reads suites from the crate's vector directory

use std::fs;
use std::path::{Path, PathBuf};

use super::error::KatError;
use super::model::TestSuite;

fn kat_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("kat")
}

pub fn load_suite(path: &Path) -> Result<TestSuite, KatError> {
    let text = fs::read_to_string(path).map_err(|source| KatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| KatError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `src/vectors/kat/<name>.toml`
pub fn load_suite_by_name(name: &str) -> Result<TestSuite, KatError> {
    load_suite(&kat_dir().join(format!("{name}.toml")))
}

/// Every suite in the vector directory, sorted by file name
pub fn load_all() -> Result<Vec<TestSuite>, KatError> {
    let dir = kat_dir();
    let entries = fs::read_dir(&dir).map_err(|source| KatError::Io {
        path: dir.clone(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| KatError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(|p| load_suite(p)).collect()
}
