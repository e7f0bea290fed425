//! Data model of a known-answer suite

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// `private`, `peer` (SEC1) → `shared`
    Ecdh,
    /// `ikm`, optional `salt`, `info` → `okm`
    Hkdf,
    /// `key`, `nonce`, optional `aad`, `pt` → `ct` (ciphertext and tag)
    AesGcm,
    /// `ephemeral`, `backend`, `nonce`, `pt` → `wire`
    VauRequest,
    /// `key`, `blob` → `pt`
    VauResponse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedResult {
    #[default]
    Valid,
    Invalid,
}

#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub id: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expected: ExpectedResult,
    /// `ErrorKind` variant name for invalid cases
    #[serde(default)]
    pub error_kind: Option<String>,
    #[serde(flatten)]
    pub inputs: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct TestSuite {
    pub suite: String,
    pub algorithm: Algorithm,
    #[serde(rename = "case")]
    pub cases: Vec<TestCase>,
}
