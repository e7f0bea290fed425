//! Executes suites against the vau crates

use vau_algorithms::types::Nonce;
use vau_api::Result as VauResult;
use vau_channel::aead::AeadCipher;
use vau_channel::agreement::shared_secret;
use vau_channel::derivation::hkdf_sha256;
use vau_channel::{CryptoBackend, CurvePoint, KeyPair, SymmetricKey, VauChannel};

use super::error::KatError;
use super::model::{Algorithm, ExpectedResult, TestCase, TestSuite};

impl TestCase {
    fn input(&self, field: &'static str) -> Result<Vec<u8>, KatError> {
        let value = self
            .inputs
            .get(field)
            .ok_or(KatError::MissingField { id: self.id, field })?;
        hex::decode(value).map_err(|source| KatError::Hex {
            id: self.id,
            field,
            source,
        })
    }

    fn optional_input(&self, field: &'static str) -> Result<Option<Vec<u8>>, KatError> {
        match self.inputs.contains_key(field) {
            true => self.input(field).map(Some),
            false => Ok(None),
        }
    }

    fn nonce(&self) -> Result<Nonce<12>, KatError> {
        let bytes = self.input("nonce")?;
        Nonce::from_slice(&bytes).map_err(|e| KatError::Unexpected {
            id: self.id,
            error: e.into(),
        })
    }
}

/// Run every case, returning how many passed
pub fn run_suite(suite: &TestSuite) -> Result<usize, KatError> {
    let backend = CryptoBackend::new().map_err(|error| KatError::Unexpected { id: 0, error })?;

    for case in &suite.cases {
        let outcome = match suite.algorithm {
            Algorithm::Ecdh => ecdh(case)?,
            Algorithm::Hkdf => hkdf(case)?,
            Algorithm::AesGcm => aes_gcm(case)?,
            Algorithm::VauRequest => vau_request(case, &backend)?,
            Algorithm::VauResponse => vau_response(case)?,
        };
        check(case, outcome)?;
    }
    Ok(suite.cases.len())
}

/// Each case runner returns the produced bytes and the expected ones
type Outcome = VauResult<(Vec<u8>, Vec<u8>)>;

fn check(case: &TestCase, outcome: Outcome) -> Result<(), KatError> {
    match (case.expected, outcome) {
        (ExpectedResult::Valid, Ok((got, want))) if got == want => Ok(()),
        (ExpectedResult::Valid, Ok((got, want))) => Err(KatError::Mismatch {
            id: case.id,
            message: format!("got {}, want {}", hex::encode(got), hex::encode(want)),
        }),
        (ExpectedResult::Valid, Err(error)) => Err(KatError::Unexpected { id: case.id, error }),
        (ExpectedResult::Invalid, Ok(_)) => Err(KatError::Mismatch {
            id: case.id,
            message: "expected failure, operation succeeded".into(),
        }),
        (ExpectedResult::Invalid, Err(error)) => {
            let kind = format!("{:?}", error.kind());
            match &case.error_kind {
                Some(want) if *want != kind => Err(KatError::Mismatch {
                    id: case.id,
                    message: format!("failed with {kind}, want {want}"),
                }),
                _ => Ok(()),
            }
        }
    }
}

fn ecdh(case: &TestCase) -> Result<Outcome, KatError> {
    let private = case.input("private")?;
    let peer = case.input("peer")?;
    let want = case.optional_input("shared")?.unwrap_or_default();

    fn agree(private: &[u8], peer: &[u8]) -> VauResult<Vec<u8>> {
        let keypair = KeyPair::from_private_bytes(private)?;
        let peer = CurvePoint::from_sec1(peer)?;
        Ok(shared_secret(&keypair, &peer)?.as_bytes().to_vec())
    }

    Ok(agree(&private, &peer).map(|got| (got, want)))
}

fn hkdf(case: &TestCase) -> Result<Outcome, KatError> {
    let ikm = case.input("ikm")?;
    let salt = case.optional_input("salt")?;
    let info = case.input("info")?;
    let okm = case.input("okm")?;

    Ok(hkdf_sha256(&ikm, salt.as_deref(), &info, okm.len()).map(|out| (out.to_vec(), okm)))
}

fn aes_gcm(case: &TestCase) -> Result<Outcome, KatError> {
    let key = case.input("key")?;
    let nonce = case.nonce()?;
    let aad = case.optional_input("aad")?;
    let pt = case.input("pt")?;
    let ct = case.input("ct")?;

    let cipher = match SymmetricKey::from_slice(&key).and_then(|k| AeadCipher::new(&k)) {
        Ok(cipher) => cipher,
        Err(e) => return Ok(Err(e)),
    };

    let outcome = match case.expected {
        ExpectedResult::Valid => cipher
            .encrypt(&nonce, &pt, aad.as_deref())
            .and_then(|sealed| {
                let opened = cipher.decrypt(&nonce, aad.as_deref(), &sealed)?;
                Ok(if opened == pt { (sealed, ct) } else { (opened, pt) })
            }),
        ExpectedResult::Invalid => cipher
            .decrypt(&nonce, aad.as_deref(), &ct)
            .map(|opened| (opened, pt)),
    };
    Ok(outcome)
}

fn vau_request(case: &TestCase, backend: &CryptoBackend) -> Result<Outcome, KatError> {
    let backend_private = case.input("backend")?;
    let pt = case.input("pt")?;
    let wire = case.input("wire")?;

    let backend_key = match KeyPair::from_private_bytes(&backend_private) {
        Ok(key) => key,
        Err(e) => return Ok(Err(e)),
    };

    if case.expected == ExpectedResult::Invalid {
        return Ok(VauChannel::decrypt_as_backend(&backend_key, &wire).map(|opened| (opened, pt)));
    }

    let ephemeral = case.input("ephemeral")?;
    let nonce = case.nonce()?;
    let channel = VauChannel::new(backend);

    let seal = || -> Outcome {
        let ephemeral = KeyPair::from_private_bytes(&ephemeral)?;
        let sealed = channel
            .encrypt_with(&pt, &ephemeral, backend_key.public(), &nonce)?
            .encode();

        let opened = VauChannel::decrypt_as_backend(&backend_key, &sealed)?;
        Ok(if opened == pt { (sealed, wire.clone()) } else { (opened, pt.clone()) })
    };
    Ok(seal())
}

fn vau_response(case: &TestCase) -> Result<Outcome, KatError> {
    let key = case.input("key")?;
    let blob = case.optional_input("blob")?.unwrap_or_default();
    let pt = case.optional_input("pt")?.unwrap_or_default();

    Ok(VauChannel::decrypt_with_session_key(&key, &blob).map(|opened| (opened, pt)))
}
