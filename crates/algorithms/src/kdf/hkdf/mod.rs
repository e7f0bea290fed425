//! HKDF (RFC 5869) over any [`HashFunction`]

use std::marker::PhantomData;

use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use crate::kdf::{KdfOperation, KeyDerivationFunction};
use crate::mac::hmac::Hmac;

/// Output length of a builder that never called `with_output_length`
const DEFAULT_OUTPUT_SIZE: usize = 32;

/// HKDF instantiated with hash `H`
#[derive(Clone)]
pub struct Hkdf<H: HashFunction>(PhantomData<H>);

impl<H: HashFunction> Hkdf<H> {
    /// PRK = HMAC(salt, IKM)
    ///
    /// No salt and an empty salt both key HMAC with a block of zeros, which
    /// is the RFC default of HashLen zero bytes.
    pub fn extract(salt: Option<&[u8]>, ikm: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        Hmac::<H>::mac(salt.unwrap_or_default(), ikm).map(Zeroizing::new)
    }

    /// T(i) = HMAC(PRK, T(i-1) || info || i), concatenated and truncated
    pub fn expand(prk: &[u8], info: Option<&[u8]>, length: usize) -> Result<Zeroizing<Vec<u8>>> {
        let hash_len = H::output_size();
        validate::min_length("HKDF PRK", prk.len(), hash_len)?;
        validate::max_length("HKDF output", length, 255 * hash_len)?;

        let info = info.unwrap_or_default();
        let mut okm = Zeroizing::new(Vec::with_capacity(length));
        let mut previous = Zeroizing::new(Vec::new());

        for counter in 1..=255u8 {
            if okm.len() == length {
                break;
            }
            let mut hmac = Hmac::<H>::new(prk)?;
            hmac.update(&previous)?;
            hmac.update(info)?;
            hmac.update(&[counter])?;
            previous = Zeroizing::new(hmac.finalize()?);

            let take = (length - okm.len()).min(hash_len);
            okm.extend_from_slice(&previous[..take]);
        }
        Ok(okm)
    }

    /// Extract then expand
    pub fn derive(
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let prk = Self::extract(salt, ikm)?;
        Self::expand(&prk, info, length)
    }
}

/// Builder state for one HKDF call
pub struct HkdfOperation<'a, H: HashFunction> {
    ikm: Option<&'a [u8]>,
    salt: Option<&'a [u8]>,
    info: Option<&'a [u8]>,
    length: usize,
    _hash: PhantomData<H>,
}

impl<'a, H: HashFunction> KdfOperation<'a> for HkdfOperation<'a, H> {
    fn with_ikm(self, ikm: &'a [u8]) -> Self {
        Self {
            ikm: Some(ikm),
            ..self
        }
    }

    fn with_salt(self, salt: &'a [u8]) -> Self {
        Self {
            salt: Some(salt),
            ..self
        }
    }

    fn with_info(self, info: &'a [u8]) -> Self {
        Self {
            info: Some(info),
            ..self
        }
    }

    fn with_output_length(self, length: usize) -> Self {
        Self { length, ..self }
    }

    fn derive(self) -> Result<Vec<u8>> {
        let ikm = self
            .ikm
            .ok_or_else(|| Error::param("ikm", "input keying material is required"))?;
        let okm = Hkdf::<H>::derive(self.salt, ikm, self.info, self.length)?;
        Ok(okm.to_vec())
    }

    fn derive_array<const N: usize>(self) -> Result<[u8; N]> {
        validate::length("HKDF output", self.length, N)?;
        let okm = Zeroizing::new(self.derive()?);
        let mut out = [0u8; N];
        out.copy_from_slice(&okm);
        Ok(out)
    }
}

impl<H: HashFunction> KeyDerivationFunction for Hkdf<H> {
    type Operation<'a> = HkdfOperation<'a, H> where Self: 'a;

    fn new() -> Self {
        Hkdf(PhantomData)
    }

    fn builder(&self) -> Self::Operation<'_> {
        HkdfOperation {
            ikm: None,
            salt: None,
            info: None,
            length: DEFAULT_OUTPUT_SIZE,
            _hash: PhantomData,
        }
    }
}
