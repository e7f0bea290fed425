//! Sources of the backend's static public key

use vau_api::Result;

use crate::certificate::public_key_from_certificate;
use crate::domain::CurvePoint;

/// Supplies the Fachdienst public key for one encryption
///
/// Failures should be reported as [`vau_api::Error::RemoteKeyFetch`]; the
/// channel rewraps any other kind.
pub trait PublicKeyFetcher {
    fn fetch_public_key(&self) -> Result<CurvePoint>;
}

impl<F> PublicKeyFetcher for F
where
    F: Fn() -> Result<CurvePoint>,
{
    fn fetch_public_key(&self) -> Result<CurvePoint> {
        self()
    }
}

/// A pinned key known ahead of time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticKeyFetcher {
    key: CurvePoint,
}

impl StaticKeyFetcher {
    pub fn new(key: CurvePoint) -> Self {
        Self { key }
    }

    /// Pin the key found in a DER certificate
    pub fn from_certificate(der: &[u8]) -> Result<Self> {
        Ok(Self::new(public_key_from_certificate(der)?))
    }
}

impl PublicKeyFetcher for StaticKeyFetcher {
    fn fetch_public_key(&self) -> Result<CurvePoint> {
        Ok(self.key)
    }
}

#[cfg(feature = "http")]
pub use http::HttpCertificateFetcher;

#[cfg(feature = "http")]
mod http {
    use std::io::Read;

    use reqwest::blocking::Client;
    use tracing::{trace, warn};
    use url::Url;
    use vau_api::{Error, Result, ResultExt};
    use vau_params::vau::VAU_CERTIFICATE_MAX_SIZE;

    use super::PublicKeyFetcher;
    use crate::certificate::public_key_from_certificate;
    use crate::config::VauConfig;
    use crate::domain::CurvePoint;

    /// Downloads `<fachdienst_url>/VAUCertificate` on every fetch
    #[derive(Debug, Clone)]
    pub struct HttpCertificateFetcher {
        client: Client,
        url: Url,
    }

    impl HttpCertificateFetcher {
        pub fn new(config: &VauConfig) -> Result<Self> {
            let client = Client::builder()
                .user_agent(config.user_agent.clone())
                .timeout(config.fetch_timeout)
                .build()
                .map_err(|e| Error::RemoteKeyFetch {
                    context: "HttpCertificateFetcher::new",
                    message: e.to_string(),
                })?;
            Ok(Self {
                client,
                url: config.certificate_url()?,
            })
        }

        pub fn url(&self) -> &Url {
            &self.url
        }

        /// Raw DER bytes of the certificate
        pub fn fetch_certificate(&self) -> Result<Vec<u8>> {
            trace!(url = %self.url, "fetching VAU certificate");

            let fail = |message: String| {
                warn!(url = %self.url, %message, "VAU certificate fetch failed");
                Error::RemoteKeyFetch {
                    context: "HttpCertificateFetcher",
                    message,
                }
            };

            let response = self
                .client
                .get(self.url.clone())
                .send()
                .map_err(|e| fail(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(fail(format!("HTTP status {}", status)));
            }

            if let Some(len) = response.content_length() {
                if len > VAU_CERTIFICATE_MAX_SIZE as u64 {
                    return Err(fail(format!(
                        "certificate of {len} bytes exceeds {VAU_CERTIFICATE_MAX_SIZE}"
                    )));
                }
            }

            // the declared length is optional, so cap the read as well
            let mut body = Vec::new();
            response
                .take(VAU_CERTIFICATE_MAX_SIZE as u64 + 1)
                .read_to_end(&mut body)
                .map_err(|e| fail(e.to_string()))?;
            if body.len() > VAU_CERTIFICATE_MAX_SIZE {
                return Err(fail(format!(
                    "certificate body exceeds {VAU_CERTIFICATE_MAX_SIZE} bytes"
                )));
            }
            trace!(len = body.len(), "VAU certificate received");
            Ok(body)
        }
    }

    impl PublicKeyFetcher for HttpCertificateFetcher {
        fn fetch_public_key(&self) -> Result<CurvePoint> {
            let der = self.fetch_certificate()?;
            public_key_from_certificate(&der).with_context("HttpCertificateFetcher")
        }
    }
}
