//! Channel configuration
//!
//! ```
//! use std::time::Duration;
//! use vau_channel::config::VauConfig;
//!
//! let config = VauConfig::new("https://erp.example.test/erp")
//!     .unwrap()
//!     .with_fetch_timeout(Duration::from_secs(3));
//! assert_eq!(
//!     config.certificate_url().unwrap().as_str(),
//!     "https://erp.example.test/erp/VAUCertificate"
//! );
//! ```

use std::time::Duration;

use url::Url;
use vau_api::{Error, Result};
use vau_params::vau::VAU_CERTIFICATE_PATH;

/// Default timeout for the certificate download
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for talking to one Fachdienst (the e-prescription backend)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VauConfig {
    /// Base URL of the Fachdienst
    pub fachdienst_url: Url,
    /// User agent sent with every request
    pub user_agent: String,
    /// Upper bound for the certificate download
    pub fetch_timeout: Duration,
}

pub fn default_user_agent() -> String {
    format!("vau-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl VauConfig {
    /// Configuration with default user agent and timeout
    ///
    /// The URL must be absolute http or https.
    pub fn new(fachdienst_url: &str) -> Result<Self> {
        let url = Url::parse(fachdienst_url).map_err(|e| Error::InvalidParameter {
            context: "VauConfig::fachdienst_url",
            message: e.to_string(),
        })?;
        Self::from_url(url)
    }

    pub fn from_url(fachdienst_url: Url) -> Result<Self> {
        if !matches!(fachdienst_url.scheme(), "http" | "https") || fachdienst_url.cannot_be_a_base()
        {
            return Err(Error::InvalidParameter {
                context: "VauConfig::fachdienst_url",
                message: format!("unsupported base URL {}", fachdienst_url),
            });
        }
        Ok(Self {
            fachdienst_url,
            user_agent: default_user_agent(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// `<fachdienst_url>/VAUCertificate`
    ///
    /// The certificate path is appended to the base path, so a base of
    /// `https://host/erp/` and `https://host/erp` give the same result.
    pub fn certificate_url(&self) -> Result<Url> {
        let mut url = self.fachdienst_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| Error::InvalidParameter {
                context: "VauConfig::certificate_url",
                message: "base URL cannot carry a path".into(),
            })?
            .pop_if_empty()
            .push(VAU_CERTIFICATE_PATH.trim_start_matches('/'));
        Ok(url)
    }

    /// Parse a TOML document
    ///
    /// ```toml
    /// fachdienst_url = "https://erp.example.test"
    /// user_agent = "my-client/1.0"   # optional
    /// fetch_timeout_secs = 5         # optional
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> Result<Self> {
        #[derive(serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        struct ConfigFile {
            fachdienst_url: String,
            user_agent: Option<String>,
            fetch_timeout_secs: Option<u64>,
        }

        let file: ConfigFile = toml::from_str(input).map_err(|e| Error::InvalidParameter {
            context: "VauConfig::from_toml_str",
            message: e.to_string(),
        })?;

        let mut config = Self::new(&file.fachdienst_url)?;
        if let Some(user_agent) = file.user_agent {
            config.user_agent = user_agent;
        }
        if let Some(secs) = file.fetch_timeout_secs {
            config.fetch_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
