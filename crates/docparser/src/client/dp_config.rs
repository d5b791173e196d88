//! Configuration for the Docparser HTTP client.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default base URL of the Docparser API.
pub const DEFAULT_BASE_URL: &str = "https://api.docparser.com/v1/";

/// Default request timeout: 10 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Docparser HTTP client.
///
/// Holds the API token, which is sent as the `api_key` header on every
/// request, together with the base URL and request timeout.
///
/// # Examples
///
/// ```rust,ignore
/// use docparser::DpConfig;
/// use std::time::Duration;
///
/// let config = DpConfig::new("secret-token")
///     .with_base_url("https://api.docparser.com/v1/")
///     .with_timeout(Duration::from_secs(20));
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct DpConfig {
    /// API token sent in the `api_key` header
    #[cfg_attr(
        feature = "config",
        arg(long = "docparser-api-key", env = "DOCPARSER_API_KEY")
    )]
    pub api_key: String,

    /// Base URL of the Docparser API
    #[cfg_attr(
        feature = "config",
        arg(
            long = "docparser-base-url",
            env = "DOCPARSER_BASE_URL",
            default_value = DEFAULT_BASE_URL
        )
    )]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout, given in whole seconds on the command line
    #[cfg_attr(
        feature = "config",
        arg(
            long = "docparser-timeout",
            env = "DOCPARSER_TIMEOUT",
            default_value = "10",
            value_parser = parse_timeout_secs
        )
    )]
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// User agent sent with every request
    #[cfg_attr(feature = "config", arg(skip = default_user_agent()))]
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

#[cfg(feature = "config")]
fn parse_timeout_secs(value: &str) -> std::result::Result<Duration, std::num::ParseIntError> {
    value.parse().map(Duration::from_secs)
}

fn default_user_agent() -> String {
    format!("docparser-rs/{}", env!("CARGO_PKG_VERSION"))
}

impl DpConfig {
    /// Create a new configuration with the given API token and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the request timeout, falling back to the default when zero.
    pub fn timeout(&self) -> Duration {
        if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        }
    }

    /// Parses the base URL.
    ///
    /// A trailing slash is appended when missing so endpoint paths nest under
    /// the configured prefix.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            Error::config(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Base URL '{}' cannot carry a path",
                self.base_url
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(url)
    }
}

impl fmt::Debug for DpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DpConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
