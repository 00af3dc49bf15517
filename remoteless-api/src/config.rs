//! Configuration for [`crate::RemotelessClient`]

use std::time::Duration;

use url::Url;

use crate::{ApiError, Result};

/// Where the daemon listens unless configured otherwise
pub const DEFAULT_BASE_URL: &str = "http://localhost:14387";

/// Country code sent with search queries unless configured otherwise
pub const DEFAULT_LOCALE: &str = "NO";

/// Configuration for the Remoteless client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the daemon's HTTP interface
    /// Default: `http://localhost:14387`
    pub base_url: String,

    /// Country code passed as `cc` on search requests
    /// Default: "NO"
    pub locale: String,

    /// Connect timeout for every request
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Read timeout for every request
    /// Default: 10 seconds
    pub read_timeout: Duration,

    /// Keep the record still open at the end of a playlist page or search body
    /// Default: false (the daemon's reference client drops it)
    pub flush_trailing_record: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            connect_timeout: text_client::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: text_client::DEFAULT_READ_TIMEOUT,
            flush_trailing_record: false,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, overridden by `REMOTELESS_URL` and `REMOTELESS_LOCALE` when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("REMOTELESS_URL").filter(|v| !v.is_empty()) {
            config.base_url = url;
        }
        if let Some(locale) = lookup("REMOTELESS_LOCALE").filter(|v| !v.is_empty()) {
            config.locale = locale;
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_flush_trailing_record(mut self, flush: bool) -> Self {
        self.flush_trailing_record = flush;
        self
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ApiError::InvalidConfig(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::InvalidConfig(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::InvalidConfig(
                "Base URL must not carry a query or fragment".to_string(),
            ));
        }

        if self.locale.is_empty() {
            return Err(ApiError::InvalidConfig("Locale must not be empty".to_string()));
        }

        if self.connect_timeout == Duration::ZERO || self.read_timeout == Duration::ZERO {
            return Err(ApiError::InvalidConfig(
                "Timeouts must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Base URL without trailing slashes, ready for path concatenation
    pub(crate) fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }
}
