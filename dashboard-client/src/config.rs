//! Client configuration

use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default path prefix of the analytics endpoints
pub const DEFAULT_ANALYTICS_PREFIX: &str = "api/analytics";

/// Client configuration for connecting to the dashboard service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token sent with every request
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Path prefix prepended to every analytics endpoint
    pub analytics_prefix: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            analytics_prefix: DEFAULT_ANALYTICS_PREFIX.to_string(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the analytics path prefix
    pub fn with_analytics_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.analytics_prefix = prefix.into();
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Create a data client from this configuration
    pub fn build_data_client(&self) -> crate::ClientResult<crate::DataClient> {
        crate::DataClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
