//! Client configuration

use std::time::Duration;

/// Default polling interval for the live order board
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Client configuration for the hosted backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "https://zipp-backend.vercel.app/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Live order board polling interval
    pub poll_interval: Duration,
}

impl ClientConfig {
    /// Create a new configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the board polling interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("https://zipp-backend.vercel.app/api")
    }
}
