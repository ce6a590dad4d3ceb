//! HTTP client configuration.

use std::time::Duration;

use mahasiswa_core::BaseUrl;

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("mahasiswa/", env!("CARGO_PKG_VERSION"));

/// Settings for building a [`RestClient`](crate::RestClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL; endpoints are resolved relative to it.
    pub base_url: BaseUrl,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration with defaults for everything except the base URL.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
