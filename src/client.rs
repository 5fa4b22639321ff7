use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Protocol version sent with every request
pub const API_VERSION: &str = "2.0.1";

/// Create the default HTTP client for API requests.
///
/// Idle connections are not pooled, so every call opens its own connection.
pub fn create_http_client() -> Client {
    ClientBuilder::new()
        .pool_max_idle_per_host(0)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
}

/// Configuration for the bit.ly API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL scheme (http or https)
    pub scheme: String,
    /// API host
    pub host: String,
    /// Protocol version tag sent as the `version` parameter
    pub version: String,
    /// Log requests at info level instead of debug
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scheme: "http".to_string(),
            host: "api.bit.ly".to_string(),
            version: API_VERSION.to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with the given scheme and host
    pub fn new(scheme: String, host: String) -> Self {
        Config {
            scheme,
            host,
            ..Config::default()
        }
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Override the protocol version tag
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get the base URL for API requests
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }
}
