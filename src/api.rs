use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Instant;
use url::Url;

use crate::client::Config;
use crate::credentials::Credentials;
use crate::error::{BitlyError, Result};
use crate::response::{ExpandEntry, ServiceResponse, ShortenEntry};
use crate::stats::Stats;
use crate::transport::{HttpTransport, Transport};
use crate::verb::Verb;

/// Client for the bit.ly API.
///
/// Every operation builds a fresh request URL, performs one blocking fetch
/// through the configured [`Transport`], and checks the decoded envelope
/// for a service error before extracting anything from it.
#[derive(Clone)]
pub struct Api {
    credentials: Credentials,
    config: Config,
    transport: Arc<dyn Transport>,
}

impl Api {
    /// Create a client for the given account using the default HTTP transport
    pub fn new(login: impl Into<String>, api_key: impl Into<String>) -> Self {
        Api::from_parts(
            Credentials::new(login, api_key),
            Config::default(),
            HttpTransport::new(),
        )
    }

    /// Create a client from explicit credentials, configuration and transport
    pub fn from_parts<T>(credentials: Credentials, config: Config, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Api {
            credentials,
            config,
            transport: Arc::new(transport),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replace the transport used to fetch URLs
    pub fn with_transport<T>(mut self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.transport = Arc::new(transport);
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Get the credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Given a long URL, return a shorter one.
    ///
    /// A URL without an `http` prefix is sent as `http://<url>`. The keyword
    /// URL is returned when the account has one for this link.
    pub fn shorten(&self, long_url: &str) -> Result<String> {
        let long_url = normalize_long_url(long_url);
        let response = self.call(Verb::Shorten, &long_url)?;

        let entry: ShortenEntry = response.entry_as(&long_url)?;
        entry
            .preferred_url()
            .map(|s| s.to_string())
            .ok_or_else(|| BitlyError::MissingField(format!("results[{:?}].shortUrl", long_url)))
    }

    /// Given a bit.ly URL or hash, return the long source URL
    pub fn expand(&self, short_url: &str) -> Result<String> {
        let response = self.call(Verb::Expand, short_url)?;

        let key = trailing_segment(short_url);
        let entry: ExpandEntry = response.entry_as(key)?;
        entry
            .long_url
            .ok_or_else(|| BitlyError::MissingField(format!("results[{:?}].longUrl", key)))
    }

    /// Given a bit.ly URL or hash, return everything the service knows about
    /// the page, unmodified
    pub fn info(&self, short_url: &str) -> Result<Map<String, Value>> {
        let response = self.call(Verb::Info, short_url)?;
        response.entry_as(trailing_segment(short_url))
    }

    /// Given a bit.ly URL or hash, return its click counts
    pub fn stats(&self, short_url: &str) -> Result<Stats> {
        let response = self.call(Verb::Stats, short_url)?;
        response.results_as()
    }

    /// Get the list of bit.ly API error codes
    pub fn errors(&self) -> Result<Value> {
        let response = self.call(Verb::Errors, "")?;
        response.results().cloned()
    }

    /// Build the request URL for `verb`.
    ///
    /// `arg` is only sent when the verb takes an argument.
    pub fn build_url(&self, verb: Verb, arg: &str) -> Result<String> {
        let mut url = Url::parse(&format!("{}/{}", self.config.base_url(), verb))?;

        let mut params: Vec<(&'static str, String)> = vec![
            ("version", self.config.version.clone()),
            ("format", "json".to_string()),
        ];
        self.credentials.apply_params(&mut params);
        if let Some(name) = verb.param() {
            params.push((name, arg.to_string()));
        }

        url.query_pairs_mut().extend_pairs(params);
        Ok(url.to_string())
    }

    /// Fetch, decode and error-check one request
    fn call(&self, verb: Verb, arg: &str) -> Result<ServiceResponse> {
        let url = self.build_url(verb, arg)?;

        let start = Instant::now();
        let body = self.transport.fetch(&url)?;
        let duration = start.elapsed();

        let logged_url = self.credentials.redact(&url);
        if self.config.debug {
            tracing::info!(%verb, url = %logged_url, ?duration, "bitly request");
        } else {
            tracing::debug!(%verb, url = %logged_url, ?duration, "bitly request");
        }

        let response = ServiceResponse::from_body(&body)?;
        if let Err(err) = response.check_for_error() {
            tracing::warn!(%verb, error = %err, code = ?err.error_code(), "bitly service error");
            return Err(err);
        }

        Ok(response)
    }
}

impl std::fmt::Debug for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Api")
            .field("credentials", &self.credentials)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Prefix `http://` unless the URL already starts with `http`
fn normalize_long_url(long_url: &str) -> String {
    if long_url.starts_with("http") {
        long_url.to_string()
    } else {
        format!("http://{}", long_url)
    }
}

/// Last `/`-separated component of a short URL or hash
fn trailing_segment(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap_or(short_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> Api {
        Api::from_parts(
            Credentials::new("someone", "R_key"),
            Config::default(),
            |_: &str| -> Result<String> { Err(BitlyError::Other("no network".to_string())) },
        )
    }

    #[test]
    fn test_normalize_long_url() {
        assert_eq!(normalize_long_url("www.google.com"), "http://www.google.com");
        assert_eq!(normalize_long_url("http://x.com"), "http://x.com");
        assert_eq!(normalize_long_url("https://x.com"), "https://x.com");
        assert_eq!(normalize_long_url("httpfoo"), "httpfoo");
        assert_eq!(normalize_long_url(""), "http://");
    }

    #[test]
    fn test_trailing_segment() {
        assert_eq!(trailing_segment("http://bit.ly/abc123"), "abc123");
        assert_eq!(trailing_segment("abc123"), "abc123");
        assert_eq!(trailing_segment("http://bit.ly/"), "");
    }

    #[test]
    fn test_build_url_with_argument() {
        let url = api().build_url(Verb::Shorten, "http://x.com/a b").unwrap();
        assert_eq!(
            url,
            "http://api.bit.ly/shorten?version=2.0.1&format=json&login=someone&apiKey=R_key\
             &longUrl=http%3A%2F%2Fx.com%2Fa+b"
        );
    }

    #[test]
    fn test_build_url_without_argument() {
        let url = api().build_url(Verb::Errors, "ignored").unwrap();
        assert_eq!(
            url,
            "http://api.bit.ly/errors?version=2.0.1&format=json&login=someone&apiKey=R_key"
        );
    }

    #[test]
    fn test_build_url_custom_config() {
        let api = api().with_config(
            Config::new("https".to_string(), "localhost:8080".to_string()).with_version("3"),
        );
        let url = api.build_url(Verb::Stats, "abc").unwrap();
        assert!(url.starts_with("https://localhost:8080/stats?version=3&"));
        assert!(url.ends_with("&shortUrl=abc"));
    }

    #[test]
    fn test_transport_error_propagates() {
        let err = api().expand("abc").unwrap_err();
        assert!(matches!(err, BitlyError::Other(_)));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let debug = format!("{:?}", api());
        assert!(!debug.contains("R_key"));
    }
}
