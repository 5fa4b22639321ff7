//! The fetch step, kept behind a trait so the network can be swapped out.

use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::client::create_http_client;
use crate::error::{BitlyError, Result};

/// Performs one blocking GET and returns the response body.
///
/// Any `Fn(&str) -> Result<String>` closure is a transport, which is usually
/// all a test needs.
pub trait Transport: Send + Sync {
    /// Fetch `url` and return the body as a string
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// Default transport backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport using the default HTTP client settings
    pub fn new() -> Self {
        HttpTransport {
            client: create_http_client(),
        }
    }

    /// Create a transport around an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        HttpTransport { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str) -> Result<String> {
        let http_response = self.client.get(url).send()?;
        let status = http_response.status();
        let body = http_response.text()?;
        body_for_status(status, body)
    }
}

/// Pass the body on unless the status failed and the body is not JSON.
///
/// The service reports its own errors inside a JSON body, so only non-JSON
/// bodies on a failed status become HTTP errors.
fn body_for_status(status: StatusCode, body: String) -> Result<String> {
    if (status.is_client_error() || status.is_server_error())
        && serde_json::from_str::<serde_json::Value>(&body).is_err()
    {
        return Err(BitlyError::Http {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
