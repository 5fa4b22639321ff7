use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BitlyError, Result};

/// Top-level key some error responses carry instead of a status code
const ERROR_MARKER: &str = "ERROR";

/// ServiceResponse is the JSON envelope returned by every bit.ly endpoint.
///
/// Successful calls carry their payload in `results`. Failed calls set
/// `statusCode` to `"ERROR"` (or carry a top-level `ERROR` key) and explain
/// themselves in `errorMessage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    /// "OK" or "ERROR"; anything else counts as success
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<Value>,

    /// Error message (empty or absent on success)
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<Value>,

    /// Numeric error code; some endpoints send it as a string
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    pub error_code: Option<Value>,

    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,

    /// Any other top-level fields, including the `ERROR` marker
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceResponse {
    /// Decode a response body
    pub fn from_body(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Whether the top level carries the `ERROR` marker
    pub fn has_error_marker(&self) -> bool {
        self.extra.contains_key(ERROR_MARKER)
    }

    /// Whether the service reported a failure
    pub fn is_error(&self) -> bool {
        self.has_error_marker()
            || self.status_code.as_ref().and_then(Value::as_str) == Some("ERROR")
    }

    /// The error message as text, whatever JSON type the service used
    pub fn message(&self) -> Option<String> {
        match self.error_message.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The error code as an integer, whichever way the service encoded it
    pub fn code(&self) -> Option<i64> {
        match self.error_code.as_ref()? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Fail with a service error if the response reports one.
    ///
    /// Must run before any result extraction so a failed call never surfaces
    /// as a missing field.
    pub fn check_for_error(&self) -> Result<()> {
        if !self.is_error() {
            return Ok(());
        }
        let message = self
            .message()
            .unwrap_or_else(|| "unknown error".to_string());
        Err(BitlyError::service(message, self.code()))
    }

    /// The `results` payload
    pub fn results(&self) -> Result<&Value> {
        self.results
            .as_ref()
            .ok_or_else(|| BitlyError::MissingField("results".to_string()))
    }

    /// The per-item entry stored under `key` in `results`
    pub fn entry(&self, key: &str) -> Result<&Value> {
        self.results()?
            .as_object()
            .and_then(|map| map.get(key))
            .ok_or_else(|| BitlyError::MissingField(format!("results[{:?}]", key)))
    }

    /// Deserialize the entry stored under `key` into `T`
    pub fn entry_as<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let entry = self.entry(key)?;
        serde_json::from_value(entry.clone()).map_err(|e| e.into())
    }

    /// Deserialize the whole `results` payload into `T`
    pub fn results_as<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let results = self.results()?;
        serde_json::from_value(results.clone()).map_err(|e| e.into())
    }
}

/// Per-URL entry of a `shorten` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenEntry {
    #[serde(default)]
    pub short_keyword_url: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub user_hash: Option<String>,
}

impl ShortenEntry {
    /// The keyword (vanity) URL when set, otherwise the plain short URL
    pub fn preferred_url(&self) -> Option<&str> {
        match self.short_keyword_url.as_deref() {
            Some(keyword) if !keyword.is_empty() => Some(keyword),
            _ => self.short_url.as_deref(),
        }
    }
}

/// Per-hash entry of an `expand` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandEntry {
    #[serde(default)]
    pub long_url: Option<String>,
}
