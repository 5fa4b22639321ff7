use thiserror::Error;

/// Main error type for bit.ly API operations
#[derive(Debug, Error)]
pub enum BitlyError {
    /// Error reported by the service itself (`statusCode == "ERROR"`).
    /// Displays as the service message, unchanged.
    #[error("{message}")]
    Service { message: String, code: Option<i64> },

    /// A successful response did not contain the expected entry
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Non-success HTTP status with a body that is not a service envelope
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl BitlyError {
    /// Create a service error from the message and code carried by a response
    pub fn service(message: impl Into<String>, code: Option<i64>) -> Self {
        BitlyError::Service {
            message: message.into(),
            code,
        }
    }

    /// The human-readable message of this error.
    ///
    /// For service errors this is exactly the `errorMessage` the service sent.
    pub fn message(&self) -> String {
        match self {
            BitlyError::Service { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if this error was reported by the service
    pub fn is_service_error(&self) -> bool {
        matches!(self, BitlyError::Service { .. })
    }

    /// Get the service error code, if the service supplied one
    pub fn error_code(&self) -> Option<i64> {
        match self {
            BitlyError::Service { code, .. } => *code,
            _ => None,
        }
    }
}

/// Result type for bit.ly operations
pub type Result<T> = std::result::Result<T, BitlyError>;
