//! # bitly - client for the bit.ly URL shortening API
//!
//! A small blocking client for the bit.ly v2 REST API. Each call builds a
//! signed GET request, fetches it, decodes the JSON envelope and turns a
//! service-reported failure into a [`BitlyError`].
//!
//! ## Features
//!
//! - Shorten, expand, info, stats and error-code lookups
//! - Typed response envelope with explicit optional click counts
//! - Pluggable [`Transport`] so requests can be served without a network
//! - Request logging through `tracing`
//!
//! ## Basic Usage
//!
//! ```no_run
//! use bitly::Api;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Api::new("login", "R_apikey");
//!
//!     let short = api.shorten("www.google.com")?;
//!     println!("Short URL = {}", short);
//!
//!     let long = api.expand(&short)?;
//!     println!("Expanded URL = {}", long);
//!
//!     let stats = api.stats(&short)?;
//!     println!("User clicks {:?}, total clicks: {:?}", stats.user_clicks, stats.total_clicks);
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Transport
//!
//! ```
//! use bitly::{Api, BitlyError};
//!
//! let api = Api::new("login", "R_apikey").with_transport(|_url: &str| {
//!     Ok::<_, BitlyError>(r#"{"statusCode": "ERROR", "errorMessage": "offline"}"#.to_string())
//! });
//!
//! let err = api.errors().unwrap_err();
//! assert_eq!(err.message(), "offline");
//! ```

pub mod api;
pub mod client;
pub mod credentials;
pub mod error;
pub mod response;
pub mod stats;
pub mod transport;
pub mod verb;

// Re-export main types for convenience
pub use api::Api;
pub use client::{Config, API_VERSION};
pub use credentials::Credentials;
pub use error::{BitlyError, Result};
pub use response::ServiceResponse;
pub use stats::Stats;
pub use transport::{HttpTransport, Transport};
pub use verb::Verb;
