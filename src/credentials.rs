use url::Url;

/// Placeholder written over the API key in logged URLs
const REDACTED: &str = "<redacted>";

/// Credentials identify the bit.ly account making the requests.
///
/// Both values are sent as query parameters (`login` and `apiKey`) on every
/// request. They are stored verbatim and never validated locally.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name
    pub login: String,
    /// API key for the account
    api_key: String,
}

impl Credentials {
    /// Create new credentials from an account name and API key
    pub fn new(login: impl Into<String>, api_key: impl Into<String>) -> Self {
        Credentials {
            login: login.into(),
            api_key: api_key.into(),
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Append the authentication parameters to a query string
    pub(crate) fn apply_params(&self, pairs: &mut Vec<(&'static str, String)>) {
        pairs.push(("login", self.login.clone()));
        pairs.push(("apiKey", self.api_key.clone()));
    }

    /// Copy of a request URL with the `apiKey` value replaced, safe to log
    pub fn redact(&self, url: &str) -> String {
        let mut parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(_) => return REDACTED.to_string(),
        };
        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| {
                let value = if k == "apiKey" { REDACTED.to_string() } else { v.into_owned() };
                (k.into_owned(), value)
            })
            .collect();
        parsed.query_pairs_mut().clear().extend_pairs(pairs);
        parsed.to_string()
    }
}

// Implement Debug manually to avoid exposing the API key
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_stored_verbatim() {
        let creds = Credentials::new(" someone ", "R_key");
        assert_eq!(creds.login, " someone ");
        assert_eq!(creds.api_key(), "R_key");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let creds = Credentials::new("someone", "R_secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("someone"));
        assert!(!debug.contains("R_secret"));
    }

    #[test]
    fn test_redact_replaces_api_key() {
        let creds = Credentials::new("someone", "R_secret");
        let redacted = creds.redact(
            "http://api.bit.ly/expand?version=2.0.1&format=json&login=someone&apiKey=R_secret&shortUrl=abc",
        );
        assert!(!redacted.contains("R_secret"));
        assert!(redacted.contains("apiKey=%3Credacted%3E"));
        assert!(redacted.ends_with("&shortUrl=abc"));
        assert_eq!(creds.redact("not a url"), "<redacted>");
    }

    #[test]
    fn test_apply_params() {
        let creds = Credentials::new("someone", "R_key");
        let mut pairs = Vec::new();
        creds.apply_params(&mut pairs);
        assert_eq!(
            pairs,
            vec![("login", "someone".to_string()), ("apiKey", "R_key".to_string())]
        );
    }
}
