use std::fmt;

/// The API actions supported by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Shorten,
    Expand,
    Info,
    Stats,
    Errors,
}

impl Verb {
    /// All verbs, in API documentation order
    pub const ALL: [Verb; 5] = [
        Verb::Shorten,
        Verb::Expand,
        Verb::Info,
        Verb::Stats,
        Verb::Errors,
    ];

    /// Path segment of the verb's endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Shorten => "shorten",
            Verb::Expand => "expand",
            Verb::Info => "info",
            Verb::Stats => "stats",
            Verb::Errors => "errors",
        }
    }

    /// Name of the query parameter carrying the verb's argument, if it takes one
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Verb::Shorten => Some("longUrl"),
            Verb::Expand | Verb::Info | Verb::Stats => Some("shortUrl"),
            Verb::Errors => None,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
