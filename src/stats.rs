use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Stats holds the click counts returned by the `stats` endpoint.
///
/// A count the service did not report stays `None`; it is never treated
/// as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Clicks on this user's short link
    #[serde(
        rename = "userClicks",
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_clicks: Option<u64>,

    /// Clicks across every short link pointing at the same long URL
    #[serde(
        rename = "clicks",
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_clicks: Option<u64>,
}

/// Read a click count sent either as a number or as a numeric string
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid click count: {}", n))),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid click count: {:?}", s))),
        Some(other) => Err(D::Error::custom(format!("invalid click count: {}", other))),
    }
}

impl Stats {
    /// Create a new Stats
    pub fn new(user_clicks: Option<u64>, total_clicks: Option<u64>) -> Self {
        Stats {
            user_clicks,
            total_clicks,
        }
    }
}
