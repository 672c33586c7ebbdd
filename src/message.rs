//! Chat message model as served by the remote store.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A message received from the remote store.
///
/// The store owns these records; the client displays them as-is and never
/// re-sorts, merges or deduplicates them. Decoding is lenient about the id
/// and timestamp so one odd record never sinks a whole poll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMessage")]
pub struct Message {
    /// Opaque identifier, stable across polls. Some stores omit it.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub from: String,
    pub to: String,
    #[serde(rename = "msg")]
    pub body: String,
    /// `None` when the store sent a missing or unparseable timestamp.
    #[serde(serialize_with = "timestamp::serialize")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Payload of a send request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub from: String,
    pub to: String,
    #[serde(rename = "msg")]
    pub body: String,
}

/// Whether a message was sent by the local user.
///
/// Exact, case-sensitive comparison with no trimming. Only used for styling.
pub fn is_own(from: &str, current_user: &str) -> bool {
    from == current_user
}

/// Format a timestamp as `HH:MM` in the viewer's local time.
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    format_time_in(timestamp, &Local)
}

/// Display time for a message; blank when the store sent no usable timestamp.
pub fn display_time(message: &Message) -> String {
    message.timestamp.as_ref().map(format_time).unwrap_or_default()
}

/// Format a timestamp as `HH:MM` in the given time zone.
pub fn format_time_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

/// Wire form of [`Message`]. Accepts `_id` or `id` (first one wins).
#[derive(Deserialize)]
struct RawMessage {
    #[serde(rename = "_id", default)]
    underscore_id: Option<RawId>,
    #[serde(default)]
    id: Option<RawId>,
    from: String,
    to: String,
    msg: String,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    timestamp: Option<DateTime<Utc>>,
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        Self {
            id: raw.underscore_id.or(raw.id).map(RawId::into_string),
            from: raw.from,
            to: raw.to,
            body: raw.msg,
            timestamp: raw.timestamp,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Timestamps arrive either as RFC 3339 strings or as epoch milliseconds.
/// Anything else decodes to `None`.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::debug;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        Millis(i64),
        Other(IgnoredAny),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match Option::<RawTimestamp>::deserialize(deserializer)? {
            Some(RawTimestamp::Text(s)) => match DateTime::parse_from_rfc3339(&s) {
                Ok(dt) => Some(dt.with_timezone(&Utc)),
                Err(e) => {
                    debug!(value = %s, error = %e, "unparseable timestamp");
                    None
                }
            },
            Some(RawTimestamp::Millis(ms)) => Utc.timestamp_millis_opt(ms).single(),
            Some(RawTimestamp::Other(_)) | None => None,
        };
        Ok(parsed)
    }
}
