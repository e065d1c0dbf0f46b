//! # Domain Model: Records, Tags and the Persisted Shape
//!
//! A [`Record`] is one anonymous "unsent message": the message itself, an
//! optional afterthought, a category [`Tag`], when it was written, and how many
//! times readers said they relate to it.
//!
//! ## Persisted Shape
//!
//! Records are stored as a JSON array of objects:
//!
//! ```text
//! [
//!   {
//!     "id": "4b1d8c52-...",
//!     "message": "I hope you know I meant it.",
//!     "thought": "",
//!     "tag": "regret",
//!     "createdAt": "2024-05-01T10:00:00.000Z",
//!     "relates": 0
//!   }
//! ]
//! ```
//!
//! ## Lenient Fields
//!
//! Older data may omit or null out the optional fields. These normalize to
//! explicit defaults on load:
//!
//! | Field | Missing / null / empty |
//! |-------|------------------------|
//! | `thought` | `""` |
//! | `tag` | [`Tag::Unspecified`] |
//! | `relates` | `0` |
//!
//! Anything else that does not fit (unknown tag label, negative counter,
//! unparsable timestamp, missing id or message) makes the whole slot malformed.
//! The store decides what to do about that; see [`crate::store`].
//!
//! ## Timestamps
//!
//! `createdAt` is RFC 3339 with millisecond precision and a `Z` suffix. New
//! records are truncated to milliseconds at creation so a record compares equal
//! to itself after a save/load cycle.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque record identifier.
///
/// New ids are UUID v4 strings, but any non-empty string found in storage is
/// accepted and compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, for compact display.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category label attached to a record when it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Unspecified,
    Regret,
    Gratitude,
    Closure,
    Sadness,
}

impl Tag {
    /// Every tag, sentinel first.
    pub const ALL: [Tag; 5] = [
        Tag::Unspecified,
        Tag::Regret,
        Tag::Gratitude,
        Tag::Closure,
        Tag::Sadness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Unspecified => "unspecified",
            Tag::Regret => "regret",
            Tag::Gratitude => "gratitude",
            Tag::Closure => "closure",
            Tag::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a tag label outside the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Tag::ALL.iter().map(|t| t.as_str()).collect();
        write!(
            f,
            "unknown tag '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for Tag {
    type Err = UnknownTag;

    /// Case-insensitive. An empty label means [`Tag::Unspecified`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        if label.is_empty() {
            return Ok(Tag::Unspecified);
        }
        Tag::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == label)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(Tag::Unspecified),
            Some(label) => label.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// One stored unsent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thought: String,
    #[serde(default)]
    pub tag: Tag,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relates: u64,
}

impl Record {
    /// Builds a fresh record stamped with the current time.
    ///
    /// Inputs are stored as given; trimming and validation belong to the
    /// create command.
    pub fn new(message: impl Into<String>, thought: impl Into<String>, tag: Tag) -> Self {
        Self::new_at(message, thought, tag, Utc::now())
    }

    /// Builds a fresh record with an explicit creation time.
    pub fn new_at(
        message: impl Into<String>,
        thought: impl Into<String>,
        tag: Tag,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::new(),
            message: message.into(),
            thought: thought.into(),
            tag,
            created_at: created_at.trunc_subsecs(3),
            relates: 0,
        }
    }

    /// Text the query engine matches against: message, a space, then thought.
    pub fn haystack(&self) -> String {
        format!("{} {}", self.message, self.thought)
    }

    pub fn has_thought(&self) -> bool {
        !self.thought.trim().is_empty()
    }
}

/// First-party content for bulk seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub message: String,
    pub thought: String,
    pub tag: Tag,
}

impl Sample {
    pub fn new(message: impl Into<String>, thought: impl Into<String>, tag: Tag) -> Self {
        Self {
            message: message.into(),
            thought: thought.into(),
            tag,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_tag_parse_is_case_insensitive() {
        assert_eq!("Regret".parse::<Tag>().unwrap(), Tag::Regret);
        assert_eq!("CLOSURE".parse::<Tag>().unwrap(), Tag::Closure);
        assert_eq!("unspecified".parse::<Tag>().unwrap(), Tag::Unspecified);
    }

    #[test]
    fn test_tag_parse_empty_is_unspecified() {
        assert_eq!("".parse::<Tag>().unwrap(), Tag::Unspecified);
        assert_eq!("   ".parse::<Tag>().unwrap(), Tag::Unspecified);
    }

    #[test]
    fn test_tag_parse_unknown() {
        let err = "anger".parse::<Tag>().unwrap_err();
        assert_eq!(err, UnknownTag("anger".to_string()));
        assert!(err.to_string().contains("gratitude"));
    }

    #[test]
    fn test_new_record_defaults() {
        let record = Record::new("hello", "", Tag::default());
        assert_eq!(record.relates, 0);
        assert_eq!(record.tag, Tag::Unspecified);
        assert_eq!(record.thought, "");
        assert!(!record.has_thought());
    }

    #[test]
    fn test_new_records_get_distinct_ids() {
        let a = Record::new("a", "", Tag::Regret);
        let b = Record::new("a", "", Tag::Regret);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_short_id() {
        let id = RecordId::from("0123456789abcdef");
        assert_eq!(id.short(), "01234567");
        let tiny = RecordId::from("abc");
        assert_eq!(tiny.short(), "abc");
    }

    #[test]
    fn test_serialized_shape() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let mut record = Record::new_at("msg", "thought", Tag::Closure, created);
        record.id = RecordId::from("abc");
        record.relates = 2;

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["message"], "msg");
        assert_eq!(value["thought"], "thought");
        assert_eq!(value["tag"], "closure");
        assert_eq!(value["createdAt"], "2024-05-01T10:00:00.000Z");
        assert_eq!(value["relates"], 2);
    }

    #[test]
    fn test_creation_time_is_millisecond_precise() {
        let created = Utc.timestamp_nanos(1_714_557_600_123_456_789);
        let record = Record::new_at("msg", "", Tag::Regret, created);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert_eq!(record.created_at.timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn test_lenient_optional_fields() {
        let json = r#"{"id":"x","message":"m","createdAt":"2024-01-01T00:00:00Z"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.thought, "");
        assert_eq!(record.tag, Tag::Unspecified);
        assert_eq!(record.relates, 0);

        let json = r#"{"id":"x","message":"m","thought":null,"tag":"","createdAt":"2024-01-01T00:00:00.000Z","relates":null}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.thought, "");
        assert_eq!(record.tag, Tag::Unspecified);
        assert_eq!(record.relates, 0);
    }

    #[test]
    fn test_strict_fields_reject() {
        let unknown_tag = r#"{"id":"x","message":"m","tag":"anger","createdAt":"2024-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Record>(unknown_tag).is_err());

        let negative = r#"{"id":"x","message":"m","createdAt":"2024-01-01T00:00:00Z","relates":-1}"#;
        assert!(serde_json::from_str::<Record>(negative).is_err());

        let bad_time = r#"{"id":"x","message":"m","createdAt":"yesterday"}"#;
        assert!(serde_json::from_str::<Record>(bad_time).is_err());

        let no_message = r#"{"id":"x","createdAt":"2024-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<Record>(no_message).is_err());
    }
}
