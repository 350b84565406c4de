use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Tag value identifying talk contents in the agenda JSON.
pub const TALK_TAG: &str = "TALK";

/// Parsed agenda document: days, each holding tracks of scheduled slots.
///
/// Decoding is permissive: missing or mistyped collections decode as empty,
/// missing or unusable counters as zero, null strings as empty, and unknown
/// fields are ignored. Only malformed JSON is a decode error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgendaDocument {
    #[serde(default, deserialize_with = "deserialize_list")]
    pub days: Vec<Day>,
}

impl AgendaDocument {
    #[must_use]
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| ChartError::Decode(e.to_string()))
    }

    pub fn from_json_slice(input: &[u8]) -> ChartResult<Self> {
        serde_json::from_slice(input).map_err(|e| ChartError::Decode(e.to_string()))
    }

    /// Iterates every slot in document order with its day and track.
    pub fn slots(&self) -> impl Iterator<Item = (&Day, &Track, &Slot)> {
        self.days.iter().flat_map(|day| {
            day.tracks
                .iter()
                .flat_map(move |track| track.slots.iter().map(move |slot| (day, track, slot)))
        })
    }

    #[must_use]
    pub fn talk_count(&self) -> usize {
        self.slots().filter(|(_, _, slot)| slot.talk().is_some()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Day {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub tracks: Vec<Track>,
}

impl Day {
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_list")]
    pub slots: Vec<Slot>,
}

impl Track {
    #[must_use]
    pub fn new(name: impl Into<String>, slots: Vec<Slot>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub start: String,
    #[serde(
        default,
        deserialize_with = "deserialize_contents",
        skip_serializing_if = "Option::is_none"
    )]
    pub contents: Option<Contents>,
}

impl Slot {
    #[must_use]
    pub fn new(start: impl Into<String>, contents: Option<Contents>) -> Self {
        Self {
            start: start.into(),
            contents,
        }
    }

    /// Returns the talk scheduled in this slot, if the slot holds one.
    #[must_use]
    pub fn talk(&self) -> Option<&Talk> {
        match &self.contents {
            Some(Contents::Talk(talk)) => Some(talk),
            _ => None,
        }
    }
}

/// Slot contents. Only talks are charted; every other tag, including a
/// missing one, lands in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawContents", into = "RawContents")]
pub enum Contents {
    Talk(Talk),
    Other { kind: String },
}

impl Contents {
    #[must_use]
    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other { kind: kind.into() }
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Talk(_) => TALK_TAG,
            Self::Other { kind } => kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Talk {
    pub title: String,
    pub total_likes: u64,
    pub feedback: Option<Feedback>,
    pub authors: Vec<Author>,
}

impl Talk {
    #[must_use]
    pub fn new(title: impl Into<String>, total_likes: u64) -> Self {
        Self {
            title: title.into(),
            total_likes,
            feedback: None,
            authors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_feedback(mut self, entries_count: u64) -> Self {
        self.feedback = Some(Feedback { entries_count });
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    /// Number of feedback entries, zero when no feedback was recorded.
    #[must_use]
    pub fn feedback_count(&self) -> u64 {
        self.feedback.map_or(0, |feedback| feedback.entries_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub entries_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub avatar: String,
}

impl Author {
    #[must_use]
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// Wire shape of `contents`: a loosely tagged object.
///
/// Talk fields stay untyped until the tag says the slot is a talk, so a
/// break or lunch slot never fails on fields nobody reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContents {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_likes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feedback: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    authors: Option<Value>,
}

impl From<RawContents> for Contents {
    fn from(raw: RawContents) -> Self {
        match raw.kind {
            Some(kind) if kind == TALK_TAG => Self::Talk(Talk {
                title: raw.title.and_then(text_of).unwrap_or_default(),
                total_likes: raw.total_likes.as_ref().and_then(count_of).unwrap_or(0),
                feedback: raw
                    .feedback
                    .filter(Value::is_object)
                    .and_then(|value| serde_json::from_value(value).ok()),
                authors: raw.authors.map(list_of).unwrap_or_default(),
            }),
            kind => Self::Other {
                kind: kind.unwrap_or_default(),
            },
        }
    }
}

impl From<Contents> for RawContents {
    fn from(contents: Contents) -> Self {
        match contents {
            Contents::Talk(talk) => Self {
                kind: Some(TALK_TAG.to_owned()),
                title: Some(Value::String(talk.title)),
                total_likes: Some(Value::from(talk.total_likes)),
                feedback: talk.feedback.and_then(|f| serde_json::to_value(f).ok()),
                authors: serde_json::to_value(talk.authors).ok(),
            },
            Contents::Other { kind } => Self {
                kind: (!kind.is_empty()).then_some(kind),
                ..Self::default()
            },
        }
    }
}

// Strings and numbers read as text; null and anything else do not.
fn text_of(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

// Non-negative numbers count, truncated toward zero. Everything else does not.
fn count_of(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| v.trunc() as u64)
    })
}

// Elements that cannot be read as `T` are dropped; a non-array is empty.
fn list_of<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(count_of(&Value::deserialize(deserializer)?).unwrap_or(0))
}

fn deserialize_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(list_of(Value::deserialize(deserializer)?))
}

// Anything other than an object means the slot holds nothing chartable.
fn deserialize_contents<'de, D>(deserializer: D) -> Result<Option<Contents>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_entries_count_decodes_as_zero() {
        let feedback: Feedback =
            serde_json::from_str(r#"{"entriesCount": null}"#).expect("decode feedback");
        assert_eq!(feedback.entries_count, 0);
    }

    #[test]
    fn tag_match_is_case_sensitive() {
        let contents: Contents =
            serde_json::from_str(r#"{"type": "talk", "title": "x"}"#).expect("decode");
        assert_eq!(contents, Contents::other("talk"));
    }

    #[test]
    fn counts_tolerate_floats_negatives_and_strings() {
        assert_eq!(count_of(&serde_json::json!(12.0)), Some(12));
        assert_eq!(count_of(&serde_json::json!(7.9)), Some(7));
        assert_eq!(count_of(&serde_json::json!(-3)), None);
        assert_eq!(count_of(&serde_json::json!("12")), None);
        assert_eq!(count_of(&serde_json::json!(null)), None);
    }

    #[test]
    fn non_talk_contents_ignore_mistyped_fields() {
        let contents: Contents = serde_json::from_str(
            r#"{"type": "BREAK", "title": 5, "totalLikes": -1, "feedback": {"entriesCount": "n/a"}}"#,
        )
        .expect("decode");
        assert_eq!(contents, Contents::other("BREAK"));
    }

    #[test]
    fn missing_tag_is_other() {
        let contents: Contents = serde_json::from_str(r#"{"title": "x"}"#).expect("decode");
        assert_eq!(contents, Contents::other(""));
    }
}
