use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Server-assigned identifier. The API hands these out as JSON numbers, but
/// nothing on the client does arithmetic with them, so they are kept as text.
/// Any JSON value is accepted; `null` becomes the empty id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(scalar_text(Value::deserialize(deserializer)?)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(deserialize_with = "nullable_text")]
    pub breed: String,
    pub team_id: Option<RecordId>,
    #[serde(deserialize_with = "nullable_text")]
    pub status: String,
    #[serde(deserialize_with = "nullable_text")]
    pub image_url: String,
    pub cohort_id: Option<RecordId>,
    #[serde(deserialize_with = "optional_text")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "optional_text")]
    pub updated_at: Option<String>,
}

/// Body of the create call. Only these two keys go over the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
        }
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        other => Some(scalar_text(other)),
    })
}
