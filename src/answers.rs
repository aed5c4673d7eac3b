use crate::error::LoadError;
use crate::value::Value;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

static ABSENT: Value = Value::Null;

/// The current answers of one form instance, keyed by field id.
///
/// A missing key and an explicit `null` read the same: both are `Value::Null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(AHashMap<String, Value>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse answers from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Json {
            what: "answers",
            source,
        })
    }

    /// Build answers from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, LoadError> {
        serde_json::from_value(value).map_err(|source| LoadError::Json {
            what: "answers",
            source,
        })
    }

    /// Load answers from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The answer for `field_id`, or `Value::Null` when there is none.
    pub fn get(&self, field_id: &str) -> &Value {
        self.0.get(field_id).unwrap_or(&ABSENT)
    }

    /// Store an answer, returning the previous one if any.
    pub fn set(&mut self, field_id: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field_id.into(), value.into())
    }

    pub fn remove(&mut self, field_id: &str) -> Option<Value> {
        self.0.remove(field_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
