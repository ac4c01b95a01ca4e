//! Raw case information, as exported from the database.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw case metadata: a JSON object of (mostly) string fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCase(Map<String, Value>);

impl RawCase {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Get a string field. Non-string values are ignored.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Case identifier, empty if missing.
    pub fn itemid(&self) -> &str {
        self.get_str("itemid").unwrap_or_default()
    }

    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        self.0.insert(key.to_string(), value)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// One result entry of an exported index file.
#[derive(Debug, Deserialize)]
pub struct IndexEntry {
    pub columns: RawCase,
}

/// An exported index file (`{"results": [{"columns": {...}}, ...]}`).
#[derive(Debug, Deserialize)]
pub struct Index {
    pub results: Vec<IndexEntry>,
}
