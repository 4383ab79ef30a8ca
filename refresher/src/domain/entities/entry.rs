//! Entry collection
//!
//! Whatever JSON the feed endpoint returns. Never interpreted here, only
//! handed to the template as its data context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque feed payload (usually an array of entry records)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection(pub Value);

impl EntryCollection {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Number of top-level records, if the payload is an array
    pub fn entry_count(&self) -> Option<usize> {
        self.0.as_array().map(Vec::len)
    }
}

impl From<Value> for EntryCollection {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
