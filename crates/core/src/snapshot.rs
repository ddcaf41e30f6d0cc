//! Snapshot type
//!
//! A snapshot is the immutable, point-in-time field mapping of a record.

use crate::types::{RecordId, SnapshotId};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Point-in-time view of a record
///
/// Each snapshot has:
/// - An identifier (opaque, assigned by the store or the caller)
/// - The record it belongs to
/// - A version number (monotonically increasing within a store)
/// - A timestamp of when it was recorded
/// - A field mapping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    /// Snapshot identifier
    pub id: SnapshotId,
    /// Record this snapshot belongs to
    pub record: RecordId,
    /// Version number
    pub version: u64,
    /// Recording timestamp (milliseconds since epoch)
    pub timestamp: i64,
    /// Field mapping
    pub fields: HashMap<String, Value>,
}

impl Snapshot {
    /// Create an empty snapshot with version 1
    pub fn new(id: impl Into<SnapshotId>, record: impl Into<RecordId>) -> Self {
        Self::with_version(id, record, 1)
    }

    /// Create an empty snapshot with explicit version
    pub fn with_version(
        id: impl Into<SnapshotId>,
        record: impl Into<RecordId>,
        version: u64,
    ) -> Self {
        Self {
            id: id.into(),
            record: record.into(),
            version,
            timestamp: Self::now(),
            fields: HashMap::new(),
        }
    }

    /// Build a snapshot whose fields come from a JSON object
    ///
    /// Anything other than a JSON object yields an empty field mapping.
    pub fn from_json(
        id: impl Into<SnapshotId>,
        record: impl Into<RecordId>,
        version: u64,
        content: serde_json::Value,
    ) -> Self {
        let mut snapshot = Self::with_version(id, record, version);
        snapshot.fields = Self::fields_from_json(content);
        snapshot
    }

    /// Convert JSON content into a field mapping
    ///
    /// Anything other than a JSON object yields an empty mapping.
    pub fn fields_from_json(content: serde_json::Value) -> HashMap<String, Value> {
        match content {
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
            _ => HashMap::new(),
        }
    }

    /// Add a field, returning the snapshot
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Extract a field
    ///
    /// Returns `None` when the snapshot has no such field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get current timestamp in milliseconds
    pub fn now() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}
