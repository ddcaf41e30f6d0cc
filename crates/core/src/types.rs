//! Identifier types for versioned records
//!
//! This module defines the identifiers used throughout the system:
//! - [`SnapshotId`]: Opaque token naming one point-in-time snapshot
//! - [`RecordId`]: Name of the mutable record a snapshot belongs to

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a single snapshot
///
/// A SnapshotId is handed out by the store when a snapshot is recorded and
/// is the only handle the classifier needs. Its contents carry no meaning;
/// two ids are the same snapshot iff they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnapshotId(String);

impl SnapshotId {
    /// Wrap an existing identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use stratawatch_core::types::SnapshotId;
    ///
    /// let id = SnapshotId::new("$abc:example.org");
    /// assert_eq!(id.as_str(), "$abc:example.org");
    /// ```
    pub fn new(id: impl Into<String>) -> Self {
        SnapshotId(id.into())
    }

    /// Generate a fresh, unique identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use stratawatch_core::types::SnapshotId;
    ///
    /// let id1 = SnapshotId::generate();
    /// let id2 = SnapshotId::generate();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn generate() -> Self {
        SnapshotId(format!("${}", Uuid::new_v4().simple()))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SnapshotId {
    fn from(s: &str) -> Self {
        SnapshotId::new(s)
    }
}

impl From<String> for SnapshotId {
    fn from(s: String) -> Self {
        SnapshotId(s)
    }
}

/// Name of a mutable, versioned record
///
/// Every snapshot belongs to exactly one record; the record's history is
/// the ordered sequence of its snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Create a record id
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    /// Get the record id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::new(s)
    }
}
