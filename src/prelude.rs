//! Convenient imports for StrataWatch.
//!
//! ```ignore
//! use stratawatch::prelude::*;
//!
//! let watcher = Watcher::ephemeral();
//! let id = watcher.store().append("!room:example.org", [("join_rule", "public")]);
//! ```

// Main entry point
pub use crate::watcher::{Watcher, WatcherBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Classification
pub use stratawatch_engine::{ClassifierConfig, LookupMode, Transition, TransitionClassifier};

// Core types
pub use stratawatch_core::{RecordId, Snapshot, SnapshotId, StoreError, Value};

// Storage
pub use stratawatch_storage::{ShardedSnapshotStore, SnapshotStore};

// Re-export serde_json for convenience
pub use serde_json::json;
