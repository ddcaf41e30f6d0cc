//! # StrataWatch
//!
//! Field-level transition classification over versioned record snapshots.
//!
//! Given an earlier and a later snapshot of a record (either may be
//! absent), a field name, and a reference value, StrataWatch reports
//! whether the field's match against the reference changed:
//!
//! | earlier matches | later matches | outcome |
//! |---|---|---|
//! | yes | yes | `BothMatch` |
//! | no | yes | `NowMatches` |
//! | yes | no | `StoppedMatching` |
//! | no | no | `NeitherMatch` |
//!
//! ## Quick Start
//!
//! ```ignore
//! use stratawatch::prelude::*;
//!
//! let watcher = Watcher::ephemeral();
//! let before = watcher.record_json("!room:example.org", json!({"history_visibility": "shared"}));
//! let after = watcher.record_json("!room:example.org", json!({"history_visibility": "world_readable"}));
//!
//! let outcome = watcher
//!     .classify(Some(&before), Some(&after), "history_visibility", &"world_readable".into())
//!     .await?;
//! assert!(outcome.is_change());
//! ```
//!
//! ## Crates
//!
//! - `stratawatch-core` - [`Value`], [`Snapshot`], identifiers, [`StoreError`]
//! - `stratawatch-storage` - [`SnapshotStore`] and [`ShardedSnapshotStore`]
//! - `stratawatch-engine` - [`Transition`] and [`TransitionClassifier`]

#![warn(missing_docs)]

mod error;
mod watcher;

pub mod prelude;

pub use error::{Error, Result};
pub use watcher::{Watcher, WatcherBuilder};

pub use stratawatch_core::{RecordId, Snapshot, SnapshotId, StoreError, StoreResult, Value};
pub use stratawatch_engine::{
    ClassifierConfig, ConfigError, LookupMode, Transition, TransitionClassifier,
};
pub use stratawatch_storage::{ShardedSnapshotStore, SnapshotStore};
