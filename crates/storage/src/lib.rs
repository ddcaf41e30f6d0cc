//! Storage layer for StrataWatch
//!
//! This crate defines the snapshot store boundary and ships an in-memory
//! implementation:
//! - SnapshotStore: async single-lookup trait the classifier depends on
//! - ShardedSnapshotStore: DashMap-sharded versioned snapshot store
//! - RecordShard: per-record snapshot map with recording order

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sharded;
pub mod traits;

pub use sharded::{RecordShard, ShardedSnapshotStore};
pub use traits::SnapshotStore;
