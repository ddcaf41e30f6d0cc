//! Core types for StrataWatch
//!
//! This crate defines the types shared by the storage and engine crates:
//! - [`Value`]: Canonical field value with strict equality
//! - [`SnapshotId`] / [`RecordId`]: Identifiers
//! - [`Snapshot`]: Immutable point-in-time field mapping
//! - [`StoreError`]: Infrastructure failures reported by a store

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod snapshot;
pub mod types;
pub mod value;

pub use error::{StoreError, StoreResult};
pub use snapshot::Snapshot;
pub use types::{RecordId, SnapshotId};
pub use value::Value;
