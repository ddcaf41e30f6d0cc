//! Snapshot store boundary
//!
//! [`SnapshotStore`] is the single capability the classifier needs from
//! storage: resolve an identifier to a snapshot, or report that none
//! exists.

use async_trait::async_trait;
use std::sync::Arc;
use stratawatch_core::{Snapshot, SnapshotId, StoreResult};

/// Read-only snapshot lookup
///
/// # Contract
///
/// - `Ok(Some(snapshot))`: the identifier names a stored snapshot
/// - `Ok(None)`: well-formed identifier, no such snapshot (NOT an error)
/// - `Err(_)`: infrastructure failure; callers propagate it unchanged
///
/// Implementations own any retry, timeout, or caching policy.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Resolve an identifier to its snapshot
    async fn lookup(&self, id: &SnapshotId) -> StoreResult<Option<Snapshot>>;
}

#[async_trait]
impl<S: SnapshotStore + ?Sized> SnapshotStore for Arc<S> {
    async fn lookup(&self, id: &SnapshotId) -> StoreResult<Option<Snapshot>> {
        (**self).lookup(id).await
    }
}

#[async_trait]
impl<'a, S: SnapshotStore + ?Sized> SnapshotStore for &'a S {
    async fn lookup(&self, id: &SnapshotId) -> StoreResult<Option<Snapshot>> {
        (**self).lookup(id).await
    }
}
