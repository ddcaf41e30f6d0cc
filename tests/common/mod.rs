//! Shared helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub use stratawatch::prelude::*;
pub use stratawatch::StoreResult;

/// Install a test-writer subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Snapshot store fake: fixed snapshots, optional per-id failures, and a
/// count of lookups served.
#[derive(Default)]
pub struct FakeStore {
    snapshots: HashMap<SnapshotId, Snapshot>,
    failures: HashMap<SnapshotId, StoreError>,
    lookups: AtomicUsize,
    seen: Mutex<Vec<SnapshotId>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot whose fields come from a JSON object
    pub fn snapshot(mut self, id: &str, content: serde_json::Value) -> Self {
        let snapshot = Snapshot::from_json(id, "!room:example.org", 1, content);
        self.snapshots.insert(snapshot.id.clone(), snapshot);
        self
    }

    /// Make lookups of `id` fail
    pub fn failing(mut self, id: &str, err: StoreError) -> Self {
        self.failures.insert(SnapshotId::from(id), err);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<SnapshotId> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl SnapshotStore for FakeStore {
    async fn lookup(&self, id: &SnapshotId) -> StoreResult<Option<Snapshot>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push(id.clone());
        if let Some(err) = self.failures.get(id) {
            return Err(err.clone());
        }
        Ok(self.snapshots.get(id).cloned())
    }
}

pub fn sid(s: &str) -> SnapshotId {
    SnapshotId::from(s)
}
