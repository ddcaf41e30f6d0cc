//! Sharded in-memory snapshot store
//!
//! DashMap sharded by RecordId, FxHashMap within each record.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, lock-free reads
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Per-RecordId: writes to different records never contend
//! - Secondary index SnapshotId -> RecordId serves `lookup`
//!
//! Lock order is always index, then shard. `insert` holds the index entry
//! until the snapshot is in its shard; nothing locks a shard and then the
//! index.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use stratawatch_core::{RecordId, Snapshot, SnapshotId, StoreResult, Value};
use tracing::trace;

use crate::traits::SnapshotStore;

/// Per-record shard holding every snapshot of one record
#[derive(Debug)]
pub struct RecordShard {
    /// Snapshots by id
    pub(crate) snapshots: FxHashMap<SnapshotId, Snapshot>,
    /// Snapshot ids in recording order (oldest first)
    pub(crate) order: Vec<SnapshotId>,
}

impl RecordShard {
    /// Create a new empty shard
    pub fn new() -> Self {
        Self {
            snapshots: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Get number of snapshots in this shard
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if shard is empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn push(&mut self, snapshot: Snapshot) {
        self.order.push(snapshot.id.clone());
        self.snapshots.insert(snapshot.id.clone(), snapshot);
    }

    fn remove(&mut self, id: &SnapshotId) -> Option<Snapshot> {
        let removed = self.snapshots.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }
}

impl Default for RecordShard {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory versioned snapshot store
///
/// Snapshots are immutable once stored: recording a snapshot under an id
/// that already exists is rejected rather than overwriting it.
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - lookup/get: lock-free reads via DashMap
/// - append/insert: only lock the target record's shard
///
/// # Example
///
/// ```ignore
/// use stratawatch_storage::ShardedSnapshotStore;
///
/// let store = ShardedSnapshotStore::new();
/// let id = store.append("!room:example.org", [("visibility", "shared")]);
/// assert!(store.get(&id).is_some());
/// ```
pub struct ShardedSnapshotStore {
    /// Per-record shards
    shards: DashMap<RecordId, RecordShard>,
    /// Snapshot id -> owning record
    index: DashMap<SnapshotId, RecordId>,
    /// Global version counter
    version: AtomicU64,
}

impl ShardedSnapshotStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self {
            shards: DashMap::new(),
            index: DashMap::new(),
            version: AtomicU64::new(0),
        }
    }

    /// Create with expected number of records
    pub fn with_capacity(num_records: usize) -> Self {
        Self {
            shards: DashMap::with_capacity(num_records),
            index: DashMap::new(),
            version: AtomicU64::new(0),
        }
    }

    /// Get current version
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Saturates at `u64::MAX`
    #[inline]
    fn next_version(&self) -> u64 {
        let previous = self
            .version
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |v| {
                Some(v.saturating_add(1))
            })
            .unwrap_or_else(|v| v);
        previous.saturating_add(1)
    }

    /// Record a new snapshot of `record` with a generated id
    ///
    /// The snapshot is stamped with the next store version. Once the
    /// version reaches `u64::MAX` every later append is stamped `u64::MAX`.
    pub fn append<K, V>(
        &self,
        record: impl Into<RecordId>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> SnapshotId
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut snapshot = Snapshot::with_version(
            SnapshotId::generate(),
            record,
            self.next_version(),
        );
        snapshot.fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let id = snapshot.id.clone();
        // Generated ids are unique, so this cannot collide
        self.insert(snapshot);
        id
    }

    /// Record a caller-built snapshot
    ///
    /// Returns `false` (and stores nothing) if a snapshot with the same id
    /// already exists.
    pub fn insert(&self, snapshot: Snapshot) -> bool {
        let slot = match self.index.entry(snapshot.id.clone()) {
            Entry::Occupied(_) => {
                trace!(id = %snapshot.id, "snapshot id already recorded");
                return false;
            }
            Entry::Vacant(slot) => slot,
        };

        self.version.fetch_max(snapshot.version, Ordering::AcqRel);
        trace!(
            id = %snapshot.id,
            record = %snapshot.record,
            version = snapshot.version,
            "recorded snapshot"
        );
        let record = snapshot.record.clone();
        self.shards
            .entry(record.clone())
            .or_insert_with(RecordShard::new)
            .push(snapshot);
        // Publish only once the shard holds the snapshot
        slot.insert(record);
        true
    }

    /// Get a snapshot by id
    pub fn get(&self, id: &SnapshotId) -> Option<Snapshot> {
        let record = self.index.get(id).map(|entry| entry.value().clone())?;
        self.shards
            .get(&record)
            .and_then(|shard| shard.snapshots.get(id).cloned())
    }

    /// Check if a snapshot exists
    pub fn contains(&self, id: &SnapshotId) -> bool {
        self.index.contains_key(id)
    }

    /// Snapshot ids of a record, oldest first
    pub fn history(&self, record: &RecordId) -> Vec<SnapshotId> {
        self.shards
            .get(record)
            .map(|shard| shard.order.clone())
            .unwrap_or_default()
    }

    /// Most recently recorded snapshot of a record
    pub fn latest(&self, record: &RecordId) -> Option<Snapshot> {
        self.shards.get(record).and_then(|shard| {
            shard
                .order
                .last()
                .and_then(|id| shard.snapshots.get(id).cloned())
        })
    }

    /// Remove a snapshot
    ///
    /// Returns the removed snapshot if it existed.
    pub fn remove(&self, id: &SnapshotId) -> Option<Snapshot> {
        let (_, record) = self.index.remove(id)?;
        let removed = self
            .shards
            .get_mut(&record)
            .and_then(|mut shard| shard.remove(id));
        self.shards.remove_if(&record, |_, shard| shard.is_empty());
        removed
    }

    /// Remove every snapshot of a record
    ///
    /// Returns true if the record existed.
    pub fn clear_record(&self, record: &RecordId) -> bool {
        let Some((_, shard)) = self.shards.remove(record) else {
            return false;
        };
        for id in &shard.order {
            self.index.remove(id);
        }
        true
    }

    /// Number of records with at least one snapshot
    pub fn record_count(&self) -> usize {
        self.shards.len()
    }

    /// Total snapshots across all records
    pub fn total_snapshots(&self) -> usize {
        self.shards.iter().map(|entry| entry.value().len()).sum()
    }
}

impl Default for ShardedSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ShardedSnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShardedSnapshotStore")
            .field("record_count", &self.record_count())
            .field("version", &self.version())
            .field("total_snapshots", &self.total_snapshots())
            .finish()
    }
}

#[async_trait]
impl SnapshotStore for ShardedSnapshotStore {
    async fn lookup(&self, id: &SnapshotId) -> StoreResult<Option<Snapshot>> {
        let snapshot = self.get(id);
        trace!(id = %id, found = snapshot.is_some(), "snapshot lookup");
        Ok(snapshot)
    }
}
