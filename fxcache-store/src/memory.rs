//! In-memory store adapter.

use std::sync::Mutex;

use fxcache_types::{RateSnapshot, SnapshotStore, StoreError};

/// Snapshot store that keeps the snapshot in memory only.
///
/// Nothing survives a restart; useful for tests and for embedding the
/// engine where persistence is handled elsewhere.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<RateSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with `snapshot`, as if persisted by an earlier run.
    pub fn with_snapshot(snapshot: RateSnapshot) -> Self {
        Self {
            slot: Mutex::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<RateSnapshot> {
        self.slot.lock().unwrap().clone()
    }

    fn save(&self, snapshot: &RateSnapshot) -> Result<(), StoreError> {
        *self.slot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }
}
