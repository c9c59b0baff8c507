//! JSON-file store adapter.

use std::fs;
use std::path::{Path, PathBuf};

use fxcache_types::{RateSnapshot, SnapshotStore, StoreError};

/// File-backed snapshot store.
///
/// The snapshot is one JSON document, so rates and timestamp are persisted
/// together. `save` writes a temp file in the target's directory and renames
/// it over the target; on POSIX the rename is atomic, so a reader sees the
/// old document or the new one, never a partial write.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        // Same directory as the target, so the rename stays on one filesystem.
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Option<RateSnapshot> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "no readable snapshot file");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                // Corrupt data counts as absent; the next successful refresh
                // overwrites it.
                tracing::debug!(path = %self.path.display(), %err, "discarding corrupt snapshot");
                None
            }
        }
    }

    fn save(&self, snapshot: &RateSnapshot) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(snapshot)?;
        let temp = self.temp_path();
        fs::write(&temp, &bytes)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::TimeDelta;
    use fxcache_types::{CurrencyCode, RateSnapshot};

    use super::*;

    fn sample() -> RateSnapshot {
        let rates = HashMap::from([
            ("USD".parse::<CurrencyCode>().unwrap(), 1.0),
            ("AUD".parse::<CurrencyCode>().unwrap(), 1.5),
        ]);
        // Whole milliseconds, so the persisted round trip compares equal.
        let fetched_at = chrono::DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        RateSnapshot::new(rates, fetched_at)
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("snapshot.json"));
        let snapshot = sample();

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), snapshot);
    }

    #[test]
    fn missing_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn corrupt_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, b"{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_none());
    }

    #[test]
    fn save_replaces_previous_snapshot_whole() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("snapshot.json"));

        let first = sample();
        store.save(&first).unwrap();

        let mut rates = first.rates().clone();
        rates.insert("JPY".parse().unwrap(), 150.0);
        let second = RateSnapshot::new(rates, first.fetched_at() + TimeDelta::hours(1));
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, second);
        // No temp file left behind.
        assert!(!store.temp_path().exists());
    }
}
