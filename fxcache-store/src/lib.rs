//! # fxcache Store
//!
//! Concrete snapshot store implementations (adapters) for the rate cache.
//! This crate provides adapters that implement the `SnapshotStore` port:
//! a JSON-file store for real use and an in-memory store for tests and
//! embedding.

use std::path::Path;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Build a file-backed store at `path`, creating parent directories.
///
/// # Examples
///
/// ```ignore
/// let store = build_store("~/.cache/fxcache/snapshot.json")?;
/// ```
pub fn build_store(path: impl AsRef<Path>) -> anyhow::Result<JsonFileStore> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(JsonFileStore::new(path))
}
