//! Slot storage backends.
//!
//! The store persists each collection to a named string slot. This module
//! defines the [`SlotStorage`] abstraction plus the two backends Tagboard
//! ships with:
//!
//! - [`FileSlotStorage`] writes one JSON file per slot under a data
//!   directory (the local equivalent of the original product's
//!   origin-scoped browser storage).
//! - [`MemorySlotStorage`] keeps slots in a map, for tests and ephemeral
//!   runs.
//!
//! Reads never fail the caller: an unreadable slot is reported as absent
//! (with a `warn` log) so the store can fall back to its seed data.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Errors that can occur when writing a storage slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to create data directory: {0}")]
    DirCreation(std::io::Error),
    #[error("failed to write slot file: {0}")]
    FileWrite(std::io::Error),
}

/// A scoped key-value store holding one serialized collection per slot.
///
/// `get` is infallible from the caller's perspective: backends translate
/// read failures into absence. `set` overwrites the slot wholesale; there
/// is no incremental diffing and no other writer is assumed.
pub trait SlotStorage {
    /// Returns the slot's current value, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrites the slot with `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed slot storage: one `<key>.json` file per slot.
#[derive(Debug)]
pub struct FileSlotStorage {
    data_dir: PathBuf,
}

impl FileSlotStorage {
    /// Creates a storage backend rooted at `data_dir`.
    ///
    /// The directory is created lazily on first write, so opening a store
    /// against a fresh directory performs no I/O beyond the slot reads.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl SlotStorage for FileSlotStorage {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("failed to read slot '{}', treating as absent: {}", key, e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(StorageError::DirCreation)?;
        fs::write(self.slot_path(key), value).map_err(StorageError::FileWrite)
    }
}

/// In-memory slot storage.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: HashMap<String, String>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a slot, bypassing the store. Useful for constructing
    /// a backend that already holds persisted (or corrupt) data.
    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl SlotStorage for MemorySlotStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
