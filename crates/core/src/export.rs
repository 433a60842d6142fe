//! Manual tag export.
//!
//! A one-shot, user-triggered serialization of the current tag collection to
//! a file with a fixed name. This is the "backup" feature from the product's
//! branding: a pure read of already-owned data with no contract back into
//! the store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::EXPORT_FILE_NAME;
use crate::error::{StoreError, StoreResult};
use crate::store::TagStore;

/// Writes the store's current tag collection to
/// `<out_dir>/video_tags_backup.json` as pretty-printed JSON.
///
/// Returns the path of the written file. The output directory is created if
/// it does not exist; an existing export is overwritten.
///
/// # Errors
///
/// Fails if the directory cannot be created or the file cannot be written.
pub fn export_tags(store: &TagStore, out_dir: &Path) -> StoreResult<PathBuf> {
    let encoded = serde_json::to_string_pretty(store.tags()).map_err(StoreError::Serialization)?;

    fs::create_dir_all(out_dir).map_err(StoreError::ExportWrite)?;
    let path = out_dir.join(EXPORT_FILE_NAME);
    fs::write(&path, encoded).map_err(StoreError::ExportWrite)?;

    Ok(path)
}
