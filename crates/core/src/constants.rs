//! Constants used throughout the Tagboard core crate.
//!
//! Slot keys and file names live here so the persisted layout is defined in
//! one place. Changing a slot key orphans previously persisted data; there
//! is no migration scheme (stale slots must be cleared manually).

/// Slot key under which the tag collection is mirrored.
pub const TAGS_SLOT: &str = "video_tags";

/// Slot key under which the category collection is mirrored.
pub const CATEGORIES_SLOT: &str = "video_categories";

/// Fixed file name used by the manual tag export.
pub const EXPORT_FILE_NAME: &str = "video_tags_backup.json";

/// Default data directory when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "tagboard_data";
