//! # Tagboard Core
//!
//! Core state store for the Tagboard tag-management dashboard.
//!
//! This crate owns the two persisted collections (tags and categories),
//! loads them from slot storage at startup, and mirrors them back wholesale
//! on every mutation. Consumers read the current collections and invoke the
//! four mutation operations; all derived computation (filtering, counts,
//! percentages) belongs to the consumer, not the store.
//!
//! **No UI concerns**: rendering, navigation, and view-level validation
//! belong to whatever front end consumes this crate.
//!
//! ## Storage model
//!
//! Each collection is mirrored to its own named slot in a key-value backend
//! ([`SlotStorage`]). The in-memory collections are the single source of
//! truth; on every mutation the affected slot is overwritten in full. An
//! absent or unparseable slot falls back to the built-in seed data for that
//! collection only; corruption of one slot never affects the other.
//!
//! ## Example
//!
//! ```
//! use tagboard_core::{MemorySlotStorage, TagStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = TagStore::open(Box::new(MemorySlotStorage::new()));
//! let tag_id = store.add_tag("Coding Livestream", "cat_2")?.id.clone();
//! assert_eq!(store.tags()[0].id, tag_id);
//! store.remove_tag(&tag_id)?;
//! # Ok(())
//! # }
//! ```

pub mod constants;
mod error;
mod export;
mod id;
mod model;
mod seed;
mod storage;
mod store;

pub use error::{StoreError, StoreResult};
pub use export::export_tags;
pub use model::{Category, Tag};
pub use seed::{default_categories, default_tags};
pub use storage::{FileSlotStorage, MemorySlotStorage, SlotStorage, StorageError};
pub use store::TagStore;
