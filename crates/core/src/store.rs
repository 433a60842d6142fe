//! The tag/category state store.
//!
//! [`TagStore`] is the single mutation path for both collections. Consumers
//! read [`TagStore::tags`] and [`TagStore::categories`] for rendering and
//! derived computation, and call the four operations in response to user
//! actions. The store holds no reference to any consumer and performs no
//! derived computation itself.
//!
//! Every successful mutation re-serializes the affected collection and
//! overwrites its slot before returning, so a read issued immediately after
//! a mutation observes the updated state both in memory and in storage.

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::constants::{CATEGORIES_SLOT, TAGS_SLOT};
use crate::error::{StoreError, StoreResult};
use crate::id;
use crate::model::{Category, Tag};
use crate::seed;
use crate::storage::SlotStorage;

/// Owns the in-memory tag and category collections and their storage mirror.
///
/// Exclusive ownership is expressed through `&mut self` on the mutation
/// operations: all writes arrive serialized through whichever single
/// consumer holds the store, so no locking is needed.
pub struct TagStore {
    tags: Vec<Tag>,
    categories: Vec<Category>,
    storage: Box<dyn SlotStorage>,
}

impl TagStore {
    /// Opens a store over the given storage backend.
    ///
    /// Each slot is read and parsed independently; an absent or unparseable
    /// slot falls back to that collection's seed set. Corrupt data is logged
    /// at `warn` and discarded, and opening never fails.
    pub fn open(storage: Box<dyn SlotStorage>) -> Self {
        let tags = load_slot(storage.as_ref(), TAGS_SLOT).unwrap_or_else(seed::default_tags);
        let categories =
            load_slot(storage.as_ref(), CATEGORIES_SLOT).unwrap_or_else(seed::default_categories);

        Self {
            tags,
            categories,
            storage,
        }
    }

    /// The tag collection, most-recent-first.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// The category collection, in creation order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Prepends a new tag with a freshly generated id and the current time.
    ///
    /// `category_id` is stored as given; it need not reference an existing
    /// category (weak references by design). Returns the created tag.
    ///
    /// # Errors
    ///
    /// Fails only if mirroring the tag collection to storage fails; the
    /// in-memory collection is updated first, so storage stays a mirror of
    /// memory rather than the other way round.
    pub fn add_tag(
        &mut self,
        name: impl Into<String>,
        category_id: impl Into<String>,
    ) -> StoreResult<&Tag> {
        let tag = Tag {
            id: id::generate(),
            name: name.into(),
            category: category_id.into(),
            created_at: Utc::now().timestamp_millis(),
        };

        self.tags.insert(0, tag);
        self.persist_tags()?;
        Ok(&self.tags[0])
    }

    /// Removes the tag with the given id. Removing an absent id is a no-op
    /// (the slot is still rewritten, matching the mirror-on-every-mutation
    /// contract).
    pub fn remove_tag(&mut self, tag_id: &str) -> StoreResult<()> {
        self.tags.retain(|tag| tag.id != tag_id);
        self.persist_tags()
    }

    /// Appends a new category with a freshly generated id. Returns the
    /// created category.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> StoreResult<&Category> {
        let category = Category {
            id: id::generate(),
            name: name.into(),
            color: color.into(),
        };

        self.categories.push(category);
        self.persist_categories()?;
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Removes the category with the given id. Tags referencing it are left
    /// untouched and become orphaned; resolving (or not resolving) them is
    /// the consumer's concern.
    pub fn remove_category(&mut self, category_id: &str) -> StoreResult<()> {
        self.categories.retain(|category| category.id != category_id);
        self.persist_categories()
    }

    fn persist_tags(&mut self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.tags).map_err(StoreError::Serialization)?;
        self.storage.set(TAGS_SLOT, &encoded)?;
        Ok(())
    }

    fn persist_categories(&mut self) -> StoreResult<()> {
        let encoded = serde_json::to_string(&self.categories).map_err(StoreError::Serialization)?;
        self.storage.set(CATEGORIES_SLOT, &encoded)?;
        Ok(())
    }
}

/// Reads and parses one slot, returning `None` on absence or corruption.
fn load_slot<T: DeserializeOwned>(storage: &dyn SlotStorage, key: &str) -> Option<Vec<T>> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(collection) => Some(collection),
        Err(e) => {
            tracing::warn!("discarding unparseable slot '{}': {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlotStorage;
    use std::collections::HashSet;

    fn fresh_store() -> TagStore {
        TagStore::open(Box::new(MemorySlotStorage::new()))
    }

    #[test]
    fn test_open_with_empty_storage_yields_seed_data() {
        let store = fresh_store();

        assert_eq!(store.tags().len(), 5);
        assert_eq!(store.categories().len(), 5);
        assert_eq!(store.categories()[0].name, "Vlog");
    }

    #[test]
    fn test_add_tag_prepends_with_fresh_id_and_timestamp() {
        let mut store = fresh_store();
        let before = Utc::now().timestamp_millis();

        store.add_tag("Coding Livestream", "cat_2").unwrap();

        let newest = &store.tags()[0];
        assert_eq!(newest.name, "Coding Livestream");
        assert_eq!(newest.category, "cat_2");
        assert!(newest.created_at >= before);
        assert_eq!(store.tags().len(), 6);
    }

    #[test]
    fn test_add_category_appends() {
        let mut store = fresh_store();

        store.add_category("Cooking", "var(--chart-6)").unwrap();

        let last = store.categories().last().unwrap();
        assert_eq!(last.name, "Cooking");
        assert_eq!(store.categories().len(), 6);
    }

    #[test]
    fn test_generated_ids_are_pairwise_distinct() {
        let mut store = fresh_store();
        for i in 0..50 {
            store.add_tag(format!("tag {i}"), "cat_1").unwrap();
            store.add_category(format!("cat {i}"), "var(--chart-1)").unwrap();
        }

        let tag_ids: HashSet<&str> = store.tags().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(tag_ids.len(), store.tags().len());

        let cat_ids: HashSet<&str> = store.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(cat_ids.len(), store.categories().len());
    }

    #[test]
    fn test_remove_tag_removes_exactly_one() {
        let mut store = fresh_store();

        store.remove_tag("tag_3").unwrap();

        assert_eq!(store.tags().len(), 4);
        assert!(store.tags().iter().all(|t| t.id != "tag_3"));
    }

    #[test]
    fn test_remove_absent_tag_is_a_noop() {
        let mut store = fresh_store();
        let before: Vec<Tag> = store.tags().to_vec();

        store.remove_tag("no_such_tag").unwrap();

        assert_eq!(store.tags(), before.as_slice());
    }

    #[test]
    fn test_remove_category_leaves_referencing_tags_untouched() {
        let mut store = fresh_store();
        store.add_tag("Coding Livestream", "cat_2").unwrap();

        store.remove_category("cat_2").unwrap();

        assert_eq!(store.categories().len(), 4);
        assert!(store.categories().iter().all(|c| c.id != "cat_2"));

        // Orphaned tags keep their dangling reference verbatim.
        let orphan = &store.tags()[0];
        assert_eq!(orphan.name, "Coding Livestream");
        assert_eq!(orphan.category, "cat_2");
        assert_eq!(store.tags().len(), 6);
    }

    #[test]
    fn test_mutations_write_through_to_storage() {
        let mut store = fresh_store();
        store.add_tag("Unboxing", "cat_2").unwrap();
        let expected_id = store.tags()[0].id.clone();

        // A second store over the same backend must observe the mutation.
        let storage = std::mem::replace(
            &mut store.storage,
            Box::new(MemorySlotStorage::new()),
        );
        let reopened = TagStore::open(storage);

        assert_eq!(reopened.tags().len(), 6);
        assert_eq!(reopened.tags()[0].id, expected_id);
        assert_eq!(reopened.tags()[0].name, "Unboxing");
    }

    #[test]
    fn test_persisted_collections_round_trip_field_for_field() {
        let mut store = fresh_store();
        store.add_tag("Speedrun", "cat_3").unwrap();
        store.add_category("Esports", "var(--chart-6)").unwrap();
        let tags: Vec<Tag> = store.tags().to_vec();
        let categories: Vec<Category> = store.categories().to_vec();

        let storage = std::mem::replace(
            &mut store.storage,
            Box::new(MemorySlotStorage::new()),
        );
        let reopened = TagStore::open(storage);

        assert_eq!(reopened.tags(), tags.as_slice());
        assert_eq!(reopened.categories(), categories.as_slice());
    }

    #[test]
    fn test_corrupt_tag_slot_falls_back_to_seed_independently() {
        let mut persisted = fresh_store();
        persisted.add_category("Kept", "var(--chart-6)").unwrap();
        let categories: Vec<Category> = persisted.categories().to_vec();
        let mut storage = std::mem::replace(
            &mut persisted.storage,
            Box::new(MemorySlotStorage::new()),
        );

        // Corrupt only the tag slot.
        storage.set(TAGS_SLOT, "{ not json").unwrap();

        let store = TagStore::open(storage);
        assert_eq!(store.tags().len(), 5); // seed
        assert_eq!(store.categories(), categories.as_slice()); // persisted
    }

    #[test]
    fn test_corrupt_category_slot_falls_back_to_seed_independently() {
        let mut persisted = fresh_store();
        persisted.add_tag("Kept", "cat_1").unwrap();
        let tags: Vec<Tag> = persisted.tags().to_vec();
        let mut storage = std::mem::replace(
            &mut persisted.storage,
            Box::new(MemorySlotStorage::new()),
        );

        storage.set(CATEGORIES_SLOT, "42").unwrap();

        let store = TagStore::open(storage);
        assert_eq!(store.tags(), tags.as_slice()); // persisted
        assert_eq!(store.categories().len(), 5); // seed
        assert_eq!(store.categories()[0].id, "cat_1");
    }

    #[test]
    fn test_seed_scenario_from_product_walkthrough() {
        let mut store = fresh_store();
        assert_eq!(store.tags().len(), 5);
        assert_eq!(store.categories().len(), 5);

        store.add_tag("Coding Livestream", "cat_2").unwrap();
        assert_eq!(store.tags().len(), 6);
        assert_eq!(store.tags()[0].name, "Coding Livestream");
        assert_eq!(store.tags()[0].category, "cat_2");

        store.remove_category("cat_2").unwrap();
        assert_eq!(store.categories().len(), 4);
        let livestream = store
            .tags()
            .iter()
            .find(|t| t.name == "Coding Livestream")
            .unwrap();
        assert_eq!(livestream.category, "cat_2");
    }

    #[test]
    fn test_store_accepts_unvalidated_arguments() {
        // Validation is the caller's concern: empty names and unknown
        // category ids are stored as given.
        let mut store = fresh_store();

        store.add_tag("", "never_created").unwrap();

        assert_eq!(store.tags()[0].name, "");
        assert_eq!(store.tags()[0].category, "never_created");
    }
}
