//! Built-in seed collections.
//!
//! These exist only to give a first-run demo experience: a slot that is
//! absent or unparseable falls back to the seed set for that collection.
//! The fixed ids (`cat_1`, `tag_1`, ...) are plain strings like any other
//! id; nothing in the store treats them specially.

use chrono::Utc;

use crate::model::{Category, Tag};

/// The five example categories shown on a fresh install.
pub fn default_categories() -> Vec<Category> {
    [
        ("cat_1", "Vlog", "var(--chart-1)"),
        ("cat_2", "Tech", "var(--chart-2)"),
        ("cat_3", "Gaming", "var(--chart-3)"),
        ("cat_4", "Tutorial", "var(--chart-4)"),
        ("cat_5", "Music", "var(--chart-5)"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id: id.into(),
        name: name.into(),
        color: color.into(),
    })
    .collect()
}

/// The five example tags shown on a fresh install.
///
/// Creation timestamps are captured at call time, matching the original
/// product's behaviour of stamping the seed at first load.
pub fn default_tags() -> Vec<Tag> {
    let now = Utc::now().timestamp_millis();

    [
        ("tag_1", "Daily Life", "cat_1"),
        ("tag_2", "Travel", "cat_1"),
        ("tag_3", "Review", "cat_2"),
        ("tag_4", "Coding", "cat_2"),
        ("tag_5", "Minecraft", "cat_3"),
    ]
    .into_iter()
    .map(|(id, name, category)| Tag {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        created_at: now,
    })
    .collect()
}
