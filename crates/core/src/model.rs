//! Entity types for the tag and category collections.
//!
//! Both types serialize as camelCase JSON so a persisted slot written by any
//! prior version of the product round-trips field-for-field. Entities are
//! never mutated in place after creation; the store only creates and removes
//! them.

use serde::{Deserialize, Serialize};

/// A user-created text label referencing exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Opaque unique identifier, assigned at creation and never reused.
    pub id: String,

    /// Display label. The store accepts any string; validation (trimming,
    /// rejecting empty input) is the caller's concern.
    pub name: String,

    /// Weak reference to a [`Category`] id. The store does not enforce
    /// referential integrity: the referenced category may not exist, and
    /// removing a category leaves referencing tags untouched. Consumers
    /// must handle a lookup that fails to resolve.
    pub category: String,

    /// Milliseconds since the Unix epoch, captured at creation. Used only
    /// for sorting and display.
    pub created_at: i64,
}

/// A named, colored grouping that tags may reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Opaque unique identifier, stable for the category's lifetime.
    pub id: String,

    /// Display label. Not required to be unique.
    pub name: String,

    /// Opaque styling token, carried through unchanged for the rendering
    /// layer.
    pub color: String,
}
