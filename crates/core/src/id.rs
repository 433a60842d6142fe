//! Entity identifier generation.
//!
//! Tagboard uses a *canonical* representation for generated identifiers:
//! **32 lowercase hexadecimal characters** (no hyphens), the same value you
//! would get from `Uuid::new_v4().simple().to_string()`.
//!
//! Only uniqueness matters to the store's contract: identifiers carry no
//! ordering guarantee. Persisted collections may contain ids in other shapes
//! (for example the seed data's `tag_1`), so ids are stored as plain strings
//! and never re-validated on load.

use uuid::Uuid;

/// Generates a fresh collision-resistant identifier in canonical form.
///
/// Suitable as a stable key across the process lifetime and across persisted
/// sessions.
pub fn generate() -> String {
    Uuid::new_v4().simple().to_string()
}
