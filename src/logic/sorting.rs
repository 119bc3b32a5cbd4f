//! Sorting comparison logic
//!
//! Pure functions for comparing index entries across the three sort keys.
//! Absent fields compare as the empty string; ties keep manifest order
//! because callers use a stable sort.

use crate::model::types::FileEntry;
use crate::SortKey;
use std::cmp::Ordering;

/// Compare two entries according to the given sort key
///
/// # Sort Rules
/// - Title / Category / Repo: plain string comparison
/// - Absent category and repo compare as "" (not their display fallbacks)
/// - Equal keys return Ordering::Equal so a stable sort preserves
///   manifest order
pub fn compare_entries(a: &FileEntry, b: &FileEntry, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Category => a
            .category
            .as_deref()
            .unwrap_or("")
            .cmp(b.category.as_deref().unwrap_or("")),
        SortKey::Repo => a
            .repo
            .as_deref()
            .unwrap_or("")
            .cmp(b.repo.as_deref().unwrap_or("")),
    }
}
