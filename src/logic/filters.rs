//! Filter pipeline
//!
//! Derives the visible subset of the manifest from the three independent
//! predicates (search, category, repo) and the selected sort key. The full
//! subset is always returned; there is no pagination.

use crate::logic::search::search_matches;
use crate::logic::sorting::compare_entries;
use crate::model::types::{FileEntry, FilterState, WILDCARD};

/// Whether one entry passes all three predicates
///
/// # Rules
/// - Search: case-insensitive substring over title/summary/path, empty
///   term passes
/// - Category: wildcard passes, otherwise exact match against the entry's
///   category with "Other" substituted for an absent one
/// - Repo: wildcard passes, otherwise exact match against the entry's repo
///   with "" substituted for an absent one (so an entry without a repo
///   never matches a named repo choice)
pub fn entry_visible(entry: &FileEntry, filters: &FilterState) -> bool {
    if !search_matches(&filters.search, entry) {
        return false;
    }

    if filters.category != WILDCARD && entry.category_label() != filters.category {
        return false;
    }

    if filters.repo != WILDCARD && entry.repo.as_deref().unwrap_or("") != filters.repo {
        return false;
    }

    true
}

/// Compute the visible subset: filter, then stable-sort by the sort key.
/// Ties keep manifest order.
pub fn apply_filters(files: &[FileEntry], filters: &FilterState) -> Vec<FileEntry> {
    let mut visible: Vec<FileEntry> = files
        .iter()
        .filter(|entry| entry_visible(entry, filters))
        .cloned()
        .collect();

    visible.sort_by(|a, b| compare_entries(a, b, filters.sort));
    visible
}
