//! Search Logic
//!
//! Pure functions for matching entries against the free-text search term.
//! Matching is a case-insensitive substring test over title, summary, and
//! path; an empty term matches everything.

use crate::model::types::FileEntry;

/// Match a search term against one entry
///
/// # Rules
/// - The term is trimmed and lowercased before matching
/// - An empty (or all-whitespace) term matches every entry
/// - The entry matches if any of {title, summary, path} contains the term
/// - An absent summary cannot match
pub fn search_matches(term: &str, entry: &FileEntry) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    if entry.title.to_lowercase().contains(&term) {
        return true;
    }

    if let Some(summary) = &entry.summary {
        if summary.to_lowercase().contains(&term) {
            return true;
        }
    }

    entry.path.to_lowercase().contains(&term)
}
