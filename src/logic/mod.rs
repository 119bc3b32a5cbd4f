// Logic module - pure functions with no I/O or UI dependencies
//
// - search: free-text predicate over index entries
// - filters: combined predicate + sort pipeline deriving the visible subset
// - sorting: comparators for the three sort keys
// - markdown: ordered-substitution conversion to HTML
// - navigation: contents tree building, flattening, prev/next neighbors
// - formatting: filter-choice labels
// - payload: transfer payload codec for the grab/drop flow

pub mod filters;
pub mod formatting;
pub mod markdown;
pub mod navigation;
pub mod payload;
pub mod search;
pub mod sorting;
