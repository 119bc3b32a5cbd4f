//! Contents tree logic
//!
//! Pure functions for building the category tree from the manifest,
//! flattening it for display, and computing previous/next neighbors in
//! reading order.

use crate::model::navigation::{NavGroup, NavRow};
use crate::model::types::FileEntry;

/// Group manifest entries by category into collapsed nodes
///
/// Categories named by the index keep index order; categories that only
/// appear on entries (including the "Other" fallback) are appended in
/// first-seen order. Groups without entries are dropped. Entries keep
/// manifest order within their group.
pub fn build_groups(files: &[FileEntry], categories: &[String]) -> Vec<NavGroup> {
    let mut labels: Vec<String> = categories.to_vec();
    for entry in files {
        let label = entry.category_label();
        if !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }

    labels
        .into_iter()
        .filter_map(|label| {
            let entries: Vec<FileEntry> = files
                .iter()
                .filter(|e| e.category_label() == label)
                .cloned()
                .collect();

            if entries.is_empty() {
                return None;
            }

            Some(NavGroup {
                label,
                collapsed: true,
                entries,
            })
        })
        .collect()
}

/// Flatten the tree into its visible rows: every group header, plus the
/// leaves of expanded groups
pub fn visible_rows(groups: &[NavGroup]) -> Vec<NavRow> {
    let mut rows = Vec::new();
    for (group_idx, group) in groups.iter().enumerate() {
        rows.push(NavRow::Group { group: group_idx });
        if !group.collapsed {
            for entry_idx in 0..group.entries.len() {
                rows.push(NavRow::Doc {
                    group: group_idx,
                    entry: entry_idx,
                });
            }
        }
    }
    rows
}

/// Reading order over all document leaves, ignoring collapse state
pub fn document_order(groups: &[NavGroup]) -> Vec<&FileEntry> {
    groups.iter().flat_map(|g| g.entries.iter()).collect()
}

/// Immediate neighbors of the document at `current_path` in reading order
///
/// Returns (previous, next); either side is None at the corresponding end
/// of the list, and both are None when the path is absent.
pub fn neighbors<'a>(
    groups: &'a [NavGroup],
    current_path: &str,
) -> (Option<&'a FileEntry>, Option<&'a FileEntry>) {
    let docs = document_order(groups);
    let Some(pos) = docs.iter().position(|e| e.path == current_path) else {
        return (None, None);
    };

    let prev = if pos > 0 { Some(docs[pos - 1]) } else { None };
    let next = docs.get(pos + 1).copied();
    (prev, next)
}
