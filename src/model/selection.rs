//! Selection tray state
//!
//! An ordered set of file entries, unique by path. Populated by the
//! drag/drop flow, cleared only by process exit.

use crate::model::types::FileEntry;

/// User-curated ordered set of chosen entries
#[derive(Debug, Clone, Default)]
pub struct Selection {
    entries: Vec<FileEntry>,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry unless a member already shares its path.
    /// Returns true if the entry was inserted.
    pub fn add(&mut self, entry: FileEntry) -> bool {
        if self.entries.iter().any(|e| e.path == entry.path) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the member with the given path. No-op for non-members.
    /// Returns true if a member was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.path != path);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> Option<&FileEntry> {
        self.entries.get(idx)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
