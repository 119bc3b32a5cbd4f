//! Index data types
//!
//! Everything here is deserialized from the external docs index and never
//! mutated after load. Optional fields keep their absence; display fallbacks
//! are applied at render/filter time via the accessor methods.

use serde::{Deserialize, Serialize};

use crate::SortKey;

/// Wildcard filter value that matches every entry
pub const WILDCARD: &str = "all";

/// One documentation file's metadata record from the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Relative path to the markdown file; unique identifier
    pub path: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl FileEntry {
    /// Category for display and category filtering
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Other")
    }

    /// Repo for display
    pub fn repo_label(&self) -> &str {
        self.repo.as_deref().unwrap_or("Unknown")
    }

    /// Summary for display
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("No summary.")
    }
}

/// The JSON manifest describing all documentation files
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocIndex {
    #[serde(default)]
    pub files: Vec<FileEntry>,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub repos: Vec<String>,
}

/// Transient filter state, recomputed on every input event
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Free-text search term (matched against title, summary, path)
    pub search: String,

    /// Exact category, or the wildcard
    pub category: String,

    /// Exact repo, or the wildcard
    pub repo: String,

    pub sort: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            category: WILDCARD.to_string(),
            repo: WILDCARD.to_string(),
            sort: SortKey::Title,
        }
    }

    /// Reset search and both choice filters; the sort key is kept
    pub fn clear(&mut self) {
        self.search.clear();
        self.category = WILDCARD.to_string();
        self.repo = WILDCARD.to_string();
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// State of the document preview pane
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    /// Nothing has been previewed yet
    Empty,

    /// A fetch is outstanding
    Loading { title: String },

    /// Converted HTML ready for display
    Ready {
        path: String,
        title: String,
        html: String,
    },

    /// Fetch failed; message is shown in the pane
    Failed { message: String },
}

impl PreviewState {
    /// Path of the active document, if any
    pub fn active_path(&self) -> Option<&str> {
        match self {
            PreviewState::Ready { path, .. } => Some(path),
            _ => None,
        }
    }
}
