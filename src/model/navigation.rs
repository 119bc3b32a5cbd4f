//! Contents pane state
//!
//! The contents tree groups every index entry by category, independent of
//! the active filters. Category nodes start collapsed, matching the
//! generated documentation pages this replaces.

use crate::model::types::FileEntry;

/// One collapsible category node with its document leaves
#[derive(Debug, Clone)]
pub struct NavGroup {
    pub label: String,
    pub collapsed: bool,
    pub entries: Vec<FileEntry>,
}

/// One visible row of the contents pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRow {
    /// A category header at `group` index
    Group { group: usize },

    /// A document leaf under an expanded category
    Doc { group: usize, entry: usize },
}

/// Contents pane state: the tree plus pane visibility
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub groups: Vec<NavGroup>,

    /// Whether the sidebar is shown at all
    pub visible: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            visible: true,
        }
    }

    pub fn expand_all(&mut self) {
        for group in &mut self.groups {
            group.collapsed = false;
        }
    }

    pub fn collapse_all(&mut self) {
        for group in &mut self.groups {
            group.collapsed = true;
        }
    }
}
