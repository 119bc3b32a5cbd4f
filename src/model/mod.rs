//! Application state
//!
//! A single `Model` owned by the main loop holds everything the render
//! functions read. State changes happen only between events; render
//! functions take `&Model` (plus the list cursors) and redraw wholesale.
//!
//! Submodules:
//! - types: index records, filter state, preview state
//! - selection: the selection tray (ordered set, unique by path)
//! - navigation: the contents tree
//! - ui: focus, tabs, toasts, drag payload

pub mod navigation;
pub mod selection;
pub mod types;
pub mod ui;

use crate::logic;
use crate::model::navigation::NavState;
use crate::model::selection::Selection;
use crate::model::types::{DocIndex, FileEntry, FilterState, PreviewState, WILDCARD};
use crate::model::ui::UiState;

#[derive(Debug)]
pub struct Model {
    /// All entries from the index, in manifest order
    pub files: Vec<FileEntry>,

    /// Category choices, wildcard first
    pub categories: Vec<String>,

    /// Repo choices, wildcard first
    pub repos: Vec<String>,

    /// Whether the index fetch has resolved successfully
    pub index_loaded: bool,

    /// Error text rendered in the results pane when the index fetch failed
    pub index_error: Option<String>,

    pub filters: FilterState,

    /// Current visible subset, derived from files + filters
    pub filtered: Vec<FileEntry>,

    pub selection: Selection,
    pub preview: PreviewState,
    pub nav: NavState,
    pub ui: UiState,

    pub should_quit: bool,
}

impl Model {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            files: Vec::new(),
            categories: Vec::new(),
            repos: Vec::new(),
            index_loaded: false,
            index_error: None,
            filters: FilterState::new(),
            filtered: Vec::new(),
            selection: Selection::new(),
            preview: PreviewState::Empty,
            nav: NavState::new(),
            ui: UiState::new(vim_mode),
            should_quit: false,
        }
    }

    /// Install a fetched index: entries, wildcard-prefixed filter choices,
    /// the contents tree, and the initial filtered subset.
    pub fn load_index(&mut self, index: DocIndex) {
        self.categories = std::iter::once(WILDCARD.to_string())
            .chain(index.categories.iter().cloned())
            .collect();
        self.repos = std::iter::once(WILDCARD.to_string())
            .chain(index.repos.iter().cloned())
            .collect();
        self.nav.groups = logic::navigation::build_groups(&index.files, &index.categories);
        self.files = index.files;
        self.index_loaded = true;
        self.index_error = None;

        self.recompute_filtered();
    }

    /// Recompute the visible subset and clamp the results cursor
    pub fn recompute_filtered(&mut self) {
        self.filtered = logic::filters::apply_filters(&self.files, &self.filters);

        let selected = match self.ui.results_state.selected() {
            _ if self.filtered.is_empty() => None,
            Some(idx) => Some(idx.min(self.filtered.len() - 1)),
            None => Some(0),
        };
        self.ui.results_state.select(selected);
    }

    /// Entry under the results cursor
    pub fn selected_result(&self) -> Option<&FileEntry> {
        self.ui
            .results_state
            .selected()
            .and_then(|idx| self.filtered.get(idx))
    }

    /// Entry under the tray cursor
    pub fn selected_tray_entry(&self) -> Option<&FileEntry> {
        self.ui
            .tray_state
            .selected()
            .and_then(|idx| self.selection.get(idx))
    }
}
