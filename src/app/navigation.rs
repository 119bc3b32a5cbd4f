//! Contents pane methods
//!
//! Disclosure toggles, expand/collapse all, previous/next in reading
//! order, and the back-to-index control.

use crate::logic;
use crate::model::navigation::NavRow;
use crate::model::ui::Pane;
use crate::{ActiveTab, App};

impl App {
    /// Show or hide the contents sidebar
    pub(crate) fn toggle_contents_pane(&mut self) {
        self.model.nav.visible = !self.model.nav.visible;
        if !self.model.nav.visible && self.model.ui.focus == Pane::Contents {
            self.model.ui.focus = Pane::Results;
        }
    }

    /// Activate the row under the contents cursor: toggle a category's
    /// disclosure, or open a document leaf
    pub(crate) fn contents_activate(&mut self) {
        let rows = logic::navigation::visible_rows(&self.model.nav.groups);
        let Some(row) = self
            .model
            .ui
            .nav_state
            .selected()
            .and_then(|idx| rows.get(idx).copied())
        else {
            return;
        };

        match row {
            NavRow::Group { group } => {
                if let Some(g) = self.model.nav.groups.get_mut(group) {
                    g.collapsed = !g.collapsed;
                }
            }
            NavRow::Doc { group, entry } => {
                if let Some(entry) = self
                    .model
                    .nav
                    .groups
                    .get(group)
                    .and_then(|g| g.entries.get(entry))
                    .cloned()
                {
                    self.open_document(&entry);
                }
            }
        }
        self.clamp_nav_cursor();
    }

    pub(crate) fn expand_all_groups(&mut self) {
        self.model.nav.expand_all();
        self.clamp_nav_cursor();
    }

    pub(crate) fn collapse_all_groups(&mut self) {
        self.model.nav.collapse_all();
        self.clamp_nav_cursor();
    }

    /// Open the next document in reading order, if the active document has
    /// one
    pub(crate) fn next_document(&mut self) {
        let Some(path) = self.model.preview.active_path().map(|p| p.to_string()) else {
            return;
        };
        let (_, next) = logic::navigation::neighbors(&self.model.nav.groups, &path);
        if let Some(entry) = next.cloned() {
            self.open_document(&entry);
        }
    }

    /// Open the previous document in reading order
    pub(crate) fn prev_document(&mut self) {
        let Some(path) = self.model.preview.active_path().map(|p| p.to_string()) else {
            return;
        };
        let (prev, _) = logic::navigation::neighbors(&self.model.nav.groups, &path);
        if let Some(entry) = prev.cloned() {
            self.open_document(&entry);
        }
    }

    /// Return to the results list; suppressed while no preview is active
    pub(crate) fn back_to_index(&mut self) {
        if self.model.preview.active_path().is_none() {
            return;
        }
        self.model.ui.active_tab = ActiveTab::Selection;
        self.model.ui.focus = Pane::Results;
    }

    /// Keep the contents cursor inside the visible rows after a toggle
    fn clamp_nav_cursor(&mut self) {
        let row_count = logic::navigation::visible_rows(&self.model.nav.groups).len();
        let selected = match self.model.ui.nav_state.selected() {
            _ if row_count == 0 => None,
            Some(idx) => Some(idx.min(row_count - 1)),
            None => Some(0),
        };
        self.model.ui.nav_state.select(selected);
    }
}
