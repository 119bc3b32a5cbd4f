//! Selection tray methods
//!
//! The grab/drop flow moves entries from the results list into the tray
//! through a serialized payload, mirroring the drag-and-drop transfer of
//! the browser viewer. A malformed payload is logged, never surfaced.

use crate::model::types::FileEntry;
use crate::{log_debug, logic, ActiveTab};
use crate::App;

impl App {
    /// Pick up the highlighted result as a transfer payload
    pub(crate) fn grab_selected(&mut self) {
        let Some(entry) = self.model.selected_result() else {
            return;
        };

        match logic::payload::encode_entry(entry) {
            Ok(payload) => {
                let title = entry.title.clone();
                self.model.ui.drag_payload = Some(payload);
                self.model.ui.show_toast(format!("Picked up \"{}\"", title));
            }
            Err(e) => {
                log_debug(&format!("Grab error: {}", e));
            }
        }
    }

    /// Drop the held payload into the tray
    pub(crate) fn drop_payload(&mut self) {
        let Some(payload) = self.model.ui.drag_payload.take() else {
            return;
        };

        match logic::payload::decode_entry(&payload) {
            Ok(entry) => self.add_to_selection(entry),
            Err(e) => {
                log_debug(&format!("Drop error: {}", e));
            }
        }
    }

    /// Grab and drop in one gesture
    pub(crate) fn send_selected_to_tray(&mut self) {
        self.grab_selected();
        self.drop_payload();
    }

    /// Insert at the end unless a member shares the path; a successful
    /// insert switches the visible tab to the tray
    pub(crate) fn add_to_selection(&mut self, entry: FileEntry) {
        if self.model.selection.add(entry) {
            self.model.ui.active_tab = ActiveTab::Selection;
            if self.model.ui.tray_state.selected().is_none() {
                self.model.ui.tray_state.select(Some(0));
            }
        }
    }

    /// Remove the tray member under the cursor
    pub(crate) fn remove_tray_selected(&mut self) {
        let Some(path) = self
            .model
            .selected_tray_entry()
            .map(|e| e.path.clone())
        else {
            return;
        };

        self.model.selection.remove(&path);

        let len = self.model.selection.len();
        let selected = match self.model.ui.tray_state.selected() {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
        self.model.ui.tray_state.select(selected);
    }

    /// Placeholder export: surfaces the member titles (or a warning for an
    /// empty selection); no file is produced
    pub(crate) fn export_selection(&mut self) {
        if self.model.selection.is_empty() {
            self.model.ui.show_toast("Selection is empty!".to_string());
            return;
        }

        let mut lines = vec![format!("Exporting {} items:", self.model.selection.len())];
        lines.extend(
            self.model
                .selection
                .entries()
                .iter()
                .map(|e| e.title.clone()),
        );
        self.model.ui.export_dialog = Some(lines);
    }
}
