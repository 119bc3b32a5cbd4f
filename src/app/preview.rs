//! Document preview methods
//!
//! Opening a document switches to the preview tab, shows a loading line,
//! and hands the fetch to the background service. Responses are applied in
//! arrival order; a stale response for a superseded fetch overwrites the
//! newer one (see DESIGN.md).

use crate::model::types::{FileEntry, PreviewState};
use crate::services::FetchRequest;
use crate::{log_debug, logic, ActiveTab};
use crate::App;

impl App {
    /// Start previewing one document
    pub(crate) fn open_document(&mut self, entry: &FileEntry) {
        self.model.ui.active_tab = ActiveTab::Preview;
        self.model.ui.preview_scroll = 0;
        self.model.preview = PreviewState::Loading {
            title: entry.title.clone(),
        };

        let request = FetchRequest::Document {
            path: entry.path.clone(),
        };
        if self.fetch_tx.send(request).is_err() {
            log_debug("Fetch service unavailable");
            self.model.preview = PreviewState::Failed {
                message: "Error: fetch service unavailable".to_string(),
            };
        }
    }

    /// Preview the highlighted result
    pub(crate) fn preview_selected_result(&mut self) {
        if let Some(entry) = self.model.selected_result().cloned() {
            self.open_document(&entry);
        }
    }

    /// Preview the highlighted tray member
    pub(crate) fn preview_selected_tray_entry(&mut self) {
        if let Some(entry) = self.model.selected_tray_entry().cloned() {
            self.open_document(&entry);
        }
    }

    /// Apply a completed document fetch
    pub(crate) fn document_loaded(&mut self, path: String, content: anyhow::Result<String>) {
        match content {
            Ok(markdown) => {
                let html = logic::markdown::render_markdown(&markdown);
                let title = self
                    .model
                    .files
                    .iter()
                    .find(|e| e.path == path)
                    .map(|e| e.title.clone())
                    .unwrap_or_else(|| path.clone());

                self.model.preview = PreviewState::Ready { path, title, html };
            }
            Err(e) => {
                log_debug(&format!("Document fetch failed for {}: {}", path, e));
                self.model.preview = PreviewState::Failed {
                    message: format!("Error: {}", e),
                };
            }
        }
    }

    pub(crate) fn scroll_preview_down(&mut self) {
        self.model.ui.preview_scroll = self.model.ui.preview_scroll.saturating_add(1);
    }

    pub(crate) fn scroll_preview_up(&mut self) {
        self.model.ui.preview_scroll = self.model.ui.preview_scroll.saturating_sub(1);
    }
}
