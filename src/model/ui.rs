//! UI state - focus, tabs, toasts, and the in-flight drag payload

use ratatui::widgets::ListState;
use std::time::Instant;

use crate::ActiveTab;

/// Which pane currently receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// Search input box
    Search,

    /// Contents sidebar
    Contents,

    /// Filtered results list
    Results,

    /// Right-hand pane (selection tray or preview, per active tab)
    Side,
}

#[derive(Debug)]
pub struct UiState {
    pub active_tab: ActiveTab,
    pub focus: Pane,

    /// Selection cursors for the three lists
    pub results_state: ListState,
    pub tray_state: ListState,
    pub nav_state: ListState,

    /// Serialized entry picked up by a grab, awaiting a drop
    pub drag_payload: Option<String>,

    /// Export dialog contents, if open
    pub export_dialog: Option<Vec<String>>,

    /// Toast notification (message, shown-at)
    pub toast_message: Option<(String, Instant)>,

    /// Set when a search keystroke arrives; the filter recomputation runs
    /// once the debounce delay has elapsed
    pub search_pending_since: Option<Instant>,

    /// Vertical scroll offset of the preview pane
    pub preview_scroll: u16,

    pub vim_mode: bool,
}

impl UiState {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            active_tab: ActiveTab::Selection,
            focus: Pane::Results,
            results_state: ListState::default(),
            tray_state: ListState::default(),
            nav_state: ListState::default(),
            drag_payload: None,
            export_dialog: None,
            toast_message: None,
            search_pending_since: None,
            preview_scroll: 0,
            vim_mode,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Toasts auto-dismiss after 1.5 seconds
    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .map(|(_, shown)| shown.elapsed().as_millis() >= 1500)
            .unwrap_or(false)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}
