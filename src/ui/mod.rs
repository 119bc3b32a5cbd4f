// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (search, contents, results, side pane)
// - render: Main orchestration function that coordinates all rendering
// - search: Renders the search input box and active filter summary
// - contents: Renders the collapsible contents sidebar
// - results: Renders the filtered result cards
// - tabs: Renders the selection/preview tab header
// - tray: Renders the selection tray
// - preview: Renders the converted document preview
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar
// - dialogs: Renders the export dialog
// - toast: Renders toast notifications (brief pop-up messages)

pub mod contents;
pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod preview;
pub mod render;
pub mod results;
pub mod search;
pub mod status_bar;
pub mod tabs;
pub mod toast;
pub mod tray;

// Re-export main render function for convenience
pub use render::render;
