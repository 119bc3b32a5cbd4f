use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Search input area (top, full width)
    pub search_area: Rect,
    /// Contents sidebar area (if visible)
    pub contents_area: Option<Rect>,
    /// Filtered results area
    pub results_area: Rect,
    /// Tab header above the side pane
    pub tabs_area: Rect,
    /// Side pane content (selection tray or preview)
    pub side_area: Rect,
    /// Hotkey legend area (if the terminal is tall enough)
    pub legend_area: Option<Rect>,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, contents_visible: bool) -> LayoutInfo {
    // Drop the legend on short terminals rather than squeezing the lists
    let legend_height = if terminal_size.height >= 14 { 3 } else { 0 };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Search input (bordered)
            Constraint::Min(3),                // Content area
            Constraint::Length(legend_height), // Hotkey legend
            Constraint::Length(1),             // Status bar
        ])
        .split(terminal_size);

    let search_area = main_chunks[0];
    let content_area = main_chunks[1];
    let legend_area = if legend_height > 0 {
        Some(main_chunks[2])
    } else {
        None
    };
    let status_area = main_chunks[3];

    // Content: optional contents sidebar, results, side pane
    let horizontal: Vec<Constraint> = if contents_visible {
        vec![
            Constraint::Length(28),
            Constraint::Percentage(40),
            Constraint::Min(30),
        ]
    } else {
        vec![Constraint::Percentage(50), Constraint::Min(30)]
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(horizontal)
        .split(content_area);

    let (contents_area, results_area, side_column) = if contents_visible {
        (Some(chunks[0]), chunks[1], chunks[2])
    } else {
        (None, chunks[0], chunks[1])
    };

    // Side pane: tab header above the tabbed content
    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(2)])
        .split(side_column);

    LayoutInfo {
        search_area,
        contents_area,
        results_area,
        tabs_area: side_chunks[0],
        side_area: side_chunks[1],
        legend_area,
        status_area,
    }
}
