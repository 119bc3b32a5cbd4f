//! Side column tab strip

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Tabs,
    Frame,
};

use crate::ActiveTab;

pub fn render_tabs(f: &mut Frame, area: Rect, active: ActiveTab, selection_count: usize) {
    let titles = vec![
        Line::from(Span::raw(format!(
            "[1] {} ({})",
            ActiveTab::Selection.as_str(),
            selection_count
        ))),
        Line::from(Span::raw(format!("[2] {}", ActiveTab::Preview.as_str()))),
    ];

    let selected = match active {
        ActiveTab::Selection => 0,
        ActiveTab::Preview => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}
