//! Bottom status line

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Model;

pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let mut spans = vec![
        Span::styled(
            format!(" {}/{} docs ", model.filtered.len(), model.files.len()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("sort: {} ", model.filters.sort.as_str()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("selected: {} ", model.selection.len()),
            Style::default().fg(Color::Gray),
        ),
    ];

    if model.ui.drag_payload.is_some() {
        spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            "item in hand - p to drop ",
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    f.render_widget(paragraph, area);
}
