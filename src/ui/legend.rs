//! Hotkey legend
//!
//! One row of context-sensitive hints, hidden on short terminals by the
//! layout pass.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::ui::Pane;

pub fn render_legend(f: &mut Frame, area: Rect, focus: Pane, vim_mode: bool) {
    let updown = if vim_mode { "j/k" } else { "↑/↓" };

    let hints: Vec<(&str, String)> = match focus {
        Pane::Search => vec![
            ("Esc", "done".to_string()),
            ("Enter", "results".to_string()),
        ],
        Pane::Contents => vec![
            (updown, "move".into()),
            ("Enter", "open/toggle".to_string()),
            ("+/-", "expand/collapse all".to_string()),
            ("n", "hide".to_string()),
        ],
        Pane::Results => vec![
            (updown, "move".into()),
            ("Enter", "preview".to_string()),
            ("y", "grab".to_string()),
            ("a", "select".to_string()),
            ("s/c/r", "sort/category/repo".to_string()),
            ("x", "clear".to_string()),
        ],
        Pane::Side => vec![
            (updown, "move".into()),
            ("Enter", "preview".to_string()),
            ("d", "remove".to_string()),
            ("e", "export".to_string()),
            ("[/]", "prev/next doc".to_string()),
            ("b", "back".to_string()),
        ],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}  ", action),
            Style::default().fg(Color::Gray),
        ));
    }

    let block = Block::default().borders(Borders::ALL).title(" Keys ");
    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(paragraph, area);
}
