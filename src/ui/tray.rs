//! Selection tray
//!
//! An empty tray shows the literal placeholder instruction; a non-empty
//! tray lists each member. While a grabbed payload is in hand the pane
//! shows drop-target feedback.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::selection::Selection;

pub fn render_tray(
    f: &mut Frame,
    area: Rect,
    selection: &Selection,
    state: &mut ListState,
    is_focused: bool,
    payload_in_hand: bool,
) {
    // Drop-target feedback while a drag is in progress over the pane
    let (border_color, title) = if payload_in_hand {
        (Color::Yellow, " Selection - press p to drop ".to_string())
    } else if is_focused {
        (Color::Cyan, format!(" Selection ({}) ", selection.len()))
    } else {
        (Color::Gray, format!(" Selection ({}) ", selection.len()))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    if selection.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Drag items here to select them",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = selection
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(entry.title.clone()),
                Span::styled(
                    "  (d to remove)",
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(list, area, state);
}
