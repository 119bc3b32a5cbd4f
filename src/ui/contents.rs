//! Contents sidebar
//!
//! Renders the category tree with disclosure markers. Collapsed groups
//! show only their header; expanded groups list their documents indented
//! beneath.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::navigation::{NavGroup, NavRow};

pub fn render_contents(
    f: &mut Frame,
    area: Rect,
    groups: &[NavGroup],
    rows: &[NavRow],
    state: &mut ListState,
    is_focused: bool,
    active_path: Option<&str>,
) {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Contents ")
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = rows
        .iter()
        .filter_map(|row| row_item(groups, *row, active_path))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(list, area, state);
}

fn row_item(
    groups: &[NavGroup],
    row: NavRow,
    active_path: Option<&str>,
) -> Option<ListItem<'static>> {
    match row {
        NavRow::Group { group } => {
            let g = groups.get(group)?;
            let marker = if g.collapsed { "▸" } else { "▾" };
            Some(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", marker),
                    Style::default().fg(Color::Magenta),
                ),
                Span::styled(
                    g.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", g.entries.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])))
        }
        NavRow::Doc { group, entry } => {
            let e = groups.get(group)?.entries.get(entry)?;
            let style = if active_path == Some(e.path.as_str()) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Some(ListItem::new(Line::from(Span::styled(
                format!("  {}", e.title),
                style,
            ))))
        }
    }
}
