//! Search Input UI
//!
//! Renders the search input box with the current term, a blinking cursor
//! while focused, and the active category/repo/sort choices.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::formatting::format_choice;
use crate::model::types::FilterState;

/// Render the search box above the content panes
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `filters`: Current filter state (search term + choices)
/// - `active`: Whether the box is receiving keystrokes
/// - `match_count`: Size of the visible subset (None before the index loads)
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    filters: &FilterState,
    active: bool,
    match_count: Option<usize>,
) {
    let title = if active {
        match match_count {
            Some(count) => format!(" Search ({} matches) - Esc to leave ", count),
            None => " Search - Esc to leave ".to_string(),
        }
    } else {
        " Search (/) ".to_string()
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let choices = format!(
        "  [{} | {} | sort: {}]",
        format_choice(&filters.category, "All Categories"),
        format_choice(&filters.repo, "All Repos"),
        filters.sort.as_str()
    );

    let input_line = if active {
        Line::from(vec![
            Span::raw("Find: "),
            Span::raw(filters.search.clone()),
            Span::styled("█", cursor_style),
            Span::styled(choices, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                format!("Find: {}", filters.search),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(choices, Style::default().fg(Color::DarkGray)),
        ])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);
    f.render_widget(paragraph, area);
}
