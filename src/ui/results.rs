//! Result cards
//!
//! Renders the visible subset as cards: title, category badge, repo, and
//! summary. The list is rebuilt from scratch each frame; there is no
//! incremental diffing.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::model::types::FileEntry;

/// Render the results pane
///
/// Three display states: index still loading, index failed (literal error
/// message in place of results), and loaded (cards or the "no matches"
/// placeholder).
#[allow(clippy::too_many_arguments)]
pub fn render_results(
    f: &mut Frame,
    area: Rect,
    entries: &[FileEntry],
    index_loaded: bool,
    index_error: Option<&str>,
    state: &mut ListState,
    is_focused: bool,
) {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };

    let title = if index_loaded {
        let noun = if entries.len() == 1 {
            "document"
        } else {
            "documents"
        };
        format!(" {} {} ", entries.len(), noun)
    } else if index_error.is_some() {
        " Error loading index ".to_string()
    } else {
        " Loading index... ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    if let Some(message) = index_error {
        let error = Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
        .block(block)
        .wrap(Wrap { trim: false });
        f.render_widget(error, area);
        return;
    }

    if !index_loaded {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading index...",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(loading, area);
        return;
    }

    if entries.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No matches found.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = entries.iter().map(card_item).collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(list, area, state);
}

/// One card: title line, meta line (badge + repo), summary line
fn card_item(entry: &FileEntry) -> ListItem<'static> {
    let title_line = Line::from(Span::styled(
        entry.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let meta_line = Line::from(vec![
        Span::styled(
            format!("[{}]", entry.category_label()),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw(" "),
        Span::styled(
            entry.repo_label().to_string(),
            Style::default().fg(Color::Blue),
        ),
    ]);

    let summary_line = Line::from(Span::styled(
        entry.summary_text().to_string(),
        Style::default().fg(Color::DarkGray),
    ));

    ListItem::new(vec![title_line, meta_line, summary_line])
}
