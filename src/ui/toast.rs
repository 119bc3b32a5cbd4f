//! Transient toast notifications
//!
//! Drawn in the bottom-right corner over whatever is underneath. The
//! message is dismissed by the main loop after a short delay.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn render_toast(f: &mut Frame, message: &str) {
    let frame_area = f.area();
    let width = (message.width() as u16 + 4).min(frame_area.width);
    let height = 3u16.min(frame_area.height);

    let area = Rect::new(
        frame_area.right().saturating_sub(width + 1),
        frame_area.bottom().saturating_sub(height + 1),
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", message),
        Style::default().fg(Color::Green),
    )))
    .block(block);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
