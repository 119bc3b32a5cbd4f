//! Document preview pane
//!
//! Displays the converted HTML as styled terminal text. The converter in
//! logic::markdown produces a small, known tag set (headings, strong, em,
//! anchors, images, code, breaks); this module walks that output and maps
//! each tag to a ratatui style. Tags outside the known set (possible with
//! raw HTML in a document, which the converter passes through unescaped)
//! are dropped from the display.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::types::PreviewState;

pub fn render_preview(
    f: &mut Frame,
    area: Rect,
    preview: &PreviewState,
    scroll: u16,
    is_focused: bool,
) {
    let border_color = if is_focused { Color::Cyan } else { Color::Gray };

    let (title, lines) = match preview {
        PreviewState::Empty => (
            " Preview ".to_string(),
            vec![Line::from(Span::styled(
                "Open a document to preview it",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        PreviewState::Loading { title } => (
            " Preview ".to_string(),
            vec![Line::from(Span::styled(
                format!("Loading {}...", title),
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        PreviewState::Failed { message } => (
            " Preview ".to_string(),
            vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        PreviewState::Ready { title, html, .. } => {
            (format!(" Preview - {} ", title), html_to_lines(html))
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

#[derive(Default)]
struct InlineStyle {
    heading: u8,
    strong: bool,
    em: bool,
    code: bool,
    link: bool,
}

impl InlineStyle {
    fn style(&self) -> Style {
        let mut style = match self.heading {
            1 => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            2 => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            3 => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            _ => Style::default(),
        };

        if self.strong {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.em {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.code {
            style = style.fg(Color::LightYellow);
        }
        if self.link {
            style = style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
        }

        style
    }
}

/// Map converted HTML to styled lines
///
/// Newlines and `<br />` both end the current line, so source line
/// structure survives the round trip through the converter.
pub fn html_to_lines(html: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();
    let mut spans: Vec<Span> = Vec::new();
    let mut buffer = String::new();
    let mut style = InlineStyle::default();

    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                flush_span(&mut spans, &mut buffer, &style);
                lines.push(Line::from(std::mem::take(&mut spans)));
            }
            '<' => {
                let mut tag = String::new();
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                    tag.push(t);
                }
                flush_span(&mut spans, &mut buffer, &style);
                apply_tag(&tag, &mut style, &mut spans, &mut lines);
            }
            _ => buffer.push(c),
        }
    }

    flush_span(&mut spans, &mut buffer, &style);
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

fn flush_span(spans: &mut Vec<Span<'static>>, buffer: &mut String, style: &InlineStyle) {
    if buffer.is_empty() {
        return;
    }
    spans.push(Span::styled(std::mem::take(buffer), style.style()));
}

fn apply_tag(
    tag: &str,
    style: &mut InlineStyle,
    spans: &mut Vec<Span<'static>>,
    lines: &mut Vec<Line<'static>>,
) {
    let name = tag
        .trim_start_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("");
    let closing = tag.starts_with('/');

    match name {
        "h1" | "h2" | "h3" => {
            let level = name.as_bytes()[1] - b'0';
            if closing {
                style.heading = 0;
                lines.push(Line::from(std::mem::take(spans)));
            } else {
                if !spans.is_empty() {
                    lines.push(Line::from(std::mem::take(spans)));
                }
                style.heading = level;
            }
        }
        "strong" => style.strong = !closing,
        "em" => style.em = !closing,
        "code" | "pre" => style.code = !closing,
        "a" => style.link = !closing,
        "br" => lines.push(Line::from(std::mem::take(spans))),
        "img" => {
            let src = attr_value(tag, "src").unwrap_or_default();
            spans.push(Span::styled(
                format!("[image: {}]", src),
                Style::default().fg(Color::Magenta),
            ));
        }
        // Raw passthrough HTML: dropped from the terminal display
        _ => {}
    }
}

/// Extract a single-quoted attribute value from a tag body
fn attr_value(tag: &str, name: &str) -> Option<String> {
    let marker = format!("{}='", name);
    let start = tag.find(&marker)? + marker.len();
    let rest = &tag[start..];
    let end = rest.find('\'')?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_becomes_own_line() {
        let lines = html_to_lines("<h1>Title</h1>\n<strong>bold</strong>");
        assert_eq!(lines.len(), 3); // heading, line break after it, text
        assert_eq!(lines[0].spans[0].content, "Title");
    }

    #[test]
    fn test_break_preserves_blank_line() {
        let lines = html_to_lines("first<br />\nsecond");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].content, "first");
        assert!(lines[1].spans.is_empty());
    }

    #[test]
    fn test_image_placeholder() {
        let lines = html_to_lines("<img alt='logo' src='img.png' />");
        assert_eq!(lines[0].spans[0].content, "[image: img.png]");
    }

    #[test]
    fn test_attr_value_parsing() {
        assert_eq!(
            attr_value("a href='index.md'", "href"),
            Some("index.md".to_string())
        );
        assert_eq!(attr_value("a", "href"), None);
    }

    #[test]
    fn test_unknown_tags_dropped() {
        let lines = html_to_lines("<b>raw</b>");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "raw");
    }
}
