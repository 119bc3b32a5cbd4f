//! Markdown conversion
//!
//! Converts a fetched document's raw text to HTML through a fixed, ordered
//! list of pattern substitutions. This is deliberately not a parser: there
//! is no escaping of HTML metacharacters, no nested emphasis, and no
//! malformed-input detection. Any input passes through deterministically
//! with whatever formatting the patterns produce, keeping the output
//! bit-compatible with the pages the static site already serves.

use regex::Regex;
use std::sync::LazyLock;

/// The ordered substitution list, compiled once on first use.
///
/// The order is observable; later patterns see the output of earlier ones:
/// 1. `### ` / `## ` / `# ` line prefixes to h3/h2/h1
/// 2. `**bold**` to strong (greedy within a line)
/// 3. `*italic*` to em (greedy within a line)
/// 4. `![alt](src)` to img
/// 5. `[text](href)` to anchor
/// 6. newline-at-line-end (blank line or end of text) to `<br />`
/// 7. triple-backtick fences to pre/code (this runs after step 6, so blank
///    lines inside fences pick up `<br />` first)
/// 8. `` `code` `` to inline code
static SUBSTITUTIONS: LazyLock<[(Regex, &'static str); 10]> = LazyLock::new(|| {
    [
        (Regex::new(r"(?m)^### (.*)$").unwrap(), "<h3>${1}</h3>"),
        (Regex::new(r"(?m)^## (.*)$").unwrap(), "<h2>${1}</h2>"),
        (Regex::new(r"(?m)^# (.*)$").unwrap(), "<h1>${1}</h1>"),
        (Regex::new(r"\*\*(.*)\*\*").unwrap(), "<strong>${1}</strong>"),
        (Regex::new(r"\*(.*)\*").unwrap(), "<em>${1}</em>"),
        (
            Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap(),
            "<img alt='${1}' src='${2}' />",
        ),
        (
            Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap(),
            "<a href='${2}'>${1}</a>",
        ),
        (Regex::new(r"(?m)\n$").unwrap(), "<br />"),
        (
            Regex::new(r"(?s)```(.*?)```").unwrap(),
            "<pre><code>${1}</code></pre>",
        ),
        (Regex::new(r"`([^`]+)`").unwrap(), "<code>${1}</code>"),
    ]
});

/// Convert raw markdown text to HTML by applying the substitution list
pub fn render_markdown(markdown: &str) -> String {
    let mut html = markdown.to_string();
    for (pattern, replacement) in SUBSTITUTIONS.iter() {
        html = pattern.replace_all(&html, *replacement).to_string();
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(render_markdown("# One"), "<h1>One</h1>");
        assert_eq!(render_markdown("## Two"), "<h2>Two</h2>");
        assert_eq!(render_markdown("### Three"), "<h3>Three</h3>");
    }

    #[test]
    fn test_title_then_bold() {
        let html = render_markdown("# Title\n**bold**");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(render_markdown("*word*"), "<em>word</em>");
        assert_eq!(
            render_markdown("**strong** and *soft*"),
            "<strong>strong</strong> and <em>soft</em>"
        );
    }

    #[test]
    fn test_image_before_link() {
        assert_eq!(
            render_markdown("![logo](img.png)"),
            "<img alt='logo' src='img.png' />"
        );
        assert_eq!(
            render_markdown("[home](index.md)"),
            "<a href='index.md'>home</a>"
        );
    }

    #[test]
    fn test_fenced_code_block() {
        let html = render_markdown("```\nlet x = 1;\n```");
        assert_eq!(html, "<pre><code>\nlet x = 1;\n</code></pre>");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(render_markdown("use `cargo`"), "use <code>cargo</code>");
    }

    #[test]
    fn test_blank_line_becomes_break() {
        let html = render_markdown("first\n\nsecond");
        assert_eq!(html, "first<br />\nsecond");
    }

    #[test]
    fn test_break_inside_fence_quirk() {
        // The line-break pass runs before the fence pass, so a blank line
        // inside a fence carries a <br /> into the code block
        let html = render_markdown("```\na\n\nb\n```");
        assert_eq!(html, "<pre><code>\na<br />\nb\n</code></pre>");
    }

    #[test]
    fn test_html_passes_through_unescaped() {
        // Documentation content is first-party; metacharacters are not
        // escaped
        assert_eq!(render_markdown("<b>raw</b>"), "<b>raw</b>");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render_markdown("just words"), "just words");
    }

    #[test]
    fn test_repeated_conversion_is_stable() {
        // The shared compiled patterns give the same output on every call
        let source = "# Title\n\n**bold** and `code`";
        assert_eq!(render_markdown(source), render_markdown(source));
    }
}
