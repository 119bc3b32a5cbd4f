//! Tests for the markdown-to-HTML conversion over whole documents
//!
//! The converter is a fixed sequence of regex substitutions, and the
//! sequence order is observable:
//! - headings convert longest marker first, so "### x" never half-matches
//!   the "# x" rule
//! - blank lines become <br /> before fenced blocks are wrapped, so a
//!   fence containing a blank line carries the <br /> inside its <pre>
//!
//! Raw HTML in the source is passed through unescaped; the documents are
//! first-party.

use doctui::logic::markdown::render_markdown;

#[test]
fn test_full_document_conversion() {
    let source = "# API Guide\n\
                  \n\
                  Start with **authentication**, then see the *endpoints*.\n\
                  \n\
                  ## Authentication\n\
                  Send the token as `Authorization: Bearer`.\n\
                  \n\
                  ![flow](images/flow.png)\n\
                  More in the [reference](reference.md).";

    let html = render_markdown(source);

    assert!(html.contains("<h1>API Guide</h1>"));
    assert!(html.contains("<h2>Authentication</h2>"));
    assert!(html.contains("<strong>authentication</strong>"));
    assert!(html.contains("<em>endpoints</em>"));
    assert!(html.contains("<code>Authorization: Bearer</code>"));
    assert!(html.contains("<img alt='flow' src='images/flow.png' />"));
    assert!(html.contains("<a href='reference.md'>reference</a>"));
    assert!(html.contains("<br />"), "blank lines become explicit breaks");
}

#[test]
fn test_heading_levels_do_not_shadow() {
    let html = render_markdown("### Third\n## Second\n# First");
    assert!(html.contains("<h3>Third</h3>"));
    assert!(html.contains("<h2>Second</h2>"));
    assert!(html.contains("<h1>First</h1>"));
}

#[test]
fn test_fence_with_blank_line_contains_break() {
    let source = "```\nlet a = 1;\n\nlet b = 2;\n```";
    let html = render_markdown(source);

    let pre_start = html.find("<pre>").expect("fence should be wrapped");
    let pre_end = html.find("</pre>").expect("fence should be closed");
    let inner = &html[pre_start..pre_end];
    assert!(
        inner.contains("<br />"),
        "a blank line inside a fence keeps its break marker: {}",
        html
    );
}

#[test]
fn test_inline_code_inside_sentence() {
    let html = render_markdown("Run `make docs` to regenerate.");
    assert_eq!(html, "Run <code>make docs</code> to regenerate.");
}

#[test]
fn test_raw_html_passes_through() {
    let html = render_markdown("Use <kbd>Ctrl</kbd>+<kbd>C</kbd> to copy.");
    assert!(html.contains("<kbd>Ctrl</kbd>"));
}

#[test]
fn test_plain_text_untouched() {
    let source = "just a plain line of text";
    assert_eq!(render_markdown(source), source);
}
