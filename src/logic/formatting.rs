//! Label formatting helpers

use crate::model::types::WILDCARD;

/// Human-readable label for a filter choice: underscores and hyphens
/// become spaces, word initials are uppercased. The wildcard gets a
/// context-specific label ("All Categories", "All Repos").
pub fn format_choice(value: &str, wildcard_label: &str) -> String {
    if value == WILDCARD {
        return wildcard_label.to_string();
    }
    format_label(value)
}

/// Title-case a raw category or repo name
pub fn format_label(label: &str) -> String {
    let spaced = label.replace(['_', '-'], " ");
    let mut out = String::with_capacity(spaced.len());
    let mut at_word_start = true;

    for c in spaced.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c == ' ';
    }

    out
}
