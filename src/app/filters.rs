//! Filter input methods
//!
//! Search keystrokes are debounced; every other filter input recomputes the
//! visible subset immediately.

use std::time::Instant;

use crate::model::types::WILDCARD;
use crate::App;

impl App {
    /// Append a character to the search term (debounced)
    pub(crate) fn search_push(&mut self, c: char) {
        self.model.filters.search.push(c);
        self.model.ui.search_pending_since = Some(Instant::now());
    }

    /// Delete the last character of the search term (debounced)
    pub(crate) fn search_backspace(&mut self) {
        self.model.filters.search.pop();
        self.model.ui.search_pending_since = Some(Instant::now());
    }

    /// Run a pending debounced recomputation once the delay has elapsed
    pub(crate) fn tick_search_debounce(&mut self) {
        let due = self
            .model
            .ui
            .search_pending_since
            .map(|since| since.elapsed() >= self.debounce)
            .unwrap_or(false);

        if due {
            self.model.ui.search_pending_since = None;
            self.model.recompute_filtered();
        }
    }

    /// Reset search and both choice filters (sort key kept)
    pub(crate) fn clear_filters(&mut self) {
        self.model.filters.clear();
        self.recompute_now();
    }

    /// Step the category choice through the wildcard-prefixed enumeration
    pub(crate) fn cycle_category(&mut self) {
        self.model.filters.category =
            next_choice(&self.model.categories, &self.model.filters.category);
        self.recompute_now();
    }

    /// Step the repo choice through the wildcard-prefixed enumeration
    pub(crate) fn cycle_repo(&mut self) {
        self.model.filters.repo = next_choice(&self.model.repos, &self.model.filters.repo);
        self.recompute_now();
    }

    /// Step the sort key (title -> category -> repo)
    pub(crate) fn cycle_sort(&mut self) {
        self.model.filters.sort = self.model.filters.sort.next();
        self.recompute_now();
    }

    /// Immediate recomputation; the current search text (typed so far)
    /// applies, so any pending debounce window is settled here
    fn recompute_now(&mut self) {
        self.model.ui.search_pending_since = None;
        self.model.recompute_filtered();
    }
}

/// Next value in a choice list, wrapping; falls back to the wildcard when
/// the list is empty or the current value is missing from it
fn next_choice(choices: &[String], current: &str) -> String {
    if choices.is_empty() {
        return WILDCARD.to_string();
    }

    let pos = choices.iter().position(|c| c == current);
    match pos {
        Some(idx) => choices[(idx + 1) % choices.len()].clone(),
        None => choices[0].clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::DocIndex;
    use crate::model::Model;
    use crate::App;
    use std::time::Duration;

    fn make_app(debounce: Duration) -> App {
        let (fetch_tx, _requests) = tokio::sync::mpsc::unbounded_channel();
        let (_responses, fetch_rx) = tokio::sync::mpsc::unbounded_channel();

        let mut app = App {
            model: Model::new(false),
            fetch_tx,
            fetch_rx,
            debounce,
        };

        let index: DocIndex = serde_json::from_str(
            r#"{
                "files": [
                    {"path": "docs/a.md", "title": "Alpha", "category": "Guides"},
                    {"path": "docs/b.md", "title": "Beta", "category": "Guides"}
                ],
                "categories": ["Guides"],
                "repos": []
            }"#,
        )
        .unwrap();
        app.model.load_index(index);
        app
    }

    #[test]
    fn test_next_choice_wraps() {
        let choices = vec!["all".to_string(), "a".to_string(), "b".to_string()];
        assert_eq!(next_choice(&choices, "all"), "a");
        assert_eq!(next_choice(&choices, "b"), "all");
    }

    #[test]
    fn test_next_choice_empty_list() {
        assert_eq!(next_choice(&[], "anything"), WILDCARD);
    }

    #[test]
    fn test_search_keystroke_defers_recompute() {
        let mut app = make_app(Duration::from_secs(60));

        app.search_push('z');
        assert_eq!(app.model.filtered.len(), 2, "no recompute on the keystroke itself");
        assert!(app.model.ui.search_pending_since.is_some());

        app.tick_search_debounce();
        assert_eq!(app.model.filtered.len(), 2, "delay has not elapsed");
        assert!(app.model.ui.search_pending_since.is_some());
    }

    #[test]
    fn test_elapsed_debounce_applies_search() {
        let mut app = make_app(Duration::ZERO);

        for c in "beta".chars() {
            app.search_push(c);
        }
        app.tick_search_debounce();

        assert_eq!(app.model.filtered.len(), 1);
        assert_eq!(app.model.filtered[0].title, "Beta");
        assert!(app.model.ui.search_pending_since.is_none());
    }

    #[test]
    fn test_next_keystroke_restarts_the_window() {
        let mut app = make_app(Duration::from_secs(60));

        app.search_push('b');
        let first = app.model.ui.search_pending_since.unwrap();
        app.search_push('e');
        let second = app.model.ui.search_pending_since.unwrap();

        assert!(second >= first, "each keystroke re-arms the pending window");
    }

    #[test]
    fn test_backspace_is_debounced_too() {
        let mut app = make_app(Duration::from_secs(60));

        app.search_push('b');
        app.tick_search_debounce();
        app.search_backspace();
        assert!(app.model.ui.search_pending_since.is_some());
        assert_eq!(app.model.filtered.len(), 2);
    }

    #[test]
    fn test_choice_cycle_recomputes_immediately() {
        let mut app = make_app(Duration::from_secs(60));

        app.search_push('b');
        app.cycle_category();

        assert!(
            app.model.ui.search_pending_since.is_none(),
            "the immediate recompute settles the pending window"
        );
        // "all" -> "Guides"; the typed-so-far term applies with it
        assert_eq!(app.model.filters.category, "Guides");
        assert_eq!(app.model.filtered.len(), 1);
        assert_eq!(app.model.filtered[0].title, "Beta");
    }

    #[test]
    fn test_clear_filters_recomputes_immediately() {
        let mut app = make_app(Duration::from_secs(60));

        app.search_push('b');
        app.clear_filters();

        assert!(app.model.ui.search_pending_since.is_none());
        assert!(app.model.filters.search.is_empty());
        assert_eq!(app.model.filtered.len(), 2);
    }
}
