//! Keyboard input handling
//!
//! One event is processed to completion before the next; every state
//! change here is a direct model mutation followed by a full redraw.
//!
//! Focus moves between four panes: search box, contents sidebar, results
//! list, and the tabbed right pane (selection tray / preview).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::model::ui::Pane;
use crate::{ActiveTab, App};

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.should_quit = true;
        return;
    }

    // An open export dialog swallows the next key
    if app.model.ui.export_dialog.is_some() {
        app.model.ui.export_dialog = None;
        return;
    }

    if app.model.ui.focus == Pane::Search {
        handle_search_key(app, key);
        return;
    }

    // Global keys outside the search box
    match key.code {
        KeyCode::Char('q') => {
            app.model.should_quit = true;
            return;
        }
        KeyCode::Char('/') => {
            app.model.ui.focus = Pane::Search;
            return;
        }
        KeyCode::Tab => {
            app.model.ui.focus = next_pane(app.model.ui.focus, app.model.nav.visible);
            return;
        }
        KeyCode::Char('1') => {
            app.model.ui.active_tab = ActiveTab::Selection;
            return;
        }
        KeyCode::Char('2') => {
            app.model.ui.active_tab = ActiveTab::Preview;
            return;
        }
        KeyCode::Char('n') => {
            app.toggle_contents_pane();
            return;
        }
        KeyCode::Char('[') => {
            app.prev_document();
            return;
        }
        KeyCode::Char(']') => {
            app.next_document();
            return;
        }
        KeyCode::Char('b') => {
            app.back_to_index();
            return;
        }
        KeyCode::Char('p') => {
            app.drop_payload();
            return;
        }
        KeyCode::Char('e') => {
            app.export_selection();
            return;
        }
        KeyCode::Char('s') => {
            app.cycle_sort();
            return;
        }
        KeyCode::Char('c') => {
            app.cycle_category();
            return;
        }
        KeyCode::Char('r') => {
            app.cycle_repo();
            return;
        }
        KeyCode::Char('x') => {
            app.clear_filters();
            return;
        }
        _ => {}
    }

    match app.model.ui.focus {
        Pane::Search => unreachable!("handled above"),
        Pane::Results => handle_results_key(app, key),
        Pane::Contents => handle_contents_key(app, key),
        Pane::Side => handle_side_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            app.model.ui.focus = Pane::Results;
        }
        KeyCode::Backspace => app.search_backspace(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}

// The vim-style movement keys (j/k, g/G) are active only with vim_mode on;
// the arrow and Home/End keys always work.
fn handle_results_key(app: &mut App, key: KeyEvent) {
    let len = app.model.filtered.len();
    let vim = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Down => move_cursor(&mut app.model.ui.results_state, len, 1),
        KeyCode::Char('j') if vim => move_cursor(&mut app.model.ui.results_state, len, 1),
        KeyCode::Up => move_cursor(&mut app.model.ui.results_state, len, -1),
        KeyCode::Char('k') if vim => move_cursor(&mut app.model.ui.results_state, len, -1),
        KeyCode::Home => select_clamped(&mut app.model.ui.results_state, len, 0),
        KeyCode::Char('g') if vim => select_clamped(&mut app.model.ui.results_state, len, 0),
        KeyCode::End => {
            select_clamped(&mut app.model.ui.results_state, len, len.saturating_sub(1));
        }
        KeyCode::Char('G') if vim => {
            select_clamped(&mut app.model.ui.results_state, len, len.saturating_sub(1));
        }
        KeyCode::Enter => app.preview_selected_result(),
        KeyCode::Char('y') | KeyCode::Char(' ') => app.grab_selected(),
        KeyCode::Char('a') => app.send_selected_to_tray(),
        _ => {}
    }
}

fn handle_contents_key(app: &mut App, key: KeyEvent) {
    let len = crate::logic::navigation::visible_rows(&app.model.nav.groups).len();
    let vim = app.model.ui.vim_mode;
    match key.code {
        KeyCode::Down => move_cursor(&mut app.model.ui.nav_state, len, 1),
        KeyCode::Char('j') if vim => move_cursor(&mut app.model.ui.nav_state, len, 1),
        KeyCode::Up => move_cursor(&mut app.model.ui.nav_state, len, -1),
        KeyCode::Char('k') if vim => move_cursor(&mut app.model.ui.nav_state, len, -1),
        KeyCode::Enter | KeyCode::Char(' ') => app.contents_activate(),
        KeyCode::Char('+') => app.expand_all_groups(),
        KeyCode::Char('-') => app.collapse_all_groups(),
        _ => {}
    }
}

fn handle_side_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;
    match app.model.ui.active_tab {
        ActiveTab::Selection => {
            let len = app.model.selection.len();
            match key.code {
                KeyCode::Down => move_cursor(&mut app.model.ui.tray_state, len, 1),
                KeyCode::Char('j') if vim => move_cursor(&mut app.model.ui.tray_state, len, 1),
                KeyCode::Up => move_cursor(&mut app.model.ui.tray_state, len, -1),
                KeyCode::Char('k') if vim => move_cursor(&mut app.model.ui.tray_state, len, -1),
                KeyCode::Enter => app.preview_selected_tray_entry(),
                KeyCode::Char('d') | KeyCode::Delete => app.remove_tray_selected(),
                _ => {}
            }
        }
        ActiveTab::Preview => match key.code {
            KeyCode::Down => app.scroll_preview_down(),
            KeyCode::Char('j') if vim => app.scroll_preview_down(),
            KeyCode::Up => app.scroll_preview_up(),
            KeyCode::Char('k') if vim => app.scroll_preview_up(),
            _ => {}
        },
    }
}

/// Focus order: search -> contents (when visible) -> results -> side
fn next_pane(current: Pane, contents_visible: bool) -> Pane {
    match current {
        Pane::Search => {
            if contents_visible {
                Pane::Contents
            } else {
                Pane::Results
            }
        }
        Pane::Contents => Pane::Results,
        Pane::Results => Pane::Side,
        Pane::Side => Pane::Search,
    }
}

/// Move a list cursor by delta, clamped to [0, len)
fn move_cursor(state: &mut ListState, len: usize, delta: i64) {
    if len == 0 {
        state.select(None);
        return;
    }

    let current = state.selected().unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, len as i64 - 1) as usize;
    state.select(Some(next));
}

fn select_clamped(state: &mut ListState, len: usize, idx: usize) {
    if len == 0 {
        state.select(None);
    } else {
        state.select(Some(idx.min(len - 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::DocIndex;
    use crate::model::Model;
    use std::time::Duration;

    fn make_app(vim_mode: bool) -> App {
        let (fetch_tx, _requests) = tokio::sync::mpsc::unbounded_channel();
        let (_responses, fetch_rx) = tokio::sync::mpsc::unbounded_channel();

        let mut app = App {
            model: Model::new(vim_mode),
            fetch_tx,
            fetch_rx,
            debounce: Duration::ZERO,
        };

        let index: DocIndex = serde_json::from_str(
            r#"{
                "files": [
                    {"path": "docs/a.md", "title": "Alpha"},
                    {"path": "docs/b.md", "title": "Beta"}
                ],
                "categories": [],
                "repos": []
            }"#,
        )
        .unwrap();
        app.model.load_index(index);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_vim_movement_requires_the_flag() {
        let mut app = make_app(false);
        assert_eq!(app.model.ui.results_state.selected(), Some(0));

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(
            app.model.ui.results_state.selected(),
            Some(0),
            "j is inert without vim_mode"
        );

        press(&mut app, KeyCode::Down);
        assert_eq!(app.model.ui.results_state.selected(), Some(1), "arrows always work");
    }

    #[test]
    fn test_vim_movement_active_with_the_flag() {
        let mut app = make_app(true);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.model.ui.results_state.selected(), Some(1));

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.ui.results_state.selected(), Some(0));

        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.model.ui.results_state.selected(), Some(1));
    }

    #[test]
    fn test_move_cursor_clamps_at_ends() {
        let mut state = ListState::default();
        move_cursor(&mut state, 3, -1);
        assert_eq!(state.selected(), Some(0));

        move_cursor(&mut state, 3, 1);
        move_cursor(&mut state, 3, 1);
        move_cursor(&mut state, 3, 1);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_move_cursor_empty_list() {
        let mut state = ListState::default();
        state.select(Some(1));
        move_cursor(&mut state, 0, 1);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_focus_cycle_skips_hidden_contents() {
        assert_eq!(next_pane(Pane::Search, false), Pane::Results);
        assert_eq!(next_pane(Pane::Search, true), Pane::Contents);
        assert_eq!(next_pane(Pane::Side, true), Pane::Search);
    }
}
