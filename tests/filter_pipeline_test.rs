//! Tests for the filter pipeline over a loaded index
//!
//! The visible subset is derived from the full entry list by applying the
//! free-text search, the category choice, and the repo choice together,
//! then sorting by the active key. The two choice filters have different
//! fallbacks for entries missing the field:
//! - category: an absent category matches the "Other" choice
//! - repo: an absent repo compares as the empty string, so it never
//!   matches any named repo choice
//!
//! These tests drive the pipeline through Model::load_index the way the
//! main loop does.

use doctui::model::types::{DocIndex, FilterState};
use doctui::model::Model;
use doctui::logic::filters::apply_filters;
use doctui::SortKey;

fn make_index() -> DocIndex {
    serde_json::from_str(
        r#"{
            "files": [
                {"path": "docs/ctl/users.md", "title": "Users", "summary": "User management",
                 "category": "Controllers", "repo": "backend"},
                {"path": "docs/ctl/billing.md", "title": "Billing", "summary": "Invoices",
                 "category": "Controllers", "repo": "backend"},
                {"path": "docs/svc/mailer.md", "title": "Mailer", "summary": "Outbound mail",
                 "category": "Services", "repo": "backend"},
                {"path": "docs/web/home.md", "title": "Home Page", "summary": "Landing page",
                 "category": "Views", "repo": "frontend"},
                {"path": "docs/misc/notes.md", "title": "Notes"}
            ],
            "categories": ["Controllers", "Services", "Views"],
            "repos": ["backend", "frontend"]
        }"#,
    )
    .expect("index fixture should parse")
}

fn loaded_model() -> Model {
    let mut model = Model::new(false);
    model.load_index(make_index());
    model
}

#[test]
fn test_all_filters_combine() {
    let mut model = loaded_model();

    model.filters.search = "user".to_string();
    model.filters.category = "Controllers".to_string();
    model.filters.repo = "backend".to_string();
    model.recompute_filtered();

    let titles: Vec<_> = model.filtered.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Users"]);
}

#[test]
fn test_search_matches_title_summary_and_path() {
    let mut model = loaded_model();

    // Summary hit
    model.filters.search = "invoices".to_string();
    model.recompute_filtered();
    assert_eq!(model.filtered.len(), 1);
    assert_eq!(model.filtered[0].title, "Billing");

    // Path hit
    model.filters.search = "docs/svc".to_string();
    model.recompute_filtered();
    assert_eq!(model.filtered.len(), 1);
    assert_eq!(model.filtered[0].title, "Mailer");
}

#[test]
fn test_entry_without_category_matches_other() {
    let mut model = loaded_model();

    model.filters.category = "Other".to_string();
    model.recompute_filtered();

    let titles: Vec<_> = model.filtered.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Notes"], "only the uncategorized entry should match 'Other'");
}

#[test]
fn test_entry_without_repo_never_matches_named_repo() {
    let mut model = loaded_model();

    model.filters.repo = "backend".to_string();
    model.recompute_filtered();

    assert!(
        model.filtered.iter().all(|e| e.repo.as_deref() == Some("backend")),
        "an entry with no repo must not appear under a named repo choice"
    );
}

#[test]
fn test_wildcard_choices_keep_everything() {
    let model = loaded_model();
    assert_eq!(model.filtered.len(), model.files.len());
}

#[test]
fn test_sort_key_changes_ordering() {
    let mut model = loaded_model();

    model.filters.sort = SortKey::Repo;
    model.recompute_filtered();

    let repos: Vec<_> = model
        .filtered
        .iter()
        .map(|e| e.repo.as_deref().unwrap_or(""))
        .collect();
    let mut sorted = repos.clone();
    sorted.sort();
    assert_eq!(repos, sorted, "repo sort must be non-decreasing, absent repo first");
    assert_eq!(repos[0], "", "the repo-less entry sorts as the empty string");
}

#[test]
fn test_filtering_is_idempotent() {
    let model = loaded_model();
    let mut filters = FilterState::new();
    filters.search = "a".to_string();

    let once = apply_filters(&model.files, &filters);
    let twice = apply_filters(&once, &filters);
    assert_eq!(once, twice);
}

#[test]
fn test_cursor_survives_a_narrowing_filter() {
    let mut model = loaded_model();
    model.ui.results_state.select(Some(4));

    model.filters.search = "mailer".to_string();
    model.recompute_filtered();

    assert_eq!(model.filtered.len(), 1);
    assert_eq!(
        model.ui.results_state.selected(),
        Some(0),
        "cursor must be clamped into the narrowed subset"
    );
}
