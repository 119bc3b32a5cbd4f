//! Tests for reading-order navigation across the contents tree
//!
//! Previous/next stepping walks the document leaves in group order, then
//! manifest order within each group, regardless of which groups are
//! collapsed on screen. These tests drive the tree through Model::load_index
//! so grouping matches what the sidebar shows.

use doctui::logic::navigation::{document_order, neighbors, visible_rows};
use doctui::model::types::DocIndex;
use doctui::model::Model;

fn make_index() -> DocIndex {
    serde_json::from_str(
        r#"{
            "files": [
                {"path": "docs/intro.md", "title": "Introduction", "category": "Guides"},
                {"path": "docs/api/users.md", "title": "Users API", "category": "Api"},
                {"path": "docs/install.md", "title": "Installation", "category": "Guides"},
                {"path": "docs/changelog.md", "title": "Changelog"}
            ],
            "categories": ["Guides", "Api"],
            "repos": []
        }"#,
    )
    .expect("index fixture should parse")
}

#[test]
fn test_reading_order_groups_by_category() {
    let mut model = Model::new(false);
    model.load_index(make_index());

    let order: Vec<_> = document_order(&model.nav.groups)
        .iter()
        .map(|e| e.path.as_str())
        .collect();

    // Guides (manifest order), then Api, then the Other fallback group
    assert_eq!(
        order,
        vec![
            "docs/intro.md",
            "docs/install.md",
            "docs/api/users.md",
            "docs/changelog.md"
        ]
    );
}

#[test]
fn test_stepping_crosses_group_boundaries() {
    let mut model = Model::new(false);
    model.load_index(make_index());

    let (prev, next) = neighbors(&model.nav.groups, "docs/install.md");
    assert_eq!(prev.map(|e| e.path.as_str()), Some("docs/intro.md"));
    assert_eq!(
        next.map(|e| e.path.as_str()),
        Some("docs/api/users.md"),
        "next steps into the following group"
    );
}

#[test]
fn test_stepping_ignores_collapse_state() {
    let mut model = Model::new(false);
    model.load_index(make_index());

    let collapsed = neighbors(&model.nav.groups, "docs/install.md");
    let collapsed = (
        collapsed.0.map(|e| e.path.clone()),
        collapsed.1.map(|e| e.path.clone()),
    );
    model.nav.expand_all();
    let expanded = neighbors(&model.nav.groups, "docs/install.md");

    assert_eq!(
        collapsed.0.as_ref(),
        expanded.0.map(|e| &e.path)
    );
    assert_eq!(
        collapsed.1.as_ref(),
        expanded.1.map(|e| &e.path)
    );
}

#[test]
fn test_sidebar_rows_expand_and_collapse() {
    let mut model = Model::new(false);
    model.load_index(make_index());

    // Collapsed by default: one row per group header
    assert_eq!(visible_rows(&model.nav.groups).len(), 3);

    model.nav.expand_all();
    assert_eq!(visible_rows(&model.nav.groups).len(), 7); // 3 headers + 4 leaves

    model.nav.collapse_all();
    assert_eq!(visible_rows(&model.nav.groups).len(), 3);
}

#[test]
fn test_ends_of_the_reading_order() {
    let mut model = Model::new(false);
    model.load_index(make_index());

    let (prev, _) = neighbors(&model.nav.groups, "docs/intro.md");
    assert!(prev.is_none(), "the first document has no previous");

    let (_, next) = neighbors(&model.nav.groups, "docs/changelog.md");
    assert!(next.is_none(), "the last document has no next");
}
