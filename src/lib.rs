//! Documentation Index Explorer Library
//!
//! Exposes the pure modules for testing

pub mod api;
pub mod logic;
pub mod model;

/// Sort key for the results list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,    // Default manifest ordering key
    Category, // Group related documents together
    Repo,     // Group by source repository
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Category => "Category",
            SortKey::Repo => "Repo",
        }
    }

    /// Cycle to the next sort key (Title -> Category -> Repo -> Title)
    pub fn next(&self) -> Self {
        match self {
            SortKey::Title => SortKey::Category,
            SortKey::Category => SortKey::Repo,
            SortKey::Repo => SortKey::Title,
        }
    }
}

/// Which tab of the right-hand pane is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Selection,
    Preview,
}

impl ActiveTab {
    pub fn as_str(&self) -> &str {
        match self {
            ActiveTab::Selection => "Selection",
            ActiveTab::Preview => "Preview",
        }
    }
}
