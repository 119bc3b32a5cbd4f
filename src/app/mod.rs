//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in src/model/)
//! - The fetch service (in src/services/)
//! - Logic (pure business logic in src/logic/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod preview;
pub(crate) mod selection;
