//! External Services
//!
//! This module contains services that interact with external systems:
//! - fetch: background worker fetching the index and documents

pub mod fetch;

// Re-export commonly used types for convenience
pub use fetch::{FetchRequest, FetchResponse};
