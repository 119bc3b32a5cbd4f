//! Event Handlers
//!
//! This module contains handlers for the two event sources:
//! - fetch: responses from the background fetch service
//! - keyboard: user keyboard input
//!
//! Handlers are methods-on-App style functions that take &mut App and
//! process one event to completion before the next is handled.

pub mod fetch;
pub mod keyboard;

// Re-export for convenience
pub use fetch::handle_fetch_response;
pub use keyboard::handle_key_event;
