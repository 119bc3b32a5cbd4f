//! Fetch response handling
//!
//! Applies completed fetches to the model. Failures become display strings
//! rendered in the relevant pane; nothing is retried and nothing is fatal.

use crate::services::FetchResponse;
use crate::{log_debug, App};

pub fn handle_fetch_response(app: &mut App, response: FetchResponse) {
    match response {
        FetchResponse::IndexResult(Ok(index)) => {
            log_debug(&format!(
                "Index loaded: {} files, {} categories, {} repos",
                index.files.len(),
                index.categories.len(),
                index.repos.len()
            ));
            app.model.load_index(index);
        }

        FetchResponse::IndexResult(Err(e)) => {
            log_debug(&format!("Index load failed: {}", e));
            app.model.index_error = Some(e.to_string());
        }

        FetchResponse::DocumentResult { path, content } => {
            app.document_loaded(path, content);
        }
    }
}
