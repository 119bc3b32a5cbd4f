//! Fetch service worker
//!
//! Runs document-source requests off the UI thread. Requests arrive on an
//! unbounded channel, each one is executed in its own task, and responses
//! flow back on a second channel that the main loop drains every tick.
//!
//! There is deliberately no cancellation: a preview fetch superseded by a
//! newer one is left running, and its response is still delivered. The
//! update handler applies responses in arrival order (see DESIGN.md).

use tokio::sync::mpsc;

use crate::api::DocsClient;
use crate::model::types::DocIndex;

/// Fetch request types
#[derive(Debug, Clone)]
pub enum FetchRequest {
    /// Load the docs index (startup, exactly once)
    Index,

    /// Load one document's raw markdown
    Document { path: String },
}

/// Fetch response types
#[derive(Debug)]
pub enum FetchResponse {
    IndexResult(Result<DocIndex, anyhow::Error>),

    DocumentResult {
        path: String,
        content: Result<String, anyhow::Error>,
    },
}

async fn execute_request(
    client: &DocsClient,
    index_file: &str,
    request: FetchRequest,
) -> FetchResponse {
    match request {
        FetchRequest::Index => FetchResponse::IndexResult(client.fetch_index(index_file).await),
        FetchRequest::Document { path } => {
            let content = client.fetch_document(&path).await;
            FetchResponse::DocumentResult { path, content }
        }
    }
}

/// Spawn the fetch service worker
pub fn spawn_fetch_service(
    client: DocsClient,
    index_file: String,
) -> (
    mpsc::UnboundedSender<FetchRequest>,
    mpsc::UnboundedReceiver<FetchResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<FetchRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<FetchResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let index_file = index_file.clone();
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                let response = execute_request(&client, &index_file, request).await;
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}
