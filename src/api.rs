//! Document source client
//!
//! Fetches the JSON index and raw markdown documents from the docs root.
//! An `http://`/`https://` root goes over reqwest; anything else is read
//! from the local filesystem. Index fetches disable HTTP caching so a
//! regenerated site is picked up on the next start.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::path::PathBuf;

use crate::model::types::DocIndex;

#[derive(Debug, Clone)]
enum DocSource {
    Remote { base: String },
    Local { root: PathBuf },
}

#[derive(Clone)]
pub struct DocsClient {
    source: DocSource,
    client: Client,
}

impl DocsClient {
    pub fn new(docs_root: &str) -> Self {
        let source = if docs_root.starts_with("http://") || docs_root.starts_with("https://") {
            DocSource::Remote {
                base: docs_root.trim_end_matches('/').to_string(),
            }
        } else {
            DocSource::Local {
                root: PathBuf::from(docs_root),
            }
        };

        Self {
            source,
            client: Client::new(),
        }
    }

    /// URL for a document path under a remote root, with each path segment
    /// percent-encoded
    fn remote_url(base: &str, path: &str) -> String {
        let encoded: Vec<String> = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();
        format!("{}/{}", base, encoded.join("/"))
    }

    /// Fetch and parse the docs index
    pub async fn fetch_index(&self, index_file: &str) -> Result<DocIndex> {
        match &self.source {
            DocSource::Remote { base } => {
                let url = Self::remote_url(base, index_file);
                let response = self
                    .client
                    .get(&url)
                    .header(reqwest::header::CACHE_CONTROL, "no-store")
                    .send()
                    .await
                    .context("index request failed")?;

                if !response.status().is_success() {
                    bail!("Failed to load index ({})", response.status().as_u16());
                }

                let index: DocIndex = response.json().await.context("index is not valid JSON")?;
                Ok(index)
            }
            DocSource::Local { root } => {
                let path = root.join(index_file);
                let text = tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to load index ({})", path.display()))?;
                let index: DocIndex =
                    serde_json::from_str(&text).context("index is not valid JSON")?;
                Ok(index)
            }
        }
    }

    /// Fetch one document's raw text at its index path
    pub async fn fetch_document(&self, path: &str) -> Result<String> {
        match &self.source {
            DocSource::Remote { base } => {
                let url = Self::remote_url(base, path);
                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .context("document request failed")?;

                if !response.status().is_success() {
                    bail!("Failed to load file");
                }

                response.text().await.context("document body unreadable")
            }
            DocSource::Local { root } => tokio::fs::read_to_string(root.join(path))
                .await
                .map_err(|_| anyhow::anyhow!("Failed to load file")),
        }
    }
}
