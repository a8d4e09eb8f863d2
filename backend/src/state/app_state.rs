// Application state management
// Shared request context: configuration plus the document store

use crate::config::Config;
use crate::state::{DocumentStore, NamedDocument};
use std::path::PathBuf;

/// Main application state
/// Shared by every handler; holds no per-request mutable data
#[derive(Debug)]
pub struct AppState {
    /// Configuration loaded at startup
    pub config: Config,
    /// File-backed document store
    pub store: DocumentStore,
}

impl AppState {
    /// Create a new application state from configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: DocumentStore::new(),
        }
    }

    /// Location of a named document
    pub fn document_path(&self, document: NamedDocument) -> PathBuf {
        self.config.document_path(document)
    }

    /// Create the data directory if it doesn't exist yet
    ///
    /// # Returns
    /// * `Ok(true)` - The directory was created
    /// * `Ok(false)` - It already existed
    pub async fn ensure_data_dir(&self) -> std::io::Result<bool> {
        let dir = &self.config.persistence.data_dir;
        if tokio::fs::try_exists(dir).await? {
            return Ok(false);
        }
        tokio::fs::create_dir_all(dir).await?;
        Ok(true)
    }

    /// Documents whose backing file is currently absent
    pub fn missing_documents(&self) -> Vec<NamedDocument> {
        NamedDocument::ALL
            .into_iter()
            .filter(|doc| !self.document_path(*doc).exists())
            .collect()
    }
}
