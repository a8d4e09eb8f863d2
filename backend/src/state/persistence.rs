// Document persistence module
// Handles loading named JSON documents and rewriting them in place

use serde_json::Value;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Error types for persistence operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Stored content is not valid JSON
    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying parser error
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the file failed
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Document could not be encoded as JSON
    #[error("JSON encode error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Document exists but doesn't have the structure the operation needs
    #[error("Invalid document structure: {0}")]
    InvalidShape(String),
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// JSON document store backed by plain files
///
/// Reads are lock-free. Read-modify-write sequences take a per-file lock and
/// commit through a temporary sibling file that is renamed over the target,
/// so concurrent writers never lose each other's updates and readers never see
/// a half-written file.
#[derive(Debug, Default)]
pub struct DocumentStore {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl DocumentStore {
    /// Create a store with no documents locked
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and parse the JSON document at `path`
    ///
    /// # Returns
    /// * `Ok(Value)` - The parsed document, untouched
    /// * `Err(StoreError::NotFound)` - The file does not exist
    /// * `Err(StoreError::Parse)` - The file is not valid JSON
    pub async fn load(&self, path: &Path) -> Result<Value, StoreError> {
        tracing::debug!(path = %path.display(), "Loading document");
        let bytes = fs::read(path).await.map_err(|e| StoreError::io(path, e))?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Append `record` to the array stored under `field` of the document at
    /// `path`, creating the array if the field is absent.
    ///
    /// # Returns
    /// * `Ok(usize)` - Length of the array after the append
    /// * `Err(StoreError::NotFound)` - The document does not exist
    /// * `Err(StoreError::InvalidShape)` - The document isn't an object or
    ///   `field` holds something other than an array
    pub async fn append_to_array(
        &self,
        path: &Path,
        field: &str,
        record: Value,
    ) -> Result<usize, StoreError> {
        let lock = self.lock_for(path).await;
        let _guard = lock.lock().await;

        let mut document = self.load(path).await?;
        let object = document.as_object_mut().ok_or_else(|| {
            StoreError::InvalidShape(format!("{} is not a JSON object", path.display()))
        })?;
        let entries = object
            .entry(field)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| StoreError::InvalidShape(format!("'{}' is not an array", field)))?;
        entries.push(record);
        let len = entries.len();

        write_atomic(path, &document).await?;
        Ok(len)
    }

    async fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

/// Write `value` as pretty JSON to a temporary sibling of `path`, then rename
/// it over `path`.
async fn write_atomic(path: &Path, value: &Value) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(value).map_err(StoreError::Serialize)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StoreError::InvalidShape(format!("Invalid path: {}", path.display())))?;
    let tmp_path = path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

    fs::write(&tmp_path, &json)
        .await
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    if let Err(source) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}
