use std::time::Duration;

use thiserror::Error;

/// Location and size of a stored object, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub url: String,
    pub key: String,
    pub size: u64,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {0}")]
    NotFound(String),
    /// The backend rejected the request or failed internally.
    #[error("storage backend error: {0}")]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Capability contract for binary-object storage.
pub trait StoragePort: Send + Sync {
    /// Upload raw bytes; returns where the backend put them.
    fn upload(
        &self,
        bytes: &[u8],
        filename: &str,
        mime_type: &str,
    ) -> Result<StoredObject, StorageError>;

    /// Delete by storage key.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Pre-signed read URL. `None` expiry uses the backend default.
    fn signed_url(&self, key: &str, expiry: Option<Duration>) -> Result<String, StorageError>;
}
