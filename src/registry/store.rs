use thiserror::Error;

use crate::build::build_model::BuildMetadata;

// ============================================================================
// Persistence gateway — the registry's only storage seam
// ============================================================================

/// Failure inside a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No build with this id exists in the store.
    #[error("build '{0}' not found in store")]
    NotFound(String),

    /// Underlying I/O failed.
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The stored metadata record could not be decoded.
    #[error("corrupt metadata for build '{id}': {reason}")]
    CorruptMetadata { id: String, reason: String },
}

/// Durable storage for builds: raw Cucumber payload plus metadata, keyed by
/// build id.
///
/// The core never assumes a medium; a file tree, SQLite, or an object store
/// are all valid backends. The one hard requirement is byte-for-byte
/// round-trip of the raw payload through `put`/`get_raw`, so reports can
/// always be recomputed from the stored source. Derived aggregates are never
/// persisted.
pub trait BuildStore: Send + Sync {
    /// Durably write one build. Overwrites nothing the registry has not
    /// already rejected as a duplicate.
    fn put(&self, id: &str, raw_json: &[u8], metadata: &BuildMetadata) -> Result<(), StoreError>;

    /// The raw payload exactly as uploaded.
    fn get_raw(&self, id: &str) -> Result<Vec<u8>, StoreError>;

    /// The metadata record stored alongside the payload.
    fn get_metadata(&self, id: &str) -> Result<BuildMetadata, StoreError>;

    /// Ids of every stored build.
    fn list_ids(&self) -> Result<Vec<String>, StoreError>;
}
