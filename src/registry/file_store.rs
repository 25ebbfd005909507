use std::fs;
use std::path::{Path, PathBuf};

use crate::build::build_model::BuildMetadata;
use crate::registry::store::{BuildStore, StoreError};

// ============================================================================
// File-tree store — one directory per build
// ============================================================================

const RAW_FILENAME: &str = "cucumber.json";
const METADATA_FILENAME: &str = "metadata.json";

/// Stores each build as `<root>/<id>/cucumber.json` + `metadata.json`.
///
/// The raw payload is written verbatim; only the metadata record is
/// serialized by this store. A directory without a metadata file is not a
/// build (e.g. a crashed partial write) and is skipped by `list_ids`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root data directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn build_dir(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }
}

impl BuildStore for FileStore {
    fn put(&self, id: &str, raw_json: &[u8], metadata: &BuildMetadata) -> Result<(), StoreError> {
        let dir = self.build_dir(id);
        fs::create_dir_all(&dir)?;

        fs::write(dir.join(RAW_FILENAME), raw_json)?;

        let encoded = serde_json::to_vec_pretty(metadata).map_err(|e| {
            StoreError::CorruptMetadata {
                id: id.to_string(),
                reason: e.to_string(),
            }
        })?;
        // Metadata last: its presence marks the directory as a complete build.
        fs::write(dir.join(METADATA_FILENAME), encoded)?;

        Ok(())
    }

    fn get_raw(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.build_dir(id).join(RAW_FILENAME);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(fs::read(path)?)
    }

    fn get_metadata(&self, id: &str) -> Result<BuildMetadata, StoreError> {
        let path = self.build_dir(id).join(METADATA_FILENAME);
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let bytes = fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::CorruptMetadata {
            id: id.to_string(),
            reason: e.to_string(),
        })
    }

    fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            if !entry.path().join(METADATA_FILENAME).exists() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                ids.push(name);
            }
        }

        ids.sort();
        Ok(ids)
    }
}
