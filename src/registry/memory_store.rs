use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::build::build_model::BuildMetadata;
use crate::registry::store::{BuildStore, StoreError};

// ============================================================================
// In-memory store — ephemeral runs and tests
// ============================================================================

/// Keeps builds in a map; nothing survives the process. Useful for tests and
/// dry runs where durability is not wanted.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, (Vec<u8>, BuildMetadata)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, (Vec<u8>, BuildMetadata)>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl BuildStore for MemoryStore {
    fn put(&self, id: &str, raw_json: &[u8], metadata: &BuildMetadata) -> Result<(), StoreError> {
        self.entries()
            .insert(id.to_string(), (raw_json.to_vec(), metadata.clone()));
        Ok(())
    }

    fn get_raw(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        self.entries()
            .get(id)
            .map(|(raw, _)| raw.clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn get_metadata(&self, id: &str) -> Result<BuildMetadata, StoreError> {
        self.entries()
            .get(id)
            .map(|(_, meta)| meta.clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries().keys().cloned().collect())
    }
}
