use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::aggregate::aggregator;
use crate::build::build_model::{BuildRecord, BuildSummary};
use crate::build::builder;
use crate::cucumber::parser::{self, ParseError};
use crate::registry::store::{BuildStore, StoreError};

// ============================================================================
// Build registry — durable, append-only index of build records
// ============================================================================

/// Failure while inserting into or loading the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A record with this id is already indexed. The existing record is
    /// never overwritten.
    #[error("build '{0}' already exists")]
    DuplicateId(String),

    /// The persistence gateway failed; the record was not made visible.
    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),

    /// A stored raw payload no longer parses (only possible via external
    /// tampering with the store).
    #[error("stored payload for build '{id}' is unreadable: {source}")]
    CorruptPayload { id: String, source: ParseError },
}

/// Index of ingested builds, backed by a persistence gateway.
///
/// Records are write-once and append-only. Insertion is write-then-index: a
/// record becomes visible to `get`/`list` only after the store confirms the
/// durable write, so readers never observe a build that is not on disk.
///
/// One `RwLock` serializes inserts (duplicate check → persist → index happen
/// under the write guard) while `get`/`list` share the read guard.
pub struct BuildRegistry {
    store: Box<dyn BuildStore>,
    index: RwLock<HashMap<String, BuildRecord>>,
}

impl std::fmt::Debug for BuildRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildRegistry")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl BuildRegistry {
    /// A registry over an empty or ignored store state (nothing is loaded).
    pub fn new(store: Box<dyn BuildStore>) -> Self {
        Self {
            store,
            index: RwLock::new(HashMap::new()),
        }
    }

    /// Open a registry and rebuild its index from the store.
    ///
    /// Aggregates are recomputed from each stored raw payload rather than
    /// trusted from disk; metadata and ids are taken from storage unchanged.
    pub fn open(store: Box<dyn BuildStore>) -> Result<Self, RegistryError> {
        let mut index = HashMap::new();
        for id in store.list_ids()? {
            let metadata = store.get_metadata(&id)?;
            let raw = store.get_raw(&id)?;
            let features = parser::parse(&raw).map_err(|source| RegistryError::CorruptPayload {
                id: id.clone(),
                source,
            })?;
            let report = aggregator::aggregate(features);
            index.insert(id.clone(), builder::from_parts(id, metadata, report));
        }

        Ok(Self {
            store,
            index: RwLock::new(index),
        })
    }

    /// Insert a new record together with the raw payload it was computed
    /// from.
    ///
    /// Fails with `DuplicateId` without touching the store when the id is
    /// taken. Fails with `Persistence` when the gateway write fails, in
    /// which case the record is not indexed and never becomes visible.
    pub fn insert(&self, record: BuildRecord, raw_json: &[u8]) -> Result<(), RegistryError> {
        let mut index = self.write_index();

        if index.contains_key(&record.id) {
            return Err(RegistryError::DuplicateId(record.id.clone()));
        }

        self.store.put(&record.id, raw_json, &record.metadata)?;
        index.insert(record.id.clone(), record);
        Ok(())
    }

    /// Fetch one record by id.
    pub fn get(&self, id: &str) -> Option<BuildRecord> {
        self.read_index().get(id).cloned()
    }

    /// The stored raw payload, byte-identical to the original upload.
    pub fn get_raw(&self, id: &str) -> Result<Vec<u8>, RegistryError> {
        if !self.read_index().contains_key(id) {
            return Err(RegistryError::Persistence(StoreError::NotFound(
                id.to_string(),
            )));
        }
        Ok(self.store.get_raw(id)?)
    }

    /// Summaries of every build, ordered by submission time ascending (id as
    /// tie-breaker for a stable order).
    pub fn list(&self) -> Vec<BuildSummary> {
        let index = self.read_index();
        let mut summaries: Vec<BuildSummary> = index.values().map(BuildRecord::summary).collect();
        summaries.sort_by(|a, b| {
            a.metadata
                .submitted_at
                .cmp(&b.metadata.submitted_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        summaries
    }

    /// Number of indexed builds.
    pub fn len(&self) -> usize {
        self.read_index().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_index().is_empty()
    }

    fn read_index(&self) -> RwLockReadGuard<'_, HashMap<String, BuildRecord>> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_index(&self) -> RwLockWriteGuard<'_, HashMap<String, BuildRecord>> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }
}
