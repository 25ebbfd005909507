use thiserror::Error;

use crate::build::build_model::BuildSubmission;
use crate::build::builder::{self, ValidationError};
use crate::cucumber::parser::{self, ParseError};
use crate::registry::registry::{BuildRegistry, RegistryError};

pub mod aggregate;
pub mod build;
pub mod cli;
pub mod cucumber;
pub mod registry;
pub mod report;
pub mod trace;

/// Structured error returned by the upload entry point.
///
/// Parse and validation failures are client-input errors; registry failures
/// are either a duplicate-id conflict or an infrastructure fault. Nothing is
/// retried here; retry policy belongs to the caller or the storage backend.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Ingest one upload: parse the raw Cucumber JSON, aggregate it, build the
/// record, and insert it into the registry.
///
/// Returns the new build id. On any failure the registry is untouched and
/// the error identifies the failing stage.
pub fn ingest(
    registry: &BuildRegistry,
    raw: &[u8],
    submission: BuildSubmission,
) -> Result<String, IngestError> {
    let features = parser::parse(raw)?;
    let report = aggregate::aggregator::aggregate(features);
    let record = builder::build_record(submission, report)?;
    let id = record.id.clone();
    registry.insert(record, raw)?;
    Ok(id)
}
