use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::aggregate::aggregator::FeatureReport;
use crate::aggregate::status::{Status, StatusCounts};

// ============================================================================
// Build record — one CI run's submitted results, write-once after creation
// ============================================================================

/// The fields a caller submits alongside the raw Cucumber payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSubmission {
    pub job_name: String,
    pub build_number: String,
    pub build_url: Option<String>,
    pub branch: Option<String>,
    pub commit: Option<String>,
}

/// Validated build metadata, stamped with the ingestion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildMetadata {
    pub job_name: String,
    pub build_number: String,
    pub build_url: Option<String>,
    pub branch: Option<String>,
    pub commit: Option<String>,

    /// Ingestion timestamp, UTC. RFC 3339 on the wire.
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
}

impl BuildMetadata {
    /// Human-readable submission time, `YYYY-MM-DD HH:MM:SS`.
    pub fn display_submitted_at(&self) -> String {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        self.submitted_at
            .format(&format)
            .unwrap_or_else(|_| self.submitted_at.to_string())
    }
}

/// One ingested build: metadata plus the aggregated feature tree.
///
/// Immutable once created. The counts are always derived from the tree they
/// sit next to; nothing updates a counter without recomputing from source.
/// Feature/scenario/step ordering is preserved from the upload, so report
/// rendering is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRecord {
    /// Unique, stable identifier assigned at creation.
    pub id: String,

    pub metadata: BuildMetadata,

    pub overall_status: Status,
    pub feature_counts: StatusCounts,
    pub scenario_counts: StatusCounts,
    pub step_counts: StatusCounts,

    /// Annotated features in upload order.
    pub features: Vec<FeatureReport>,
}

impl BuildRecord {
    /// The listing view of this record: everything but the step tree.
    pub fn summary(&self) -> BuildSummary {
        BuildSummary {
            id: self.id.clone(),
            metadata: self.metadata.clone(),
            overall_status: self.overall_status,
            feature_counts: self.feature_counts,
            scenario_counts: self.scenario_counts,
            step_counts: self.step_counts,
        }
    }
}

/// Listing row for a build: id, metadata, status, and counts, without the
/// feature tree. Full detail requires fetching the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSummary {
    pub id: String,
    pub metadata: BuildMetadata,
    pub overall_status: Status,
    pub feature_counts: StatusCounts,
    pub scenario_counts: StatusCounts,
    pub step_counts: StatusCounts,
}
