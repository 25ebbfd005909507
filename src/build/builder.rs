use sha1::{Digest, Sha1};
use thiserror::Error;
use time::OffsetDateTime;

use crate::aggregate::aggregator::AggregatedReport;
use crate::build::build_model::{BuildMetadata, BuildRecord, BuildSubmission};

// ============================================================================
// Build record builder — metadata validation and id assignment
// ============================================================================

/// Rejected build metadata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `job_name` is empty after trimming whitespace.
    #[error("missing job_name")]
    MissingJobName,

    /// `build_number` is empty after trimming whitespace.
    #[error("missing build_number")]
    MissingBuildNumber,
}

/// Merge submitted metadata with an aggregated report into a build record.
///
/// Validates the required fields, stamps `submitted_at`, and assigns the
/// record id. This is the only place in the core that reads the wall clock.
pub fn build_record(
    submission: BuildSubmission,
    report: AggregatedReport,
) -> Result<BuildRecord, ValidationError> {
    if submission.job_name.trim().is_empty() {
        return Err(ValidationError::MissingJobName);
    }
    if submission.build_number.trim().is_empty() {
        return Err(ValidationError::MissingBuildNumber);
    }

    let submitted_at = OffsetDateTime::now_utc();
    let id = build_id(&submission.job_name, &submission.build_number, submitted_at);

    let metadata = BuildMetadata {
        job_name: submission.job_name,
        build_number: submission.build_number,
        build_url: submission.build_url,
        branch: submission.branch,
        commit: submission.commit,
        submitted_at,
    };

    Ok(from_parts(id, metadata, report))
}

/// Reassemble a record from already-validated parts.
///
/// Used when reloading a persisted build: the id and metadata come from
/// storage unchanged, the report is recomputed from the raw payload.
pub fn from_parts(id: String, metadata: BuildMetadata, report: AggregatedReport) -> BuildRecord {
    BuildRecord {
        id,
        metadata,
        overall_status: report.overall_status,
        feature_counts: report.feature_counts,
        scenario_counts: report.scenario_counts,
        step_counts: report.step_counts,
        features: report.features,
    }
}

/// Content-derived build id: a readable slug of job name and build number,
/// disambiguated by a short hash over (job_name, build_number, submitted_at).
///
/// Stable for the record's life; the registry's duplicate check enforces
/// uniqueness under its writer lock.
fn build_id(job_name: &str, build_number: &str, submitted_at: OffsetDateTime) -> String {
    let mut hasher = Sha1::new();
    hasher.update(job_name.as_bytes());
    hasher.update(b"\x00");
    hasher.update(build_number.as_bytes());
    hasher.update(b"\x00");
    hasher.update(submitted_at.unix_timestamp_nanos().to_be_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let short = &digest[..8];

    let slug = safe_slug(&format!("{job_name}-{build_number}"));
    if slug.is_empty() {
        short.to_string()
    } else {
        format!("{slug}-{short}")
    }
}

/// Collapse runs of non `[A-Za-z0-9_-]` characters to a single `-` and trim
/// leading/trailing dashes, so the id is safe as a directory name.
pub fn safe_slug(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
