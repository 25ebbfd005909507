#![allow(dead_code)] // each test binary uses a different subset of helpers

use cucumber_results::aggregate::aggregator::{AggregatedReport, aggregate};
use cucumber_results::build::build_model::{BuildMetadata, BuildRecord, BuildSubmission};
use cucumber_results::build::builder::from_parts;
use cucumber_results::cucumber::parser::parse;
use time::OffsetDateTime;
use time::macros::datetime;

// ============================================================================
// Shared fixtures
// ============================================================================

/// The worked example from the upload contract: one feature, one scenario,
/// one passed and one failed step.
pub const MIXED_PAYLOAD: &str = r#"[{"name":"F1","uri":"features/f1.feature","elements":[{"name":"S1","keyword":"Scenario","steps":[{"name":"st1","keyword":"Given ","result":{"status":"passed"}},{"name":"st2","keyword":"When ","result":{"status":"failed","error_message":"boom"}}]}]}]"#;

/// A payload where everything passes.
pub const PASSING_PAYLOAD: &str = r#"[{"name":"Login","uri":"features/login.feature","elements":[{"name":"Valid credentials","keyword":"Scenario","tags":[{"name":"@smoke"}],"steps":[{"name":"I open the login page","keyword":"Given ","result":{"status":"passed","duration":1200000}},{"name":"I sign in","keyword":"When ","result":{"status":"passed","duration":3400000}}]}]}]"#;

pub fn submission(job_name: &str, build_number: &str) -> BuildSubmission {
    BuildSubmission {
        job_name: job_name.to_string(),
        build_number: build_number.to_string(),
        build_url: None,
        branch: None,
        commit: None,
    }
}

pub fn metadata_at(job_name: &str, build_number: &str, submitted_at: OffsetDateTime) -> BuildMetadata {
    BuildMetadata {
        job_name: job_name.to_string(),
        build_number: build_number.to_string(),
        build_url: None,
        branch: None,
        commit: None,
        submitted_at,
    }
}

/// Aggregate a JSON payload string; panics on bad fixtures.
pub fn aggregate_payload(payload: &str) -> AggregatedReport {
    aggregate(parse(payload.as_bytes()).unwrap())
}

/// A full record with a chosen id and submission time, built from a payload.
pub fn record_at(id: &str, submitted_at: OffsetDateTime, payload: &str) -> BuildRecord {
    from_parts(
        id.to_string(),
        metadata_at("ui-tests", "1", submitted_at),
        aggregate_payload(payload),
    )
}

pub fn base_time() -> OffsetDateTime {
    datetime!(2026-08-28 10:00:00 UTC)
}
