use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::build::build_model::BuildSubmission;

/// One line in the ingest log: an upload that was accepted or rejected.
#[derive(Debug, Serialize)]
pub struct IngestEvent {
    pub timestamp_ms: u128,

    /// "accepted" or "rejected".
    pub outcome: String,

    pub build_id: Option<String>,
    pub job_name: Option<String>,
    pub build_number: Option<String>,

    /// Error description for rejected uploads.
    pub reason: Option<String>,
}

impl IngestEvent {
    fn now(outcome: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            outcome: outcome.to_string(),
            build_id: None,
            job_name: None,
            build_number: None,
            reason: None,
        }
    }

    pub fn accepted(submission: &BuildSubmission, build_id: &str) -> Self {
        let mut event = Self::now("accepted");
        event.build_id = Some(build_id.to_string());
        event.job_name = Some(submission.job_name.clone());
        event.build_number = Some(submission.build_number.clone());
        event
    }

    pub fn rejected(submission: &BuildSubmission, reason: impl ToString) -> Self {
        let mut event = Self::now("rejected");
        event.job_name = Some(submission.job_name.clone());
        event.build_number = Some(submission.build_number.clone());
        event.reason = Some(reason.to_string());
        event
    }
}
