use serde::Deserialize;
use thiserror::Error;

use crate::aggregate::status::Status;
use crate::cucumber::cucumber_model::{Feature, Scenario, Step};

// ============================================================================
// Cucumber JSON parser — strict, typed decoding of runner output
// ============================================================================

/// Failure to decode an uploaded payload into the typed feature tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not valid JSON at all.
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// The payload is valid JSON but not Cucumber-shaped: the top level is
    /// not an array, or a required field (e.g. a step's `result.status`) is
    /// missing or unrecognized.
    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

/// Decode raw upload bytes into a sequence of features.
///
/// Strict on the contract, tolerant of noise: unknown fields are ignored,
/// but a missing step result or an unrecognized status value is an
/// `UnexpectedShape` error rather than a silent default — defaulting would
/// hide broken uploads.
///
/// Pure transformation; no side effects.
pub fn parse(raw: &[u8]) -> Result<Vec<Feature>, ParseError> {
    let value: serde_json::Value =
        serde_json::from_slice(raw).map_err(|e| ParseError::MalformedJson(e.to_string()))?;

    if !value.is_array() {
        return Err(ParseError::UnexpectedShape(
            "top-level JSON value is not an array of features".to_string(),
        ));
    }

    let features: Vec<RawFeature> =
        serde_json::from_value(value).map_err(|e| ParseError::UnexpectedShape(e.to_string()))?;

    Ok(features.into_iter().map(RawFeature::into_feature).collect())
}

// ============================================================================
// Wire shapes (private) — exactly what the runner emits
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    name: String,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    elements: Vec<RawElement>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    #[serde(default)]
    name: String,
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    tags: Vec<RawTag>,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    #[serde(default)]
    name: String,
    #[serde(default)]
    keyword: Option<String>,
    // Required: a step without a result is an unexpected shape.
    result: RawResult,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    status: Status,
    #[serde(default)]
    duration: Option<u64>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Tags appear either as Cucumber tag objects (`{"name": "@smoke"}`) or, from
/// some runners, as bare strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTag {
    Object { name: String },
    Bare(String),
}

impl RawTag {
    fn into_name(self) -> String {
        match self {
            RawTag::Object { name } => name,
            RawTag::Bare(name) => name,
        }
    }
}

impl RawFeature {
    fn into_feature(self) -> Feature {
        Feature {
            name: self.name,
            uri: self.uri,
            scenarios: self
                .elements
                .into_iter()
                .map(RawElement::into_scenario)
                .collect(),
        }
    }
}

impl RawElement {
    fn into_scenario(self) -> Scenario {
        Scenario {
            name: self.name,
            keyword: self.keyword,
            tags: self.tags.into_iter().map(RawTag::into_name).collect(),
            steps: self.steps.into_iter().map(RawStep::into_step).collect(),
        }
    }
}

impl RawStep {
    fn into_step(self) -> Step {
        Step {
            name: self.name,
            keyword: self.keyword,
            status: self.result.status,
            duration_ns: self.result.duration,
            error_message: self.result.error_message,
        }
    }
}
