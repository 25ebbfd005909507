use serde::{Deserialize, Serialize};

use crate::aggregate::status::Status;

/// A parsed Cucumber feature: one test spec file's worth of scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Feature name; empty when the payload omitted it.
    pub name: String,

    /// Source path of the feature file, when the runner reported one.
    pub uri: Option<String>,

    /// Scenarios in input order.
    pub scenarios: Vec<Scenario>,
}

/// One scenario (Cucumber "element") within a feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,

    /// Element keyword as reported ("Scenario", "Background", ...).
    pub keyword: Option<String>,

    /// Tag names, e.g. `@smoke`.
    pub tags: Vec<String>,

    /// Steps in input order.
    pub steps: Vec<Step>,
}

/// One executed step. Leaf node; immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,

    /// Step keyword ("Given ", "When ", ...).
    pub keyword: Option<String>,

    /// Result status. Required on the wire; parsing rejects steps without it.
    pub status: Status,

    /// Execution duration in nanoseconds, when the runner reported one.
    pub duration_ns: Option<u64>,

    /// Failure detail attached by the runner.
    pub error_message: Option<String>,
}
