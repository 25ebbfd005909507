use serde::{Deserialize, Serialize};

use crate::aggregate::status::{Status, StatusCounts};
use crate::cucumber::cucumber_model::{Feature, Scenario, Step};

// ============================================================================
// Result aggregator — bottom-up worst-status reduction and counting
// ============================================================================

/// The fully aggregated view of one upload: the feature tree annotated with
/// derived statuses, plus counts at every granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedReport {
    /// Worst status across all features; `skipped` for an empty upload.
    pub overall_status: Status,

    /// Features by derived status.
    pub feature_counts: StatusCounts,

    /// Scenarios by derived status.
    pub scenario_counts: StatusCounts,

    /// Steps by their own status.
    pub step_counts: StatusCounts,

    /// Annotated features, in input order.
    pub features: Vec<FeatureReport>,
}

/// A feature with its derived status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub name: String,
    pub uri: Option<String>,
    pub status: Status,
    pub scenarios: Vec<ScenarioReport>,
}

/// A scenario with its derived status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub name: String,
    pub keyword: Option<String>,
    pub tags: Vec<String>,
    pub status: Status,
    pub steps: Vec<Step>,
}

/// Aggregate a parsed feature tree.
///
/// Statuses bubble upward by the worst-status rule: scenario status is the
/// worst of its steps, feature status the worst of its scenarios, overall
/// status the worst of the features. Empty containers reduce to `skipped`.
///
/// Deterministic and side-effect free; identical input always yields an
/// identical report.
pub fn aggregate(features: Vec<Feature>) -> AggregatedReport {
    let mut feature_counts = StatusCounts::default();
    let mut scenario_counts = StatusCounts::default();
    let mut step_counts = StatusCounts::default();

    let mut annotated = Vec::with_capacity(features.len());
    for feature in features {
        let report = aggregate_feature(feature, &mut scenario_counts, &mut step_counts);
        feature_counts.record(report.status);
        annotated.push(report);
    }

    let overall_status = Status::worst_of(annotated.iter().map(|f| f.status));

    AggregatedReport {
        overall_status,
        feature_counts,
        scenario_counts,
        step_counts,
        features: annotated,
    }
}

fn aggregate_feature(
    feature: Feature,
    scenario_counts: &mut StatusCounts,
    step_counts: &mut StatusCounts,
) -> FeatureReport {
    let mut scenarios = Vec::with_capacity(feature.scenarios.len());
    for scenario in feature.scenarios {
        let report = aggregate_scenario(scenario, step_counts);
        scenario_counts.record(report.status);
        scenarios.push(report);
    }

    FeatureReport {
        name: feature.name,
        uri: feature.uri,
        status: Status::worst_of(scenarios.iter().map(|s| s.status)),
        scenarios,
    }
}

fn aggregate_scenario(scenario: Scenario, step_counts: &mut StatusCounts) -> ScenarioReport {
    for step in &scenario.steps {
        step_counts.record(step.status);
    }

    ScenarioReport {
        name: scenario.name,
        keyword: scenario.keyword,
        tags: scenario.tags,
        status: Status::worst_of(scenario.steps.iter().map(|s| s.status)),
        steps: scenario.steps,
    }
}
