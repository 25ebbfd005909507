use crate::aggregate::status::{Status, StatusCounts};
use crate::build::build_model::{BuildRecord, BuildSummary};

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format one build record for terminal output.
///
/// Produces output like:
/// ```text
/// === Build ui-tests #123 (ui-tests-123-a1b2c3d4) — FAILED ===
/// Submitted: 2026-08-28 09:15:02 | branch main | commit 1f2e3d4
///
/// ✗ failed  Checkout (features/checkout.feature)
///   ✗ failed  Pay with card (2 steps)
///       [FAIL] When I submit payment — expected 200, got 500
///
/// === Features: 1 failed (1 total) | Scenarios: 1 failed | Steps: 1 passed, 1 failed ===
/// ```
pub fn format_build_report(record: &BuildRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Build {} #{} ({}) — {} ===\n",
        record.metadata.job_name,
        record.metadata.build_number,
        record.id,
        record.overall_status.label().to_uppercase(),
    ));

    out.push_str(&format!(
        "Submitted: {}",
        record.metadata.display_submitted_at()
    ));
    if let Some(ref branch) = record.metadata.branch {
        out.push_str(&format!(" | branch {}", branch));
    }
    if let Some(ref commit) = record.metadata.commit {
        out.push_str(&format!(" | commit {}", commit));
    }
    out.push('\n');

    for feature in &record.features {
        let uri = feature
            .uri
            .as_deref()
            .map(|u| format!(" ({})", u))
            .unwrap_or_default();
        out.push_str(&format!(
            "\n{} {}  {}{}\n",
            status_marker(feature.status),
            feature.status.label(),
            display_name(&feature.name, "Unnamed feature"),
            uri
        ));

        for scenario in &feature.scenarios {
            out.push_str(&format!(
                "  {} {}  {} ({} steps)\n",
                status_marker(scenario.status),
                scenario.status.label(),
                display_name(&scenario.name, "Unnamed scenario"),
                scenario.steps.len()
            ));

            // Failed steps get their error detail.
            for step in &scenario.steps {
                if step.status != Status::Failed {
                    continue;
                }
                let detail = step
                    .error_message
                    .as_deref()
                    .map(first_line)
                    .unwrap_or("step failed");
                out.push_str(&format!(
                    "      [FAIL] {}{} — {}\n",
                    step.keyword.as_deref().unwrap_or(""),
                    step.name,
                    detail
                ));
            }
        }
    }

    out.push_str(&format!(
        "\n=== Features: {} | Scenarios: {} | Steps: {} ===\n",
        format_counts(&record.feature_counts),
        format_counts(&record.scenario_counts),
        format_counts(&record.step_counts),
    ));

    out
}

/// Format the build listing, one line per build, submission order.
pub fn format_build_list(summaries: &[BuildSummary]) -> String {
    if summaries.is_empty() {
        return "No builds ingested yet.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("=== Builds ({} total) ===\n\n", summaries.len()));

    for summary in summaries {
        out.push_str(&format!(
            "{} {:9}  {}  {} #{}  [{}]  features: {}\n",
            status_marker(summary.overall_status),
            summary.overall_status.label().to_uppercase(),
            summary.metadata.display_submitted_at(),
            summary.metadata.job_name,
            summary.metadata.build_number,
            summary.id,
            format_counts(&summary.feature_counts),
        ));
    }

    out
}

/// Single-character status marker for terminal lines.
pub fn status_marker(status: Status) -> &'static str {
    match status {
        Status::Passed => "\u{2713}",
        Status::Failed => "\u{2717}",
        Status::Skipped | Status::Pending | Status::Undefined => "-",
    }
}

/// "2 passed, 1 failed (3 total)", listing only non-zero statuses.
fn format_counts(counts: &StatusCounts) -> String {
    let statuses = [
        Status::Passed,
        Status::Failed,
        Status::Skipped,
        Status::Pending,
        Status::Undefined,
    ];

    let parts: Vec<String> = statuses
        .iter()
        .filter(|s| counts.count(**s) > 0)
        .map(|s| format!("{} {}", counts.count(*s), s.label()))
        .collect();

    if parts.is_empty() {
        "none (0 total)".to_string()
    } else {
        format!("{} ({} total)", parts.join(", "), counts.total())
    }
}

fn display_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.trim().is_empty() { fallback } else { name }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or(text)
}
