use crate::aggregate::status::{Status, StatusCounts};
use crate::build::build_model::{BuildRecord, BuildSummary};

// ============================================================================
// HTML reporter — self-contained build report and build index pages
// ============================================================================

/// Generate a self-contained HTML report for one build.
///
/// Features:
/// - Status-colored header (green passed / red failed / amber otherwise)
/// - Summary bar with feature/scenario/step counts
/// - Each feature in its own section, scenarios with step detail
/// - Failed steps highlighted with their error message
/// - Inline CSS (no external dependencies)
pub fn generate_build_report(record: &BuildRecord) -> String {
    let header_color = status_color(record.overall_status);
    let title = format!(
        "{} #{}",
        record.metadata.job_name, record.metadata.build_number
    );

    let mut meta_line = format!("Submitted {}", record.metadata.display_submitted_at());
    if let Some(ref branch) = record.metadata.branch {
        meta_line.push_str(&format!(" · branch {}", escape_html(branch)));
    }
    if let Some(ref commit) = record.metadata.commit {
        meta_line.push_str(&format!(" · commit {}", escape_html(commit)));
    }
    if let Some(ref url) = record.metadata.build_url {
        meta_line.push_str(&format!(
            " · <a href=\"{0}\">{0}</a>",
            escape_html(url)
        ));
    }

    let mut sections = String::new();
    for feature in &record.features {
        let uri = feature
            .uri
            .as_deref()
            .map(|u| format!(" <span class=\"uri\">{}</span>", escape_html(u)))
            .unwrap_or_default();

        sections.push_str(&format!(
            "<div class=\"feature {class}\">\n<h2>{name}{uri} <span class=\"badge {class}\">{status}</span></h2>\n",
            class = status_class(feature.status),
            name = escape_html(display_name(&feature.name, "Unnamed feature")),
            uri = uri,
            status = feature.status.label(),
        ));

        for scenario in &feature.scenarios {
            sections.push_str(&format!(
                "<div class=\"scenario {class}\">\n<h3>{name} <span class=\"badge {class}\">{status}</span></h3>\n<ul class=\"steps\">\n",
                class = status_class(scenario.status),
                name = escape_html(display_name(&scenario.name, "Unnamed scenario")),
                status = scenario.status.label(),
            ));

            for step in &scenario.steps {
                let error = step
                    .error_message
                    .as_deref()
                    .filter(|_| step.status == Status::Failed)
                    .map(|e| format!("<pre class=\"error\">{}</pre>", escape_html(e)))
                    .unwrap_or_default();
                sections.push_str(&format!(
                    "<li class=\"{class}\"><span class=\"kw\">{keyword}</span>{name} <span class=\"badge {class}\">{status}</span>{error}</li>\n",
                    class = status_class(step.status),
                    keyword = escape_html(step.keyword.as_deref().unwrap_or("")),
                    name = escape_html(&step.name),
                    status = step.status.label(),
                    error = error,
                ));
            }

            sections.push_str("</ul>\n</div>\n");
        }

        sections.push_str("</div>\n");
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} — Build Report</title>
<style>
{css}
</style>
</head>
<body>
<div class="header" style="background: {header_color};">
<h1>{title} — {status}</h1>
<p>{meta_line}</p>
</div>
<div class="summary">
<span>Features: {feature_counts}</span>
<span>Scenarios: {scenario_counts}</span>
<span>Steps: {step_counts}</span>
</div>
<div class="content">
{sections}
</div>
</body>
</html>"##,
        title = escape_html(&title),
        css = PAGE_CSS,
        header_color = header_color,
        status = record.overall_status.label().to_uppercase(),
        meta_line = meta_line,
        feature_counts = format_counts_html(&record.feature_counts),
        scenario_counts = format_counts_html(&record.scenario_counts),
        step_counts = format_counts_html(&record.step_counts),
        sections = sections,
    )
}

/// Generate the HTML index page listing every build, submission order.
pub fn generate_build_index(summaries: &[BuildSummary]) -> String {
    let mut rows = String::new();
    for summary in summaries {
        rows.push_str(&format!(
            "<tr class=\"{class}\"><td><span class=\"badge {class}\">{status}</span></td><td>{job}</td><td>#{number}</td><td>{submitted}</td><td>{features}</td><td class=\"id\">{id}</td></tr>\n",
            class = status_class(summary.overall_status),
            status = summary.overall_status.label(),
            job = escape_html(&summary.metadata.job_name),
            number = escape_html(&summary.metadata.build_number),
            submitted = summary.metadata.display_submitted_at(),
            features = format_counts_html(&summary.feature_counts),
            id = escape_html(&summary.id),
        ));
    }

    let body = if summaries.is_empty() {
        "<p>No builds ingested yet.</p>".to_string()
    } else {
        format!(
            "<table>\n<tr><th>Status</th><th>Job</th><th>Build</th><th>Submitted</th><th>Features</th><th>Id</th></tr>\n{rows}</table>"
        )
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Build Reports</title>
<style>
{css}
</style>
</head>
<body>
<div class="header" style="background: #37474F;">
<h1>Build Reports</h1>
<p>{count} builds</p>
</div>
<div class="content">
{body}
</div>
</body>
</html>"##,
        css = PAGE_CSS,
        count = summaries.len(),
        body = body,
    )
}

const PAGE_CSS: &str = r#"body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }
.header { color: white; padding: 20px 30px; }
.header h1 { margin: 0 0 8px 0; font-size: 24px; }
.header p { margin: 0; font-size: 14px; opacity: 0.9; }
.header a { color: white; }
.summary { max-width: 960px; margin: 16px auto 0 auto; padding: 0 20px; display: flex; gap: 24px; color: #444; font-size: 14px; }
.content { max-width: 960px; margin: 20px auto; padding: 0 20px; }
.feature { background: white; border-radius: 6px; padding: 16px 20px; margin-bottom: 12px; border-left: 4px solid #ccc; }
.feature.pass { border-left-color: #4CAF50; }
.feature.fail { border-left-color: #f44336; }
.feature.other { border-left-color: #FF9800; }
.feature h2 { margin: 0 0 8px 0; font-size: 18px; }
.scenario { margin: 8px 0 8px 12px; }
.scenario h3 { margin: 8px 0 4px 0; font-size: 15px; }
.uri { color: #888; font-size: 13px; font-weight: normal; }
.steps { list-style: none; margin: 4px 0; padding-left: 16px; font-size: 14px; }
.steps li { margin: 2px 0; color: #444; }
.steps li.fail { color: #c62828; }
.kw { font-weight: bold; margin-right: 4px; }
.badge { font-size: 11px; padding: 1px 6px; border-radius: 8px; background: #eee; color: #555; vertical-align: middle; }
.badge.pass { background: #E8F5E9; color: #2E7D32; }
.badge.fail { background: #FFEBEE; color: #C62828; }
.badge.other { background: #FFF3E0; color: #E65100; }
.error { background: #FFEBEE; color: #B71C1C; padding: 8px; border-radius: 4px; font-size: 12px; overflow-x: auto; }
table { width: 100%; border-collapse: collapse; background: white; border-radius: 6px; }
th, td { text-align: left; padding: 8px 12px; border-bottom: 1px solid #eee; font-size: 14px; }
th { color: #666; font-size: 12px; text-transform: uppercase; }
td.id { color: #888; font-size: 12px; }"#;

fn status_color(status: Status) -> &'static str {
    match status {
        Status::Passed => "#4CAF50",
        Status::Failed => "#f44336",
        Status::Skipped | Status::Pending | Status::Undefined => "#FF9800",
    }
}

fn status_class(status: Status) -> &'static str {
    match status {
        Status::Passed => "pass",
        Status::Failed => "fail",
        Status::Skipped | Status::Pending | Status::Undefined => "other",
    }
}

fn format_counts_html(counts: &StatusCounts) -> String {
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
        "0".to_string()
    } else {
        parts.join(", ")
    }
}

fn display_name<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.trim().is_empty() { fallback } else { name }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
