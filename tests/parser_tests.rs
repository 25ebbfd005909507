use cucumber_results::aggregate::status::Status;
use cucumber_results::cucumber::parser::{ParseError, parse};

mod common;

// ============================================================================
// 1. Valid payloads
// ============================================================================

#[test]
fn parse_mixed_payload() {
    let features = parse(common::MIXED_PAYLOAD.as_bytes()).unwrap();

    assert_eq!(features.len(), 1);
    let feature = &features[0];
    assert_eq!(feature.name, "F1");
    assert_eq!(feature.uri.as_deref(), Some("features/f1.feature"));

    assert_eq!(feature.scenarios.len(), 1);
    let scenario = &feature.scenarios[0];
    assert_eq!(scenario.name, "S1");
    assert_eq!(scenario.keyword.as_deref(), Some("Scenario"));

    assert_eq!(scenario.steps.len(), 2);
    assert_eq!(scenario.steps[0].status, Status::Passed);
    assert_eq!(scenario.steps[1].status, Status::Failed);
    assert_eq!(scenario.steps[1].error_message.as_deref(), Some("boom"));
}

#[test]
fn parse_preserves_input_order() {
    let payload = r#"[
        {"name":"B","elements":[]},
        {"name":"A","elements":[]},
        {"name":"C","elements":[]}
    ]"#;
    let features = parse(payload.as_bytes()).unwrap();
    let names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);
}

#[test]
fn parse_empty_array() {
    let features = parse(b"[]").unwrap();
    assert!(features.is_empty());
}

#[test]
fn parse_step_duration_and_all_statuses() {
    let payload = r#"[{"name":"F","elements":[{"name":"S","steps":[
        {"name":"a","result":{"status":"passed","duration":1500}},
        {"name":"b","result":{"status":"failed"}},
        {"name":"c","result":{"status":"skipped"}},
        {"name":"d","result":{"status":"pending"}},
        {"name":"e","result":{"status":"undefined"}}
    ]}]}]"#;
    let features = parse(payload.as_bytes()).unwrap();
    let steps = &features[0].scenarios[0].steps;

    assert_eq!(steps[0].duration_ns, Some(1500));
    assert_eq!(steps[1].duration_ns, None);
    let statuses: Vec<Status> = steps.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![
            Status::Passed,
            Status::Failed,
            Status::Skipped,
            Status::Pending,
            Status::Undefined
        ]
    );
}

// ============================================================================
// 2. Tolerated variance
// ============================================================================

#[test]
fn parse_ignores_unknown_fields() {
    let payload = r#"[{"name":"F","id":"f-1","description":"extra","line":12,
        "elements":[{"name":"S","type":"scenario","line":3,
        "steps":[{"name":"st","match":{"location":"x.js:1"},"result":{"status":"passed"}}]}]}]"#;
    let features = parse(payload.as_bytes()).unwrap();
    assert_eq!(features[0].scenarios[0].steps[0].status, Status::Passed);
}

#[test]
fn parse_accepts_tag_objects_and_bare_strings() {
    let payload = r#"[{"name":"F","elements":[
        {"name":"S1","tags":[{"name":"@smoke"},{"name":"@ui"}],"steps":[]},
        {"name":"S2","tags":["@bare"],"steps":[]}
    ]}]"#;
    let features = parse(payload.as_bytes()).unwrap();
    assert_eq!(features[0].scenarios[0].tags, vec!["@smoke", "@ui"]);
    assert_eq!(features[0].scenarios[1].tags, vec!["@bare"]);
}

#[test]
fn parse_defaults_missing_names_to_empty() {
    let payload = r#"[{"elements":[{"steps":[{"result":{"status":"passed"}}]}]}]"#;
    let features = parse(payload.as_bytes()).unwrap();
    assert_eq!(features[0].name, "");
    assert_eq!(features[0].scenarios[0].name, "");
    assert_eq!(features[0].scenarios[0].steps[0].name, "");
}

// ============================================================================
// 3. Rejections
// ============================================================================

#[test]
fn parse_rejects_malformed_json() {
    let err = parse(b"not json at all {{{").unwrap_err();
    assert!(matches!(err, ParseError::MalformedJson(_)), "{err:?}");
}

#[test]
fn parse_rejects_non_array_top_level() {
    let err = parse(br#"{"name":"F1"}"#).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape(_)), "{err:?}");
}

#[test]
fn parse_rejects_step_without_result() {
    let payload = r#"[{"name":"F","elements":[{"name":"S","steps":[{"name":"st"}]}]}]"#;
    let err = parse(payload.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape(_)), "{err:?}");
}

#[test]
fn parse_rejects_result_without_status() {
    let payload = r#"[{"name":"F","elements":[{"name":"S","steps":[{"name":"st","result":{"duration":5}}]}]}]"#;
    let err = parse(payload.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape(_)), "{err:?}");
}

#[test]
fn parse_rejects_unrecognized_status_value() {
    let payload = r#"[{"name":"F","elements":[{"name":"S","steps":[{"name":"st","result":{"status":"exploded"}}]}]}]"#;
    let err = parse(payload.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedShape(_)), "{err:?}");
}

#[test]
fn parse_rejects_invalid_utf8() {
    let err = parse(&[0xff, 0xfe, 0x00]).unwrap_err();
    assert!(matches!(err, ParseError::MalformedJson(_)), "{err:?}");
}
