use waymark_parser::{
    InputFormat, parse,
    error::{ErrorCode, Severity},
};

#[test]
fn test_markdown_roadmap() {
    let source = r#"
# DevOps Engineer

Some introduction paragraph that is ignored.

## Linux (2 months) ##
### Shell scripting
- Pipes
  - nested detail is ignored
* Job control
### Permissions

#### Deep heading is ignored

## Cloud
### Networking
1. VPCs
2) Load balancers
"#;

    let roadmap = parse(source, InputFormat::Markdown).expect("Failed to parse");

    assert_eq!(roadmap.title(), "DevOps Engineer");

    let groups = roadmap.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].id(), "g1");
    assert_eq!(groups[0].title(), "Linux");
    assert_eq!(groups[0].duration(), Some("2 months"));
    assert_eq!(groups[1].title(), "Cloud");
    assert_eq!(groups[1].duration(), None);
    assert_eq!(groups[1].order(), 2.0);

    let nodes = roadmap.nodes();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0].bullets(), ["Pipes", "Job control"]);
    assert!(nodes[1].bullets().is_empty());
    assert_eq!(nodes[2].group(), "g2");
    assert_eq!(nodes[2].bullets(), ["VPCs", "Load balancers"]);
}

#[test]
fn test_markdown_errors_are_collected() {
    let source = "# Roadmap\n### Too early\n##\n### Also early?\n";

    let err = parse(source, InputFormat::Markdown).unwrap_err();

    let codes: Vec<_> = err.diagnostics().iter().filter_map(|d| d.code()).collect();
    assert_eq!(codes, [ErrorCode::E002, ErrorCode::E001, ErrorCode::E002]);

    // labels point at the offending lines
    let span = err.diagnostics()[0].labels()[0].span();
    assert_eq!(&source[span.start()..span.end()], "### Too early");
}

#[test]
fn test_markdown_warnings_do_not_fail() {
    let source = "# One\n# Two\n- loose item\n## Phase\n";

    let roadmap = parse(source, InputFormat::Markdown).expect("Warnings only");
    assert_eq!(roadmap.title(), "One");
}

#[test]
fn test_warnings_are_reported_alongside_errors() {
    let source = "# One\n### Orphan\n##\n";

    let err = parse(source, InputFormat::Markdown).unwrap_err();

    let severities: Vec<_> = err.diagnostics().iter().map(|d| d.severity()).collect();
    assert_eq!(severities, [Severity::Warning, Severity::Error]);
    assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E002));
}

#[test]
fn test_markdown_step_before_phase_is_kept() {
    let source = "# Frontend\n### Orphan\n## CSS\n### Flexbox\n";

    let roadmap = parse(source, InputFormat::Markdown).expect("Warnings only");

    assert_eq!(roadmap.groups().len(), 1);
    assert_eq!(roadmap.nodes().len(), 2);
    assert_eq!(roadmap.nodes()[0].group(), "");
    assert_eq!(roadmap.nodes()[1].group(), "g1");
}

#[test]
fn test_json_roadmap() {
    let source = r#"{
        "title": "QA Engineer",
        "groups": [{ "id": "basics", "title": "Basics", "duration": "", "order": 1.5 }],
        "nodes": [{ "id": "s1", "group": "basics", "title": "Test plans", "bullets": null }]
    }"#;

    let roadmap = parse(source, InputFormat::Json).expect("Failed to parse");

    assert_eq!(roadmap.groups()[0].id(), "basics");
    assert_eq!(roadmap.groups()[0].duration(), Some(""));
    assert_eq!(roadmap.groups()[0].order(), 1.5);
    assert!(roadmap.nodes()[0].bullets().is_empty());
}

#[test]
fn test_json_contract_violation() {
    let err = parse(r#"{ "nodes": {} }"#, InputFormat::Json).unwrap_err();

    let diag = &err.diagnostics()[0];
    assert_eq!(diag.code(), Some(ErrorCode::E102));
    assert!(diag.message().contains("an object"));
    assert!(diag.help().is_some());
}

#[test]
fn test_json_syntax_error_points_at_line() {
    let source = "{\n  \"title\": \"x\",\n  oops\n}";

    let err = parse(source, InputFormat::Json).unwrap_err();

    let span = err.diagnostics()[0].labels()[0].span();
    let line_start = source.find("oops").unwrap();
    assert!(span.start() >= line_start && span.start() < line_start + 4);
}
