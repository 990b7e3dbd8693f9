//! JSON roadmap documents.
//!
//! The JSON form mirrors [`RoadmapSpec`] directly:
//!
//! ```json
//! {
//!   "title": "Backend Engineer",
//!   "groups": [{ "id": "g1", "title": "Foundations", "duration": "3 months", "order": 1 }],
//!   "nodes":  [{ "id": "n1", "group": "g1", "title": "Learn HTTP", "bullets": ["Caching"] }]
//! }
//! ```
//!
//! Conversion happens in two passes. The first checks the document shape
//! (an object whose `groups` and `nodes` are arrays when present), which is
//! the contract every producer must honor. The second deserializes the typed
//! model, reporting element errors at their source position.

use log::debug;
use serde_json::Value;

use waymark_core::roadmap::RoadmapSpec;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Fields that must hold arrays when present.
const ARRAY_FIELDS: [&str; 2] = ["groups", "nodes"];

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn error_span(source: &str, err: &serde_json::Error) -> Option<Span> {
    (err.line() > 0).then(|| Span::from_line_col(source, err.line(), err.column()))
}

fn with_optional_label(diag: Diagnostic, span: Option<Span>, message: &str) -> Diagnostic {
    match span {
        Some(span) => diag.with_label(span, message),
        None => diag,
    }
}

/// Checks the document shape, emitting one diagnostic per violation.
fn check_contract(document: &Value, collector: &mut DiagnosticCollector) {
    let Some(object) = document.as_object() else {
        collector.emit(
            Diagnostic::error(format!(
                "roadmap must be an object, found {}",
                json_type_name(document)
            ))
            .with_code(ErrorCode::E101)
            .with_help("expected `{ \"title\": ..., \"groups\": [...], \"nodes\": [...] }`"),
        );
        return;
    };

    for field in ARRAY_FIELDS {
        match object.get(field) {
            None | Some(Value::Null) | Some(Value::Array(_)) => {}
            Some(other) => collector.emit(
                Diagnostic::error(format!(
                    "`{field}` must be an array, found {}",
                    json_type_name(other)
                ))
                .with_code(ErrorCode::E102)
                .with_help(format!("wrap the {field} in `[...]`")),
            ),
        }
    }
}

/// Parse a JSON roadmap document.
///
/// Missing or `null` `groups`/`nodes` are treated as empty.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is not JSON (`E100`), the document
/// is not an object (`E101`), `groups` or `nodes` is not an array (`E102`),
/// or an element cannot be read as a group or step (`E103`).
pub fn parse_json(source: &str) -> Result<RoadmapSpec, ParseError> {
    let document: Value = serde_json::from_str(source).map_err(|err| {
        let diag = Diagnostic::error(format!("invalid JSON: {err}")).with_code(ErrorCode::E100);
        ParseError::from(with_optional_label(diag, error_span(source, &err), "here"))
    })?;

    let mut collector = DiagnosticCollector::new();
    check_contract(&document, &mut collector);
    collector.finish()?;

    let spec: RoadmapSpec = serde_json::from_str(source).map_err(|err| {
        let diag = Diagnostic::error(format!("invalid roadmap element: {err}"))
            .with_code(ErrorCode::E103)
            .with_help("groups need `id`; steps need `id`; text fields must be strings");
        ParseError::from(with_optional_label(diag, error_span(source, &err), "here"))
    })?;

    debug!(
        groups = spec.groups().len(),
        nodes = spec.nodes().len();
        "JSON roadmap parsed"
    );

    Ok(spec)
}
