//! Markdown roadmap documents.
//!
//! Roadmap generators emit a small, fixed subset of markdown:
//!
//! ```text
//! # Backend Engineer            <- roadmap title
//! ## Foundations (3 months)     <- phase, with optional duration
//! ### Learn HTTP                <- step of the current phase
//! - Methods and status codes    <- bullets of the current step
//! - Caching headers
//! ```
//!
//! The document is read line by line. Each line is classified with a small
//! winnow grammar ([`classify`]) and then folded into a [`RoadmapSpec`] by the
//! [`Converter`]. Anything outside the subset above (paragraphs, deeper
//! headings, nested list items, fenced code) is ignored.

use log::{debug, warn};
use winnow::{
    ModalResult, Parser as _,
    ascii::{digit1, space1},
    combinator::{alt, eof, preceded},
    token::{one_of, take_while},
};

use waymark_core::roadmap::{Group, RoadmapSpec, Step};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Indentation at which a list item counts as nested under another item.
const NESTED_ITEM_INDENT: usize = 2;

/// Indentation up to which headings and fences are still recognized.
const MAX_BLOCK_INDENT: usize = 3;

/// A classified markdown line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    /// ATX heading with its depth (number of `#`) and trimmed text.
    Heading { depth: usize, text: &'a str },
    /// Bullet or ordered list item with its trimmed text.
    Item { text: &'a str },
    /// Opening or closing code fence.
    Fence,
    /// Anything else.
    Other,
}

fn rest<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(0.., |_: char| true).parse_next(input)
}

/// Text after a marker: either nothing at all, or whitespace followed by the rest.
fn marker_content<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    alt((preceded(space1, rest), eof)).parse_next(input)
}

fn heading<'a>(input: &mut &'a str) -> ModalResult<Line<'a>> {
    (take_while(1..=6, '#'), marker_content)
        .map(|(hashes, text): (&str, &str)| Line::Heading {
            depth: hashes.len(),
            text: strip_closing_sequence(text),
        })
        .parse_next(input)
}

fn list_item<'a>(input: &mut &'a str) -> ModalResult<Line<'a>> {
    preceded(
        alt((
            one_of(['-', '*', '+']).void(),
            (digit1, one_of(['.', ')'])).void(),
        )),
        marker_content,
    )
    .map(|text: &str| Line::Item { text: text.trim() })
    .parse_next(input)
}

fn fence<'a>(input: &mut &'a str) -> ModalResult<Line<'a>> {
    alt(("```", "~~~")).value(Line::Fence).parse_next(input)
}

/// Classifies one line (without its line terminator).
///
/// Returns the indentation width (tabs count as four columns) and the
/// classified line.
fn classify(line: &str) -> (usize, Line<'_>) {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let indent = line[..line.len() - trimmed.len()]
        .chars()
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum();

    let mut input = trimmed;
    let parsed = if indent <= MAX_BLOCK_INDENT {
        alt((fence, heading, list_item)).parse_next(&mut input)
    } else {
        list_item.parse_next(&mut input)
    };

    (indent, parsed.unwrap_or(Line::Other))
}

/// Strips an optional closing sequence of `#` from heading text.
///
/// The closing sequence must be separated from the text by whitespace, so
/// `C#` keeps its hash while `Title ##` becomes `Title`.
fn strip_closing_sequence(text: &str) -> &str {
    let text = text.trim();
    let without = text.trim_end_matches('#');
    if without.is_empty() {
        return "";
    }
    if without.len() < text.len() && !without.ends_with([' ', '\t']) {
        return text;
    }
    without.trim_end()
}

/// Splits `Name (duration)` into its name and duration.
///
/// Only the text between the first `(` and the next `(` is considered, with
/// the first `)` removed. An empty duration counts as none.
fn split_duration(text: &str) -> (&str, Option<String>) {
    match text.split_once('(') {
        Some((name, rest)) => {
            let segment = rest.split('(').next().unwrap_or_default();
            let duration = segment.replacen(')', "", 1).trim().to_string();
            (name.trim(), (!duration.is_empty()).then_some(duration))
        }
        None => (text, None),
    }
}

/// Folds classified lines into a roadmap.
#[derive(Debug, Default)]
struct Converter {
    spec: RoadmapSpec,
    title_span: Option<Span>,
    current_group: Option<String>,
    in_step: bool,
    in_code_block: bool,
    group_count: usize,
    step_count: usize,
    collector: DiagnosticCollector,
}

impl Converter {
    fn line(&mut self, line: &str, span: Span) {
        let (indent, kind) = classify(line);

        if self.in_code_block {
            if kind == Line::Fence {
                self.in_code_block = false;
            }
            return;
        }

        match kind {
            Line::Fence => self.in_code_block = true,
            Line::Heading { text: "", depth } if depth <= 3 => {
                self.collector.emit(
                    Diagnostic::error("heading has no text")
                        .with_code(ErrorCode::E001)
                        .with_label(span, "empty heading")
                        .with_help("write the title after the `#` markers"),
                );
            }
            Line::Heading { depth: 1, text } => self.title(text, span),
            Line::Heading { depth: 2, text } => self.group(text),
            Line::Heading { depth: 3, text } => self.step(text, span),
            Line::Item { text } if indent < NESTED_ITEM_INDENT => self.bullet(text, span),
            Line::Heading { .. } | Line::Item { .. } | Line::Other => {}
        }
    }

    fn title(&mut self, text: &str, span: Span) {
        match self.title_span {
            Some(first) => self.collector.emit(
                Diagnostic::warning(format!("additional title `{text}` ignored"))
                    .with_label(span, "ignored title")
                    .with_secondary_label(first, "roadmap title defined here")
                    .with_help("use `##` for phases"),
            ),
            None => {
                self.spec.set_title(text);
                self.title_span = Some(span);
            }
        }
    }

    fn group(&mut self, text: &str) {
        self.group_count += 1;
        let id = format!("g{}", self.group_count);
        let (title, duration) = split_duration(text);

        let mut group = Group::new(id.clone(), title, (self.spec.groups().len() + 1) as f64);
        if let Some(duration) = duration {
            group = group.with_duration(duration);
        }
        debug!(id = id.as_str(), title; "Phase parsed");

        self.spec.push_group(group);
        self.current_group = Some(id);
        self.in_step = false;
    }

    fn step(&mut self, text: &str, span: Span) {
        let group = match &self.current_group {
            Some(group) => group.clone(),
            None => {
                self.collector.emit(
                    Diagnostic::warning(format!("step `{text}` is not inside a phase"))
                        .with_code(ErrorCode::E002)
                        .with_label(span, "step heading")
                        .with_help("add a `## Phase` heading above the first step"),
                );
                String::new()
            }
        };

        self.step_count += 1;
        let step = Step::new(format!("n{}", self.step_count), group, text);
        self.spec.push_step(step);
        self.in_step = true;
    }

    fn bullet(&mut self, text: &str, span: Span) {
        if !self.in_step {
            self.collector.emit(
                Diagnostic::warning("list item outside of a step ignored")
                    .with_label(span, "no step above this item"),
            );
            return;
        }
        if text.is_empty() {
            return;
        }
        if let Some(step) = self.spec.last_step_mut() {
            step.push_bullet(text);
        }
    }

    fn finish(self) -> Result<RoadmapSpec, ParseError> {
        let warnings = self.collector.finish()?;
        for warning in &warnings {
            warn!("{warning}");
        }
        Ok(self.spec)
    }
}

/// Parse a markdown roadmap document.
///
/// # Errors
///
/// Returns a [`ParseError`] with one diagnostic per problem when a heading
/// is empty (`E001`). A step before the first phase (`E002`) is only a
/// warning: it is kept with an empty group, which the layout leaves out.
pub fn parse_markdown(source: &str) -> Result<RoadmapSpec, ParseError> {
    let mut converter = Converter::default();

    let mut offset = 0;
    for raw in source.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        converter.line(line, Span::new(offset..offset + line.len()));
        offset += raw.len();
    }

    converter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND: &str = "\
# Backend Engineer

Intro paragraph that is ignored.

## Foundations (3 months)
### Learn HTTP
- Methods and status codes
- Caching headers
### Learn SQL
1. Joins
2. Indexes

## Services
### Build an API
* REST design
  - nested detail is ignored
";

    #[test]
    fn test_parse_full_document() {
        let spec = parse_markdown(BACKEND).expect("valid roadmap");

        assert_eq!(spec.title(), "Backend Engineer");
        assert_eq!(spec.groups().len(), 2);
        assert_eq!(spec.nodes().len(), 3);

        let foundations = &spec.groups()[0];
        assert_eq!(foundations.id(), "g1");
        assert_eq!(foundations.title(), "Foundations");
        assert_eq!(foundations.duration(), Some("3 months"));
        assert_eq!(foundations.order(), 1.0);

        let services = &spec.groups()[1];
        assert_eq!(services.id(), "g2");
        assert_eq!(services.duration(), None);
        assert_eq!(services.order(), 2.0);

        let http = &spec.nodes()[0];
        assert_eq!(http.id(), "n1");
        assert_eq!(http.group(), "g1");
        assert_eq!(http.bullets(), ["Methods and status codes", "Caching headers"]);

        assert_eq!(spec.nodes()[1].bullets(), ["Joins", "Indexes"]);
        assert_eq!(spec.nodes()[2].group(), "g2");
        assert_eq!(spec.nodes()[2].bullets(), ["REST design"]);
    }

    #[test]
    fn test_classify_lines() {
        assert_eq!(
            classify("## Phase"),
            (0, Line::Heading { depth: 2, text: "Phase" })
        );
        assert_eq!(classify("##"), (0, Line::Heading { depth: 2, text: "" }));
        assert_eq!(classify("#hashtag"), (0, Line::Other));
        assert_eq!(classify("####### seven"), (0, Line::Other));
        assert_eq!(classify("  - item"), (2, Line::Item { text: "item" }));
        assert_eq!(classify("12) item"), (0, Line::Item { text: "item" }));
        assert_eq!(classify("---"), (0, Line::Other));
        assert_eq!(classify("```rust"), (0, Line::Fence));
        assert_eq!(classify("    # code"), (4, Line::Other));
    }

    #[test]
    fn test_closing_sequence() {
        assert_eq!(strip_closing_sequence("Title ##"), "Title");
        assert_eq!(strip_closing_sequence("Learn C#"), "Learn C#");
        assert_eq!(strip_closing_sequence(" ## "), "");
    }

    #[test]
    fn test_split_duration() {
        assert_eq!(
            split_duration("Basics (2 weeks)"),
            ("Basics", Some("2 weeks".to_string()))
        );
        assert_eq!(split_duration("Basics ()"), ("Basics", None));
        assert_eq!(
            split_duration("A (b) (c)"),
            ("A", Some("b".to_string()))
        );
        assert_eq!(split_duration("Plain"), ("Plain", None));
    }

    #[test]
    fn test_code_fences_are_skipped() {
        let source = "# T\n## P\n```\n### Not a step\n- not a bullet\n```\n### Real\n";
        let spec = parse_markdown(source).unwrap();

        assert_eq!(spec.nodes().len(), 1);
        assert_eq!(spec.nodes()[0].title(), "Real");
    }

    #[test]
    fn test_crlf_line_endings() {
        let spec = parse_markdown("# T\r\n## P (1 month)\r\n### S\r\n- a\r\n").unwrap();

        assert_eq!(spec.groups()[0].duration(), Some("1 month"));
        assert_eq!(spec.nodes()[0].bullets(), ["a"]);
    }

    #[test]
    fn test_additional_title_is_ignored() {
        let spec = parse_markdown("# First\n# Second\n").unwrap();
        assert_eq!(spec.title(), "First");
    }

    #[test]
    fn test_bullets_reset_on_new_phase() {
        let spec = parse_markdown("## A\n### S\n## B\n- orphan\n").unwrap();
        assert!(spec.nodes()[0].bullets().is_empty());
    }

    #[test]
    fn test_step_before_phase_is_kept_without_phase() {
        let spec = parse_markdown("# Frontend\n### Orphan\n- stray\n## CSS\n### Flexbox\n")
            .expect("a step outside a phase is only a warning");

        assert_eq!(spec.groups().len(), 1);
        assert_eq!(spec.nodes().len(), 2);

        let orphan = &spec.nodes()[0];
        assert_eq!(orphan.id(), "n1");
        assert_eq!(orphan.group(), "");
        assert_eq!(orphan.bullets(), ["stray"]);
        assert_eq!(spec.nodes()[1].group(), "g1");
    }

    #[test]
    fn test_all_errors_are_collected() {
        let source = "### One\n##\n### Two\n";
        let err = parse_markdown(source).unwrap_err();

        let codes: Vec<_> = err.diagnostics().iter().filter_map(|d| d.code()).collect();
        assert_eq!(codes, vec![ErrorCode::E002, ErrorCode::E001, ErrorCode::E002]);

        let errors = err.diagnostics().iter().filter(|d| d.severity().is_error());
        assert_eq!(errors.count(), 1);

        let span = err.diagnostics()[0].labels()[0].span();
        assert_eq!(&source[span.start()..span.end()], "### One");
    }

    #[test]
    fn test_empty_document() {
        let spec = parse_markdown("").unwrap();

        assert_eq!(spec.title(), "");
        assert!(spec.groups().is_empty());
        assert!(spec.nodes().is_empty());
    }
}
