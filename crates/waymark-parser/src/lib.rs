//! # Waymark Parser
//!
//! Input parsing for Waymark roadmaps. Roadmaps arrive either as markdown
//! written by people or generators, or as JSON produced by a backend. Both
//! are converted into the same [`RoadmapSpec`].
//!
//! ## Usage
//!
//! ```
//! # use waymark_parser::{parse, InputFormat, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "\
//! # Backend Engineer
//! ## Foundations (3 months)
//! ### Learn HTTP
//! - Status codes
//! ";
//!
//!     let roadmap = parse(source, InputFormat::Markdown)?;
//!     assert_eq!(roadmap.groups().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod json;
mod markdown;
mod span;

pub use json::parse_json;
pub use markdown::parse_markdown;
pub use span::Span;

use std::{fmt, path::Path, str::FromStr};

use log::debug;

use waymark_core::roadmap::RoadmapSpec;

use error::ParseError;

/// The format of a roadmap source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Headings and lists (`#` title, `##` phases, `###` steps, `-` bullets).
    #[default]
    Markdown,
    /// A serialized [`RoadmapSpec`].
    Json,
}

impl InputFormat {
    /// Guesses the format from a file extension: `.json` is JSON, anything
    /// else is treated as markdown.
    ///
    /// # Examples
    ///
    /// ```
    /// # use waymark_parser::InputFormat;
    /// assert_eq!(InputFormat::from_path("roadmap.JSON"), InputFormat::Json);
    /// assert_eq!(InputFormat::from_path("roadmap.md"), InputFormat::Markdown);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Markdown,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown input format `{other}`")),
        }
    }
}

/// Parse a roadmap document in the given format.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every diagnostic produced for the
/// document. See [`parse_markdown`] and [`parse_json`].
pub fn parse(source: &str, format: InputFormat) -> Result<RoadmapSpec, ParseError> {
    debug!(format:% = format; "Selecting roadmap parser");

    match format {
        InputFormat::Markdown => parse_markdown(source),
        InputFormat::Json => parse_json(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_from_str() {
        assert_eq!("JSON".parse::<InputFormat>(), Ok(InputFormat::Json));
        assert_eq!("md".parse::<InputFormat>(), Ok(InputFormat::Markdown));
        assert!("yaml".parse::<InputFormat>().is_err());
    }

    #[test]
    fn test_input_format_from_path_without_extension() {
        assert_eq!(InputFormat::from_path("roadmap"), InputFormat::Markdown);
    }

    #[test]
    fn test_parse_dispatches_on_format() {
        let json = parse(r#"{ "title": "J" }"#, InputFormat::Json).unwrap();
        let markdown = parse("# M\n", InputFormat::Markdown).unwrap();

        assert_eq!(json.title(), "J");
        assert_eq!(markdown.title(), "M");
    }
}
