//! Error types for Waymark operations.
//!
//! This module provides the main error type [`WaymarkError`] which wraps
//! the error conditions that can occur while turning a roadmap document
//! into a layout.

use std::io;

use thiserror::Error;

use waymark_parser::error::ParseError;

/// The main error type for Waymark operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the source text next to the structured
/// diagnostics so that callers can render snippets around each span.
#[derive(Debug, Error)]
pub enum WaymarkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl WaymarkError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
