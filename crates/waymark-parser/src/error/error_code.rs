//! Error codes for the Waymark diagnostic system.
//!
//! Error codes are organized by input format:
//! - `E0xx` - Markdown errors
//! - `E1xx` - JSON errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Markdown Errors (E0xx)
    // =========================================================================
    /// Empty heading.
    ///
    /// A phase or step heading has no text after its `#` markers.
    E001,

    /// Step outside of a phase.
    ///
    /// A `###` step heading appeared before any `##` phase heading. Reported
    /// as a warning: the step is kept without a phase and the layout leaves
    /// it out.
    E002,

    // =========================================================================
    // JSON Errors (E1xx)
    // =========================================================================
    /// Invalid JSON syntax.
    E100,

    /// Roadmap document is not an object.
    ///
    /// The top-level JSON value must be an object with `title`, `groups`
    /// and `nodes` fields.
    E101,

    /// Roadmap field is not an array.
    ///
    /// `groups` or `nodes` is present but holds something other than an
    /// array. This is a contract violation by the producer of the document.
    E102,

    /// Invalid roadmap element.
    ///
    /// A group or step has a missing id or a field of the wrong type.
    E103,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Markdown errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            // JSON errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E102.to_string(), "E102");
    }
}
