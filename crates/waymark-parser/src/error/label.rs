//! Source spans annotated with a short message.

use crate::span::Span;

/// A span of the roadmap source with the message drawn under it.
///
/// Every diagnostic carries one primary label at the offending line. Extra
/// context, such as where the roadmap title was first set, goes into
/// secondary labels.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Primary labels are highlighted as the location of the problem.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(10..20), "expected value");

        assert_eq!(label.span(), Span::new(10..20));
        assert_eq!(label.message(), "expected value");
        assert!(label.is_primary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..9), "roadmap title defined here");

        assert_eq!(label.span().end(), 9);
        assert!(!label.is_primary());
    }
}
