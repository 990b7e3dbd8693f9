//! Byte spans into roadmap source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the source document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create a span from a 1-based line and column, as reported by JSON
    /// parsers, covering a single character.
    ///
    /// Positions past the end of the source clamp to an empty span at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use waymark_parser::Span;
    /// let source = "{\n  \"title\": x\n}";
    /// let span = Span::from_line_col(source, 2, 12);
    /// assert_eq!(&source[span.start()..span.end()], "x");
    /// ```
    pub fn from_line_col(source: &str, line: usize, column: usize) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        let mut start = (line_start + column.saturating_sub(1)).min(source.len());
        while !source.is_char_boundary(start) {
            start -= 1;
        }
        let end = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());
        Self::new(start..end)
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
