//! Source spans and offset to line/column conversion.
//!
//! Spans are UTF-8 byte ranges into the analyzed text. Hosts that work with
//! lines and columns convert them through a [`LineIndex`].

use std::ops;

/// A half-open byte range into the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the start offset of the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `offset` lies within the span, both ends included.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

}

impl From<Span> for ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// A zero-based line and column. Columns count characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A range between two [`Position`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Maps byte offsets to positions and back.
#[derive(Debug, Clone)]
pub struct LineIndex {
    source: String,
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Index the line starts of `source`.
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        Self {
            source: source.to_string(),
            line_starts,
        }
    }

    /// Convert a byte offset into a position.
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        Position::new(line, column)
    }

    /// Convert a span into a line/column range.
    pub fn range(&self, span: Span) -> Range {
        Range {
            start: self.position(span.start()),
            end: self.position(span.end()),
        }
    }

    /// Convert a position back into a byte offset.
    ///
    /// Returns `None` if the line does not exist. Columns past the end of
    /// the line are clamped to the line end.
    pub fn offset(&self, position: Position) -> Option<usize> {
        let line_start = *self.line_starts.get(position.line)?;
        let line_end = self
            .line_starts
            .get(position.line + 1)
            .map_or(self.source.len(), |next| next - 1);
        let line = &self.source[line_start..line_end];
        let column = line
            .char_indices()
            .nth(position.column)
            .map_or(line.len(), |(idx, _)| idx);
        Some(line_start + column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_basic_functionality() {
        let span = Span::new(5..10);
        assert_eq!(span.start(), 5);
        assert_eq!(span.end(), 10);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(span.contains(5));
        assert!(span.contains(10));
        assert!(!span.contains(11));
    }

    #[test]
    fn test_line_index_position() {
        let index = LineIndex::new("a: 1\nbb: 2\n\nccc: 3");

        assert_eq!(index.position(0), Position::new(0, 0));
        assert_eq!(index.position(5), Position::new(1, 0));
        assert_eq!(index.position(7), Position::new(1, 2));
        assert_eq!(index.position(12), Position::new(3, 0));
        assert_eq!(index.position(100), Position::new(3, 6));
    }

    #[test]
    fn test_line_index_counts_chars() {
        let index = LineIndex::new("é: ffffffff");
        // `é` is two bytes long
        assert_eq!(index.position(2), Position::new(0, 1));
    }

    #[test]
    fn test_line_index_offset() {
        let index = LineIndex::new("a: 1\nbb: 2\n");

        assert_eq!(index.offset(Position::new(1, 1)), Some(6));
        assert_eq!(index.offset(Position::new(1, 40)), Some(10));
        assert_eq!(index.offset(Position::new(9, 0)), None);
    }
}
