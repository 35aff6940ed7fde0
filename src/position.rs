//! Document coordinates used by the scanners and the highlight layer.

use serde::Serialize;

/// Zero-based (line, column) pair. Columns count characters, not bytes.
///
/// Ordering is lexicographic: first by line, then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A highlight region between two positions.
///
/// `start` is not required to precede `end`; renderers call
/// [`Span::normalized`] before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// True when the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `(min, max)` of the two endpoints.
    pub fn normalized(&self) -> (Position, Position) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Whether `pos` falls inside the normalized span (end exclusive).
    pub fn contains(&self, pos: Position) -> bool {
        let (start, end) = self.normalized();
        start <= pos && pos < end
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
