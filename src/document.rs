//! Line-addressable document model.
//!
//! The scanners only need random access to lines and the ability to pull a
//! range of text out of the document. [`Document`] captures that contract so
//! any host buffer can be plugged in; [`TextDocument`] is the owned
//! implementation used by the CLI and the tests.

use crate::position::Position;

/// Random-access, line-addressable text.
pub trait Document {
    /// Number of lines in the document. An empty document has one empty line.
    fn line_count(&self) -> usize;

    /// Text of line `index` without its terminator.
    fn line(&self, index: usize) -> Option<&str>;

    /// Text between `start` (inclusive) and `end` (exclusive), clamped to the
    /// document. Lines are joined with `\n`.
    fn text_range(&self, start: Position, end: Position) -> String {
        if end <= start {
            return String::new();
        }

        let last_line = end.line.min(self.line_count().saturating_sub(1));
        let mut out = String::new();

        for index in start.line..=last_line {
            let Some(line) = self.line(index) else {
                break;
            };
            let from = if index == start.line { start.column } else { 0 };
            let to = if index == end.line {
                end.column
            } else {
                usize::MAX
            };

            if index > start.line {
                out.push('\n');
            }
            out.extend(line.chars().skip(from).take(to.saturating_sub(from)));
        }

        out
    }

    /// Text of the cursor's line up to the cursor.
    fn line_prefix(&self, cursor: Position) -> String {
        self.text_range(Position::new(cursor.line, 0), cursor)
    }

    /// Character directly after the cursor on the same line, if any.
    fn char_after(&self, cursor: Position) -> Option<char> {
        self.line(cursor.line)?.chars().nth(cursor.column)
    }

    /// Whether `pos` addresses a character or the end of a line.
    fn contains(&self, pos: Position) -> bool {
        self.line(pos.line)
            .is_some_and(|line| pos.column <= line.chars().count())
    }
}

/// Owned document split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    /// Split `text` on `\n`, dropping a trailing `\r` from each line.
    pub fn new(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { lines }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod document_tests;
