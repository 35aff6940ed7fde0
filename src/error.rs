use thiserror::Error;

use crate::position::Position;

#[derive(Debug, Error)]
pub enum TagPairError {
    #[error("Cursor {line}:{column} is outside the document")]
    CursorOutOfRange { line: usize, column: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TagPairError {
    pub fn cursor_out_of_range(cursor: Position) -> Self {
        TagPairError::CursorOutOfRange {
            line: cursor.line,
            column: cursor.column,
        }
    }
}
