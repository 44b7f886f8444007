//! Word positions within a text.

use serde::{Deserialize, Serialize};

/// Position of a word in a text: the (line, column) of its first
/// character, both 1-based.
///
/// Ordering is strict lexicographic on `(line, col)`, so positions sort
/// ascending by line and then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub col: usize,
}

impl Position {
    /// Creates a position from a 1-based line and column.
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
