//! Buffer locations used to anchor gutter messages.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A `(column, line)` position in the buffer.
///
/// Lines are zero-based. A column of [`Location::WHOLE_LINE`] anchors a message to the whole
/// line instead of a precise character column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Zero-based column in characters, or [`Location::WHOLE_LINE`].
    pub column: isize,
    /// Zero-based logical line index.
    pub line: usize,
}

impl Location {
    /// Column sentinel for line-anchored (column-agnostic) locations.
    pub const WHOLE_LINE: isize = -1;

    /// Create a new location.
    pub fn new(column: isize, line: usize) -> Self {
        Self { column, line }
    }

    /// Create a column-agnostic location on a zero-based line.
    pub fn whole_line(line: usize) -> Self {
        Self::new(Self::WHOLE_LINE, line)
    }

    /// Whether this location is anchored to a line rather than a column.
    pub fn is_whole_line(&self) -> bool {
        self.column == Self::WHOLE_LINE
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
