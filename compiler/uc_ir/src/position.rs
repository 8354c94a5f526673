//! Source positions.
//!
//! A position is the `(line, offset)` pair of the first character of a
//! construct: a 1-based line number and a 0-based byte offset from the start
//! of the file.
//!
//! The offset is neither a column nor a character index. It counts UTF-8
//! bytes from the start of the file, not from the start of the line, so it
//! runs ahead of a character count once non-ASCII text has been seen.
//! Consumers that need a column must recompute it from the source.

use std::fmt;

/// Source position of a construct.
///
/// Layout: 8 bytes total
/// - line: u32 - 1-based line number
/// - offset: u32 - byte offset from file start
///
/// Ordering is by line first, then offset, so the minimum of a set of
/// positions is the leftmost one in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Position {
    pub line: u32,
    pub offset: u32,
}

impl Position {
    /// Start of a file.
    pub const START: Position = Position { line: 1, offset: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, offset: u32) -> Self {
        Position { line, offset }
    }

    /// The position as a `(line, offset)` tuple.
    #[inline]
    pub const fn as_tuple(self) -> (u32, u32) {
        (self.line, self.offset)
    }
}

impl From<(u32, u32)> for Position {
    #[inline]
    fn from((line, offset): (u32, u32)) -> Self {
        Position { line, offset }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.offset)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}

// Size assertions to prevent accidental regressions
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Position;
    crate::static_assert_size!(Position, 8);
}
