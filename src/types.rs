use std::fmt;

/// A single operation on a buffer.
///
/// These are the concrete actions a host (or the key dispatcher) asks a
/// buffer to perform. Every operation is cursor-relative: insertion happens
/// after the cursor, forward deletion removes the cell after the cursor,
/// and moves shift the cursor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    /// Insert the character after the cursor and advance onto it.
    Insert(char),
    /// Remove the character after the cursor, if any.
    DeleteForward,
    /// Step the cursor one position forward, clamped at the end.
    MoveForward,
    /// Step the cursor one position backward, clamped at the start.
    MoveBackward,
    /// Jump the cursor to before the first character.
    MoveToStart,
    /// Jump the cursor to after the last character.
    MoveToEnd,
}

/// The two-line textual rendering of a buffer.
///
/// The first line shows the content characters left to right, separated by
/// single spaces, so the character at offset `i` starts at column `2 * i`.
/// The second line carries a single `^` under the position where the next
/// inserted character would appear (column `2 * cursor_offset`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    /// Space-separated content characters.
    pub content: String,
    /// Caret line: spaces followed by a single `^`.
    pub caret: String,
}

impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.content, self.caret)
    }
}
