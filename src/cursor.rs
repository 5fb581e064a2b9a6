use crate::error::Location;
use std::fmt;

/// Generic cursor trait for parser combinators
///
/// A cursor is a position in a fixed sequence of code points. Parsers receive
/// it as `&mut` and advance it in place; combinators that need to backtrack
/// copy it before an attempt and assign the copy back afterwards, so every
/// implementation must stay a small `Copy` value with no owned state.
pub trait Cursor: Copy + fmt::Debug {
    /// The code point at the current position, or `None` at the end of input
    fn current(&self) -> Option<char>;

    /// Consume the current code point
    ///
    /// A newline moves to column 0 of the next line, anything else moves one
    /// column to the right. Advancing an exhausted cursor does nothing.
    fn advance(&mut self);

    /// Offset into the source, counted in code points
    fn index(&self) -> usize;

    /// 0-based line number
    fn line_index(&self) -> usize;

    /// 0-based column number
    fn column_index(&self) -> usize;

    /// Check if every code point has been consumed
    fn exhausted(&self) -> bool {
        self.current().is_none()
    }

    /// 1-based position for error messages
    fn location(&self) -> Location {
        Location::new(self.line_index() + 1, self.column_index() + 1)
    }
}
