use crate::cursor::Cursor;
use crate::cursors::TextCursor;

/// The anchor that layout constraints are measured against
///
/// Both coordinates are 0-based, like the cursor's own indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reference {
    pub line: usize,
    pub column: usize,
}

impl Reference {
    /// The reference a cursor would set at its current position
    pub fn at<C: Cursor>(cursor: &C) -> Self {
        Reference {
            line: cursor.line_index(),
            column: cursor.column_index(),
        }
    }
}

/// Cursors that carry a layout reference position
///
/// The layout combinators in [`crate::layout`] are generic over this trait.
/// `None` means no layout constraint is active.
pub trait Positional: Cursor {
    fn reference(&self) -> Option<Reference>;

    fn set_reference(&mut self, reference: Option<Reference>);
}

/// A [`TextCursor`] extended with an optional reference position
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PositionalCursor<'code> {
    text: TextCursor<'code>,
    reference: Option<Reference>,
}

impl<'code> PositionalCursor<'code> {
    pub fn new(data: &'code [char]) -> Self {
        PositionalCursor {
            text: TextCursor::new(data),
            reference: None,
        }
    }

    pub fn text(&self) -> TextCursor<'code> {
        self.text
    }
}

impl<'code> From<TextCursor<'code>> for PositionalCursor<'code> {
    fn from(text: TextCursor<'code>) -> Self {
        PositionalCursor {
            text,
            reference: None,
        }
    }
}

impl Cursor for PositionalCursor<'_> {
    fn current(&self) -> Option<char> {
        self.text.current()
    }

    fn advance(&mut self) {
        self.text.advance();
    }

    fn index(&self) -> usize {
        self.text.index()
    }

    fn line_index(&self) -> usize {
        self.text.line_index()
    }

    fn column_index(&self) -> usize {
        self.text.column_index()
    }
}

impl Positional for PositionalCursor<'_> {
    fn reference(&self) -> Option<Reference> {
        self.reference
    }

    fn set_reference(&mut self, reference: Option<Reference>) {
        self.reference = reference;
    }
}
