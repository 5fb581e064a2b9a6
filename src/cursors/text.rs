use crate::cursor::Cursor;

/// Cursor over a slice of code points, tracking line and column as it moves
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCursor<'code> {
    data: &'code [char],
    index: usize,
    line: usize,
    column: usize,
}

impl<'code> TextCursor<'code> {
    pub fn new(data: &'code [char]) -> Self {
        TextCursor {
            data,
            index: 0,
            line: 0,
            column: 0,
        }
    }

    /// The full source this cursor walks over
    pub fn source(&self) -> &'code [char] {
        self.data
    }

    /// Code points not yet consumed
    pub fn remaining(&self) -> &'code [char] {
        &self.data[self.index.min(self.data.len())..]
    }
}

impl Cursor for TextCursor<'_> {
    fn current(&self) -> Option<char> {
        self.data.get(self.index).copied()
    }

    fn advance(&mut self) {
        match self.current() {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => self.column += 1,
            None => return,
        }
        self.index += 1;
    }

    fn index(&self) -> usize {
        self.index
    }

    fn line_index(&self) -> usize {
        self.line
    }

    fn column_index(&self) -> usize {
        self.column
    }
}
