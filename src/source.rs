use crate::cursors::{PositionalCursor, TextCursor};
use crate::error::Location;

/// Input text materialized as code points before parsing starts
///
/// Cursors borrow from a `Source`, so it has to outlive every parse run
/// against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    chars: Vec<char>,
}

impl Source {
    pub fn new(text: &str) -> Self {
        Source {
            chars: text.chars().collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// A cursor at the start of the source
    pub fn cursor(&self) -> TextCursor<'_> {
        TextCursor::new(&self.chars)
    }

    /// A layout-aware cursor at the start of the source, with no reference set
    pub fn positional_cursor(&self) -> PositionalCursor<'_> {
        PositionalCursor::new(&self.chars)
    }

    /// Up to 2 lines before and after `location`, with a marker under its column
    pub fn context_lines(&self, location: Location) -> Vec<String> {
        let text: String = self.chars.iter().collect();
        let first = location.line.saturating_sub(2).max(1);
        let last = location.line + 2;
        let mut lines = Vec::new();

        for (number, content) in (1..).zip(text.split('\n')) {
            if number < first {
                continue;
            }
            if number > last {
                break;
            }

            let prefix = if number == location.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == location.line {
                let offset = prefix.len() + location.column.saturating_sub(1);
                lines.push(format!("{}^--- here", " ".repeat(offset)));
            }
        }

        lines
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::new(text)
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::new(&text)
    }
}
