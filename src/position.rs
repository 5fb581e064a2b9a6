use crate::cursor::Cursor;
use crate::error::{Location, ParseError};
use crate::parser::Parser;

/// The stretch of source a successful parse consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start offset in code points (inclusive)
    pub start: usize,
    /// End offset in code points (exclusive)
    pub end: usize,
    pub start_location: Location,
    pub end_location: Location,
}

impl Span {
    /// Get the length of the span in code points
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned code points of `source`
    ///
    /// `source` must be the slice the span was measured on.
    pub fn slice<'a>(&self, source: &'a [char]) -> &'a [char] {
        &source[self.start..self.end]
    }

    /// The spanned text of `source`
    pub fn as_string(&self, source: &[char]) -> String {
        self.slice(source).iter().collect()
    }
}

/// A parser combinator that captures the position span of a successful parse
pub struct Spanned<P> {
    parser: P,
}

impl<P> Spanned<P> {
    pub fn new(parser: P) -> Self {
        Spanned { parser }
    }
}

impl<P> Parser for Spanned<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = (P::Output, Span);

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let start = *cursor;
        let output = self.parser.parse(cursor)?;

        let span = Span {
            start: start.index(),
            end: cursor.index(),
            start_location: start.location(),
            end_location: cursor.location(),
        };
        Ok((output, span))
    }
}

/// Extension trait to add span tracking to any parser
pub trait SpannedExt: Parser + Sized {
    /// Wrap this parser to capture its span
    fn spanned(self) -> Spanned<Self> {
        Spanned::new(self)
    }
}

impl<P> SpannedExt for P where P: Parser {}

/// Convenience function to create a Spanned combinator
pub fn spanned<P>(parser: P) -> Spanned<P> {
    Spanned::new(parser)
}
