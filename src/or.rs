use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The cursor is copied once before the first attempt and restored before the
/// second, so both alternatives start from the same position. When both fail
/// the cursor is restored again and the second parser's error is returned.
/// Chains like `a.or(b).or(c)` behave as one n-way alternative reporting the
/// last alternative's error.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2> Parser for Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let snapshot = *cursor;
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(error) => {
                trace!(index = snapshot.index(), %error, "alternative failed, backtracking");
                *cursor = snapshot;
                let result = self.parser2.parse(cursor);
                if result.is_err() {
                    *cursor = snapshot;
                }
                result
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Cursor = Self::Cursor, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor, Output = P1::Output>,
{
    Or::new(parser1, parser2)
}
