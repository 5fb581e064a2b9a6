use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Sequencing is not atomic. If the second parser fails, whatever the first
/// one consumed (and whatever the second consumed before failing) stays
/// consumed. Wrap the sequence in `or`/`maybe`/`many` to get backtracking.
///
/// Chaining `.and()` nests tuples like `((a, b), c)`; use [`crate::seq`] for a
/// flat tuple.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let result1 = self.parser1.parse(cursor)?;
        let result2 = self.parser2.parse(cursor)?;
        Ok((result1, result2))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser<Cursor = P1::Cursor>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<Cursor = Self::Cursor>,
    {
        And::new(self, other)
    }
}

impl<P> AndExt for P where P: Parser {}
