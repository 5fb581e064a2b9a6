use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that runs a parser for its effect on the cursor only
pub struct Void<P> {
    parser: P,
}

impl<P> Parser for Void<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<(), ParseError> {
        self.parser.parse(cursor).map(drop)
    }
}

/// Discard the value of `parser`, keeping its failures
pub fn void<P>(parser: P) -> Void<P>
where
    P: Parser,
{
    Void { parser }
}
