use crate::cursor::Cursor;
use crate::error::ParseError;

/// Core parser trait for parser combinators
pub trait Parser {
    type Cursor: Cursor;
    type Output;

    /// Run the parser against the shared cursor
    ///
    /// On success the cursor has been advanced past the consumed input. On
    /// failure the cursor is left wherever the failing parser stopped; only
    /// combinators that document a restore (`or`, `many`, `maybe`, `not`)
    /// move it back.
    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError>;
}

impl<P> Parser for &P
where
    P: Parser + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        (**self).parse(cursor)
    }
}

impl<P> Parser for Box<P>
where
    P: Parser + ?Sized,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        (**self).parse(cursor)
    }
}

/// A type-erased parser
///
/// Recursive grammars need one of these somewhere in the cycle, since a
/// parser type cannot contain itself.
pub type BoxedParser<'a, C, O> = Box<dyn Parser<Cursor = C, Output = O> + 'a>;

/// Erase the type of a parser
pub fn boxed<'a, P>(parser: P) -> BoxedParser<'a, P::Cursor, P::Output>
where
    P: Parser + 'a,
{
    Box::new(parser)
}
