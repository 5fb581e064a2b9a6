use crate::cursor::Cursor;
use crate::error::{ErrorKind, ParseError};
use crate::parser::Parser;

/// Succeeds with `()` exactly when the wrapped parser fails here
///
/// The wrapped parser runs against the shared cursor, which is then reset to
/// a copy taken beforehand, so the cursor is unchanged after either outcome.
/// A match is reported as [`ErrorKind::UnexpectedMatch`] at that position.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<P> Parser for Not<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = ();

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<(), ParseError> {
        let snapshot = *cursor;
        let outcome = self.parser.parse(cursor);
        *cursor = snapshot;

        match outcome {
            Ok(_) => Err(ParseError::new(
                ErrorKind::UnexpectedMatch,
                "unexpected match",
                cursor.location(),
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Convenience function to create a Not parser for negative lookahead
pub fn not<P>(parser: P) -> Not<P>
where
    P: Parser,
{
    Not::new(parser)
}

/// Extension trait to add .not() method support for parsers
pub trait NotExt: Parser + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

/// Implement NotExt for all parsers
impl<P> NotExt for P where P: Parser {}
