use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that makes another parser optional
///
/// Returns `Some` on success. On failure the cursor is put back where it was
/// and `None` is returned, so this never fails.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<P> Parser for Maybe<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let snapshot = *cursor;
        match self.parser.parse(cursor) {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                *cursor = snapshot;
                Ok(None)
            }
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<P>(parser: P) -> Maybe<P>
where
    P: Parser,
{
    Maybe::new(parser)
}
