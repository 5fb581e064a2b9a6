use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use tracing::trace;

/// Parser combinator that requires the whole input to be consumed
///
/// The error for leftover input comes from a caller-supplied factory, which
/// receives the cursor positioned at the first unconsumed code point. A bare
/// "input not exhausted" is rarely useful, so the grammar gets to say what it
/// expected there.
pub struct Exhaust<P, F> {
    parser: P,
    error: F,
}

impl<P, F> Parser for Exhaust<P, F>
where
    P: Parser,
    F: Fn(&P::Cursor) -> ParseError,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let value = self.parser.parse(cursor)?;
        if cursor.exhausted() {
            Ok(value)
        } else {
            let error = (self.error)(&*cursor);
            trace!(index = cursor.index(), %error, "input not exhausted");
            Err(error)
        }
    }
}

/// Convenience function to create an Exhaust parser
pub fn exhaust<P, F>(parser: P, error: F) -> Exhaust<P, F>
where
    P: Parser,
    F: Fn(&P::Cursor) -> ParseError,
{
    Exhaust { parser, error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use crate::cursors::TextCursor;
    use crate::error::{ErrorKind, Location};
    use crate::many::{exhaustive_many, many};
    use crate::text::is_string;
    use std::cell::Cell;

    fn trailing(cursor: &TextCursor<'_>) -> ParseError {
        ParseError::trailing_input("expected 'foo'", cursor)
    }

    #[test]
    fn test_exhaust_success() {
        let source = Source::new("foofoo");
        let mut cursor = source.cursor();

        let results = exhaust(many(is_string("foo")), trailing).parse(&mut cursor).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_exhaust_with_erroneous_parser() {
        let source = Source::new("");
        let mut cursor = source.cursor();

        let error = exhaust(is_string("foo"), trailing).parse(&mut cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_exhaust_factory_sees_leftover_start() {
        let source = Source::new("foo!");
        let mut cursor = source.cursor();
        let seen = Cell::new(None);

        let parser = exhaust(is_string("foo"), |c: &TextCursor<'_>| {
            seen.set(c.current());
            ParseError::trailing_input("unexpected punctuation", c)
        });
        let error = parser.parse(&mut cursor).unwrap_err();

        assert_eq!(seen.get(), Some('!'));
        assert_eq!(error.kind(), ErrorKind::TrailingInput);
        assert_eq!(error.message(), "unexpected punctuation");
        assert_eq!(error.location(), Location::new(1, 4));
    }

    #[test]
    fn test_exhaustive_many_points_at_mismatch() {
        let source = Source::new("foofoe");
        let mut cursor = source.cursor();

        let error = exhaust(exhaustive_many(is_string("foo")), trailing)
            .parse(&mut cursor)
            .unwrap_err();
        assert_eq!(error.location(), Location::new(1, 6));
    }

    #[test]
    fn test_many_points_after_last_match() {
        let source = Source::new("foofoe");
        let mut cursor = source.cursor();

        let error = exhaust(many(is_string("foo")), trailing)
            .parse(&mut cursor)
            .unwrap_err();
        assert_eq!(error.location(), Location::new(1, 4));
    }
}
