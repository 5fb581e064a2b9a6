use crate::cursor::Cursor;
use crate::cursors::{Positional, Reference};
use crate::error::{ErrorKind, ParseError};
use crate::or::Or;
use crate::parser::Parser;
use tracing::trace;

fn invalid_indent<C: Positional>(cursor: &C) -> ParseError {
    trace!(reference = ?cursor.reference(), location = %cursor.location(), "invalid indent");
    ParseError::new(ErrorKind::InvalidIndent, "invalid indent", cursor.location())
}

/// Fails unless the cursor sits exactly on the reference column
///
/// Without a reference there is nothing to align with, so this always fails.
pub(crate) fn check_same_column<C: Positional>(cursor: &C) -> Result<(), ParseError> {
    match cursor.reference() {
        Some(reference) if reference.column == cursor.column_index() => Ok(()),
        _ => Err(invalid_indent(cursor)),
    }
}

/// Parser combinator that anchors layout constraints at the current position
///
/// The reference is replaced for the duration of the wrapped parse and the
/// previous one is put back afterwards, whether the parse succeeded or not.
pub struct WithPosition<P> {
    parser: P,
}

impl<P> Parser for WithPosition<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let saved = cursor.reference();
        cursor.set_reference(Some(Reference::at(&*cursor)));
        let result = self.parser.parse(cursor);
        cursor.set_reference(saved);
        result
    }
}

/// Convenience function to create a WithPosition parser
pub fn with_position<P>(parser: P) -> WithPosition<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    WithPosition { parser }
}

/// Parser combinator requiring the input to start right of the reference column
///
/// Without a reference it is the wrapped parser unchanged.
pub struct Indent<P> {
    parser: P,
}

impl<P> Parser for Indent<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        match cursor.reference() {
            Some(reference) if cursor.column_index() <= reference.column => {
                Err(invalid_indent(cursor))
            }
            _ => self.parser.parse(cursor),
        }
    }
}

/// Convenience function to create an Indent parser
pub fn indent<P>(parser: P) -> Indent<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    Indent { parser }
}

/// Parser combinator requiring the input to start on the reference line
///
/// Without a reference it is the wrapped parser unchanged.
pub struct SameLine<P> {
    parser: P,
}

impl<P> Parser for SameLine<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        match cursor.reference() {
            Some(reference) if cursor.line_index() != reference.line => {
                trace!(
                    reference = ?reference,
                    location = %cursor.location(),
                    "not on the same line"
                );
                Err(ParseError::new(
                    ErrorKind::NotSameLine,
                    "should be in the same line",
                    cursor.location(),
                ))
            }
            _ => self.parser.parse(cursor),
        }
    }
}

/// Convenience function to create a SameLine parser
pub fn same_line<P>(parser: P) -> SameLine<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    SameLine { parser }
}

/// Parser combinator requiring the input to start exactly on the reference column
///
/// Only meaningful inside [`with_position`]; with no reference set it always
/// fails.
pub struct SameColumn<P> {
    parser: P,
}

impl<P> Parser for SameColumn<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        check_same_column(cursor)?;
        self.parser.parse(cursor)
    }
}

/// Convenience function to create a SameColumn parser
pub fn same_column<P>(parser: P) -> SameColumn<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    SameColumn { parser }
}

/// Parser combinator accepting input later on the reference line or indented below it
///
/// Equivalent to `or(same_line(p), indent(p))`.
pub struct SameLineOrIndent<P> {
    parser: P,
}

impl<P> Parser for SameLineOrIndent<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        Or::new(same_line(&self.parser), indent(&self.parser)).parse(cursor)
    }
}

/// Convenience function to create a SameLineOrIndent parser
pub fn same_line_or_indent<P>(parser: P) -> SameLineOrIndent<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    SameLineOrIndent { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use crate::and::AndExt;
    use crate::cursors::PositionalCursor;
    use crate::error::Location;
    use crate::many::many;
    use crate::text::{chars, is_string};
    use crate::wrap::suffix;
    use rstest::rstest;

    fn blanks<'code>() -> impl Parser<Cursor = PositionalCursor<'code>, Output = Vec<char>> {
        many(chars(" \t\n"))
    }

    fn word<'code>(
        text: &'static str,
    ) -> impl Parser<Cursor = PositionalCursor<'code>, Output = std::borrow::Cow<'static, str>> {
        suffix(is_string(text), blanks())
    }

    #[test]
    fn test_with_position_restores_reference() {
        let source = Source::new("foo\nfoo");
        let mut cursor = source.positional_cursor();

        with_position(word("foo")).parse(&mut cursor).unwrap();
        assert_eq!(cursor.reference(), None);

        let outer = Reference { line: 0, column: 0 };
        cursor.set_reference(Some(outer));
        let error = with_position(is_string("bar")).parse(&mut cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidCharacter);
        assert_eq!(cursor.reference(), Some(outer));
    }

    #[test]
    fn test_with_position_anchors_at_current_position() {
        let source = Source::new("\n   x");
        let mut cursor = source.positional_cursor();
        for _ in 0..4 {
            cursor.advance();
        }

        let parser = with_position(same_column(is_string("x")));
        assert_eq!(parser.parse(&mut cursor).unwrap(), "x");
    }

    #[test]
    fn test_indent() {
        let source = Source::new(" foo");
        let mut cursor = source.positional_cursor();

        let parser = with_position(blanks().and(indent(is_string("foo"))));
        assert!(parser.parse(&mut cursor).is_ok());
    }

    #[test]
    fn test_indent_without_position() {
        let source = Source::new("foo");
        let mut cursor = source.positional_cursor();

        assert!(indent(is_string("foo")).parse(&mut cursor).is_ok());
    }

    #[test]
    fn test_indent_error() {
        let source = Source::new("foo");
        let mut cursor = source.positional_cursor();

        let error = with_position(blanks().and(indent(is_string("foo"))))
            .parse(&mut cursor)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidIndent);
        assert_eq!(error.message(), "invalid indent");
    }

    #[test]
    fn test_same_line() {
        let source = Source::new("foo foo");
        let mut cursor = source.positional_cursor();

        let parser = with_position(word("foo").and(same_line(is_string("foo"))));
        assert!(parser.parse(&mut cursor).is_ok());
    }

    #[test]
    fn test_same_line_error() {
        let source = Source::new("foo\n foo");
        let mut cursor = source.positional_cursor();

        let error = with_position(word("foo").and(same_line(is_string("foo"))))
            .parse(&mut cursor)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotSameLine);
        assert_eq!(error.message(), "should be in the same line");
        assert_eq!((error.line(), error.column()), (2, 2));
    }

    #[test]
    fn test_same_line_without_position() {
        let source = Source::new("\nfoo");
        let mut cursor = source.positional_cursor();
        cursor.advance();

        assert!(same_line(is_string("foo")).parse(&mut cursor).is_ok());
    }

    #[rstest]
    #[case("foo foo")]
    #[case("foo\n foo")]
    fn test_same_line_or_indent(#[case] input: &str) {
        let source = Source::new(input);
        let mut cursor = source.positional_cursor();

        let parser = with_position(word("foo").and(same_line_or_indent(is_string("foo"))));
        assert!(parser.parse(&mut cursor).is_ok());
        assert!(cursor.exhausted());
    }

    #[test]
    fn test_same_line_or_indent_error() {
        let source = Source::new("foo\nfoo");
        let mut cursor = source.positional_cursor();

        let parser = with_position(word("foo").and(same_line_or_indent(is_string("foo"))));
        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidIndent);
    }

    #[test]
    fn test_same_column() {
        let source = Source::new("foo\nfoo");
        let mut cursor = source.positional_cursor();

        let parser = with_position(word("foo").and(same_column(is_string("foo"))));
        assert!(parser.parse(&mut cursor).is_ok());
    }

    #[test]
    fn test_same_column_error() {
        let source = Source::new("foo\n foo");
        let mut cursor = source.positional_cursor();

        let error = with_position(word("foo").and(same_column(is_string("foo"))))
            .parse(&mut cursor)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidIndent);
        assert_eq!(cursor.index(), 5);
    }

    #[test]
    fn test_same_column_without_position_always_fails() {
        let source = Source::new("foo");
        let mut cursor = source.positional_cursor();

        assert!(same_column(is_string("foo")).parse(&mut cursor).is_err());
        assert_eq!(cursor.index(), 0);
    }

    #[rstest]
    #[case(0, false)]
    #[case(2, false)]
    #[case(3, true)]
    #[case(4, true)]
    fn test_indent_law(#[case] column: usize, #[case] allowed: bool) {
        let source = Source::new("     x");
        let mut cursor = source.positional_cursor();
        cursor.set_reference(Some(Reference { line: 0, column: 2 }));
        for _ in 0..column {
            cursor.advance();
        }

        let result = indent(crate::none::none()).parse(&mut cursor);
        assert_eq!(result.is_ok(), allowed);
    }

    #[test]
    fn test_violations_report_cursor_location() {
        let source = Source::new("a\n b");
        let mut cursor = source.positional_cursor();
        cursor.set_reference(Some(Reference { line: 0, column: 1 }));
        cursor.advance();
        cursor.advance();

        let error = indent(is_string("b")).parse(&mut cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidIndent);
        assert_eq!(error.location(), Location::new(2, 1));

        let error = same_line(is_string("b")).parse(&mut cursor).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotSameLine);
        assert_eq!(error.location(), Location::new(2, 1));
        assert_eq!(cursor.index(), 2);
    }
}
