use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use tracing::trace;

/// How a repetition leaves the cursor after the attempt that ends it
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Stop {
    /// Back to where the failed attempt started
    Restore,
    /// Wherever the failed attempt gave up
    InPlace,
}

fn repeat<P>(parser: &P, cursor: &mut P::Cursor, results: &mut Vec<P::Output>, stop: Stop)
where
    P: Parser,
{
    loop {
        let snapshot = *cursor;
        match parser.parse(cursor) {
            Ok(value) => {
                results.push(value);
                // A match that consumed nothing would match forever
                if cursor.index() == snapshot.index() {
                    break;
                }
            }
            Err(error) => {
                trace!(count = results.len(), %error, ?stop, "repetition stopped");
                if stop == Stop::Restore {
                    *cursor = snapshot;
                }
                break;
            }
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. The attempt that ends the repetition is undone, so the cursor
/// stops right after the last successful match.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P> Parser for Many<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let mut results = Vec::new();
        repeat(&self.parser, cursor, &mut results, Stop::Restore);
        Ok(results)
    }
}

/// Convenience function to create a Many parser
pub fn many<P>(parser: P) -> Many<P>
where
    P: Parser,
{
    Many::new(parser)
}

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first failure is propagated unchanged; later ones end the repetition
/// the same way [`Many`] does.
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<P> Parser for Many1<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let start = cursor.index();
        let mut results = vec![self.parser.parse(cursor)?];
        if cursor.index() != start {
            repeat(&self.parser, cursor, &mut results, Stop::Restore);
        }
        Ok(results)
    }
}

/// Convenience function to create a Many1 parser
pub fn many1<P>(parser: P) -> Many1<P>
where
    P: Parser,
{
    Many1::new(parser)
}

/// Zero or more occurrences, leaving the cursor where the last attempt failed
///
/// Accumulates like [`Many`] and never fails, but does not undo the attempt
/// that ends the repetition. Combined with [`crate::exhaust`] the trailing
/// input error then points at the actual mismatch inside the broken element
/// instead of at the end of the last good one.
pub struct ExhaustiveMany<P> {
    parser: P,
}

impl<P> ExhaustiveMany<P> {
    pub fn new(parser: P) -> Self {
        ExhaustiveMany { parser }
    }
}

impl<P> Parser for ExhaustiveMany<P>
where
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let mut results = Vec::new();
        repeat(&self.parser, cursor, &mut results, Stop::InPlace);
        Ok(results)
    }
}

/// Convenience function to create an ExhaustiveMany parser
pub fn exhaustive_many<P>(parser: P) -> ExhaustiveMany<P>
where
    P: Parser,
{
    ExhaustiveMany::new(parser)
}
