use crate::error::ParseError;
use crate::parser::Parser;
use std::cell::OnceCell;
use tracing::trace;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// The factory runs on the first parse and the parser it returns is cached
/// for every later one. This is what lets a grammar refer to itself: the
/// recursive reference only builds its parser when the input actually reaches
/// it.
///
/// The cache is a [`OnceCell`], so a `Lazy` is not `Sync`. Grammars meant to
/// run on several threads should be constructed once per thread.
pub struct Lazy<F, P> {
    factory: F,
    parser: OnceCell<P>,
}

impl<F, P> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }

    fn get(&self) -> &P {
        self.parser.get_or_init(|| {
            trace!("building lazy parser");
            (self.factory)()
        })
    }
}

impl<F, P> Parser for Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        self.get().parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<F, P>(factory: F) -> Lazy<F, P>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::TextCursor;
    use crate::many::many;
    use crate::parser::{BoxedParser, boxed};
    use crate::seq::seq;
    use crate::stringify::stringify;
    use crate::text::{is_char, is_string};
    use crate::{Cursor, Source};
    use std::cell::Cell;

    fn parens<'code>() -> BoxedParser<'code, TextCursor<'code>, String> {
        boxed(stringify(many(seq((is_char('('), lazy(parens), is_char(')'))))))
    }

    #[test]
    fn test_lazy_basic() {
        let source = Source::new("foo");
        let mut cursor = source.cursor();

        let parser = lazy(|| is_string("foo"));
        assert_eq!(parser.parse(&mut cursor).unwrap(), "foo");
    }

    #[test]
    fn test_lazy_builds_once() {
        let source = Source::new("aaa");
        let mut cursor = source.cursor();
        let builds = Cell::new(0);

        let parser = lazy(|| {
            builds.set(builds.get() + 1);
            is_char('a')
        });
        for _ in 0..3 {
            parser.parse(&mut cursor).unwrap();
        }
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn test_lazy_deferred_construction() {
        let builds = Cell::new(0);
        let _parser = lazy(|| {
            builds.set(builds.get() + 1);
            is_char::<TextCursor<'_>>('x')
        });
        assert_eq!(builds.get(), 0);
    }

    #[test]
    fn test_recursive_grammar() {
        let source = Source::new("(()(()))");
        let mut cursor = source.cursor();

        assert_eq!(parens().parse(&mut cursor).unwrap(), "(()(()))");
        assert!(cursor.exhausted());
    }

    #[test]
    fn test_recursive_grammar_unbalanced() {
        let source = Source::new("(()");
        let mut cursor = source.cursor();

        // The unclosed group is dropped by `many`, nothing is consumed
        assert_eq!(parens().parse(&mut cursor).unwrap(), "");
        assert_eq!(cursor.index(), 0);
    }
}
