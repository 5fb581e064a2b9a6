use crate::error::ParseError;
use crate::parser::Parser;

/// Parser that matches content between a left and a right parser
///
/// Parses `left + middle + right` in sequence and returns just the `middle`
/// value. Like every sequence, it does not backtrack on failure.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Wrap<L, M, R> {
    left: L,
    middle: M,
    right: R,
}

impl<L, M, R> Parser for Wrap<L, M, R>
where
    M: Parser,
    L: Parser<Cursor = M::Cursor>,
    R: Parser<Cursor = M::Cursor>,
{
    type Cursor = M::Cursor;
    type Output = M::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        self.left.parse(cursor)?;
        let value = self.middle.parse(cursor)?;
        self.right.parse(cursor)?;
        Ok(value)
    }
}

/// Convenience function to create a Wrap parser
pub fn wrap<L, M, R>(left: L, middle: M, right: R) -> Wrap<L, M, R>
where
    M: Parser,
    L: Parser<Cursor = M::Cursor>,
    R: Parser<Cursor = M::Cursor>,
{
    Wrap {
        left,
        middle,
        right,
    }
}

/// Parser that runs `prefix` then `parser`, keeping the latter's value
pub struct Prefix<Pre, P> {
    prefix: Pre,
    parser: P,
}

impl<Pre, P> Parser for Prefix<Pre, P>
where
    P: Parser,
    Pre: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        self.prefix.parse(cursor)?;
        self.parser.parse(cursor)
    }
}

pub fn prefix<Pre, P>(prefix: Pre, parser: P) -> Prefix<Pre, P>
where
    P: Parser,
    Pre: Parser<Cursor = P::Cursor>,
{
    Prefix { prefix, parser }
}

/// Parser that runs `parser` then `suffix`, keeping the former's value
pub struct Suffix<P, Suf> {
    parser: P,
    suffix: Suf,
}

impl<P, Suf> Parser for Suffix<P, Suf>
where
    P: Parser,
    Suf: Parser<Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        let value = self.parser.parse(cursor)?;
        self.suffix.parse(cursor)?;
        Ok(value)
    }
}

pub fn suffix<P, Suf>(parser: P, suffix: Suf) -> Suffix<P, Suf>
where
    P: Parser,
    Suf: Parser<Cursor = P::Cursor>,
{
    Suffix { parser, suffix }
}
