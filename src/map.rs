use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<U, ParseError> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator that applies a semantic action which may reject the value
///
/// A rejection becomes a [`crate::ErrorKind::Custom`] error located where the
/// wrapped parser started, since that is where the rejected construct begins.
pub struct App<P, F> {
    parser: P,
    action: F,
}

impl<P, F> App<P, F> {
    pub fn new(parser: P, action: F) -> Self {
        App { parser, action }
    }
}

impl<P, F, U, E> Parser for App<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<Cow<'static, str>>,
{
    type Cursor = P::Cursor;
    type Output = U;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<U, ParseError> {
        let start = cursor.location();
        let value = self.parser.parse(cursor)?;
        (self.action)(value).map_err(|message| ParseError::custom(message, start))
    }
}

/// Convenience function to create an App parser
pub fn app<P, F, U, E>(parser: P, action: F) -> App<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<Cow<'static, str>>,
{
    App::new(parser, action)
}

/// Extension trait to add .map() and .app() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn app<F, U, E>(self, action: F) -> App<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<Cow<'static, str>>,
    {
        App::new(self, action)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}
