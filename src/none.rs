use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input
pub struct NoneParser<C> {
    _cursor: PhantomData<C>,
}

impl<C: Cursor> Parser for NoneParser<C> {
    type Cursor = C;
    type Output = ();

    fn parse(&self, _cursor: &mut C) -> Result<(), ParseError> {
        Ok(())
    }
}

/// Convenience function to create a parser that matches nothing
pub fn none<C: Cursor>() -> NoneParser<C> {
    NoneParser {
        _cursor: PhantomData,
    }
}
