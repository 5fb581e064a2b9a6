use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches an exact string code point by code point
///
/// The match is not atomic: code points matched before a mismatch stay
/// consumed, and the error points at the first code point that differs.
/// Wrap it in `or`, `maybe` or `many` when all-or-nothing is needed.
pub struct IsString<C> {
    expected: Cow<'static, str>,
    _cursor: PhantomData<C>,
}

impl<C> IsString<C> {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        IsString {
            expected: expected.into(),
            _cursor: PhantomData,
        }
    }
}

impl<C: Cursor> Parser for IsString<C> {
    type Cursor = C;
    type Output = Cow<'static, str>;

    fn parse(&self, cursor: &mut C) -> Result<Self::Output, ParseError> {
        for expected in self.expected.chars() {
            if cursor.current() != Some(expected) {
                return Err(ParseError::invalid_character(cursor));
            }
            cursor.advance();
        }

        // Cheap for &'static str, just copies the reference
        Ok(self.expected.clone())
    }
}

/// Convenience function to create an IsString parser
pub fn is_string<C: Cursor>(expected: impl Into<Cow<'static, str>>) -> IsString<C> {
    IsString::new(expected)
}
