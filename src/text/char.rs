use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::Parser;
use std::collections::HashSet;
use std::marker::PhantomData;

/// Parser that consumes and returns any single code point
pub struct AnyChar<C> {
    _cursor: PhantomData<C>,
}

impl<C: Cursor> Parser for AnyChar<C> {
    type Cursor = C;
    type Output = char;

    fn parse(&self, cursor: &mut C) -> Result<char, ParseError> {
        let ch = cursor
            .current()
            .ok_or_else(|| ParseError::invalid_character(cursor))?;
        cursor.advance();
        Ok(ch)
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char<C: Cursor>() -> AnyChar<C> {
    AnyChar {
        _cursor: PhantomData,
    }
}

/// Parser that matches a specific code point
pub struct IsChar<C> {
    expected: char,
    _cursor: PhantomData<C>,
}

impl<C: Cursor> Parser for IsChar<C> {
    type Cursor = C;
    type Output = char;

    fn parse(&self, cursor: &mut C) -> Result<char, ParseError> {
        match cursor.current() {
            Some(ch) if ch == self.expected => {
                cursor.advance();
                Ok(ch)
            }
            _ => Err(ParseError::invalid_character(cursor)),
        }
    }
}

/// Convenience function to create a parser that matches a specific code point
pub fn is_char<C: Cursor>(expected: char) -> IsChar<C> {
    IsChar {
        expected,
        _cursor: PhantomData,
    }
}

/// Parser that matches one code point by membership in a set
///
/// With `negate` set it matches any code point outside the set instead. The
/// end of input never matches either way.
pub struct CharSet<C> {
    set: HashSet<char>,
    negate: bool,
    _cursor: PhantomData<C>,
}

impl<C> CharSet<C> {
    fn new(set: &str, negate: bool) -> Self {
        CharSet {
            set: set.chars().collect(),
            negate,
            _cursor: PhantomData,
        }
    }
}

impl<C: Cursor> Parser for CharSet<C> {
    type Cursor = C;
    type Output = char;

    fn parse(&self, cursor: &mut C) -> Result<char, ParseError> {
        match cursor.current() {
            Some(ch) if self.set.contains(&ch) != self.negate => {
                cursor.advance();
                Ok(ch)
            }
            _ => Err(ParseError::invalid_character(cursor)),
        }
    }
}

/// Match one of the code points in `set`
pub fn chars<C: Cursor>(set: &str) -> CharSet<C> {
    CharSet::new(set, false)
}

/// Match any code point not in `set`
pub fn not_chars<C: Cursor>(set: &str) -> CharSet<C> {
    CharSet::new(set, true)
}

/// Match any code point other than `excluded`
pub fn not_char<C: Cursor>(excluded: char) -> CharSet<C> {
    let mut buffer = [0; 4];
    CharSet::new(excluded.encode_utf8(&mut buffer), true)
}
