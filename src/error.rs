use crate::cursor::Cursor;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// A human-facing position in the source, both coordinates 1-based
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// What went wrong, independent of the message wording
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Expected one code point or set of code points, found another
    InvalidCharacter,
    /// Expected a code point, found the end of the source
    UnexpectedEnd,
    /// Layout violation: a block member is not at the required column
    InvalidIndent,
    /// Layout violation: a continuation is not on the reference line
    NotSameLine,
    /// A negative lookahead matched
    UnexpectedMatch,
    /// Parsing succeeded but input remains
    TrailingInput,
    /// Raised by a semantic action or built by the caller
    Custom,
}

/// A parse failure stamped with the position where it happened
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {location}")]
pub struct ParseError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    location: Location,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>, location: Location) -> Self {
        ParseError {
            kind,
            message: message.into(),
            location,
        }
    }

    /// Mismatch at the cursor's current code point
    ///
    /// Reports `UnexpectedEnd` instead when the cursor is exhausted.
    pub fn invalid_character<C: Cursor>(cursor: &C) -> Self {
        match cursor.current() {
            Some(found) => ParseError::new(
                ErrorKind::InvalidCharacter,
                format!("invalid character '{}'", found.escape_debug()),
                cursor.location(),
            ),
            None => ParseError::new(
                ErrorKind::UnexpectedEnd,
                "unexpected end of source",
                cursor.location(),
            ),
        }
    }

    /// Convenience for the error factories handed to [`crate::exhaust`]
    pub fn trailing_input<C: Cursor>(message: impl Into<Cow<'static, str>>, cursor: &C) -> Self {
        ParseError::new(ErrorKind::TrailingInput, message, cursor.location())
    }

    pub fn custom(message: impl Into<Cow<'static, str>>, location: Location) -> Self {
        ParseError::new(ErrorKind::Custom, message, location)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// 1-based line of the failure
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// 1-based column of the failure
    pub fn column(&self) -> usize {
        self.location.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;

    #[test]
    fn test_invalid_character_message() {
        let source = Source::new("xyz");
        let cursor = source.cursor();
        let error = ParseError::invalid_character(&cursor);

        assert_eq!(error.kind(), ErrorKind::InvalidCharacter);
        assert_eq!(error.message(), "invalid character 'x'");
        assert_eq!(error.location(), Location::new(1, 1));
    }

    #[test]
    fn test_invalid_character_at_end_of_source() {
        let source = Source::new("");
        let cursor = source.cursor();
        let error = ParseError::invalid_character(&cursor);

        assert_eq!(error.kind(), ErrorKind::UnexpectedEnd);
        assert_eq!(error.message(), "unexpected end of source");
    }

    #[test]
    fn test_invalid_character_escapes_newline() {
        let source = Source::new("\n");
        let cursor = source.cursor();
        let error = ParseError::invalid_character(&cursor);

        assert_eq!(error.message(), "invalid character '\\n'");
    }

    #[test]
    fn test_display_includes_location() {
        let error = ParseError::custom("bad number", Location::new(3, 7));
        assert_eq!(error.to_string(), "bad number at line 3, column 7");
        assert_eq!(error.line(), 3);
        assert_eq!(error.column(), 7);
    }

    #[test]
    fn test_trailing_input_uses_cursor_location() {
        let source = Source::new("a\nbc");
        let mut cursor = source.cursor();
        cursor.advance();
        cursor.advance();
        cursor.advance();

        let error = ParseError::trailing_input("expected end of statement", &cursor);
        assert_eq!(error.kind(), ErrorKind::TrailingInput);
        assert_eq!(error.location(), Location::new(2, 2));
    }
}
