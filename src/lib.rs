//! # LayoutComb - Parser Combinator Library
//!
//! A parser combinator library over Unicode text with first-class support for
//! indentation-sensitive grammars.
//!
//! Parsers are small values implementing [`Parser`]. They run against a
//! copyable [`Cursor`] passed by `&mut`, so backtracking is just restoring a
//! copy. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Precise errors**: Every failure carries the line and column of the actual mismatch
//! - **Composability**: Small parsers combine into larger ones using combinators
//! - **Layout**: Blocks, indentation and alignment rules via [`layout`]
//!
//! ```
//! use layoutcomb::{Parser, Source, block, exhaust, is_string, many, chars, suffix, ParseError};
//!
//! let source = Source::new("foo\nfoo\n");
//! let mut cursor = source.positional_cursor();
//! let item = suffix(is_string("foo"), many(chars(" \n")));
//! let parser = exhaust(block(item), |c| ParseError::trailing_input("expected 'foo'", c));
//!
//! assert_eq!(parser.parse(&mut cursor).unwrap().len(), 2);
//! ```

pub mod and;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod exhaust;
pub mod layout;
pub mod lazy;
pub mod many;
pub mod map;
pub mod maybe;
pub mod none;
pub mod not;
pub mod or;
pub mod parser;
pub mod position;
pub mod seq;
pub mod source;
pub mod stringify;
pub mod text;
pub mod void;
pub mod wrap;

pub use and::{And, AndExt, and};
pub use cursor::Cursor;
pub use cursors::{Positional, PositionalCursor, Reference, TextCursor};
pub use error::{ErrorKind, Location, ParseError};
pub use exhaust::{Exhaust, exhaust};
pub use layout::{
    block, block1, exhaustive_block, hetero_block, indent, same_column, same_line,
    same_line_or_indent, with_block, with_block1, with_position,
};
pub use lazy::{Lazy, lazy};
pub use many::{ExhaustiveMany, Many, Many1, exhaustive_many, many, many1};
pub use map::{App, Map, MapExt, app, map};
pub use maybe::{Maybe, maybe};
pub use none::{NoneParser, none};
pub use not::{Not, NotExt, not};
pub use or::{Or, OrExt, or};
pub use parser::{BoxedParser, Parser, boxed};
pub use position::{Span, Spanned, SpannedExt, spanned};
pub use seq::{Seq, Sequence, seq};
pub use source::Source;
pub use stringify::{Stringify, Textual, stringify};
pub use text::{any_char, chars, is_char, is_string, not_char, not_chars};
pub use void::{Void, void};
pub use wrap::{Prefix, Suffix, Wrap, prefix, suffix, wrap};
