use crate::and::And;
use crate::cursors::Positional;
use crate::error::ParseError;
use crate::layout::constraints::{
    SameColumn, SameLineOrIndent, WithPosition, check_same_column, same_column,
    same_line_or_indent, with_position,
};
use crate::many::{ExhaustiveMany, Many, Many1, exhaustive_many, many, many1};
use crate::parser::Parser;
use crate::seq::Sequence;

/// Zero or more items aligned on the column where the block starts
pub type Block<P> = WithPosition<Many<SameColumn<P>>>;

/// One or more items aligned on the column where the block starts
pub type Block1<P> = WithPosition<Many1<SameColumn<P>>>;

/// Aligned items that stop where the first broken item fails
pub type ExhaustiveBlock<P> = WithPosition<ExhaustiveMany<SameColumn<P>>>;

/// A header followed by a block on its line or indented below it
pub type WithBlock<H, P> = WithPosition<And<H, SameLineOrIndent<Block<P>>>>;

/// A header followed by a non-empty block on its line or indented below it
pub type WithBlock1<H, P> = WithPosition<And<H, SameLineOrIndent<Block1<P>>>>;

/// Convenience function to create a Block parser
pub fn block<P>(parser: P) -> Block<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    with_position(many(same_column(parser)))
}

/// Convenience function to create a Block1 parser
pub fn block1<P>(parser: P) -> Block1<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    with_position(many1(same_column(parser)))
}

/// Like [`block`], but leaves the cursor inside the item that broke the block
///
/// Under [`crate::exhaust`] the error then points at the real mismatch.
pub fn exhaustive_block<P>(parser: P) -> ExhaustiveBlock<P>
where
    P: Parser,
    P::Cursor: Positional,
{
    with_position(exhaustive_many(same_column(parser)))
}

/// Header plus a possibly empty block, output `(header, items)`
///
/// The block's column is fixed by its first item, which must follow the
/// header on the same line or sit right of the header's column.
pub fn with_block<H, P>(header: H, item: P) -> WithBlock<H, P>
where
    H: Parser,
    H::Cursor: Positional,
    P: Parser<Cursor = H::Cursor>,
{
    with_position(And::new(header, same_line_or_indent(block(item))))
}

/// Like [`with_block`], but the block needs at least one item
pub fn with_block1<H, P>(header: H, item: P) -> WithBlock1<H, P>
where
    H: Parser,
    H::Cursor: Positional,
    P: Parser<Cursor = H::Cursor>,
{
    with_position(And::new(header, same_line_or_indent(block1(item))))
}

/// A fixed sequence whose members all start on the reference column
pub struct Aligned<S> {
    parsers: S,
}

impl<S> Parser for Aligned<S>
where
    S: Sequence,
    S::Cursor: Positional,
{
    type Cursor = S::Cursor;
    type Output = S::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        self.parsers.parse_sequence(cursor, check_same_column)
    }
}

/// Block of differently typed items, one per tuple member, in order
pub fn hetero_block<S>(parsers: S) -> WithPosition<Aligned<S>>
where
    S: Sequence,
    S::Cursor: Positional,
{
    with_position(Aligned { parsers })
}
