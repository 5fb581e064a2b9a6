//! Layout-sensitive parsing
//!
//! These combinators read the reference position carried by a
//! [`Positional`](crate::cursors::Positional) cursor. [`with_position`] sets it
//! for the duration of a parse and the other combinators check the cursor
//! against it, which is enough to express off-side rule grammars.

pub mod block;
pub mod constraints;

pub use block::{
    Aligned, Block, Block1, ExhaustiveBlock, WithBlock, WithBlock1, block, block1,
    exhaustive_block, hetero_block, with_block, with_block1,
};
pub use constraints::{
    Indent, SameColumn, SameLine, SameLineOrIndent, WithPosition, indent, same_column, same_line,
    same_line_or_indent, with_position,
};
