pub mod positional;
pub mod text;

pub use positional::{Positional, PositionalCursor, Reference};
pub use text::TextCursor;
