use crate::error::ParseError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Values that can be flattened back into source text
///
/// Code points and strings are written literally, sequences and tuples by
/// writing each element in order, and absent values (`()`, `None`) as
/// nothing. Only these shapes implement the trait, so a parser whose value
/// cannot be flattened is rejected by [`stringify`] at compile time.
pub trait Textual {
    fn write_text(&self, out: &mut String);

    fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

impl Textual for char {
    fn write_text(&self, out: &mut String) {
        out.push(*self);
    }
}

impl Textual for str {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Textual for String {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Textual for Cow<'_, str> {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl Textual for () {
    fn write_text(&self, _out: &mut String) {}
}

impl<T: Textual + ?Sized> Textual for &T {
    fn write_text(&self, out: &mut String) {
        (**self).write_text(out);
    }
}

impl<T: Textual + ?Sized> Textual for Box<T> {
    fn write_text(&self, out: &mut String) {
        (**self).write_text(out);
    }
}

impl<T: Textual> Textual for Option<T> {
    fn write_text(&self, out: &mut String) {
        if let Some(value) = self {
            value.write_text(out);
        }
    }
}

impl<T: Textual> Textual for Vec<T> {
    fn write_text(&self, out: &mut String) {
        for value in self {
            value.write_text(out);
        }
    }
}

macro_rules! impl_textual_tuple {
    ($($name:ident),+) => {
        impl<$($name: Textual),+> Textual for ($($name,)+) {
            #[allow(non_snake_case)]
            fn write_text(&self, out: &mut String) {
                let ($($name,)+) = self;
                $($name.write_text(out);)+
            }
        }
    };
}

impl_textual_tuple!(A, B);
impl_textual_tuple!(A, B, C);
impl_textual_tuple!(A, B, C, D);
impl_textual_tuple!(A, B, C, D, E);
impl_textual_tuple!(A, B, C, D, E, F);
impl_textual_tuple!(A, B, C, D, E, F, G);
impl_textual_tuple!(A, B, C, D, E, F, G, H);

/// Parser combinator that flattens the value of a parser into a `String`
pub struct Stringify<P> {
    parser: P,
}

impl<P> Parser for Stringify<P>
where
    P: Parser,
    P::Output: Textual,
{
    type Cursor = P::Cursor;
    type Output = String;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<String, ParseError> {
        Ok(self.parser.parse(cursor)?.to_text())
    }
}

/// Convenience function to create a Stringify parser
pub fn stringify<P>(parser: P) -> Stringify<P>
where
    P: Parser,
    P::Output: Textual,
{
    Stringify { parser }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use crate::and::AndExt;
    use crate::many::many;
    use crate::maybe::maybe;
    use crate::none::none;
    use crate::seq::seq;
    use crate::text::{chars, is_char, is_string, not_chars};

    #[test]
    fn test_stringify_string() {
        let source = Source::new("foo");
        let mut cursor = source.cursor();

        assert_eq!(stringify(is_string("foo")).parse(&mut cursor).unwrap(), "foo");
    }

    #[test]
    fn test_stringify_with_nothing() {
        let source = Source::new("");
        let mut cursor = source.cursor();

        assert_eq!(stringify(none()).parse(&mut cursor).unwrap(), "");
    }

    #[test]
    fn test_stringify_nested_sequence() {
        let source = Source::new("x = \"a b\"");
        let mut cursor = source.cursor();
        let parser = stringify(seq((
            chars("xyz"),
            is_string(" = "),
            is_char('"').and(many(not_chars("\""))).and(is_char('"')),
        )));

        assert_eq!(parser.parse(&mut cursor).unwrap(), "x = \"a b\"");
    }

    #[test]
    fn test_stringify_skips_missing_optional() {
        let source = Source::new("12");
        let mut cursor = source.cursor();
        let parser = stringify(maybe(is_char('-')).and(many(chars("0123456789"))));

        assert_eq!(parser.parse(&mut cursor).unwrap(), "12");
    }

    #[test]
    fn test_textual_values() {
        assert_eq!(vec![Some('a'), None, Some('b')].to_text(), "ab");
        assert_eq!(("x", String::from("y"), ()).to_text(), "xy");
        assert_eq!(Cow::Borrowed("z").to_text(), "z");
    }
}
