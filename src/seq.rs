use crate::error::ParseError;
use crate::parser::Parser;

/// A fixed-length sequence of parsers, implemented for tuples of 2 to 8 parsers
///
/// Every member must run against the same cursor type. `check` runs before
/// each member and can veto it; plain sequencing passes a check that always
/// succeeds, while layout combinators use it to enforce alignment.
pub trait Sequence {
    type Cursor: crate::Cursor;
    type Output;

    fn parse_sequence<G>(
        &self,
        cursor: &mut Self::Cursor,
        check: G,
    ) -> Result<Self::Output, ParseError>
    where
        G: Fn(&Self::Cursor) -> Result<(), ParseError>;
}

macro_rules! impl_sequence {
    ($first:ident $(, $rest:ident)+) => {
        impl<$first, $($rest),+> Sequence for ($first, $($rest),+)
        where
            $first: Parser,
            $($rest: Parser<Cursor = <$first as Parser>::Cursor>),+
        {
            type Cursor = <$first as Parser>::Cursor;
            type Output = (<$first as Parser>::Output, $(<$rest as Parser>::Output),+);

            #[allow(non_snake_case)]
            fn parse_sequence<G>(
                &self,
                cursor: &mut Self::Cursor,
                check: G,
            ) -> Result<Self::Output, ParseError>
            where
                G: Fn(&Self::Cursor) -> Result<(), ParseError>,
            {
                let ($first, $($rest),+) = self;
                Ok((
                    {
                        check(&*cursor)?;
                        $first.parse(cursor)?
                    },
                    $({
                        check(&*cursor)?;
                        $rest.parse(cursor)?
                    }),+
                ))
            }
        }
    };
}

impl_sequence!(A, B);
impl_sequence!(A, B, C);
impl_sequence!(A, B, C, D);
impl_sequence!(A, B, C, D, E);
impl_sequence!(A, B, C, D, E, F);
impl_sequence!(A, B, C, D, E, F, G1);
impl_sequence!(A, B, C, D, E, F, G1, H);

/// Parser that runs a tuple of parsers strictly in order
///
/// Like [`crate::And`], nothing is restored on failure.
pub struct Seq<S> {
    parsers: S,
}

impl<S: Sequence> Parser for Seq<S> {
    type Cursor = S::Cursor;
    type Output = S::Output;

    fn parse(&self, cursor: &mut Self::Cursor) -> Result<Self::Output, ParseError> {
        self.parsers.parse_sequence(cursor, |_| Ok(()))
    }
}

/// Sequence a tuple of parsers, returning a flat tuple of their results
pub fn seq<S: Sequence>(parsers: S) -> Seq<S> {
    Seq { parsers }
}
