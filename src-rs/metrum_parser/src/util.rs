use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;

use crate::{ast::Span, config::Config};

/// A span of text in the input string.
///
/// The span carries the parser configuration along with the text, so any
/// parser can consult it.
pub type InputSpan<'a> = LocatedSpan<&'a str, Config>;

/// Builds an AST span from the start of one input span to the start of another.
pub fn span_from(start: InputSpan<'_>, end: InputSpan<'_>) -> Span {
    Span::new(start.location_offset(), end.location_offset())
}

/// A result type for parser operations.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A parser over [`InputSpan`].
///
/// This is implemented for every nom parser over the input span and only
/// shortens signatures.
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}

#[cfg(test)]
pub mod test {
    macro_rules! assert_span {
        ($spanned:expr, start: $start:expr, end: $end:expr) => {
            let span: $crate::ast::Span = $spanned;

            assert_eq!(span.start, $start, "span start");
            assert_eq!(span.end, $end, "span end");
        };
    }

    pub(crate) use assert_span;
}
