use nom::{Parser as NomParser, character::complete::space0, combinator::recognize};

use crate::{
    ast::Span,
    token::{
        InputSpan, Parser, Result,
        error::{ErrorHandlingParser, TokenError},
    },
    util::span_from,
};

/// A lexeme along with the whitespace that trails it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme_str: &'a str,
    pub lexeme_span: Span,
    pub whitespace_span: Span,
}

impl Token<'_> {
    /// The text of the lexeme.
    #[must_use]
    pub const fn lexeme(&self) -> &str {
        self.lexeme_str
    }

    /// Whether any whitespace followed the lexeme.
    #[must_use]
    pub const fn has_trailing_whitespace(&self) -> bool {
        !self.whitespace_span.is_empty()
    }
}

/// Parses inline whitespace (spaces and tabs). Always succeeds.
pub fn inline_whitespace(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    space0.parse(input)
}

/// Wraps a parser so that it yields a [`Token`] and consumes trailing whitespace.
///
/// Recoverable errors from `f` are passed through `convert_error`.
pub fn token<'a, O>(
    mut f: impl Parser<'a, O, TokenError>,
    convert_error: impl Fn(TokenError) -> TokenError,
) -> impl Parser<'a, Token<'a>, TokenError> {
    move |input: InputSpan<'a>| {
        let f = |input| (&mut f).parse(input);
        let convert_error = |error| (&convert_error)(error);

        let (rest, lexeme) = recognize(f).convert_error_to(convert_error).parse(input)?;
        let lexeme_span = span_from(lexeme, rest);

        let (after_whitespace, _) = inline_whitespace.parse(rest)?;
        let whitespace_span = span_from(rest, after_whitespace);

        let token = Token {
            lexeme_str: *lexeme.fragment(),
            lexeme_span,
            whitespace_span,
        };

        Ok((after_whitespace, token))
    }
}
