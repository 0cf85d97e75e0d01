//! Error handling for the unit parser.

use crate::{
    InputSpan,
    ast::UnitOp,
    token::{Token, error::TokenError},
};

pub mod reason;
use reason::ParserErrorReason;

mod parser_trait;
pub use parser_trait::ErrorHandlingParser;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ParserError {
    /// The byte offset in the input where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

impl ParserError {
    /// Replaces the reason of an error, keeping its offset
    const fn convert_reason(self, reason: ParserErrorReason) -> Self {
        Self { reason, ..self }
    }

    /// Creates a new `ParserError` from a `TokenError` with a specific reason
    const fn new_from_token_error(error: TokenError, reason: ParserErrorReason) -> Self {
        Self {
            reason,
            error_offset: error.offset,
        }
    }

    /// Creates a new `ParserError` for an expected quantity
    pub(crate) const fn expect_quantity(error: TokenError) -> Self {
        Self::new_from_token_error(error, ParserErrorReason::expect_quantity())
    }

    /// Creates a new `ParserError` for an expected unit
    pub(crate) const fn expect_unit(error: Self) -> Self {
        error.convert_reason(ParserErrorReason::expect_unit())
    }

    /// Creates a new `ParserError` for a missing exponent after `^`
    pub(crate) fn missing_exponent(caret_token: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let caret_span = caret_token.lexeme_span;
        move |error| {
            Self::new_from_token_error(error, ParserErrorReason::missing_exponent(caret_span))
        }
    }

    /// Creates a new `ParserError` for an exponent that does not fit in an `i32`
    pub(crate) const fn exponent_out_of_range(exponent_token: &Token<'_>) -> Self {
        Self {
            reason: ParserErrorReason::ExponentOutOfRange,
            error_offset: exponent_token.lexeme_span.start,
        }
    }

    /// Creates a new `ParserError` for an operator without a right-hand term
    pub(crate) fn missing_second_term(
        operator_token: &Token<'_>,
        operator: UnitOp,
    ) -> impl Fn(Self) -> Self {
        let operator_span = operator_token.lexeme_span;
        move |error| {
            error.convert_reason(ParserErrorReason::missing_second_term(
                operator_span,
                operator,
            ))
        }
    }

    /// Creates a new `ParserError` for an empty pair of parentheses
    pub(crate) fn paren_missing_expr(paren_left_token: &Token<'_>) -> impl Fn(Self) -> Self {
        let paren_left_span = paren_left_token.lexeme_span;
        move |error| error.convert_reason(ParserErrorReason::paren_missing_expr(paren_left_span))
    }

    /// Creates a new `ParserError` for an unclosed parenthesis
    pub(crate) fn unclosed_paren(paren_left_token: &Token<'_>) -> impl Fn(TokenError) -> Self {
        let paren_left_span = paren_left_token.lexeme_span;
        move |error| {
            Self::new_from_token_error(error, ParserErrorReason::unclosed_paren(paren_left_span))
        }
    }

    /// Creates a new `ParserError` for input left over after a complete parse
    pub(crate) fn trailing_input(rest: InputSpan<'_>) -> Self {
        Self {
            reason: ParserErrorReason::TrailingInput,
            error_offset: rest.location_offset(),
        }
    }

    /// The 1-based line and column of the error within `source`.
    ///
    /// Columns count characters, not bytes.
    #[must_use]
    pub fn line_and_column(&self, source: &str) -> (usize, usize) {
        let offset = self.error_offset.min(source.len());
        let before = source.get(..offset).unwrap_or(source);

        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
        let column = before[line_start..].chars().count() + 1;

        (line, column)
    }
}

impl<'a> nom::error::ParseError<InputSpan<'a>> for ParserError {
    fn from_error_kind(input: InputSpan<'a>, kind: nom::error::ErrorKind) -> Self {
        Self {
            reason: ParserErrorReason::NomError(kind),
            error_offset: input.location_offset(),
        }
    }

    fn append(_input: InputSpan<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl From<TokenError> for ParserError {
    fn from(e: TokenError) -> Self {
        Self {
            reason: ParserErrorReason::TokenError(e.kind),
            error_offset: e.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_and_column_on_single_line() {
        let error = ParserError {
            error_offset: 3,
            reason: ParserErrorReason::TrailingInput,
        };

        assert_eq!(error.line_and_column("m/s)"), (1, 4));
    }

    #[test]
    fn columns_count_characters() {
        let error = ParserError {
            error_offset: "\u{3bc}s ".len(),
            reason: ParserErrorReason::TrailingInput,
        };

        assert_eq!(error.line_and_column("\u{3bc}s )"), (1, 4));
    }

    #[test]
    fn display_uses_reason() {
        let error = ParserError {
            error_offset: 0,
            reason: ParserErrorReason::expect_unit(),
        };

        assert_eq!(error.to_string(), "expected a unit");
    }
}
