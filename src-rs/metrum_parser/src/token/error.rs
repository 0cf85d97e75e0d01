//! Errors produced while recognizing tokens.

use nom::error::ParseError;

use super::InputSpan;

pub use super::super::error::ErrorHandlingParser;

/// An error that occurred during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// The specific kind of error that occurred
    pub kind: TokenErrorKind,
    /// The offset in the source where the error occurred
    pub offset: usize,
}

/// The different kinds of errors that can occur during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenErrorKind {
    /// Expected a specific token
    #[error("expected {0}")]
    Expect(ExpectKind),
    /// Incomplete input
    #[error("{0}")]
    Incomplete(IncompleteKind),
    /// A low-level nom parsing error
    #[error("unexpected input ({})", .0.description())]
    NomError(nom::error::ErrorKind),
}

/// The different kinds of tokens that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExpectKind {
    /// Expected an integer
    #[error("an integer")]
    Integer,
    /// Expected a number
    #[error("a number")]
    Number,
    /// Expected a symbol
    #[error("`{0}`")]
    Symbol(ExpectSymbol),
    /// Expected a unit identifier
    #[error("a unit name")]
    UnitIdentifier,
    /// Expected the dimensionless unit `1`
    #[error("`1`")]
    UnitOne,
}

/// The different symbols that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExpectSymbol {
    /// `^`
    #[error("^")]
    Caret,
    /// `(`
    #[error("(")]
    ParenLeft,
    /// `)`
    #[error(")")]
    ParenRight,
    /// `/`
    #[error("/")]
    Slash,
    /// `*`
    #[error("*")]
    Star,
}

/// The different kinds of incomplete tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IncompleteKind {
    /// A decimal point was not followed by digits
    #[error("expected digits after the decimal point")]
    InvalidDecimalPart {
        /// The offset of the decimal point
        decimal_point_offset: usize,
    },
}

impl TokenError {
    /// Creates a new `TokenError` at the start of `input`
    #[must_use]
    pub fn new(kind: TokenErrorKind, input: InputSpan<'_>) -> Self {
        Self {
            kind,
            offset: input.location_offset(),
        }
    }

    /// Replaces the kind of a low-level nom error, keeping its offset
    fn update_kind(self, kind: TokenErrorKind) -> Self {
        debug_assert!(
            matches!(self.kind, TokenErrorKind::NomError(_)),
            "only nom errors are given a token kind"
        );

        Self { kind, ..self }
    }

    /// Creates a new `TokenError` for an expected integer
    pub fn expected_integer(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Integer))
    }

    /// Creates a new `TokenError` for an expected number
    pub fn expected_number(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Number))
    }

    /// Creates a new `TokenError` for an expected symbol
    pub fn expected_symbol(symbol: ExpectSymbol) -> impl Fn(Self) -> Self {
        move |error: Self| error.update_kind(TokenErrorKind::Expect(ExpectKind::Symbol(symbol)))
    }

    /// Creates a new `TokenError` for an expected unit identifier
    pub fn expected_unit_identifier(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::UnitIdentifier))
    }

    /// Creates a new `TokenError` for an expected unit one
    pub fn expected_unit_one(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::UnitOne))
    }

    /// Creates a new `TokenError` for a decimal point without digits
    pub fn invalid_decimal_part(decimal_point_span: InputSpan<'_>) -> impl Fn(Self) -> Self {
        let decimal_point_offset = decimal_point_span.location_offset();
        move |error: Self| {
            error.update_kind(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidDecimalPart {
                    decimal_point_offset,
                },
            ))
        }
    }
}

impl ParseError<InputSpan<'_>> for TokenError {
    fn from_error_kind(input: InputSpan<'_>, kind: nom::error::ErrorKind) -> Self {
        Self::new(TokenErrorKind::NomError(kind), input)
    }

    fn append(_input: InputSpan<'_>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> From<nom::error::Error<InputSpan<'a>>> for TokenError {
    fn from(e: nom::error::Error<InputSpan<'a>>) -> Self {
        Self::from_error_kind(e.input, e.code)
    }
}
