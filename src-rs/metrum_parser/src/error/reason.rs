//! Reasons a unit expression or quantity literal failed to parse.

use crate::{
    ast::{Span, UnitOp},
    token::error::TokenErrorKind,
};

/// The different kinds of errors that can occur during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParserErrorReason {
    /// Expected a construct but found something else
    #[error("expected {0}")]
    Expect(ExpectKind),
    /// A construct was started but not finished
    #[error("{kind}")]
    Incomplete {
        /// The part of the input that started the construct
        cause: Span,
        /// What was missing
        kind: IncompleteKind,
    },
    /// An exponent does not fit in a 32-bit integer
    #[error("exponent is out of range")]
    ExponentOutOfRange,
    /// Input remained after a complete expression
    #[error("unexpected trailing input")]
    TrailingInput,
    /// A token-level error occurred
    #[error("{0}")]
    TokenError(TokenErrorKind),
    /// A low-level nom parsing error
    #[error("unexpected input ({})", .0.description())]
    NomError(nom::error::ErrorKind),
}

/// The constructs that may be expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExpectKind {
    /// A quantity literal, starting with a number
    #[error("a quantity")]
    Quantity,
    /// A unit expression
    #[error("a unit")]
    Unit,
}

/// The different kinds of unfinished constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IncompleteKind {
    /// A `^` was not followed by an integer
    #[error("expected an integer exponent after `^`")]
    MissingExponent,
    /// An operator was not followed by a unit
    #[error("expected a unit after `{operator}`")]
    MissingSecondTerm {
        /// The dangling operator
        operator: UnitOp,
    },
    /// A `(` was not followed by a unit
    #[error("expected a unit after `(`")]
    ParenMissingExpr,
    /// A `(` was never closed
    #[error("unclosed parenthesis")]
    UnclosedParen,
}

impl ParserErrorReason {
    pub(crate) const fn expect_quantity() -> Self {
        Self::Expect(ExpectKind::Quantity)
    }

    pub(crate) const fn expect_unit() -> Self {
        Self::Expect(ExpectKind::Unit)
    }

    pub(crate) const fn missing_exponent(caret_span: Span) -> Self {
        Self::Incomplete {
            cause: caret_span,
            kind: IncompleteKind::MissingExponent,
        }
    }

    pub(crate) const fn missing_second_term(operator_span: Span, operator: UnitOp) -> Self {
        Self::Incomplete {
            cause: operator_span,
            kind: IncompleteKind::MissingSecondTerm { operator },
        }
    }

    pub(crate) const fn paren_missing_expr(paren_left_span: Span) -> Self {
        Self::Incomplete {
            cause: paren_left_span,
            kind: IncompleteKind::ParenMissingExpr,
        }
    }

    pub(crate) const fn unclosed_paren(paren_left_span: Span) -> Self {
        Self::Incomplete {
            cause: paren_left_span,
            kind: IncompleteKind::UnclosedParen,
        }
    }
}
