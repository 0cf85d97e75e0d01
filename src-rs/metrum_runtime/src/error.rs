use metrum_parser::{ParserError, Span};
use metrum_unit::UnitError;
use thiserror::Error;

/// An error raised while resolving a parsed unit expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No unit is registered under the name
    #[error("unknown unit `{name}`")]
    UnknownUnit {
        /// The name as written
        name: String,
        /// Where the name appears in the input
        span: Span,
    },
    /// The names resolved, but combining them failed
    #[error("{error}")]
    InvalidUnit {
        /// Why the units could not be combined
        error: UnitError,
        /// The subexpression that could not be evaluated
        span: Span,
    },
}

impl EvalError {
    /// Creates an `UnknownUnit` error.
    #[must_use]
    pub fn unknown_unit(name: &str, span: Span) -> Self {
        Self::UnknownUnit {
            name: name.to_string(),
            span,
        }
    }

    /// Creates an `InvalidUnit` error.
    #[must_use]
    pub const fn invalid_unit(error: UnitError, span: Span) -> Self {
        Self::InvalidUnit { error, span }
    }

    /// Where the error occurred in the input.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnknownUnit { span, .. } | Self::InvalidUnit { span, .. } => *span,
        }
    }
}

/// An error raised by a [`Runtime`](crate::Runtime) operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The input could not be parsed
    #[error("could not parse `{input}`: {error}")]
    Parse {
        /// The text that was parsed
        input: String,
        /// The parser error
        error: ParserError,
    },
    /// The input parsed, but some unit names could not be resolved
    #[error("{}", join_messages(.0))]
    Eval(Vec<EvalError>),
    /// The units involved are incompatible
    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl RuntimeError {
    /// Creates a `Parse` error for `input`.
    #[must_use]
    pub fn parse(input: &str, error: ParserError) -> Self {
        Self::Parse {
            input: input.to_string(),
            error,
        }
    }
}

impl From<Vec<EvalError>> for RuntimeError {
    fn from(errors: Vec<EvalError>) -> Self {
        Self::Eval(errors)
    }
}

fn join_messages(errors: &[EvalError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_errors_are_joined() {
        let error = RuntimeError::Eval(vec![
            EvalError::unknown_unit("foo", Span::new(0, 3)),
            EvalError::unknown_unit("bar", Span::new(4, 7)),
        ]);

        assert_eq!(error.to_string(), "unknown unit `foo`; unknown unit `bar`");
    }
}
