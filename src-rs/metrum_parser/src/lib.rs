#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Parser for Metrum unit expressions and quantity literals

use nom::Parser as _;

pub mod ast;
mod config;
pub mod error;
mod token;

mod util;
use util::{InputSpan, Result as InternalResult};

mod quantity;
mod unit;

pub use ast::{QuantityLiteral, Span, UnitExpr, UnitOp};
pub use config::Config;
pub use error::ParserError;

use error::ErrorHandlingParser;
use token::inline_whitespace;

/// Parses a complete unit expression such as `kg*m/s^2`.
///
/// # Errors
///
/// Returns an error if the input is not a valid unit expression or has
/// input left over after one.
pub fn parse_unit(input: &str, config: Option<Config>) -> Result<UnitExpr, ParserError> {
    parse(input, config, unit::parse)
}

/// Parses a complete quantity literal such as `60 mi/hr` or `2.5`.
///
/// # Errors
///
/// Returns an error if the input does not start with a number, the unit is
/// malformed, or input is left over.
pub fn parse_quantity(
    input: &str,
    config: Option<Config>,
) -> Result<QuantityLiteral, ParserError> {
    parse(input, config, quantity::parse)
}

/// Runs `parser` over the whole input, allowing surrounding whitespace.
fn parse<T>(
    input: &str,
    config: Option<Config>,
    parser: impl Fn(InputSpan<'_>) -> InternalResult<'_, T, ParserError>,
) -> Result<T, ParserError> {
    let config = config.unwrap_or_default();
    let input = InputSpan::new_extra(input, config);

    let result = inline_whitespace
        .convert_errors()
        .parse(input)
        .and_then(|(rest, _)| parser(rest));

    match result {
        Ok((rest, _)) if !rest.fragment().is_empty() => Err(ParserError::trailing_input(rest)),
        Ok((_rest, ast)) => Ok(ast),
        Err(nom::Err::Incomplete(_needed)) => {
            unreachable!("complete combinators never report incomplete input")
        }
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::reason::ParserErrorReason;

    #[test]
    fn surrounding_whitespace_is_allowed() {
        let expr = parse_unit("  m/s  ", None).expect("should parse unit");

        assert_eq!(expr.to_string(), "m/s");
        assert_eq!(expr.span(), Span::new(2, 5));
    }

    #[test]
    fn trailing_input_is_rejected() {
        let error = parse_unit("m/s)", None).expect_err("closing paren is unmatched");

        assert_eq!(error.reason, ParserErrorReason::TrailingInput);
        assert_eq!(error.error_offset, 3);
    }

    #[test]
    fn trailing_number_is_rejected() {
        let error = parse_unit("m 2", None).expect_err("numbers are not units");

        assert_eq!(error.reason, ParserErrorReason::TrailingInput);
        assert_eq!(error.error_offset, 2);
    }

    #[test]
    fn quantity_with_implicit_multiplication() {
        let config = Config::new().with_space_multiplies(true);
        let literal = parse_quantity("12 N m", Some(config)).expect("should parse quantity");

        assert_eq!(
            literal.unit.map(|unit| unit.to_string()),
            Some("N*m".to_string())
        );
    }

    #[test]
    fn quantity_error_display() {
        let error = parse_quantity("fast", None).expect_err("no number");

        assert_eq!(error.to_string(), "expected a quantity");
    }
}
