//! Quantity literal parsing.

use nom::{Parser as NomParser, combinator::opt};

use crate::{
    ast::QuantityLiteral,
    error::{ErrorHandlingParser, ParserError},
    token::literal::number,
    unit,
    util::{InputSpan, Result},
};

/// Parses a number optionally followed by a unit expression, such as `60 mi/hr`.
///
/// This function **may not consume the complete input**.
pub fn parse(input: InputSpan<'_>) -> Result<'_, QuantityLiteral, ParserError> {
    let (rest, number_token) = number
        .convert_error_to(ParserError::expect_quantity)
        .parse(input)?;

    let value = number_token
        .lexeme()
        .parse::<f64>()
        .expect("all valid numbers should parse correctly");

    let (rest, unit) = opt(unit::parse).parse(rest)?;

    let literal = QuantityLiteral {
        value,
        value_span: number_token.lexeme_span,
        unit,
    };

    Ok((rest, literal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Config,
        ast::Span,
        error::reason::{ExpectKind, IncompleteKind, ParserErrorReason},
    };

    fn parse_text(text: &str) -> QuantityLiteral {
        let input = InputSpan::new_extra(text, Config::default());
        let (rest, literal) = parse(input).expect("should parse quantity");
        assert!(rest.fragment().is_empty(), "unparsed input: {}", rest.fragment());
        literal
    }

    mod success_tests {
        use super::*;

        #[test]
        fn number_and_compound_unit() {
            let literal = parse_text("60 mi/hr");

            assert!((literal.value - 60.0).abs() < f64::EPSILON);
            assert_eq!(literal.value_span, Span::new(0, 2));
            let unit = literal.unit.expect("unit should be present");
            assert_eq!(unit.to_string(), "mi/hr");
            assert_eq!(unit.span(), Span::new(3, 8));
        }

        #[test]
        fn bare_number() {
            let literal = parse_text("-2.5e3");

            assert!((literal.value + 2500.0).abs() < f64::EPSILON);
            assert_eq!(literal.unit, None);
        }

        #[test]
        fn unit_without_space() {
            let literal = parse_text("100degC");

            assert_eq!(
                literal.unit.map(|unit| unit.to_string()),
                Some("degC".to_string())
            );
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn missing_number() {
            let input = InputSpan::new_extra("km", Config::default());
            let Err(nom::Err::Error(error)) = parse(input) else {
                panic!("expected a recoverable error");
            };

            assert_eq!(error.reason, ParserErrorReason::Expect(ExpectKind::Quantity));
            assert_eq!(error.error_offset, 0);
        }

        #[test]
        fn broken_unit_is_reported() {
            let input = InputSpan::new_extra("5 m/", Config::default());
            let Err(nom::Err::Failure(error)) = parse(input) else {
                panic!("expected an unrecoverable error");
            };

            assert!(matches!(
                error.reason,
                ParserErrorReason::Incomplete {
                    kind: IncompleteKind::MissingSecondTerm { .. },
                    ..
                }
            ));
        }
    }
}
