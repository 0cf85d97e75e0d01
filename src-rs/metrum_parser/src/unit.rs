//! Unit expression parsing.

use nom::{
    Parser as NomParser,
    branch::alt,
    combinator::{map, opt},
};

use crate::{
    ast::{Span, UnitExpr, UnitOp},
    error::{ErrorHandlingParser, ParserError},
    token::{
        Token,
        literal::{integer, unit_one},
        naming::unit_identifier,
        symbol::{caret, paren_left, paren_right, slash, star},
    },
    util::{InputSpan, Result},
};

/// Parses a unit expression
///
/// This function **may not consume the complete input**.
pub fn parse(input: InputSpan<'_>) -> Result<'_, UnitExpr, ParserError> {
    unit_expr(input)
}

/// Parses a unit expression with left-associative multiplication and division.
///
/// - `kg*m` -> `(kg * m)`
/// - `m/s^2` -> `(m / s^2)`
/// - `kg*m/s^2` -> `((kg * m) / s^2)`
///
/// When implicit multiplication is enabled, a term that follows whitespace
/// without an operator is multiplied in: `N m` -> `(N * m)`.
fn unit_expr(input: InputSpan<'_>) -> Result<'_, UnitExpr, ParserError> {
    let (mut rest, mut expr) = unit_term
        .convert_error_to(ParserError::expect_unit)
        .parse(input)?;

    loop {
        let operator = alt((
            map(star, |token| (token, UnitOp::Multiply)),
            map(slash, |token| (token, UnitOp::Divide)),
        ));

        let (after_operator, operator) = opt(operator).convert_errors().parse(rest)?;

        if let Some((operator_token, op)) = operator {
            let (after_term, term) = unit_term
                .or_fail_with(ParserError::missing_second_term(&operator_token, op))
                .parse(after_operator)?;

            expr = UnitExpr::binary_op(op, expr, term);
            rest = after_term;
            continue;
        }

        if !implicit_multiplication_allowed(rest, &expr) {
            break;
        }

        match unit_term(rest) {
            Ok((after_term, term)) => {
                expr = UnitExpr::binary_op(UnitOp::Multiply, expr, term);
                rest = after_term;
            }
            Err(nom::Err::Error(_)) => break,
            Err(error) => return Err(error),
        }
    }

    Ok((rest, expr))
}

/// Whether the next term may be multiplied in without an operator.
///
/// Requires the option to be enabled and whitespace between the previous
/// term and the current position.
fn implicit_multiplication_allowed(rest: InputSpan<'_>, previous: &UnitExpr) -> bool {
    rest.extra.space_multiplies && rest.location_offset() > previous.span().end
}

/// Parses a unit term: a unit name, `1`, or a parenthesized expression,
/// optionally raised to an integer power.
fn unit_term(input: InputSpan<'_>) -> Result<'_, UnitExpr, ParserError> {
    let parse_unit = |input| {
        let (rest, id_token) = unit_identifier.convert_errors().parse(input)?;
        let expr = UnitExpr::unit(id_token.lexeme(), id_token.lexeme_span);
        Ok((rest, expr))
    };

    let parse_unit_one = |input| {
        let (rest, one_token) = unit_one.convert_errors().parse(input)?;
        Ok((rest, UnitExpr::one(one_token.lexeme_span)))
    };

    let parse_parenthesized = |input| {
        let (rest, paren_left_token) = paren_left.convert_errors().parse(input)?;

        let (rest, expr) = unit_expr
            .or_fail_with(ParserError::paren_missing_expr(&paren_left_token))
            .parse(rest)?;

        let (rest, paren_right_token) = paren_right
            .or_fail_with(ParserError::unclosed_paren(&paren_left_token))
            .parse(rest)?;

        let span = Span::cover(paren_left_token.lexeme_span, paren_right_token.lexeme_span);

        Ok((rest, UnitExpr::parenthesized(expr, span)))
    };

    let (rest, base) = parse_unit
        .or(parse_unit_one)
        .or(parse_parenthesized)
        .parse(input)?;

    let (rest, exponent) = opt(power_exponent).parse(rest)?;

    let expr = match exponent {
        Some((exponent_token, exponent)) => {
            let span = Span::cover(base.span(), exponent_token.lexeme_span);
            UnitExpr::power(base, exponent, span)
        }
        None => base,
    };

    Ok((rest, expr))
}

/// Parses `^` followed by an integer.
fn power_exponent(input: InputSpan<'_>) -> Result<'_, (Token<'_>, i32), ParserError> {
    let (rest, caret_token) = caret.convert_errors().parse(input)?;

    let (rest, exponent_token) = integer
        .or_fail_with(ParserError::missing_exponent(&caret_token))
        .parse(rest)?;

    let exponent = exponent_token
        .lexeme()
        .parse::<i32>()
        .map_err(|_| nom::Err::Failure(ParserError::exponent_out_of_range(&exponent_token)))?;

    Ok((rest, (exponent_token, exponent)))
}
