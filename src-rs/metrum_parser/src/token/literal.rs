//! Parsers for numeric literals and the dimensionless unit `1`.

use nom::{
    Parser as _,
    bytes::complete::tag,
    character::complete::{digit1, one_of, satisfy},
    combinator::{not, opt},
};

use crate::token::{
    InputSpan, Result,
    error::{ErrorHandlingParser, TokenError},
    util::{Token, token},
};

/// Parses a number literal, supporting optional sign, decimal, and exponent.
///
/// Every lexeme accepted here is also accepted by `f64::from_str`, so callers
/// may parse the lexeme with `expect`.
///
/// - Integers: `42`, `-17`, `+123`
/// - Decimals: `3.1415`, `-2.5`
/// - Exponents: `2.5e10`, `-1.2E-3`, `1e+5`
///
/// An `e` that is not followed by digits is left alone, so `5em` reads as
/// the number `5` followed by the unit `em`.
pub fn number(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    let opt_sign = opt(one_of("+-"));

    let opt_decimal = opt(|input| -> Result<'_, _, TokenError> {
        let (rest, decimal_point_span) = tag(".").parse(input)?;
        let (rest, _) = digit1
            .or_fail_with(TokenError::invalid_decimal_part(decimal_point_span))
            .parse(rest)?;
        Ok((rest, ()))
    });

    let opt_exponent = opt((one_of("eE"), opt(one_of("+-")), digit1));

    token(
        (opt_sign, digit1, opt_decimal, opt_exponent),
        TokenError::expected_number,
    )
    .parse(input)
}

/// Parses a signed integer, as used for unit exponents.
pub fn integer(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token((opt(one_of("+-")), digit1), TokenError::expected_integer).parse(input)
}

/// Parses the dimensionless unit `1`.
///
/// The `1` must not be the start of a longer number such as `10` or `1.5`.
pub fn unit_one(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        (
            tag("1"),
            not(satisfy(|c: char| c.is_ascii_digit() || c == '.')),
        ),
        TokenError::expected_unit_one,
    )
    .parse(input)
}
