//! Parser for unit identifiers.

use nom::{Parser as _, bytes::complete::take_while, character::complete::satisfy};

use crate::token::{
    InputSpan, Result,
    error::TokenError,
    util::{Token, token},
};

/// Characters that may start a unit identifier.
///
/// Letters include Greek letters such as `μ` and `Ω`; the degree sign is
/// accepted so that `°C` and `°` are single identifiers.
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '°'
}

fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Parses a unit identifier such as `km`, `degC`, `μs` or `°F`.
///
/// The first character is a letter, `_` or `°`; digits are allowed after it.
pub fn unit_identifier(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        |input| {
            let (rest, _) = satisfy(is_identifier_start).parse(input)?;
            let (rest, _) = take_while(is_identifier_continue).parse(rest)?;
            Ok((rest, ()))
        },
        TokenError::expected_unit_identifier,
    )
    .parse(input)
}
