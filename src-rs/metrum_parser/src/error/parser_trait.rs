use nom::{Parser, error::ParseError};

/// Error conversions for nom parsers.
///
/// nom distinguishes recoverable errors (`Error`), which let alternatives be
/// tried, from unrecoverable ones (`Failure`), which stop parsing. These
/// helpers rewrite the first kind while passing the second through `From`.
pub trait ErrorHandlingParser<I, O, E>: Parser<I, Output = O, Error = E>
where
    E: ParseError<I>,
{
    /// Converts recoverable errors with `convert_error`.
    ///
    /// ```ignore
    /// let parser = unit_term.convert_error_to(ParserError::expect_unit);
    /// ```
    fn convert_error_to<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input)
                .map_err(|error| rewrite_recoverable(error, |e| nom::Err::Error(convert_error(e))))
        }
    }

    /// Converts recoverable errors with `convert_error` and makes them unrecoverable.
    ///
    /// Used once enough input has been seen that no alternative can apply,
    /// such as after a `^`.
    fn or_fail_with<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|error| {
                rewrite_recoverable(error, |e| nom::Err::Failure(convert_error(e)))
            })
        }
    }

    /// Converts both kinds of error with `From`.
    fn convert_errors<E2>(mut self) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input)
                .map_err(|error| rewrite_recoverable(error, |e| nom::Err::Error(e.into())))
        }
    }
}

impl<I, O, E, P> ErrorHandlingParser<I, O, E> for P
where
    P: Parser<I, Output = O, Error = E>,
    E: ParseError<I>,
{
}

/// Rewrites a recoverable error with `rewrite`; failures only change type.
fn rewrite_recoverable<E, E2>(
    error: nom::Err<E>,
    rewrite: impl FnOnce(E) -> nom::Err<E2>,
) -> nom::Err<E2>
where
    E2: From<E>,
{
    match error {
        nom::Err::Error(e) => rewrite(e),
        nom::Err::Failure(e) => nom::Err::Failure(e.into()),
        nom::Err::Incomplete(needed) => nom::Err::Incomplete(needed),
    }
}
