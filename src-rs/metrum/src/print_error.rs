//! Error message formatting for the CLI

use anstream::eprintln;
use metrum::{RuntimeError, parser::Span};
use owo_colors::{OwoColorize, Style};

use crate::stylesheet;

/// An error along with the command-line argument it came from.
#[derive(Debug)]
pub struct CliError {
    source: Option<String>,
    error: RuntimeError,
}

impl CliError {
    /// An error raised while handling `source`.
    pub fn with_source(source: &str, error: RuntimeError) -> Self {
        Self {
            source: Some(source.to_string()),
            error,
        }
    }
}

impl From<RuntimeError> for CliError {
    fn from(error: RuntimeError) -> Self {
        Self {
            source: None,
            error,
        }
    }
}

impl From<metrum::UnitError> for CliError {
    fn from(error: metrum::UnitError) -> Self {
        Self::from(RuntimeError::from(error))
    }
}

/// Prints a formatted error message to stderr
pub fn print(error: &CliError) {
    for message in error_to_strings(error) {
        eprintln!("{message}");
    }
}

/// Formats the error, one block per problem found
fn error_to_strings(error: &CliError) -> Vec<String> {
    let source = error.source.as_deref();

    match &error.error {
        RuntimeError::Parse { error: parse_error, .. } => {
            let span = Span::new(parse_error.error_offset, parse_error.error_offset + 1);
            vec![error_block(&error.error.to_string(), source, Some(span))]
        }
        RuntimeError::Eval(eval_errors) => eval_errors
            .iter()
            .map(|eval_error| error_block(&eval_error.to_string(), source, Some(eval_error.span())))
            .collect(),
        RuntimeError::Unit(unit_error) => vec![error_block(&unit_error.to_string(), None, None)],
    }
}

fn error_block(message: &str, source: Option<&str>, span: Option<Span>) -> String {
    let message_line = get_message_line("error", stylesheet::ERROR_COLOR, message);

    match (source, span) {
        (Some(source), Some(span)) => {
            let source_lines = get_source_lines(source, span, stylesheet::ERROR_COLOR);
            format!("{message_line}\n{source_lines}")
        }
        _ => message_line,
    }
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}

/// Formats the argument with the span underlined
fn get_source_lines(source: &str, span: Span, code_highlight_color: Style) -> String {
    //   |
    //   | 3 furlong
    //   |   ^------
    let (indent, length) = pointer_position(source, span);

    let bar = stylesheet::SOURCE_ANNOTATION.style("|");
    let pointer = code_highlight_color.bold().style("^");
    let pointer_rest = code_highlight_color
        .bold()
        .style("-".repeat(length.saturating_sub(1)));

    let blank_line = format!("  {bar}");
    let source_line = format!("  {bar} {source}");
    let pointer_line = format!("  {bar} {}{pointer}{pointer_rest}", " ".repeat(indent));

    [blank_line, source_line, pointer_line].join("\n")
}

/// The character column and character length of `span` within `source`.
///
/// A span past the end of the source points just after the last character.
fn pointer_position(source: &str, span: Span) -> (usize, usize) {
    let char_count = |text: &str| text.chars().count();

    let start = span.start.min(source.len());
    let end = span.end.clamp(start, source.len());

    let indent = source.get(..start).map_or(0, char_count);
    let length = source.get(start..end).map_or(0, char_count).max(1);

    (indent, length)
}

#[cfg(test)]
mod tests {
    use metrum::runtime::EvalError;

    use super::*;

    #[test]
    fn pointer_counts_characters() {
        let source = "3 \u{3bc}x";

        assert_eq!(pointer_position(source, Span::new(2, source.len())), (2, 2));
    }

    #[test]
    fn pointer_past_the_end() {
        assert_eq!(pointer_position("m/", Span::new(2, 3)), (2, 1));
    }

    #[test]
    fn one_block_per_unknown_unit() {
        let error = CliError::with_source(
            "foo/bar",
            RuntimeError::Eval(vec![
                EvalError::unknown_unit("foo", Span::new(0, 3)),
                EvalError::unknown_unit("bar", Span::new(4, 7)),
            ]),
        );

        let blocks = error_to_strings(&error);

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("unknown unit `foo`"));
        assert!(blocks[1].contains("unknown unit `bar`"));
    }
}
