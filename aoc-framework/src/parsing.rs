//! Utility functions and errors for parsing input.

use std::str::FromStr;

use thiserror::Error;

use crate::{DynamicError, DynamicResult};

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`] and maps errors to [`ParseContextError`].
///
/// # Errors
///
/// Will return a [`ParseContextError`] with the given string as context and
/// [`F::Err`][FromStr::Err] as the source if it's not possible to parse the string into the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

/// Parse lines with a closure, mapping any line's dynamic error with an [`InvalidLine`].
///
/// # Arguments
/// - `input` - The input string to parse.
/// - `offset` - An offset to add to the line index for [`InvalidLine`] errors. Useful when parsing
///   a later slice of input and errors should have any reported line index reflect the offset line
///   position from the original input. Set to `0` if no offset is needed.
/// - `parser` - A closure that takes a line string and returns a [`DynamicResult`].
///
/// # Errors
///
/// If parsing a line fails, an [`InvalidLine`] error is returned, sourcing the original error.
///
/// # Returns
///
/// An iterable of parsing results for each line.
pub fn parse_lines_with_offset<T, F>(
    input: &str,
    offset: usize,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>>
where
    F: FnMut(&str) -> DynamicResult<T>,
{
    input.lines().enumerate().map(move |(index, line)| {
        parser(line).map_err(|source| InvalidLine {
            line_index: index.saturating_add(offset),
            source,
        })
    })
}

/// Parse every line of input as a number, preserving input order.
///
/// The data files shipped with puzzles are trusted, so a line that fails to parse is a
/// configuration error rather than a recoverable condition; it is surfaced as an [`InvalidLine`]
/// sourcing a [`ParseContextError`] rather than being skipped.
///
/// # Errors
///
/// If parsing a line fails, an [`InvalidLine`] error is returned for that line.
///
/// # Returns
///
/// An iterable of parsing results for each line.
pub fn parse_number_lines<N>(input: &str) -> impl Iterator<Item = Result<N, InvalidLine>>
where
    N: FromStr,
    N::Err: std::error::Error + Send + Sync + 'static,
{
    parse_lines_with_offset(input, 0, |line| Ok(parse_with_context::<N>(line)?))
}

/// Split input into groups of lines separated by blank lines.
///
/// Several puzzles format multi-line records delimited by a blank line (passport batches, customs
/// declaration groups). Group order follows input order, and line breaks within a group are kept
/// so callers can split on whitespace or lines as their record format needs.
///
/// A trailing newline does not produce a trailing empty group.
pub fn blank_line_groups(input: &str) -> impl Iterator<Item = &str> {
    input
        .split("\n\n")
        .map(|group| group.trim_end_matches('\n'))
        .filter(|group| !group.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_lines_keep_count_and_order() -> DynamicResult<()> {
        let input = "1721\n979\n366\n299\n675\n1456\n";
        let numbers: Vec<i32> = parse_number_lines(input).collect::<Result<_, _>>()?;
        assert_eq!(numbers, vec![1721, 979, 366, 299, 675, 1456]);
        Ok(())
    }

    #[test]
    fn number_lines_report_offending_line() {
        let input = "12\nnot-a-number\n34\n";
        let result: Result<Vec<i64>, _> = parse_number_lines(input).collect();
        let Err(error) = result else {
            panic!("middle line should fail to parse");
        };
        assert_eq!(error.to_string(), "failure parsing line 2");
    }

    #[test]
    fn blank_line_groups_split_and_preserve_order() {
        let input = "abc\n\na\nb\nc\n\nab\nac\n\na\na\na\na\n\nb\n";
        let groups: Vec<&str> = blank_line_groups(input).collect();
        assert_eq!(groups, vec!["abc", "a\nb\nc", "ab\nac", "a\na\na\na", "b"]);
    }

    #[test]
    fn blank_line_groups_ignore_trailing_blank() {
        let groups: Vec<&str> = blank_line_groups("one\n\ntwo\n\n").collect();
        assert_eq!(groups, vec!["one", "two"]);
    }
}
