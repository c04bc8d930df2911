//! Replaying worked examples before trusting a solution on real input.
//!
//! Puzzle descriptions quote small example inputs with known answers. Solutions register a
//! self-test that replays those examples through the exact same code path as the production
//! input; a mismatch produces a [`SelfTestFailure`], which callers treat as fatal so a
//! regressed solution halts before it can print a plausible-but-wrong answer.
//!
//! The checks here are pure: they perform no I/O and touch nothing beyond the literal example
//! data passed in.

use std::fmt::Display;

use thiserror::Error;

use crate::{DynamicResult, ParseData, Part, PartKind, Solution};

/// A worked example produced a different answer than the puzzle description quotes.
///
/// This is distinct from production-path errors: it indicates the implementation itself is
/// wrong, not the input.
#[derive(Error, Debug)]
#[error("self-test failed for {part} of {name}: expected {expected}, got {actual}")]
pub struct SelfTestFailure {
    /// The solution's display name.
    name: String,
    part: PartKind,
    expected: String,
    actual: String,
}

fn compare<P, O>(name: &str, expected: &O, actual: &O) -> Result<(), SelfTestFailure>
where
    P: Part,
    O: Display + PartialEq,
{
    if actual == expected {
        Ok(())
    } else {
        Err(SelfTestFailure {
            name: name.to_string(),
            part: P::kind(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Replay a worked example through a solution taking string input and compare the answer.
///
/// # Errors
///
/// Returns [`SelfTestFailure`] if the answer differs from `expected`. Any error from the
/// solution itself is propagated unchanged.
pub fn check_example<P, S>(name: &str, input: &str, expected: &S::Output) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P, Input = str>,
    S::Output: PartialEq,
{
    let actual = S::solve(input)?;
    compare::<P, S::Output>(name, expected, &actual)?;
    Ok(())
}

/// Replay a worked example through a parse step and a solution, comparing the answer.
///
/// # Errors
///
/// Returns [`SelfTestFailure`] if the answer differs from `expected`. Any error from parsing
/// or the solution itself is propagated unchanged.
pub fn check_parsed_example<D, P, S>(
    name: &str,
    input: &str,
    expected: &S::Output,
) -> DynamicResult<()>
where
    D: ParseData,
    P: Part,
    S: Solution<P, Input = D>,
    S::Output: PartialEq,
{
    let parsed = D::parse(input)?;
    let actual = S::solve(&parsed)?;
    compare::<P, S::Output>(name, expected, &actual)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartOne;

    struct LineCount;

    impl Solution<PartOne> for LineCount {
        type Input = str;
        type Output = usize;

        fn solve(input: &str) -> DynamicResult<Self::Output> {
            Ok(input.lines().count())
        }
    }

    #[test]
    fn matching_example_passes() -> DynamicResult<()> {
        check_example::<PartOne, LineCount>("Line Count", "a\nb\nc\n", &3)
    }

    #[test]
    fn mismatched_example_reports_expected_and_actual() {
        let Err(error) = check_example::<PartOne, LineCount>("Line Count", "a\nb\n", &3) else {
            panic!("mismatch should fail the self-test");
        };
        let Some(failure) = error.downcast_ref::<SelfTestFailure>() else {
            panic!("error should be a self-test failure");
        };
        assert_eq!(
            failure.to_string(),
            "self-test failed for Part 1 of Line Count: expected 3, got 2"
        );
    }
}
