use aoc_framework::parsing::{parse_lines_with_offset, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use regex::Regex;
use thiserror::Error;

pub(super) const TITLE: &str = "Day 2: Password Philosophy";

#[solution_runner(
    name = TITLE,
    parsed = PasswordDatabase,
    part_one = Day02,
    part_two = Day02,
    self_test = self_test
)]
impl super::AdventOfCode2020<2> {}

#[derive(Error, Debug)]
enum Day02Error {
    /// Line not formatted as expected. Tuple contains the source string to report in the error
    /// message.
    #[error("failed to detect policy: expected pattern \"[low]-[high] [letter]: [password]\", found {0:?}")]
    NotPolicyLine(String),
}

/*
Input is a corrupted password database: one entry per line pairing the corporate policy in
effect with the password that was set under it, formatted as `low-high letter: password`.
*/

/// One database entry: the policy numbers, the constrained letter, and the password itself.
///
/// What the two numbers mean depends on the part being solved.
#[derive(Debug)]
struct PolicyEntry {
    low: usize,
    high: usize,
    letter: char,
    password: String,
}

struct PolicyEntryParser {
    /// Regex capturing the two policy numbers, the letter, and the password.
    entry_re: Regex,
}

impl PolicyEntryParser {
    const ENTRY_PATTERN: &str = r"^(\d+)-(\d+) ([a-z]): (\S+)$";

    fn new() -> Self {
        let entry_re = Regex::new(Self::ENTRY_PATTERN).expect("pattern should be valid");
        Self { entry_re }
    }

    fn parse(&self, line: &str) -> DynamicResult<PolicyEntry> {
        let captures = self
            .entry_re
            .captures(line)
            .ok_or_else(|| Day02Error::NotPolicyLine(line.to_owned()))?;

        let low = parse_with_context(&captures[1])?;
        let high = parse_with_context(&captures[2])?;
        let letter = captures[3]
            .chars()
            .next()
            .expect("capture group 3 should be a single letter");
        let password = captures[4].to_owned();

        Ok(PolicyEntry {
            low,
            high,
            letter,
            password,
        })
    }
}

struct PasswordDatabase(Vec<PolicyEntry>);

impl ParseData for PasswordDatabase {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = PolicyEntryParser::new();
        let entries = parse_lines_with_offset(input, 0, |line| parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(entries))
    }
}

/*
For part 1, the numbers are an occurrence range: the letter must appear in the password at least
`low` and at most `high` times. Count the valid passwords.
*/

fn is_valid_by_occurrence_range(entry: &PolicyEntry) -> bool {
    let occurrences = entry
        .password
        .chars()
        .filter(|&c| c == entry.letter)
        .count();
    (entry.low..=entry.high).contains(&occurrences)
}

struct Day02;

impl Solution<PartOne> for Day02 {
    type Input = PasswordDatabase;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|entry| is_valid_by_occurrence_range(entry))
            .count())
    }
}

/*
For part 2, the numbers are one-based character positions: exactly one of the two positions must
hold the letter. Positions past the end of the password simply don't match. Count the valid
passwords under this reading.
*/

fn is_valid_by_positions(entry: &PolicyEntry) -> bool {
    let letter_at = |position: usize| {
        position
            .checked_sub(1)
            .and_then(|index| entry.password.chars().nth(index))
            .is_some_and(|c| c == entry.letter)
    };
    letter_at(entry.low) != letter_at(entry.high)
}

impl Solution<PartTwo> for Day02 {
    type Input = PasswordDatabase;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|entry| is_valid_by_positions(entry))
            .count())
    }
}

const EXAMPLE_INPUT: &str = r"1-3 a: abcde
1-3 b: cdefg
2-9 c: ccccccccc
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<PasswordDatabase, PartOne, Day02>(TITLE, EXAMPLE_INPUT, &2)?;
    selftest::check_parsed_example::<PasswordDatabase, PartTwo, Day02>(TITLE, EXAMPLE_INPUT, &1)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_examples_pass_self_test() -> DynamicResult<()> {
        self_test()
    }

    #[test]
    fn position_policy_requires_exactly_one_match() -> DynamicResult<()> {
        let parser = PolicyEntryParser::new();

        // position 1 matches, position 3 does not
        assert!(is_valid_by_positions(&parser.parse("1-3 a: abcde")?));
        // neither position matches
        assert!(!is_valid_by_positions(&parser.parse("1-3 b: cdefg")?));
        // both positions match
        assert!(!is_valid_by_positions(&parser.parse("2-9 c: ccccccccc")?));
        // position past the end of the password is not a match
        assert!(is_valid_by_positions(&parser.parse("1-99 a: abc")?));
        Ok(())
    }

    #[test]
    fn malformed_line_reports_its_position() {
        let result = PasswordDatabase::parse("1-3 a: abcde\nnot a policy\n");
        let Err(error) = result else {
            panic!("malformed line should fail parsing");
        };
        assert_eq!(error.to_string(), "failure parsing line 2");
    }
}
