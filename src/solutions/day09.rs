use aoc_framework::parsing::parse_number_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

pub(super) const TITLE: &str = "Day 9: Encoding Error";

#[solution_runner(
    name = TITLE,
    parsed = XmasStream,
    part_one = Day09,
    part_two = Day09,
    self_test = self_test
)]
impl super::AdventOfCode2020<9> {}

#[derive(Error, Debug)]
enum Day09Error {
    /// The stream is shorter than its preamble; there is nothing to validate.
    #[error("stream of {length} numbers is too short for a preamble of {preamble}")]
    StreamTooShort { length: usize, preamble: usize },

    /// Every number past the preamble was a valid window sum.
    #[error("every number is a sum of two of the previous {0}")]
    NoInvalidNumber(usize),

    /// No contiguous run of at least two numbers sums to the target.
    #[error("no contiguous run sums to {0}")]
    NoContiguousRun(u64),
}

/*
Input is XMAS-encrypted output: one number per line. After a preamble, every number must be the
sum of two of the immediately preceding `preamble` numbers. The real data uses a preamble of
25; the worked example uses 5.
*/

const PRODUCTION_PREAMBLE: usize = 25;
const EXAMPLE_PREAMBLE: usize = 5;

struct XmasStream {
    numbers: Vec<u64>,
    preamble: usize,
}

impl ParseData for XmasStream {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let numbers = parse_number_lines(input).collect::<Result<_, _>>()?;
        Ok(Self {
            numbers,
            preamble: PRODUCTION_PREAMBLE,
        })
    }
}

/*
For part 1, answer with the first number that is *not* a sum of two distinct positions in its
preceding window.
*/

fn is_window_sum(window: &[u64], target: u64) -> bool {
    window.iter().enumerate().any(|(index, &first)| {
        window[index + 1..]
            .iter()
            .any(|&second| first + second == target)
    })
}

fn first_invalid_number(numbers: &[u64], preamble: usize) -> Result<u64, Day09Error> {
    if numbers.len() <= preamble {
        return Err(Day09Error::StreamTooShort {
            length: numbers.len(),
            preamble,
        });
    }

    numbers
        .windows(preamble + 1)
        .find_map(|window| {
            let (&target, window) = window.split_last()?;
            (!is_window_sum(window, target)).then_some(target)
        })
        .ok_or(Day09Error::NoInvalidNumber(preamble))
}

struct Day09;

impl Solution<PartOne> for Day09 {
    type Input = XmasStream;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(first_invalid_number(&input.numbers, input.preamble)?)
    }
}

/*
For part 2, find the contiguous run of at least two numbers summing to part 1's invalid number;
the encryption weakness is the smallest plus the largest number in that run.
*/

fn encryption_weakness(numbers: &[u64], preamble: usize) -> Result<u64, Day09Error> {
    let target = first_invalid_number(numbers, preamble)?;

    // grow and shrink one sliding window instead of rescanning every start position
    let mut start = 0;
    let mut end = 0;
    let mut sum = 0u64;

    loop {
        if sum < target || end - start < 2 {
            let Some(&next) = numbers.get(end) else {
                return Err(Day09Error::NoContiguousRun(target));
            };
            sum += next;
            end += 1;
        } else if sum > target {
            sum -= numbers[start];
            start += 1;
        } else {
            let run = &numbers[start..end];
            let smallest = run.iter().min().copied().unwrap_or(0);
            let largest = run.iter().max().copied().unwrap_or(0);
            return Ok(smallest + largest);
        }
    }
}

impl Solution<PartTwo> for Day09 {
    type Input = XmasStream;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(encryption_weakness(&input.numbers, input.preamble)?)
    }
}

const EXAMPLE_INPUT: &str = r"35
20
15
25
47
40
62
55
65
95
102
117
150
182
127
219
299
277
309
576
";

/// Adapters replaying the worked example with its shorter preamble of 5, so the self-test can
/// run through the same harness as every other day.
struct ExamplePartOne;

impl Solution<PartOne> for ExamplePartOne {
    type Input = str;
    type Output = u64;

    fn solve(input: &str) -> DynamicResult<Self::Output> {
        let numbers: Vec<u64> = parse_number_lines(input).collect::<Result<_, _>>()?;
        Ok(first_invalid_number(&numbers, EXAMPLE_PREAMBLE)?)
    }
}

struct ExamplePartTwo;

impl Solution<PartTwo> for ExamplePartTwo {
    type Input = str;
    type Output = u64;

    fn solve(input: &str) -> DynamicResult<Self::Output> {
        let numbers: Vec<u64> = parse_number_lines(input).collect::<Result<_, _>>()?;
        Ok(encryption_weakness(&numbers, EXAMPLE_PREAMBLE)?)
    }
}

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_example::<PartOne, ExamplePartOne>(TITLE, EXAMPLE_INPUT, &127)?;
    selftest::check_example::<PartTwo, ExamplePartTwo>(TITLE, EXAMPLE_INPUT, &62)?;
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
    fn window_sum_needs_two_distinct_positions() {
        // against the window 1..=25, 26 is a sum (1 + 25) but 50 is not (no 25 + 25)
        let window: Vec<u64> = (1..=25).collect();
        assert!(is_window_sum(&window, 26));
        assert!(is_window_sum(&window, 49));
        assert!(!is_window_sum(&window, 50));
    }

    #[test]
    fn all_valid_stream_is_a_distinct_error() {
        let numbers = [1, 2, 3, 5];
        let Err(error) = first_invalid_number(&numbers, 2) else {
            panic!("fully valid stream should have no answer");
        };
        assert_eq!(error.to_string(), "every number is a sum of two of the previous 2");
    }

    #[test]
    fn short_stream_is_rejected() {
        let numbers = [1, 2, 3];
        assert!(first_invalid_number(&numbers, 5).is_err());
    }

    #[test]
    fn weakness_run_from_description_is_found() -> DynamicResult<()> {
        // the example's run 15 + 25 + 47 + 40 = 127 gives 15 + 47
        let numbers: Vec<u64> = parse_number_lines(EXAMPLE_INPUT).collect::<Result<_, _>>()?;
        assert_eq!(encryption_weakness(&numbers, EXAMPLE_PREAMBLE)?, 62);
        Ok(())
    }
}
