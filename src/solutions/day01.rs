use aoc_framework::parsing::parse_number_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

use crate::checked_product::CheckedProduct;

pub(super) const TITLE: &str = "Day 1: Report Repair";

#[solution_runner(
    name = TITLE,
    parsed = ExpenseReport,
    part_one = Day01,
    part_two = Day01,
    self_test = self_test
)]
impl super::AdventOfCode2020<1> {}

#[derive(Error, Debug)]
enum Day01Error {
    /// The search exhausted every combination without hitting the target sum. The puzzle
    /// guarantees a unique solution, so this means the input is not a valid expense report.
    #[error("no combination of {0} entries sums to {TARGET_SUM}")]
    NoMatchingEntries(usize),

    #[error("product of matching entries overflows")]
    ProductOverflow,
}

/*
Input is an expense report: one integer entry per line.

For part 1, find the two entries that sum to 2020 and answer with their product.
*/

const TARGET_SUM: u32 = 2020;

struct ExpenseReport(Vec<u32>);

impl ParseData for ExpenseReport {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let entries = parse_number_lines(input).collect::<Result<_, _>>()?;
        Ok(Self(entries))
    }
}

/// Brute-force search for the unique pair summing to the target; the report is small enough
/// that O(n^2) is fine.
fn find_pair_product(entries: &[u32]) -> Result<u64, Day01Error> {
    for (index, &first) in entries.iter().enumerate() {
        for &second in &entries[index + 1..] {
            if first.checked_add(second) == Some(TARGET_SUM) {
                return [u64::from(first), u64::from(second)]
                    .into_iter()
                    .checked_product()
                    .ok_or(Day01Error::ProductOverflow);
            }
        }
    }
    Err(Day01Error::NoMatchingEntries(2))
}

struct Day01;

impl Solution<PartOne> for Day01 {
    type Input = ExpenseReport;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(find_pair_product(&input.0)?)
    }
}

/*
For part 2, the same search with three entries: find the triple summing to 2020 and answer with
the product of all three.
*/

fn find_triple_product(entries: &[u32]) -> Result<u64, Day01Error> {
    for (first_index, &first) in entries.iter().enumerate() {
        for (second_offset, &second) in entries[first_index + 1..].iter().enumerate() {
            let Some(remaining) = first
                .checked_add(second)
                .and_then(|sum| TARGET_SUM.checked_sub(sum))
            else {
                continue;
            };
            let second_index = first_index + 1 + second_offset;
            for &third in &entries[second_index + 1..] {
                if third == remaining {
                    return [u64::from(first), u64::from(second), u64::from(third)]
                        .into_iter()
                        .checked_product()
                        .ok_or(Day01Error::ProductOverflow);
                }
            }
        }
    }
    Err(Day01Error::NoMatchingEntries(3))
}

impl Solution<PartTwo> for Day01 {
    type Input = ExpenseReport;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(find_triple_product(&input.0)?)
    }
}

const EXAMPLE_INPUT: &str = r"1721
979
366
299
675
1456
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<ExpenseReport, PartOne, Day01>(TITLE, EXAMPLE_INPUT, &514579)?;
    selftest::check_parsed_example::<ExpenseReport, PartTwo, Day01>(
        TITLE,
        EXAMPLE_INPUT,
        &241_861_950,
    )?;
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
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = ExpenseReport::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 514579);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = ExpenseReport::parse(EXAMPLE_INPUT)?;
        let result = <Day01 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 241_861_950);
        Ok(())
    }

    #[test]
    fn huge_entries_do_not_overflow_the_search() {
        // sums near u32::MAX must not wrap into a false match
        let entries = [u32::MAX, u32::MAX, 2020];
        assert!(find_pair_product(&entries).is_err());
        assert!(find_triple_product(&entries).is_err());
    }

    #[test]
    fn exhausted_search_is_a_distinct_error() {
        let entries = [1u32, 2, 3];
        let Err(error) = find_pair_product(&entries) else {
            panic!("search should exhaust without a match");
        };
        assert_eq!(error.to_string(), "no combination of 2 entries sums to 2020");
    }
}
