use std::mem;

use aoc_framework::parsing::parse_with_context;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

pub(super) const TITLE: &str = "Day 15: Rambunctious Recitation";

#[solution_runner(
    name = TITLE,
    parsed = StartingNumbers,
    part_one = Day15,
    part_two = Day15,
    self_test = self_test
)]
impl super::AdventOfCode2020<15> {}

#[derive(Error, Debug)]
enum Day15Error {
    #[error("no starting numbers in input")]
    EmptyStartingList,
}

/*
Input is the game's starting numbers, comma-separated on one line. Players take turns: read the
starting numbers first, then each turn considers the most recently spoken number. If it was new,
say 0; otherwise say how many turns apart its two most recent utterances were.
*/

struct StartingNumbers(Vec<u32>);

impl ParseData for StartingNumbers {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let numbers = input
            .trim_end()
            .split(',')
            .map(parse_with_context)
            .collect::<Result<_, _>>()?;
        Ok(Self(numbers))
    }
}

/// Play until `target` numbers have been spoken and return the last one.
///
/// Tracks the turn each number was last spoken in a flat table indexed by the number itself;
/// every number spoken after the starting list is a turn difference, so it stays below `target`.
fn spoken_number(starting: &[u32], target: u32) -> Result<u32, Day15Error> {
    let (&latest_start, earlier_starts) =
        starting.split_last().ok_or(Day15Error::EmptyStartingList)?;

    if let Some(index) = starting.len().checked_sub(target as usize)
        && let Some(&answer) = starting.iter().rev().nth(index)
    {
        return Ok(answer);
    }

    let largest_start = starting.iter().max().copied().unwrap_or(0);
    let table_size = (target as usize).max(largest_start as usize + 1);

    // last_turn[n] is the 1-based turn n was most recently spoken, or 0 if never
    let mut last_turn = vec![0u32; table_size];
    for (turn, &number) in (1..).zip(earlier_starts) {
        last_turn[number as usize] = turn;
    }

    let mut latest = latest_start;
    for turn in starting.len() as u32..target {
        let previous = mem::replace(&mut last_turn[latest as usize], turn);
        latest = if previous == 0 { 0 } else { turn - previous };
    }

    Ok(latest)
}

/*
For part 1, answer with the 2020th number spoken.
*/

const PART_ONE_TARGET: u32 = 2020;

struct Day15;

impl Solution<PartOne> for Day15 {
    type Input = StartingNumbers;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(spoken_number(&input.0, PART_ONE_TARGET)?)
    }
}

/*
For part 2, the game runs much longer: answer with the 30,000,000th number spoken. The flat
last-turn table keeps every turn O(1), so the longer game is the same loop run further.
*/

const PART_TWO_TARGET: u32 = 30_000_000;

impl Solution<PartTwo> for Day15 {
    type Input = StartingNumbers;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(spoken_number(&input.0, PART_TWO_TARGET)?)
    }
}

const EXAMPLE_INPUT: &str = "0,3,6\n";

/// Replay the worked example from the puzzle description.
///
/// Only part 1's example is checked here; part 2's takes tens of millions of turns and is
/// exercised by the test suite instead.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<StartingNumbers, PartOne, Day15>(TITLE, EXAMPLE_INPUT, &436)?;
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
    fn first_ten_turns_from_description() -> DynamicResult<()> {
        let expected = [0, 3, 6, 0, 3, 3, 1, 0, 4, 0];
        for (turn, &number) in (1..).zip(&expected) {
            assert_eq!(spoken_number(&[0, 3, 6], turn)?, number, "turn {turn}");
        }
        Ok(())
    }

    #[test]
    fn part_one_target_for_every_described_start() -> DynamicResult<()> {
        let cases: [(&[u32], u32); 6] = [
            (&[1, 3, 2], 1),
            (&[2, 1, 3], 10),
            (&[1, 2, 3], 27),
            (&[2, 3, 1], 78),
            (&[3, 2, 1], 438),
            (&[3, 1, 2], 1836),
        ];
        for (starting, expected) in cases {
            assert_eq!(spoken_number(starting, PART_ONE_TARGET)?, expected);
        }
        Ok(())
    }

    #[test]
    fn part_two_target_from_description() -> DynamicResult<()> {
        assert_eq!(spoken_number(&[0, 3, 6], PART_TWO_TARGET)?, 175_594);
        Ok(())
    }

    #[test]
    fn starting_number_larger_than_target_is_handled() -> DynamicResult<()> {
        // the table must cover the starting number itself
        assert_eq!(spoken_number(&[5000, 1], 3)?, 0);
        Ok(())
    }

    #[test]
    fn empty_starting_list_is_rejected() {
        assert!(spoken_number(&[], 2020).is_err());
    }
}
