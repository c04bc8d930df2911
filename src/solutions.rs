//! Solutions implemented for Advent of Code 2020.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day, and [`registry`]
//! for an ordered listing of the implemented days.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation, with a `TITLE` constant.
//! 2. Have the submodule implement [`AdventOfCode2020<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add the day to [`registry`] and a match case in [`run_day`], below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! // matching for day 1
//! 1 => AdventOfCode2020::<1>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicError;
use aoc_framework::runner::{OutputHandler, SolutionRunner};

// --- IMPORT SUBMODULES HERE ---
mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day.
///
/// Use [`#[solution_runner]`][aoc_framework::runner::solution_runner] for convenience:
///
/// ```ignore
/// // in a submodule "day01.rs"
/// use aoc_framework::runner::solution_runner;
/// use aoc_framework::{PartOne, Solution};
///
/// pub(super) const TITLE: &str = "Day 1: Report Repair";
///
/// struct Day01;
/// impl Solution<PartOne> for Day01 {
///     /* ... */
/// }
///
/// #[solution_runner(name = TITLE, part_one = Day01)]
/// impl super::AdventOfCode2020<1> {}
/// ```
struct AdventOfCode2020<const DAY: u8>;

/// A menu entry for an implemented day.
#[derive(Debug, Clone, Copy)]
pub struct DayEntry {
    pub day: u8,
    pub title: &'static str,
}

/// The ordered registry of implemented days, built fresh per call.
///
/// No global state is involved; callers own the returned listing.
pub fn registry() -> Vec<DayEntry> {
    [
        (1, day01::TITLE),
        (2, day02::TITLE),
        (3, day03::TITLE),
        (4, day04::TITLE),
        (5, day05::TITLE),
        (6, day06::TITLE),
        (7, day07::TITLE),
        (8, day08::TITLE),
        (9, day09::TITLE),
        (10, day10::TITLE),
        (11, day11::TITLE),
        (12, day12::TITLE),
        (13, day13::TITLE),
        (14, day14::TITLE),
        (15, day15::TITLE),
    ]
    .into_iter()
    .map(|(day, title)| DayEntry { day, title })
    .collect()
}

/// The outcome of dispatching a day.
///
/// Callers branch on the variant: an unimplemented day is an expected condition to report and
/// move on from, while a failure carries the underlying error for diagnosis. The two are never
/// conflated.
#[derive(Debug)]
pub enum RunOutcome {
    /// The day ran and its answers were output through the handler.
    Solved,
    /// No solution exists for the requested day.
    Unimplemented,
    /// The day's solution started but returned an error (bad input, a solution-not-found
    /// condition, or a self-test regression).
    Failed(DynamicError),
}

/// Run a solution based on the day.
pub fn run_day(day: u8, input: &str, handler: &mut dyn OutputHandler, timed: bool) -> RunOutcome {
    let result = match day {
        // --- MATCH SOLUTIONS HERE ---
        1 => AdventOfCode2020::<1>::run(input, handler, timed),
        2 => AdventOfCode2020::<2>::run(input, handler, timed),
        3 => AdventOfCode2020::<3>::run(input, handler, timed),
        4 => AdventOfCode2020::<4>::run(input, handler, timed),
        5 => AdventOfCode2020::<5>::run(input, handler, timed),
        6 => AdventOfCode2020::<6>::run(input, handler, timed),
        7 => AdventOfCode2020::<7>::run(input, handler, timed),
        8 => AdventOfCode2020::<8>::run(input, handler, timed),
        9 => AdventOfCode2020::<9>::run(input, handler, timed),
        10 => AdventOfCode2020::<10>::run(input, handler, timed),
        11 => AdventOfCode2020::<11>::run(input, handler, timed),
        12 => AdventOfCode2020::<12>::run(input, handler, timed),
        13 => AdventOfCode2020::<13>::run(input, handler, timed),
        14 => AdventOfCode2020::<14>::run(input, handler, timed),
        15 => AdventOfCode2020::<15>::run(input, handler, timed),
        _ => return RunOutcome::Unimplemented,
    };
    match result {
        Ok(()) => RunOutcome::Solved,
        Err(error) => RunOutcome::Failed(error),
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::time::Duration;

    use aoc_framework::PartKind;

    use super::*;

    /// Collects part outputs as strings, for asserting on what a run produced.
    struct CollectingHandler {
        outputs: Vec<String>,
    }

    impl CollectingHandler {
        fn new() -> Self {
            Self {
                outputs: Vec::new(),
            }
        }
    }

    impl OutputHandler for CollectingHandler {
        fn solution_name(&mut self, _name: &str) {}
        fn parse_start(&mut self) {}
        fn parse_end(&mut self, _duration_opt: Option<Duration>) {}
        fn part_start(&mut self, _part: PartKind) {}

        fn part_output(
            &mut self,
            _part: PartKind,
            output: &dyn Display,
            _duration_opt: Option<Duration>,
        ) {
            self.outputs.push(output.to_string());
        }
    }

    #[test]
    fn registry_is_ordered_and_complete() {
        let entries = registry();
        let days: Vec<u8> = entries.iter().map(|entry| entry.day).collect();
        assert_eq!(days, (1..=15).collect::<Vec<u8>>());
        assert_eq!(entries[0].title, "Day 1: Report Repair");
    }

    #[test]
    fn unknown_day_is_unimplemented_not_failed() {
        let mut handler = CollectingHandler::new();
        let outcome = run_day(23, "", &mut handler, false);
        assert!(matches!(outcome, RunOutcome::Unimplemented));
        assert!(handler.outputs.is_empty());
    }

    #[test]
    fn rerunning_a_day_gives_identical_answers() {
        let input = "1721\n979\n366\n299\n675\n1456\n";

        let mut first = CollectingHandler::new();
        let first_outcome = run_day(1, input, &mut first, false);
        assert!(matches!(first_outcome, RunOutcome::Solved));

        let mut second = CollectingHandler::new();
        let second_outcome = run_day(1, input, &mut second, false);
        assert!(matches!(second_outcome, RunOutcome::Solved));

        assert_eq!(first.outputs, second.outputs);
        assert_eq!(first.outputs, vec!["514579", "241861950"]);
    }
}
