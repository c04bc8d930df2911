use aoc_framework::parsing::parse_lines_with_offset;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

pub(super) const TITLE: &str = "Day 5: Binary Boarding";

#[solution_runner(
    name = TITLE,
    parsed = BoardingPasses,
    part_one = Day05,
    part_two = Day05,
    self_test = self_test
)]
impl super::AdventOfCode2020<5> {}

#[derive(Error, Debug)]
enum Day05Error {
    /// A boarding pass is seven row characters then three column characters. Tuple contains the
    /// source string to report in the error message.
    #[error("boarding pass must be 10 characters of FB then LR, found {0:?}")]
    NotBoardingPass(String),

    #[error("no boarding passes in input")]
    EmptyBatch,

    /// Every seat ID between the observed minimum and maximum was present; the missing-seat
    /// search has nothing to find.
    #[error("no gap in the scanned seat IDs")]
    NoMissingSeat,
}

/*
Input is a list of boarding passes using binary space partitioning: seven `F`/`B` characters
narrow the row (0 to 127), then three `L`/`R` characters narrow the column (0 to 7). Reading
`B` and `R` as one-bits gives the seat directly, and the seat ID is row * 8 + column, which is
the same 10-bit number.
*/

type SeatId = u16;

fn parse_seat_id(line: &str) -> Result<SeatId, Day05Error> {
    if line.len() != 10 {
        return Err(Day05Error::NotBoardingPass(line.to_owned()));
    }

    let mut seat_id = 0;
    for (index, c) in line.chars().enumerate() {
        let bit = match (c, index < 7) {
            ('F', true) | ('L', false) => 0,
            ('B', true) | ('R', false) => 1,
            _ => return Err(Day05Error::NotBoardingPass(line.to_owned())),
        };
        seat_id = (seat_id << 1) | bit;
    }
    Ok(seat_id)
}

struct BoardingPasses(Vec<SeatId>);

impl ParseData for BoardingPasses {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let seat_ids = parse_lines_with_offset(input, 0, |line| Ok(parse_seat_id(line)?))
            .collect::<Result<_, _>>()?;
        Ok(Self(seat_ids))
    }
}

/*
For part 1, answer with the highest seat ID on any boarding pass.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = BoardingPasses;
    type Output = SeatId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let max = input
            .0
            .iter()
            .copied()
            .max()
            .ok_or(Day05Error::EmptyBatch)?;
        Ok(max)
    }
}

/*
For part 2, your seat is the one missing ID whose neighbours ID-1 and ID+1 both appear (seats
at the very front and back of the plane don't exist and are also absent from the list).
*/

fn find_missing_seat(seat_ids: &[SeatId]) -> Result<SeatId, Day05Error> {
    let mut sorted = seat_ids.to_vec();
    sorted.sort_unstable();

    for pair in sorted.windows(2) {
        if pair[1] - pair[0] == 2 {
            return Ok(pair[0] + 1);
        }
    }

    if sorted.is_empty() {
        Err(Day05Error::EmptyBatch)
    } else {
        Err(Day05Error::NoMissingSeat)
    }
}

impl Solution<PartTwo> for Day05 {
    type Input = BoardingPasses;
    type Output = SeatId;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(find_missing_seat(&input.0)?)
    }
}

const EXAMPLE_INPUT: &str = r"FBFBBFFRLR
BFFFBBFRRR
FFFBBBFRRR
BBFFBBFRLL
";

/// Replay the worked examples from the puzzle description.
///
/// Part 2 has no worked example; its gap search is covered by unit tests instead.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<BoardingPasses, PartOne, Day05>(TITLE, EXAMPLE_INPUT, &820)?;
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
    fn example_passes_decode_to_described_seat_ids() -> DynamicResult<()> {
        assert_eq!(parse_seat_id("FBFBBFFRLR")?, 357);
        assert_eq!(parse_seat_id("BFFFBBFRRR")?, 567);
        assert_eq!(parse_seat_id("FFFBBBFRRR")?, 119);
        assert_eq!(parse_seat_id("BBFFBBFRLL")?, 820);
        Ok(())
    }

    #[test]
    fn missing_seat_is_the_single_gap() -> DynamicResult<()> {
        let seat_ids = [120, 118, 117, 121, 116];
        assert_eq!(find_missing_seat(&seat_ids)?, 119);
        Ok(())
    }

    #[test]
    fn contiguous_seats_report_no_gap() {
        let Err(error) = find_missing_seat(&[5, 6, 7]) else {
            panic!("contiguous IDs should have no missing seat");
        };
        assert_eq!(error.to_string(), "no gap in the scanned seat IDs");
    }

    #[test]
    fn malformed_pass_fails_parsing() {
        assert!(parse_seat_id("FBFBBFFRL").is_err());
        assert!(parse_seat_id("FBFBBFFRLX").is_err());
    }
}
