use std::mem;

use aoc_framework::parsing::parse_lines_with_offset;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

pub(super) const TITLE: &str = "Day 11: Seating System";

#[solution_runner(
    name = TITLE,
    parsed = SeatLayout,
    part_one = Day11,
    part_two = Day11,
    self_test = self_test
)]
impl super::AdventOfCode2020<11> {}

#[derive(Error, Debug)]
enum Day11Error {
    /// Layout squares are floor, an empty seat, or an occupied seat only. Tuple contains the
    /// offending character.
    #[error("layout square not supported: {0:?}")]
    UnsupportedSquare(char),

    #[error("layout rows must all be the same width")]
    RaggedRows,

    /// The automaton was still changing after the generation cap; the layout does not settle.
    #[error("seating never settled within {0} rounds")]
    NeverSettles(u32),
}

/*
Input is a seat layout: floor (`.`), empty seats (`L`), and occupied seats (`#`). People apply
rules to every seat *simultaneously*: an empty seat with no occupied neighbours becomes
occupied, and an occupied seat with too many occupied neighbours empties. Eventually the
layout stops changing.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Square {
    Floor,
    EmptySeat,
    OccupiedSeat,
}

struct SeatLayout {
    /// Row-major squares; every row is `width` long.
    squares: Vec<Square>,
    width: usize,
    height: usize,
}

impl ParseData for SeatLayout {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows: Vec<Vec<Square>> = parse_lines_with_offset(input, 0, |line| {
            line.chars()
                .map(|c| match c {
                    '.' => Ok(Square::Floor),
                    'L' => Ok(Square::EmptySeat),
                    '#' => Ok(Square::OccupiedSeat),
                    other => Err(Day11Error::UnsupportedSquare(other).into()),
                })
                .collect::<DynamicResult<_>>()
        })
        .collect::<Result<_, _>>()?;

        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(Day11Error::RaggedRows.into());
        }

        let height = rows.len();
        let squares = rows.into_iter().flatten().collect();
        Ok(Self {
            squares,
            width,
            height,
        })
    }
}

/// The eight compass directions around a square.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// How a seat decides which other seats matter to it.
#[derive(Debug, Clone, Copy)]
enum NeighbourRule {
    /// The eight immediately adjacent squares; occupied tolerance of 4.
    Adjacent,
    /// The first *seat* visible in each of the eight directions, however far; tolerance of 5.
    LineOfSight,
}

impl NeighbourRule {
    fn tolerance(self) -> usize {
        match self {
            Self::Adjacent => 4,
            Self::LineOfSight => 5,
        }
    }

    /// Count occupied neighbours of one square against a full snapshot.
    fn occupied_neighbours(
        self,
        snapshot: &[Square],
        width: usize,
        height: usize,
        row: usize,
        column: usize,
    ) -> usize {
        DIRECTIONS
            .iter()
            .filter(|&&(row_step, column_step)| {
                let mut row = row as isize + row_step;
                let mut column = column as isize + column_step;

                loop {
                    if row < 0 || column < 0 || row >= height as isize || column >= width as isize
                    {
                        return false;
                    }
                    match snapshot[row as usize * width + column as usize] {
                        Square::OccupiedSeat => return true,
                        Square::EmptySeat => return false,
                        Square::Floor => match self {
                            Self::Adjacent => return false,
                            Self::LineOfSight => {
                                row += row_step;
                                column += column_step;
                            }
                        },
                    }
                }
            })
            .count()
    }
}

/// Upper bound on rounds before declaring the layout non-settling.
const MAX_ROUNDS: u32 = 10_000;

/// Run rounds until a full pass changes nothing, then count occupied seats.
///
/// Each round computes every square's next state from the *previous* full snapshot into a
/// second buffer, then swaps the two; no square ever sees a mid-round update. Convergence is
/// "zero squares changed during the last full pass".
fn settled_occupied_count(layout: &SeatLayout, rule: NeighbourRule) -> Result<usize, Day11Error> {
    let mut current = layout.squares.clone();
    let mut next = layout.squares.clone();

    for _ in 0..MAX_ROUNDS {
        let mut changes = 0usize;

        for row in 0..layout.height {
            for column in 0..layout.width {
                let index = row * layout.width + column;
                let occupied =
                    || rule.occupied_neighbours(&current, layout.width, layout.height, row, column);

                let new_square = match current[index] {
                    Square::EmptySeat if occupied() == 0 => Square::OccupiedSeat,
                    Square::OccupiedSeat if occupied() >= rule.tolerance() => Square::EmptySeat,
                    unchanged => unchanged,
                };

                if new_square != current[index] {
                    changes += 1;
                }
                next[index] = new_square;
            }
        }

        if changes == 0 {
            return Ok(current
                .iter()
                .filter(|&&square| square == Square::OccupiedSeat)
                .count());
        }
        mem::swap(&mut current, &mut next);
    }

    Err(Day11Error::NeverSettles(MAX_ROUNDS))
}

/*
For part 1, neighbours are the eight adjacent squares and an occupied seat empties at 4 or
more occupied neighbours. Answer with the occupied count once settled.
*/

struct Day11;

impl Solution<PartOne> for Day11 {
    type Input = SeatLayout;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(settled_occupied_count(input, NeighbourRule::Adjacent)?)
    }
}

/*
For part 2, people look along each of the eight directions to the first seat they can see, and
only empty at 5 or more visible occupied seats.
*/

impl Solution<PartTwo> for Day11 {
    type Input = SeatLayout;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(settled_occupied_count(input, NeighbourRule::LineOfSight)?)
    }
}

const EXAMPLE_INPUT: &str = r"L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<SeatLayout, PartOne, Day11>(TITLE, EXAMPLE_INPUT, &37)?;
    selftest::check_parsed_example::<SeatLayout, PartTwo, Day11>(TITLE, EXAMPLE_INPUT, &26)?;
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
    fn line_of_sight_sees_past_floor_but_not_seats() -> DynamicResult<()> {
        // the empty seat in the middle row sees eight occupied seats
        let layout = SeatLayout::parse(
            ".......#.\n...#.....\n.#.......\n.........\n..#L....#\n....#....\n.........\n#........\n...#.....\n",
        )?;
        let occupied = NeighbourRule::LineOfSight
            .occupied_neighbours(&layout.squares, layout.width, layout.height, 4, 3);
        assert_eq!(occupied, 8);

        // an empty seat blocks the occupied one behind it
        let layout = SeatLayout::parse(".............\n.L.L.#.#.#.#.\n.............\n")?;
        let occupied = NeighbourRule::LineOfSight
            .occupied_neighbours(&layout.squares, layout.width, layout.height, 1, 1);
        assert_eq!(occupied, 0);
        Ok(())
    }

    #[test]
    fn already_settled_layout_changes_nothing() -> DynamicResult<()> {
        // all floor settles immediately with zero occupied seats
        let layout = SeatLayout::parse("...\n...\n")?;
        assert_eq!(settled_occupied_count(&layout, NeighbourRule::Adjacent)?, 0);
        Ok(())
    }

    #[test]
    fn adjacent_rule_stops_at_first_square() -> DynamicResult<()> {
        // an occupied seat two squares away is not adjacent
        let layout = SeatLayout::parse("#.L\n")?;
        let occupied = NeighbourRule::Adjacent
            .occupied_neighbours(&layout.squares, layout.width, layout.height, 0, 2);
        assert_eq!(occupied, 0);
        Ok(())
    }
}
