use aoc_framework::parsing::parse_lines_with_offset;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

use crate::checked_product::CheckedProduct;

pub(super) const TITLE: &str = "Day 3: Toboggan Trajectory";

#[solution_runner(
    name = TITLE,
    parsed = TreeMap,
    part_one = Day03,
    part_two = Day03,
    self_test = self_test
)]
impl super::AdventOfCode2020<3> {}

#[derive(Error, Debug)]
enum Day03Error {
    /// Map squares are open ground or a tree only. Tuple contains the offending character.
    #[error("map square not supported: {0:?}")]
    UnsupportedSquare(char),

    #[error("map rows must all be the same width")]
    RaggedRows,

    #[error("product of slope tree counts overflows")]
    ProductOverflow,
}

/*
Input is a map of open squares (`.`) and trees (`#`). The pattern repeats infinitely to the
right, so horizontal positions wrap around the row width.
*/

const TREE: char = '#';
const OPEN: char = '.';

struct TreeMap {
    /// `true` marks a tree. Every row has the same width.
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl TreeMap {
    fn is_tree(&self, row: usize, column: usize) -> bool {
        // the map repeats to the right
        self.rows[row][column % self.width]
    }
}

impl ParseData for TreeMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows: Vec<Vec<bool>> = parse_lines_with_offset(input, 0, |line| {
            line.chars()
                .map(|c| match c {
                    TREE => Ok(true),
                    OPEN => Ok(false),
                    other => Err(Day03Error::UnsupportedSquare(other).into()),
                })
                .collect::<DynamicResult<_>>()
        })
        .collect::<Result<_, _>>()?;

        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(Day03Error::RaggedRows.into());
        }

        Ok(Self { rows, width })
    }
}

/*
For part 1, start in the top-left corner and repeatedly step right 3 and down 1 until past the
bottom of the map; count the trees encountered.
*/

#[derive(Debug, Clone, Copy)]
struct Slope {
    right: usize,
    down: usize,
}

fn count_trees_on_slope(map: &TreeMap, slope: Slope) -> u32 {
    let mut tree_count = 0;
    let mut column = 0;

    // the starting square is open ground, so counting begins after the first step
    let mut row = slope.down;
    while row < map.rows.len() {
        column += slope.right;
        if map.is_tree(row, column) {
            tree_count += 1;
        }
        row += slope.down;
    }

    tree_count
}

struct Day03;

impl Solution<PartOne> for Day03 {
    type Input = TreeMap;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        const SLOPE: Slope = Slope { right: 3, down: 1 };
        Ok(count_trees_on_slope(input, SLOPE))
    }
}

/*
For part 2, check slopes (1,1), (3,1), (5,1), (7,1), and (1,2), and answer with the product of
the tree counts.
*/

impl Solution<PartTwo> for Day03 {
    type Input = TreeMap;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        const SLOPES: [Slope; 5] = [
            Slope { right: 1, down: 1 },
            Slope { right: 3, down: 1 },
            Slope { right: 5, down: 1 },
            Slope { right: 7, down: 1 },
            Slope { right: 1, down: 2 },
        ];

        let product = SLOPES
            .into_iter()
            .map(|slope| u64::from(count_trees_on_slope(input, slope)))
            .checked_product()
            .ok_or(Day03Error::ProductOverflow)?;
        Ok(product)
    }
}

const EXAMPLE_INPUT: &str = r"..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<TreeMap, PartOne, Day03>(TITLE, EXAMPLE_INPUT, &7)?;
    selftest::check_parsed_example::<TreeMap, PartTwo, Day03>(TITLE, EXAMPLE_INPUT, &336)?;
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
    fn each_example_slope_counts_trees() -> DynamicResult<()> {
        let map = TreeMap::parse(EXAMPLE_INPUT)?;
        let counts: Vec<u32> = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)]
            .into_iter()
            .map(|(right, down)| count_trees_on_slope(&map, Slope { right, down }))
            .collect();
        assert_eq!(counts, vec![2, 7, 3, 4, 2]);
        Ok(())
    }

    #[test]
    fn map_wraps_to_the_right() -> DynamicResult<()> {
        let map = TreeMap::parse("..#\n..#\n")?;
        assert!(map.is_tree(0, 2));
        assert!(map.is_tree(0, 5));
        assert!(!map.is_tree(1, 3));
        Ok(())
    }

    #[test]
    fn unsupported_square_fails_parsing() {
        assert!(TreeMap::parse("..X\n").is_err());
    }
}
