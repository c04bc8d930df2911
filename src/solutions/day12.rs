use aoc_framework::parsing::{parse_lines_with_offset, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

pub(super) const TITLE: &str = "Day 12: Rain Risk";

#[solution_runner(
    name = TITLE,
    parsed = NavigationPlan,
    part_one = Day12,
    part_two = Day12,
    self_test = self_test
)]
impl super::AdventOfCode2020<12> {}

#[derive(Error, Debug)]
enum Day12Error {
    /// Expected a single action letter followed by a number. Tuple contains the source string
    /// to report in the error message.
    #[error("failed to detect navigation instruction: expected \"[NSEWLRF][value]\", found {0:?}")]
    NotInstruction(String),

    /// Turns are in whole quarter-circles only. Tuple contains the offending angle.
    #[error("turn of {0} degrees is not a multiple of 90")]
    NotQuarterTurn(i32),
}

/*
Input is the ferry's navigation computer output: one instruction per line, an action letter
(`N`/`S`/`E`/`W` to move, `L`/`R` to turn in degrees, `F` to move forward) and a value.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    North,
    South,
    East,
    West,
    TurnLeft,
    TurnRight,
    Forward,
}

#[derive(Debug, Clone, Copy)]
struct NavInstruction {
    action: Action,
    value: i32,
}

fn parse_instruction(line: &str) -> DynamicResult<NavInstruction> {
    let mut chars = line.chars();
    let action = match chars.next() {
        Some('N') => Action::North,
        Some('S') => Action::South,
        Some('E') => Action::East,
        Some('W') => Action::West,
        Some('L') => Action::TurnLeft,
        Some('R') => Action::TurnRight,
        Some('F') => Action::Forward,
        _ => return Err(Day12Error::NotInstruction(line.to_owned()).into()),
    };
    let value: i32 = parse_with_context(chars.as_str())?;

    if matches!(action, Action::TurnLeft | Action::TurnRight) && value.rem_euclid(90) != 0 {
        return Err(Day12Error::NotQuarterTurn(value).into());
    }

    Ok(NavInstruction { action, value })
}

struct NavigationPlan(Vec<NavInstruction>);

impl ParseData for NavigationPlan {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let instructions =
            parse_lines_with_offset(input, 0, parse_instruction).collect::<Result<_, _>>()?;
        Ok(Self(instructions))
    }
}

/// An east/north vector: positions and headings share the same arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Vector {
    east: i32,
    north: i32,
}

impl Vector {
    /// Rotate a quarter-circle counterclockwise.
    fn turned_left(self) -> Self {
        Self {
            east: -self.north,
            north: self.east,
        }
    }

    /// Rotate a quarter-circle clockwise.
    fn turned_right(self) -> Self {
        Self {
            east: self.north,
            north: -self.east,
        }
    }

    fn advanced(self, direction: Self, distance: i32) -> Self {
        Self {
            east: self.east + direction.east * distance,
            north: self.north + direction.north * distance,
        }
    }

    fn manhattan_distance(self) -> u32 {
        self.east.unsigned_abs() + self.north.unsigned_abs()
    }
}

const NORTH: Vector = Vector { east: 0, north: 1 };
const SOUTH: Vector = Vector { east: 0, north: -1 };
const EAST: Vector = Vector { east: 1, north: 0 };
const WEST: Vector = Vector { east: -1, north: 0 };

fn apply_quarter_turns(vector: Vector, action: Action, degrees: i32) -> Vector {
    let turns = degrees.rem_euclid(360) / 90;
    (0..turns).fold(vector, |vector, _| match action {
        Action::TurnLeft => vector.turned_left(),
        _ => vector.turned_right(),
    })
}

/*
For part 1, `N`/`S`/`E`/`W` move the ship itself, turns rotate the ship's heading (which starts
facing east), and `F` moves along the heading. Answer with the Manhattan distance from the
start.
*/

fn sail_by_heading(plan: &[NavInstruction]) -> u32 {
    let mut position = Vector { east: 0, north: 0 };
    let mut heading = EAST;

    for instruction in plan {
        match instruction.action {
            Action::North => position = position.advanced(NORTH, instruction.value),
            Action::South => position = position.advanced(SOUTH, instruction.value),
            Action::East => position = position.advanced(EAST, instruction.value),
            Action::West => position = position.advanced(WEST, instruction.value),
            Action::TurnLeft | Action::TurnRight => {
                heading = apply_quarter_turns(heading, instruction.action, instruction.value);
            }
            Action::Forward => position = position.advanced(heading, instruction.value),
        }
    }

    position.manhattan_distance()
}

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = NavigationPlan;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sail_by_heading(&input.0))
    }
}

/*
For part 2, the instructions actually steer a waypoint, which starts 10 east and 1 north of the
ship and always moves with it: `N`/`S`/`E`/`W` move the waypoint, turns rotate the waypoint
around the ship, and `F` moves the ship toward the waypoint that many times.
*/

fn sail_by_waypoint(plan: &[NavInstruction]) -> u32 {
    let mut position = Vector { east: 0, north: 0 };
    let mut waypoint = Vector { east: 10, north: 1 };

    for instruction in plan {
        match instruction.action {
            Action::North => waypoint = waypoint.advanced(NORTH, instruction.value),
            Action::South => waypoint = waypoint.advanced(SOUTH, instruction.value),
            Action::East => waypoint = waypoint.advanced(EAST, instruction.value),
            Action::West => waypoint = waypoint.advanced(WEST, instruction.value),
            Action::TurnLeft | Action::TurnRight => {
                waypoint = apply_quarter_turns(waypoint, instruction.action, instruction.value);
            }
            Action::Forward => position = position.advanced(waypoint, instruction.value),
        }
    }

    position.manhattan_distance()
}

impl Solution<PartTwo> for Day12 {
    type Input = NavigationPlan;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(sail_by_waypoint(&input.0))
    }
}

const EXAMPLE_INPUT: &str = r"F10
N3
F7
R90
F11
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<NavigationPlan, PartOne, Day12>(TITLE, EXAMPLE_INPUT, &25)?;
    selftest::check_parsed_example::<NavigationPlan, PartTwo, Day12>(TITLE, EXAMPLE_INPUT, &286)?;
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
    fn quarter_turns_cycle_the_compass() {
        assert_eq!(EAST.turned_left(), NORTH);
        assert_eq!(NORTH.turned_left(), WEST);
        assert_eq!(EAST.turned_right(), SOUTH);

        // a 270 right turn is a single left turn
        let turned = apply_quarter_turns(EAST, Action::TurnRight, 270);
        assert_eq!(turned, NORTH);
    }

    #[test]
    fn waypoint_rotation_from_description() {
        // R90 takes the waypoint 10 east 4 north to 4 east 10 south
        let waypoint = Vector { east: 10, north: 4 };
        let rotated = apply_quarter_turns(waypoint, Action::TurnRight, 90);
        assert_eq!(rotated, Vector { east: 4, north: -10 });
    }

    #[test]
    fn diagonal_turn_is_rejected() {
        assert!(parse_instruction("L45").is_err());
        assert!(parse_instruction("R90").is_ok());
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(parse_instruction("Q10").is_err());
    }
}
