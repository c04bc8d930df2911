use aoc_framework::parsing::{parse_lines_with_offset, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

pub(super) const TITLE: &str = "Day 8: Handheld Halting";

#[solution_runner(
    name = TITLE,
    parsed = Program,
    part_one = Day08,
    part_two = Day08,
    self_test = self_test
)]
impl super::AdventOfCode2020<8> {}

#[derive(Error, Debug)]
enum Day08Error {
    /// Expected `acc|jmp|nop [signed argument]`. Tuple contains the source string to report in
    /// the error message.
    #[error("failed to detect instruction: expected \"[operation] [argument]\", found {0:?}")]
    NotInstruction(String),

    /// A jump left the program, other than stepping exactly one past the final instruction.
    /// Tuple contains the offending program counter value.
    #[error("jump to offset {0} is outside the program")]
    JumpOutOfProgram(i64),

    /// Part 1 expects the corrupted program to loop; termination means the input already runs
    /// to completion.
    #[error("program terminated without revisiting an instruction")]
    NoLoopDetected,

    /// Every candidate jmp/nop flip still looped.
    #[error("no single jmp/nop flip makes the program terminate")]
    NoRepairFound,
}

/*
Input is a boot-code program: one instruction per line, an operation (`acc`, `jmp`, `nop`) and
a signed argument. `acc` adjusts the accumulator and advances, `jmp` is a relative jump, `nop`
does nothing and advances.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Acc,
    Jmp,
    Nop,
}

#[derive(Debug, Clone, Copy)]
struct Instruction {
    operation: Operation,
    argument: i32,
}

fn parse_instruction(line: &str) -> DynamicResult<Instruction> {
    let (operation_str, argument_str) = line
        .split_once(' ')
        .ok_or_else(|| Day08Error::NotInstruction(line.to_owned()))?;

    let operation = match operation_str {
        "acc" => Operation::Acc,
        "jmp" => Operation::Jmp,
        "nop" => Operation::Nop,
        _ => return Err(Day08Error::NotInstruction(line.to_owned()).into()),
    };
    let argument = parse_with_context(argument_str)?;

    Ok(Instruction {
        operation,
        argument,
    })
}

struct Program(Vec<Instruction>);

impl ParseData for Program {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let instructions =
            parse_lines_with_offset(input, 0, parse_instruction).collect::<Result<_, _>>()?;
        Ok(Self(instructions))
    }
}

/// The terminal state of one execution.
///
/// A run is otherwise in flight; it ends either by revisiting an instruction offset (the
/// accumulator is captured *before* re-executing it) or by the program counter stepping one
/// past the final instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    LoopDetected(i64),
    Terminated(i64),
}

/// Execute from the top, tracking visited offsets to catch infinite loops.
fn execute(instructions: &[Instruction]) -> Result<Halt, Day08Error> {
    let mut visited = vec![false; instructions.len()];
    let mut accumulator: i64 = 0;
    let mut counter: i64 = 0;

    loop {
        if counter == instructions.len() as i64 {
            return Ok(Halt::Terminated(accumulator));
        }
        let index =
            usize::try_from(counter).map_err(|_| Day08Error::JumpOutOfProgram(counter))?;
        let instruction = *instructions
            .get(index)
            .ok_or(Day08Error::JumpOutOfProgram(counter))?;

        if visited[index] {
            return Ok(Halt::LoopDetected(accumulator));
        }
        visited[index] = true;

        match instruction.operation {
            Operation::Acc => {
                accumulator += i64::from(instruction.argument);
                counter += 1;
            }
            Operation::Jmp => counter += i64::from(instruction.argument),
            Operation::Nop => counter += 1,
        }
    }
}

/*
For part 1, run the program as-is and answer with the accumulator value immediately before any
instruction runs a second time.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = Program;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        match execute(&input.0)? {
            Halt::LoopDetected(accumulator) => Ok(accumulator),
            Halt::Terminated(_) => Err(Day08Error::NoLoopDetected.into()),
        }
    }
}

/*
For part 2, exactly one jmp was meant to be a nop or vice versa. Flip one candidate at a time,
re-run the whole program, and roll the flip back before trying the next; answer with the
accumulator of the run that terminates.
*/

fn flipped(operation: Operation) -> Option<Operation> {
    match operation {
        Operation::Jmp => Some(Operation::Nop),
        Operation::Nop => Some(Operation::Jmp),
        Operation::Acc => None,
    }
}

fn repair_and_run(instructions: &[Instruction]) -> Result<i64, Day08Error> {
    let mut scratch = instructions.to_vec();

    for index in 0..scratch.len() {
        let original = scratch[index].operation;
        let Some(replacement) = flipped(original) else {
            continue;
        };

        scratch[index].operation = replacement;
        let outcome = execute(&scratch)?;
        scratch[index].operation = original;

        if let Halt::Terminated(accumulator) = outcome {
            return Ok(accumulator);
        }
    }

    Err(Day08Error::NoRepairFound)
}

impl Solution<PartTwo> for Day08 {
    type Input = Program;
    type Output = i64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(repair_and_run(&input.0)?)
    }
}

const EXAMPLE_INPUT: &str = r"nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<Program, PartOne, Day08>(TITLE, EXAMPLE_INPUT, &5)?;
    selftest::check_parsed_example::<Program, PartTwo, Day08>(TITLE, EXAMPLE_INPUT, &8)?;
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
    fn example_loops_with_accumulator_five() -> DynamicResult<()> {
        let program = Program::parse(EXAMPLE_INPUT)?;
        assert_eq!(execute(&program.0)?, Halt::LoopDetected(5));
        Ok(())
    }

    #[test]
    fn terminating_program_reports_final_accumulator() -> DynamicResult<()> {
        let program = Program::parse("acc +3\nnop +0\nacc -1\n")?;
        assert_eq!(execute(&program.0)?, Halt::Terminated(2));
        Ok(())
    }

    #[test]
    fn part_one_rejects_a_program_that_terminates() -> DynamicResult<()> {
        let program = Program::parse("nop +0\n")?;
        let Err(error) = <Day08 as Solution<PartOne>>::solve(&program) else {
            panic!("terminating program should not satisfy part 1");
        };
        assert_eq!(
            error.to_string(),
            "program terminated without revisiting an instruction"
        );
        Ok(())
    }

    #[test]
    fn unrepairable_program_is_a_distinct_error() -> DynamicResult<()> {
        // both instructions loop whether flipped or not
        let program = Program::parse("jmp +0\njmp -1\n")?;
        let result = repair_and_run(&program.0);
        let Err(error) = result else {
            panic!("program with no terminating flip should fail");
        };
        assert_eq!(
            error.to_string(),
            "no single jmp/nop flip makes the program terminate"
        );
        Ok(())
    }

    #[test]
    fn jump_before_program_start_is_rejected() -> DynamicResult<()> {
        let program = Program::parse("jmp -5\n")?;
        assert!(execute(&program.0).is_err());
        Ok(())
    }
}
