use std::collections::HashMap;

use aoc_framework::parsing::{parse_lines_with_offset, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use regex::Regex;
use thiserror::Error;

pub(super) const TITLE: &str = "Day 14: Docking Data";

#[solution_runner(
    name = TITLE,
    parsed = InitializationProgram,
    part_one = Day14,
    part_two = Day14,
    self_test = self_test
)]
impl super::AdventOfCode2020<14> {}

#[derive(Error, Debug)]
enum Day14Error {
    /// Expected `mask = [36 mask bits]` or `mem[address] = value`. Tuple contains the source
    /// string to report in the error message.
    #[error("failed to detect program line: expected a mask or memory write, found {0:?}")]
    NotMaskOrWrite(String),

    /// Masks are exactly 36 characters of `X`, `0`, and `1`. Tuple contains the offending mask
    /// string.
    #[error("invalid bitmask {0:?}: expected 36 characters of X, 0, and 1")]
    InvalidMask(String),

    #[error("memory write before any mask was set")]
    WriteBeforeMask,
}

/*
Input is an initialization program for the ferry's docking computer: `mask = ...` lines set the
current 36-bit bitmask, and `mem[address] = value` lines write through it.
*/

const MASK_BITS: u32 = 36;

/// A 36-bit mask decomposed by character: `1`s, `0`s, and floating `X`s as bitsets.
#[derive(Debug, Clone, Copy, Default)]
struct Bitmask {
    ones: u64,
    zeros: u64,
    floating: u64,
}

impl Bitmask {
    fn parse(mask: &str) -> Result<Self, Day14Error> {
        if mask.len() != MASK_BITS as usize {
            return Err(Day14Error::InvalidMask(mask.to_owned()));
        }

        let mut parsed = Self::default();
        for (offset, c) in mask.chars().enumerate() {
            let bit = 1u64 << (MASK_BITS as usize - 1 - offset);
            match c {
                '1' => parsed.ones |= bit,
                '0' => parsed.zeros |= bit,
                'X' => parsed.floating |= bit,
                _ => return Err(Day14Error::InvalidMask(mask.to_owned())),
            }
        }
        Ok(parsed)
    }

    /// Overwrite `1` and `0` bits of a value; floating bits pass through.
    fn apply_to_value(self, value: u64) -> u64 {
        (value | self.ones) & !self.zeros
    }

    /// Every address the mask decodes to: `1` bits force 1, `0` bits pass through, and each
    /// floating bit takes both values.
    fn decoded_addresses(self, address: u64) -> impl Iterator<Item = u64> {
        let base = (address | self.ones) & !self.floating;
        let floating_bits: Vec<u64> = (0..MASK_BITS)
            .map(|offset| 1u64 << offset)
            .filter(|bit| self.floating & bit != 0)
            .collect();

        (0..1u64 << floating_bits.len()).map(move |combination| {
            floating_bits
                .iter()
                .enumerate()
                .fold(base, |address, (position, bit)| {
                    if combination & (1 << position) != 0 {
                        address | bit
                    } else {
                        address
                    }
                })
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum ProgramLine {
    SetMask(Bitmask),
    Write { address: u64, value: u64 },
}

struct ProgramLineParser {
    write_re: Regex,
}

impl ProgramLineParser {
    const WRITE_PATTERN: &str = r"^mem\[(\d+)\] = (\d+)$";

    fn new() -> Self {
        let write_re = Regex::new(Self::WRITE_PATTERN).expect("pattern should be valid");
        Self { write_re }
    }

    fn parse(&self, line: &str) -> DynamicResult<ProgramLine> {
        if let Some(mask) = line.strip_prefix("mask = ") {
            return Ok(ProgramLine::SetMask(Bitmask::parse(mask)?));
        }
        let captures = self
            .write_re
            .captures(line)
            .ok_or_else(|| Day14Error::NotMaskOrWrite(line.to_owned()))?;

        Ok(ProgramLine::Write {
            address: parse_with_context(&captures[1])?,
            value: parse_with_context(&captures[2])?,
        })
    }
}

struct InitializationProgram(Vec<ProgramLine>);

impl ParseData for InitializationProgram {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = ProgramLineParser::new();
        let lines = parse_lines_with_offset(input, 0, |line| parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(lines))
    }
}

/*
For part 1, the mask applies to *values*: `1` and `0` overwrite the corresponding value bit, `X`
leaves it unchanged. Answer with the sum of all values left in memory.
*/

fn run_value_masking(program: &[ProgramLine]) -> Result<u64, Day14Error> {
    let mut memory: HashMap<u64, u64> = HashMap::new();
    let mut mask: Option<Bitmask> = None;

    for &line in program {
        match line {
            ProgramLine::SetMask(new_mask) => mask = Some(new_mask),
            ProgramLine::Write { address, value } => {
                let mask = mask.ok_or(Day14Error::WriteBeforeMask)?;
                memory.insert(address, mask.apply_to_value(value));
            }
        }
    }

    Ok(memory.values().sum())
}

struct Day14;

impl Solution<PartOne> for Day14 {
    type Input = InitializationProgram;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(run_value_masking(&input.0)?)
    }
}

/*
For part 2, the computer is a version 2 decoder chip: the mask applies to *addresses*, and each
`X` is a floating bit that decodes to every combination, so one write lands in 2^f addresses.
*/

fn run_address_decoding(program: &[ProgramLine]) -> Result<u64, Day14Error> {
    let mut memory: HashMap<u64, u64> = HashMap::new();
    let mut mask: Option<Bitmask> = None;

    for &line in program {
        match line {
            ProgramLine::SetMask(new_mask) => mask = Some(new_mask),
            ProgramLine::Write { address, value } => {
                let mask = mask.ok_or(Day14Error::WriteBeforeMask)?;
                for decoded in mask.decoded_addresses(address) {
                    memory.insert(decoded, value);
                }
            }
        }
    }

    Ok(memory.values().sum())
}

impl Solution<PartTwo> for Day14 {
    type Input = InitializationProgram;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(run_address_decoding(&input.0)?)
    }
}

const EXAMPLE_INPUT: &str = r"mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0
";

const DECODER_EXAMPLE_INPUT: &str = r"mask = 000000000000000000000000000000X1001X
mem[42] = 100
mask = 00000000000000000000000000000000X0XX
mem[26] = 1
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<InitializationProgram, PartOne, Day14>(
        TITLE,
        EXAMPLE_INPUT,
        &165,
    )?;
    selftest::check_parsed_example::<InitializationProgram, PartTwo, Day14>(
        TITLE,
        DECODER_EXAMPLE_INPUT,
        &208,
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
    fn value_masking_from_description() -> DynamicResult<()> {
        let mask = Bitmask::parse("XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X")?;
        assert_eq!(mask.apply_to_value(11), 73);
        assert_eq!(mask.apply_to_value(101), 101);
        assert_eq!(mask.apply_to_value(0), 64);
        Ok(())
    }

    #[test]
    fn floating_bits_decode_to_every_combination() -> DynamicResult<()> {
        let mask = Bitmask::parse("000000000000000000000000000000X1001X")?;
        let mut addresses: Vec<u64> = mask.decoded_addresses(42).collect();
        addresses.sort_unstable();
        assert_eq!(addresses, [26, 27, 58, 59]);
        Ok(())
    }

    #[test]
    fn mask_of_wrong_length_is_rejected() {
        assert!(Bitmask::parse("X10").is_err());
        assert!(Bitmask::parse(&"2".repeat(36)).is_err());
    }

    #[test]
    fn write_before_mask_is_a_distinct_error() -> DynamicResult<()> {
        let program = InitializationProgram::parse("mem[0] = 1\n")?;
        let Err(error) = run_value_masking(&program.0) else {
            panic!("write without a mask should fail");
        };
        assert_eq!(error.to_string(), "memory write before any mask was set");
        Ok(())
    }
}
