use aoc_framework::parsing::parse_number_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

use crate::checked_product::CheckedProduct;

pub(super) const TITLE: &str = "Day 10: Adapter Array";

#[solution_runner(
    name = TITLE,
    parsed = AdapterBag,
    part_one = Day10,
    part_two = Day10,
    self_test = self_test
)]
impl super::AdventOfCode2020<10> {}

#[derive(Error, Debug)]
enum Day10Error {
    #[error("no adapters in input")]
    EmptyBag,

    /// Adjacent joltages in the sorted chain differ by more than 3; no arrangement can bridge
    /// the gap. Tuple contains the lower joltage at the break.
    #[error("chain breaks after {0} jolts: next adapter is more than 3 jolts away")]
    ChainBroken(u32),

    #[error("product of difference counts overflows")]
    ProductOverflow,
}

/*
Input is a bag of joltage adapters, one output joltage per line. An adapter accepts an input
1 to 3 jolts below its rating. The charging outlet is 0 jolts and the device's built-in
adapter is 3 jolts above the highest adapter in the bag.
*/

/// The adapter joltages sorted ascending; the outlet and device are implied.
struct AdapterBag(Vec<u32>);

impl ParseData for AdapterBag {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut joltages: Vec<u32> = parse_number_lines(input).collect::<Result<_, _>>()?;
        joltages.sort_unstable();
        Ok(Self(joltages))
    }
}

/*
For part 1, chain every adapter from the outlet to the device and answer with the count of
1-jolt differences multiplied by the count of 3-jolt differences.
*/

/// Count the 1-jolt and 3-jolt steps over the full outlet-to-device chain.
fn count_differences(sorted_joltages: &[u32]) -> Result<(u32, u32), Day10Error> {
    if sorted_joltages.is_empty() {
        return Err(Day10Error::EmptyBag);
    }

    let mut ones = 0;
    let mut threes = 1; // the device is always a 3-jolt step above the final adapter
    let mut previous = 0; // the outlet

    for &joltage in sorted_joltages {
        match joltage - previous {
            1 => ones += 1,
            2 => {}
            3 => threes += 1,
            _ => return Err(Day10Error::ChainBroken(previous)),
        }
        previous = joltage;
    }

    Ok((ones, threes))
}

struct Day10;

impl Solution<PartOne> for Day10 {
    type Input = AdapterBag;
    type Output = u32;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let (ones, threes) = count_differences(&input.0)?;
        let product = [ones, threes]
            .into_iter()
            .checked_product()
            .ok_or(Day10Error::ProductOverflow)?;
        Ok(product)
    }
}

/*
For part 2, count every distinct arrangement of adapters that connects the outlet to the
device. Enumerating arrangements directly is hopeless at full size (they number in the
trillions), so count paths with one tabulated pass: the ways to reach an adapter is the sum of
the ways to reach each adapter within 3 jolts below it.
*/

fn count_arrangements(sorted_joltages: &[u32]) -> Result<u64, Day10Error> {
    if sorted_joltages.is_empty() {
        return Err(Day10Error::EmptyBag);
    }

    // ways[i] = paths from the outlet to sorted_joltages[i]
    let mut ways = vec![0u64; sorted_joltages.len()];

    for (index, &joltage) in sorted_joltages.iter().enumerate() {
        let from_outlet = u64::from(joltage <= 3);
        let mut from_previous = 0u64;
        for earlier in (0..index).rev() {
            if joltage - sorted_joltages[earlier] > 3 {
                break;
            }
            from_previous += ways[earlier];
        }

        ways[index] = from_outlet + from_previous;
        if ways[index] == 0 {
            let previous = index.checked_sub(1).map_or(0, |i| sorted_joltages[i]);
            return Err(Day10Error::ChainBroken(previous));
        }
    }

    // the device connects only from the highest adapter
    Ok(ways[sorted_joltages.len() - 1])
}

impl Solution<PartTwo> for Day10 {
    type Input = AdapterBag;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_arrangements(&input.0)?)
    }
}

const SMALL_EXAMPLE_INPUT: &str = r"16
10
15
5
1
11
7
19
6
12
4
";

const LARGE_EXAMPLE_INPUT: &str = r"28
33
18
42
31
14
46
20
48
47
24
23
49
45
19
38
39
11
1
32
25
35
8
17
7
9
4
2
34
10
3
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<AdapterBag, PartOne, Day10>(TITLE, SMALL_EXAMPLE_INPUT, &35)?;
    selftest::check_parsed_example::<AdapterBag, PartOne, Day10>(
        TITLE,
        LARGE_EXAMPLE_INPUT,
        &220,
    )?;
    selftest::check_parsed_example::<AdapterBag, PartTwo, Day10>(TITLE, SMALL_EXAMPLE_INPUT, &8)?;
    selftest::check_parsed_example::<AdapterBag, PartTwo, Day10>(
        TITLE,
        LARGE_EXAMPLE_INPUT,
        &19208,
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
    fn difference_counts_include_outlet_and_device() -> DynamicResult<()> {
        let parsed = AdapterBag::parse(SMALL_EXAMPLE_INPUT)?;
        assert_eq!(count_differences(&parsed.0)?, (7, 5));
        Ok(())
    }

    #[test]
    fn unbridgeable_gap_is_a_distinct_error() {
        let joltages = [1, 2, 7];
        let Err(error) = count_differences(&joltages) else {
            panic!("a 5-jolt gap should break the chain");
        };
        assert_eq!(
            error.to_string(),
            "chain breaks after 2 jolts: next adapter is more than 3 jolts away"
        );
        assert!(count_arrangements(&joltages).is_err());
    }

    #[test]
    fn single_adapter_has_one_arrangement() -> DynamicResult<()> {
        assert_eq!(count_arrangements(&[3])?, 1);
        Ok(())
    }
}
