use std::collections::HashSet;

use aoc_framework::parsing::blank_line_groups;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use checked_sum::CheckedSum;

pub(super) const TITLE: &str = "Day 6: Custom Customs";

#[solution_runner(
    name = TITLE,
    parsed = DeclarationForms,
    part_one = Day06,
    part_two = Day06,
    self_test = self_test
)]
impl super::AdventOfCode2020<6> {}

/*
Input is customs declaration answers: one line of answered yes-questions (letters a-z) per
person, with groups of people separated by blank lines.
*/

/// One group's forms, one set of answered questions per person.
struct GroupAnswers(Vec<HashSet<char>>);

impl GroupAnswers {
    /// Questions anyone in the group answered yes to.
    fn anyone_yes_count(&self) -> usize {
        self.0
            .iter()
            .flatten()
            .copied()
            .collect::<HashSet<char>>()
            .len()
    }

    /// Questions everyone in the group answered yes to.
    fn everyone_yes_count(&self) -> usize {
        let Some((first, rest)) = self.0.split_first() else {
            return 0;
        };
        first
            .iter()
            .filter(|question| rest.iter().all(|person| person.contains(*question)))
            .count()
    }
}

struct DeclarationForms(Vec<GroupAnswers>);

impl ParseData for DeclarationForms {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let groups = blank_line_groups(input)
            .map(|group| {
                GroupAnswers(
                    group
                        .lines()
                        .map(|person| person.chars().collect())
                        .collect(),
                )
            })
            .collect();
        Ok(Self(groups))
    }
}

/*
For part 1, count per group the questions *anyone* answered yes to, and sum the counts.
*/

struct Day06;

impl Solution<PartOne> for Day06 {
    type Input = DeclarationForms;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .0
            .iter()
            .map(GroupAnswers::anyone_yes_count)
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(sum)
    }
}

/*
For part 2, the rule changes to the questions *everyone* in the group answered yes to; sum the
counts again.
*/

impl Solution<PartTwo> for Day06 {
    type Input = DeclarationForms;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let sum = input
            .0
            .iter()
            .map(GroupAnswers::everyone_yes_count)
            .checked_sum()
            .expect("should not have integer overflow during summation");
        Ok(sum)
    }
}

const EXAMPLE_INPUT: &str = r"abc

a
b
c

ab
ac

a
a
a
a

b
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<DeclarationForms, PartOne, Day06>(TITLE, EXAMPLE_INPUT, &11)?;
    selftest::check_parsed_example::<DeclarationForms, PartTwo, Day06>(TITLE, EXAMPLE_INPUT, &6)?;
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
    fn per_group_counts_match_description() -> DynamicResult<()> {
        let parsed = DeclarationForms::parse(EXAMPLE_INPUT)?;

        let anyone: Vec<usize> = parsed.0.iter().map(GroupAnswers::anyone_yes_count).collect();
        assert_eq!(anyone, vec![3, 3, 3, 1, 1]);

        let everyone: Vec<usize> = parsed
            .0
            .iter()
            .map(GroupAnswers::everyone_yes_count)
            .collect();
        assert_eq!(everyone, vec![3, 0, 1, 1, 1]);
        Ok(())
    }

    #[test]
    fn duplicate_answers_from_one_person_count_once() -> DynamicResult<()> {
        let parsed = DeclarationForms::parse("aabbb\n")?;
        assert_eq!(parsed.0[0].anyone_yes_count(), 2);
        assert_eq!(parsed.0[0].everyone_yes_count(), 2);
        Ok(())
    }
}
