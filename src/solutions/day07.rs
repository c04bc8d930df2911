use std::collections::{HashMap, HashSet, VecDeque};

use aoc_framework::parsing::{parse_lines_with_offset, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use regex::Regex;
use thiserror::Error;

pub(super) const TITLE: &str = "Day 7: Handy Haversacks";

#[solution_runner(
    name = TITLE,
    parsed = BagRules,
    part_one = Day07,
    part_two = Day07,
    self_test = self_test
)]
impl super::AdventOfCode2020<7> {}

#[derive(Error, Debug)]
enum Day07Error {
    /// Expected `<colour> bags contain <contents>.` Tuple contains the source string to report
    /// in the error message.
    #[error("failed to detect bag rule: expected \"[colour] bags contain [contents]\", found {0:?}")]
    NotBagRule(String),

    /// A content clause wasn't `N <colour> bag(s)`. Tuple contains the source string to report
    /// in the error message.
    #[error("failed to detect contents: expected pattern \"[count] [colour] bags\", found {0:?}")]
    NotContentClause(String),
}

/*
Input is luggage regulations: one rule per line stating which coloured bags a bag must contain,
e.g. `light red bags contain 1 bright white bag, 2 muted yellow bags.` A bag with no contents
reads `... contain no other bags.`
*/

const TARGET_BAG: &str = "shiny gold";

struct BagRuleParser {
    /// Regex capturing one `N colour` content clause.
    content_re: Regex,
}

impl BagRuleParser {
    const CONTENT_PATTERN: &str = r"^(\d+) (\w+ \w+) bags?\.?$";

    fn new() -> Self {
        let content_re = Regex::new(Self::CONTENT_PATTERN).expect("pattern should be valid");
        Self { content_re }
    }

    fn parse(&self, line: &str) -> DynamicResult<(String, Vec<(u32, String)>)> {
        let (colour, contents_str) = line
            .split_once(" bags contain ")
            .ok_or_else(|| Day07Error::NotBagRule(line.to_owned()))?;

        if contents_str == "no other bags." {
            return Ok((colour.to_owned(), Vec::new()));
        }

        let contents = contents_str
            .split(", ")
            .map(|clause| {
                let captures = self
                    .content_re
                    .captures(clause)
                    .ok_or_else(|| Day07Error::NotContentClause(clause.to_owned()))?;
                let count = parse_with_context(&captures[1])?;
                Ok((count, captures[2].to_owned()))
            })
            .collect::<DynamicResult<_>>()?;

        Ok((colour.to_owned(), contents))
    }
}

/// The containment digraph: outer colour to the counted colours directly inside it.
struct BagRules(HashMap<String, Vec<(u32, String)>>);

impl ParseData for BagRules {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let parser = BagRuleParser::new();
        let rules = parse_lines_with_offset(input, 0, |line| parser.parse(line))
            .collect::<Result<_, _>>()?;
        Ok(Self(rules))
    }
}

/*
For part 1, count how many bag colours can eventually contain at least one shiny gold bag.
*/

/// Walk the reversed containment edges outward from the target colour.
fn count_possible_outer_bags(rules: &BagRules) -> usize {
    let mut contained_in: HashMap<&str, Vec<&str>> = HashMap::new();
    for (outer, contents) in &rules.0 {
        for (_, inner) in contents {
            contained_in.entry(inner).or_default().push(outer);
        }
    }

    let mut reachable: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::from([TARGET_BAG]);
    while let Some(colour) = queue.pop_front() {
        if let Some(outers) = contained_in.get(colour) {
            for &outer in outers {
                if reachable.insert(outer) {
                    queue.push_back(outer);
                }
            }
        }
    }

    reachable.len()
}

struct Day07;

impl Solution<PartOne> for Day07 {
    type Input = BagRules;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_possible_outer_bags(input))
    }
}

/*
For part 2, count the total number of individual bags required inside one shiny gold bag.
*/

fn count_bags_inside(rules: &BagRules, colour: &str) -> u64 {
    rules.0.get(colour).map_or(0, |contents| {
        contents
            .iter()
            .map(|(count, inner)| u64::from(*count) * (1 + count_bags_inside(rules, inner)))
            .sum()
    })
}

impl Solution<PartTwo> for Day07 {
    type Input = BagRules;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(count_bags_inside(input, TARGET_BAG))
    }
}

const EXAMPLE_INPUT: &str = r"light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.
";

const NESTED_EXAMPLE_INPUT: &str = r"shiny gold bags contain 2 dark red bags.
dark red bags contain 2 dark orange bags.
dark orange bags contain 2 dark yellow bags.
dark yellow bags contain 2 dark green bags.
dark green bags contain 2 dark blue bags.
dark blue bags contain 2 dark violet bags.
dark violet bags contain no other bags.
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<BagRules, PartOne, Day07>(TITLE, EXAMPLE_INPUT, &4)?;
    selftest::check_parsed_example::<BagRules, PartTwo, Day07>(TITLE, EXAMPLE_INPUT, &32)?;
    selftest::check_parsed_example::<BagRules, PartTwo, Day07>(TITLE, NESTED_EXAMPLE_INPUT, &126)?;
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
    fn empty_rule_parses_to_no_contents() -> DynamicResult<()> {
        let parser = BagRuleParser::new();
        let (colour, contents) = parser.parse("faded blue bags contain no other bags.")?;
        assert_eq!(colour, "faded blue");
        assert!(contents.is_empty());
        Ok(())
    }

    #[test]
    fn rule_with_contents_parses_counts_and_colours() -> DynamicResult<()> {
        let parser = BagRuleParser::new();
        let (colour, contents) =
            parser.parse("light red bags contain 1 bright white bag, 2 muted yellow bags.")?;
        assert_eq!(colour, "light red");
        assert_eq!(
            contents,
            vec![
                (1, "bright white".to_owned()),
                (2, "muted yellow".to_owned())
            ]
        );
        Ok(())
    }

    #[test]
    fn bag_containing_nothing_counts_zero_inside() -> DynamicResult<()> {
        let rules = BagRules::parse("shiny gold bags contain no other bags.\n")?;
        assert_eq!(count_bags_inside(&rules, TARGET_BAG), 0);
        assert_eq!(count_possible_outer_bags(&rules), 0);
        Ok(())
    }
}
