use aoc_framework::parsing::parse_with_context;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use thiserror::Error;

pub(super) const TITLE: &str = "Day 13: Shuttle Search";

#[solution_runner(
    name = TITLE,
    parsed = BusNotes,
    part_one = Day13,
    part_two = Day13,
    self_test = self_test
)]
impl super::AdventOfCode2020<13> {}

#[derive(Error, Debug)]
enum Day13Error {
    #[error("expected two lines: an earliest departure estimate and a bus schedule")]
    MissingSchedule,

    #[error("every bus in the schedule is out of service")]
    NoBusesInService,

    /// A bus with ID 0 has no departure schedule; `x` marks out-of-service buses instead.
    #[error("bus ID 0 is not a valid schedule entry")]
    ZeroBusId,
}

/*
Input is two lines of notes: an estimate of the earliest timestamp to depart, and a
comma-separated bus schedule where each number is a bus ID (the bus departs at every multiple
of its ID) and `x` marks a bus that is out of service.
*/

struct BusNotes {
    earliest_departure: u64,
    /// In-service buses as `(position in the schedule, bus ID)`.
    buses: Vec<(u64, u64)>,
}

impl ParseData for BusNotes {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut lines = input.lines();
        let earliest_line = lines.next().ok_or(Day13Error::MissingSchedule)?;
        let schedule_line = lines.next().ok_or(Day13Error::MissingSchedule)?;

        let earliest_departure = parse_with_context(earliest_line)?;
        let buses = schedule_line
            .split(',')
            .enumerate()
            .filter(|&(_, entry)| entry != "x")
            .map(|(position, entry)| {
                let id: u64 = parse_with_context(entry)?;
                if id == 0 {
                    return Err(Day13Error::ZeroBusId.into());
                }
                Ok((position as u64, id))
            })
            .collect::<DynamicResult<_>>()?;

        Ok(Self {
            earliest_departure,
            buses,
        })
    }
}

/*
For part 1, find the first bus departing at or after the estimate and answer with its ID
multiplied by the minutes waited.
*/

fn earliest_bus_product(notes: &BusNotes) -> Result<u64, Day13Error> {
    notes
        .buses
        .iter()
        .map(|&(_, id)| {
            let wait = (id - notes.earliest_departure % id) % id;
            (wait, id)
        })
        .min()
        .map(|(wait, id)| wait * id)
        .ok_or(Day13Error::NoBusesInService)
}

struct Day13;

impl Solution<PartOne> for Day13 {
    type Input = BusNotes;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(earliest_bus_product(input)?)
    }
}

/*
For part 2, the estimate is irrelevant: find the earliest timestamp where each listed bus
departs exactly its schedule position in minutes later. Checking timestamps one at a time is
hopeless (the answer exceeds 10^14), so fold the buses in one at a time: once the first `n`
buses align at some timestamp, they re-align every product-of-their-IDs minutes, so search for
the next bus only along that stride. Bus IDs are pairwise coprime, which keeps the combined
stride exact.
*/

fn earliest_alignment(buses: &[(u64, u64)]) -> Result<u64, Day13Error> {
    if buses.is_empty() {
        return Err(Day13Error::NoBusesInService);
    }

    let mut timestamp: u64 = 0;
    let mut stride: u64 = 1;

    for &(position, id) in buses {
        while (timestamp + position) % id != 0 {
            timestamp += stride;
        }
        stride *= id;
    }

    Ok(timestamp)
}

impl Solution<PartTwo> for Day13 {
    type Input = BusNotes;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(earliest_alignment(&input.buses)?)
    }
}

/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y = g`.
fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x, y) = extended_gcd(b, a % b);
        (g, y, x - (a / b) * y)
    }
}

/// Closed-form alternative to [`earliest_alignment`]: solve the simultaneous congruences
/// `t ≡ -position (mod id)` by the remainder theorem.
///
/// Kept alongside the stride fold so the two strategies can check each other; the self-test
/// requires them to agree.
fn remainder_theorem_alignment(buses: &[(u64, u64)]) -> DynamicResult<u64> {
    if buses.is_empty() {
        return Err(Day13Error::NoBusesInService.into());
    }

    let modulus: i128 = buses.iter().map(|&(_, id)| i128::from(id)).product();
    let mut sum: i128 = 0;
    for &(position, id) in buses {
        let id = i128::from(id);
        let remainder = (-i128::from(position)).rem_euclid(id);
        let partial = modulus / id;
        let (_, inverse, _) = extended_gcd(partial, id);
        sum += remainder * inverse.rem_euclid(id) * partial;
    }

    Ok(u64::try_from(sum.rem_euclid(modulus))?)
}

const EXAMPLE_INPUT: &str = r"939
7,13,x,x,59,x,31,19
";

/// Adapter replaying part 2 through the closed-form strategy, so the self-test holds both
/// strategies to the quoted answer.
struct RemainderTheoremPartTwo;

impl Solution<PartTwo> for RemainderTheoremPartTwo {
    type Input = BusNotes;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        remainder_theorem_alignment(&input.buses)
    }
}

/// Replay the worked examples from the puzzle description, part 2 through both strategies.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<BusNotes, PartOne, Day13>(TITLE, EXAMPLE_INPUT, &295)?;
    selftest::check_parsed_example::<BusNotes, PartTwo, Day13>(TITLE, EXAMPLE_INPUT, &1_068_781)?;
    selftest::check_parsed_example::<BusNotes, PartTwo, RemainderTheoremPartTwo>(
        TITLE,
        EXAMPLE_INPUT,
        &1_068_781,
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

    fn parse_schedule(schedule: &str) -> DynamicResult<Vec<(u64, u64)>> {
        let notes = BusNotes::parse(&format!("0\n{schedule}\n"))?;
        Ok(notes.buses)
    }

    #[test]
    fn both_strategies_match_every_described_schedule() -> DynamicResult<()> {
        let cases: [(&str, u64); 5] = [
            ("17,x,13,19", 3417),
            ("67,7,59,61", 754_018),
            ("67,x,7,59,61", 779_210),
            ("67,7,x,59,61", 1_261_476),
            ("1789,37,47,1889", 1_202_161_486),
        ];
        for (schedule, expected) in cases {
            let buses = parse_schedule(schedule)?;
            assert_eq!(earliest_alignment(&buses)?, expected, "schedule {schedule}");
            assert_eq!(
                remainder_theorem_alignment(&buses)?,
                expected,
                "schedule {schedule}"
            );
        }
        Ok(())
    }

    #[test]
    fn bus_at_estimate_has_zero_wait() -> DynamicResult<()> {
        let notes = BusNotes::parse("14\n7,13\n")?;
        assert_eq!(earliest_bus_product(&notes)?, 0);
        Ok(())
    }

    #[test]
    fn zero_bus_id_fails_parsing() {
        let Err(error) = BusNotes::parse("10\n7,0,13\n") else {
            panic!("a bus ID of 0 should be rejected");
        };
        assert_eq!(error.to_string(), "bus ID 0 is not a valid schedule entry");
    }

    #[test]
    fn all_out_of_service_is_a_distinct_error() -> DynamicResult<()> {
        let notes = BusNotes::parse("10\nx,x\n")?;
        let Err(error) = earliest_bus_product(&notes) else {
            panic!("schedule with no buses should fail");
        };
        assert_eq!(error.to_string(), "every bus in the schedule is out of service");
        Ok(())
    }
}
