#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Error, Result, bail};
use aoc_framework::PartKind;
use aoc_framework::runner::OutputHandler;
use aoc_framework::selftest::SelfTestFailure;
use clap::{ArgAction, Parser};

mod checked_product;
mod solutions;

use solutions::RunOutcome;

/// Advent of Code 2020 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 1, 2, etc).
    /// When omitted, an interactive menu lists the available days.
    day: Option<u8>,

    /// Sets an alternative input file to use over default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,
}

/// Read the default input file for a day to a string.
fn get_default_input(day: u8) -> Result<String> {
    let filename = format!("day{day:02}.txt");
    let path = PathBuf::from("inputs").join(filename);

    fs::read_to_string(&path).with_context(|| {
        format!(
            "default input file missing: {}\n\n\
            please create the file or provide the input file argument",
            path.display()
        )
    })
}

/// Read the given input file to a string.
fn get_input(input_file: &PathBuf) -> Result<String> {
    fs::read_to_string(input_file)
        .with_context(|| format!("could not read input file at: {}", input_file.display()))
}

struct CliOutputHandler {
    /// A minimum duration to filter any outputs of duration by.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const ONE_SECOND: Duration = Duration::from_secs(1);
        const ONE_MILLISECOND: Duration = Duration::from_millis(1);
        const ONE_MICROSECOND: Duration = Duration::from_micros(1);
        const DECIMAL_PLACES: usize = 3;

        if duration >= ONE_SECOND {
            format!("{:.*} seconds", DECIMAL_PLACES, duration.as_secs_f32())
        } else {
            let nanos = duration.subsec_nanos();
            if duration >= ONE_MILLISECOND {
                format!("{:.*} milliseconds", DECIMAL_PLACES, f64::from(nanos) / 1e6)
            } else if duration >= ONE_MICROSECOND {
                format!("{:.*} microseconds", DECIMAL_PLACES, f64::from(nanos) / 1e3)
            } else {
                format!("{nanos} nanoseconds")
            }
        }
    }

    /// Convert an optional duration into a formatted duration, filtering out if the duration is
    /// shorter than the minimum duration.
    fn format_optional_duration_above_min(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|d| *d >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {
        // do nothing
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("Input parsed in {formatted_duration}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("{output} ({formatted_duration})");
        } else {
            println!("{output}");
        }
    }
}

/// Run one day directly and convert its outcome to a process result.
///
/// An unimplemented day and a failed day both exit non-zero, with messages that keep the two
/// cases distinguishable.
fn run_single_day(
    day: u8,
    input: &str,
    handler: &mut CliOutputHandler,
    timed: bool,
) -> Result<()> {
    match solutions::run_day(day, input, handler, timed) {
        RunOutcome::Solved => Ok(()),
        RunOutcome::Unimplemented => bail!("no solution available for day {day}"),
        RunOutcome::Failed(dyn_error) => {
            let anyhow_error = Error::from_boxed(dyn_error);
            Err(anyhow_error.context(format!("failed to run solution for day {day}")))
        }
    }
}

/// Print the menu header and the ordered registry of days.
fn print_menu(entries: &[solutions::DayEntry]) {
    println!("             *");
    println!("            /.\\");
    println!("           /..'\\");
    println!("           /'.'\\");
    println!("          /.''.'\\");
    println!("          /.'.'.\\");
    println!("         /'.''.'.\\");
    println!("         ^^^[_]^^^");
    println!("|-------------------------------------------|");
    println!("|         ~ Advent of Code 2020 ~           |");
    println!("|   Pick a problem to run the solution for  |");
    println!("|-------------------------------------------|");
    for entry in entries {
        println!("--> ({}) {}", entry.day, entry.title);
    }
    println!("|-------------------------------------------|");
    println!("|            Type 'quit' to Exit            |");
    println!("|-------------------------------------------|");
}

/// Interactive selection loop.
///
/// Invalid selections reprompt; an unimplemented or failed day reports and returns to the
/// prompt. Two conditions leave the loop: the `quit` sentinel (or end of input), and a
/// self-test regression, which is fatal rather than something to retry.
fn menu(handler: &mut CliOutputHandler, timed: bool) -> Result<()> {
    const LAST_CALENDAR_DAY: u8 = 25;

    print_menu(&solutions::registry());

    let stdin = io::stdin();
    loop {
        print!("Choice: ");
        io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read menu selection")?;
        if bytes_read == 0 {
            // end of input, same as quitting
            println!("Bye!");
            return Ok(());
        }

        let selection = line.trim();
        if selection == "quit" {
            println!("Bye!");
            return Ok(());
        }

        let day = match selection.parse::<u8>() {
            Ok(day) if (1..=LAST_CALENDAR_DAY).contains(&day) => day,
            _ => {
                println!("Invalid choice!");
                continue;
            }
        };

        let input_str = match get_default_input(day) {
            Ok(input_str) => input_str,
            Err(error) => {
                println!("Day {day} failed: {error:#}");
                continue;
            }
        };

        match solutions::run_day(day, &input_str, handler, timed) {
            RunOutcome::Solved => {}
            RunOutcome::Unimplemented => println!("No solution available for day {day}!"),
            RunOutcome::Failed(dyn_error) => {
                if dyn_error.downcast_ref::<SelfTestFailure>().is_some() {
                    let anyhow_error = Error::from_boxed(dyn_error);
                    return Err(anyhow_error.context("solution regressed against its examples"));
                }
                println!("Day {day} failed: {:#}", Error::from_boxed(dyn_error));
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));

    match args.day {
        Some(day) => {
            let input_str = args.input.map_or_else(
                || get_default_input(day),
                |input_file| get_input(&input_file),
            )?;
            run_single_day(day, &input_str, &mut handler, args.timed)
        }
        None => menu(&mut handler, args.timed),
    }
}
