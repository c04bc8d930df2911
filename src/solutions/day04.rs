use std::collections::HashMap;

use aoc_framework::parsing::blank_line_groups;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution, selftest};
use regex::Regex;
use thiserror::Error;

pub(super) const TITLE: &str = "Day 4: Passport Processing";

#[solution_runner(
    name = TITLE,
    parsed = PassportBatch,
    part_one = Day04,
    part_two = Day04,
    self_test = self_test
)]
impl super::AdventOfCode2020<4> {}

#[derive(Error, Debug)]
enum Day04Error {
    /// A field must be a `key:value` pair. Tuple contains the source string to report in the
    /// error message.
    #[error("failed to detect field: expected pattern \"key:value\", found {0:?}")]
    NotKeyValue(String),

    /// The same key appeared twice within one passport. Tuple contains the duplicated key.
    #[error("duplicate field in passport: {0:?}")]
    DuplicateField(String),
}

/*
Input is a batch file of passports. Each passport is a sequence of `key:value` fields separated
by spaces or newlines; passports are separated by blank lines.
*/

/// The seven fields a passport must carry. `cid` is accepted but never required.
const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

struct Passport {
    fields: HashMap<String, String>,
}

impl Passport {
    fn from_group(group: &str) -> DynamicResult<Self> {
        let mut fields = HashMap::new();
        for field in group.split_whitespace() {
            let (key, value) = field
                .split_once(':')
                .ok_or_else(|| Day04Error::NotKeyValue(field.to_owned()))?;
            if fields.insert(key.to_owned(), value.to_owned()).is_some() {
                return Err(Day04Error::DuplicateField(key.to_owned()).into());
            }
        }
        Ok(Self { fields })
    }

    fn has_required_fields(&self) -> bool {
        REQUIRED_FIELDS
            .iter()
            .all(|&key| self.fields.contains_key(key))
    }
}

struct PassportBatch(Vec<Passport>);

impl ParseData for PassportBatch {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let passports = blank_line_groups(input)
            .map(Passport::from_group)
            .collect::<DynamicResult<_>>()?;
        Ok(Self(passports))
    }
}

/*
For part 1, a passport is valid when every required field is present; `cid` is the one optional
field. Count the valid passports.
*/

struct Day04;

impl Solution<PartOne> for Day04 {
    type Input = PassportBatch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input
            .0
            .iter()
            .filter(|passport| passport.has_required_fields())
            .count())
    }
}

/*
For part 2, each required field's value must also be valid:

- byr: four digits, 1920 to 2002
- iyr: four digits, 2010 to 2020
- eyr: four digits, 2020 to 2030
- hgt: a number followed by cm (150 to 193) or in (59 to 76)
- hcl: a `#` followed by exactly six characters 0-9 or a-f
- ecl: exactly one of amb, blu, brn, gry, grn, hzl, oth
- pid: a nine-digit number, including leading zeroes
- cid: ignored

Count the passports with all required fields present and valid.
*/

/// Inclusive bounds check: is `value` within `lower..=upper`?
///
/// Deliberately the positive reading: callers ask "is this in range" and treat `false` as
/// invalid.
fn in_range(value: u32, lower: u32, upper: u32) -> bool {
    (lower..=upper).contains(&value)
}

/// Validates individual field values, with the character-class patterns compiled once.
struct FieldValidator {
    hair_colour_re: Regex,
    passport_id_re: Regex,
}

impl FieldValidator {
    const HAIR_COLOUR_PATTERN: &str = r"^#[0-9a-f]{6}$";
    const PASSPORT_ID_PATTERN: &str = r"^\d{9}$";
    const EYE_COLOURS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

    fn new() -> Self {
        let hair_colour_re =
            Regex::new(Self::HAIR_COLOUR_PATTERN).expect("pattern should be valid");
        let passport_id_re =
            Regex::new(Self::PASSPORT_ID_PATTERN).expect("pattern should be valid");
        Self {
            hair_colour_re,
            passport_id_re,
        }
    }

    fn is_valid_field(&self, key: &str, value: &str) -> bool {
        let year_in_range = |lower, upper| {
            value.len() == 4 && value.parse().is_ok_and(|year| in_range(year, lower, upper))
        };

        match key {
            "byr" => year_in_range(1920, 2002),
            "iyr" => year_in_range(2010, 2020),
            "eyr" => year_in_range(2020, 2030),
            "hgt" => {
                // a unit split landing inside a multibyte character means the value is garbage
                let Some((number, units)) = value.split_at_checked(value.len().saturating_sub(2))
                else {
                    return false;
                };
                let height: u32 = match number.parse() {
                    Ok(height) => height,
                    Err(_) => return false,
                };
                match units {
                    "cm" => in_range(height, 150, 193),
                    "in" => in_range(height, 59, 76),
                    _ => false,
                }
            }
            "hcl" => self.hair_colour_re.is_match(value),
            "ecl" => Self::EYE_COLOURS.contains(&value),
            "pid" => self.passport_id_re.is_match(value),
            // cid and any unknown field carry no constraint
            _ => true,
        }
    }

    fn is_valid_passport(&self, passport: &Passport) -> bool {
        passport.has_required_fields()
            && passport
                .fields
                .iter()
                .all(|(key, value)| self.is_valid_field(key, value))
    }
}

impl Solution<PartTwo> for Day04 {
    type Input = PassportBatch;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let validator = FieldValidator::new();
        Ok(input
            .0
            .iter()
            .filter(|passport| validator.is_valid_passport(passport))
            .count())
    }
}

const EXAMPLE_INPUT: &str = r"ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";

const INVALID_PASSPORTS_INPUT: &str = r"eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";

const VALID_PASSPORTS_INPUT: &str = r"pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";

/// Replay the worked examples from the puzzle description.
fn self_test() -> DynamicResult<()> {
    selftest::check_parsed_example::<PassportBatch, PartOne, Day04>(TITLE, EXAMPLE_INPUT, &2)?;
    selftest::check_parsed_example::<PassportBatch, PartTwo, Day04>(
        TITLE,
        INVALID_PASSPORTS_INPUT,
        &0,
    )?;
    selftest::check_parsed_example::<PassportBatch, PartTwo, Day04>(
        TITLE,
        VALID_PASSPORTS_INPUT,
        &4,
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
    fn range_check_is_inclusive() {
        assert!(in_range(1920, 1920, 2002));
        assert!(in_range(2002, 1920, 2002));
        assert!(!in_range(1919, 1920, 2002));
        assert!(!in_range(2003, 1920, 2002));
    }

    #[test]
    fn field_rules_from_the_description() {
        let validator = FieldValidator::new();

        assert!(validator.is_valid_field("byr", "2002"));
        assert!(!validator.is_valid_field("byr", "2003"));

        assert!(validator.is_valid_field("hgt", "60in"));
        assert!(validator.is_valid_field("hgt", "190cm"));
        assert!(!validator.is_valid_field("hgt", "190in"));
        assert!(!validator.is_valid_field("hgt", "190"));

        assert!(validator.is_valid_field("hcl", "#123abc"));
        assert!(!validator.is_valid_field("hcl", "#123abz"));
        assert!(!validator.is_valid_field("hcl", "123abc"));

        assert!(validator.is_valid_field("ecl", "brn"));
        assert!(!validator.is_valid_field("ecl", "wat"));

        assert!(validator.is_valid_field("pid", "000000001"));
        assert!(!validator.is_valid_field("pid", "0123456789"));
    }

    #[test]
    fn multibyte_height_value_is_invalid() {
        let validator = FieldValidator::new();

        assert!(!validator.is_valid_field("hgt", "é1"));
        assert!(!validator.is_valid_field("hgt", "180см"));
    }

    #[test]
    fn field_without_colon_fails_parsing() {
        assert!(PassportBatch::parse("byr 1937\n").is_err());
    }
}
