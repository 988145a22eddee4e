use std::io::BufRead;
use std::str::FromStr;

use healthycoder_model::person::Person;

use crate::LoaderError;

/// Single `weight,height` line of a table.
#[derive(Debug, PartialEq)]
pub struct PersonRow {
    pub weight: f64,
    pub height: f64,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person::new(row.height, row.weight)
    }
}

impl FromStr for PersonRow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .split(',')
            .map(|field| {
                let field = field.trim();
                f64::from_str(field).map_err(|_| format!("Invalid number \"{}\"", field))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        match fields[..] {
            [weight, height] => Ok(Self { weight, height }),
            _ => Err(format!("Expected 2 fields, found {}", fields.len())),
        }
    }
}

/// Parses a `weight,height` table, ignoring the first `skip_lines` lines
/// and any blank lines.
pub fn parse_table<R: BufRead>(reader: R, skip_lines: usize) -> Result<Vec<Person>, LoaderError> {
    reader
        .lines()
        .enumerate()
        .skip(skip_lines)
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .map(|(i, line)| {
            let line = line?;
            PersonRow::from_str(&line)
                .map(Person::from)
                .map_err(|reason| LoaderError::InvalidRow {
                    line: i + 1,
                    content: line,
                    reason,
                })
        })
        .collect()
}
