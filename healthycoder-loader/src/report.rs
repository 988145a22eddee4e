use std::fmt;

use healthycoder_calc::bmi;
use healthycoder_model::person::Person;
use itertools::Itertools;
use log::{debug, info};
use serde::Serialize;

use crate::source::PersonSource;
use crate::LoaderError;

#[derive(Debug, PartialEq, Serialize)]
pub struct Entry {
    pub person: Person,
    pub bmi: f64,
    pub diet_recommended: bool,
}

/// BMI scores and diet recommendations for everyone in a source.
#[derive(Debug, PartialEq, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
    pub worst: Option<Person>,
}

impl Report {
    pub fn build(source: &dyn PersonSource) -> Result<Self, LoaderError> {
        let people = source.load()?;
        info!("Building report for {} people", people.len());

        let scores = bmi::compute_bmi_scores(&people)?;
        let worst = bmi::find_worst_bmi(&people)?.copied();
        let entries = people
            .iter()
            .zip(scores)
            .map(|(person, score)| {
                Ok(Entry {
                    person: *person,
                    bmi: score,
                    diet_recommended: bmi::is_diet_recommended(person.weight(), person.height())?,
                })
            })
            .collect::<Result<Vec<_>, LoaderError>>()?;

        debug!("Worst BMI: {:?}", worst);
        Ok(Self { entries, worst })
    }

    pub fn diet_recommended_count(&self) -> usize {
        self.entries.iter().filter(|e| e.diet_recommended).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .entries
            .iter()
            .map(|e| {
                format!(
                    "weight={:.1} height={:.2} bmi={:.2} diet={}",
                    e.person.weight(),
                    e.person.height(),
                    e.bmi,
                    if e.diet_recommended { "yes" } else { "no" }
                )
            })
            .join("\n");
        if !rows.is_empty() {
            writeln!(f, "{}", rows)?;
        }

        write!(
            f,
            "diet recommended for {} of {}",
            self.diet_recommended_count(),
            self.entries.len()
        )?;
        if let Some(worst) = &self.worst {
            write!(
                f,
                "\nworst BMI: weight={:.1} height={:.2}",
                worst.weight(),
                worst.height()
            )?;
        }
        Ok(())
    }
}
