use healthycoder_model::person::Person;

use crate::{Error, Result};

/// BMI above which a diet is recommended.
pub const DIET_THRESHOLD: f64 = 25.0;

/// Body mass index for the given weight (kg) and height (m).
///
/// Fails with [`Error::DivisionByZero`] when `height` is zero. Any other value,
/// negative ones included, goes straight into the formula.
pub fn compute_bmi(weight: f64, height: f64) -> Result<f64> {
    if height == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(weight / (height * height))
}

pub fn person_bmi(person: &Person) -> Result<f64> {
    compute_bmi(person.weight(), person.height())
}

pub fn is_diet_recommended(weight: f64, height: f64) -> Result<bool> {
    Ok(compute_bmi(weight, height)? > DIET_THRESHOLD)
}

/// Finds the person with the highest BMI in a single pass.
///
/// Returns `Ok(None)` for an empty slice. When several people share the
/// highest BMI the first one wins.
pub fn find_worst_bmi(people: &[Person]) -> Result<Option<&Person>> {
    let mut worst: Option<(&Person, f64)> = None;
    for person in people {
        let bmi = person_bmi(person)?;
        if worst.map_or(true, |(_, max)| bmi > max) {
            worst = Some((person, bmi));
        }
    }
    Ok(worst.map(|(person, _)| person))
}

/// BMI of every person, in input order, rounded to 2 decimal places.
pub fn compute_bmi_scores(people: &[Person]) -> Result<Vec<f64>> {
    people
        .iter()
        .map(|person| person_bmi(person).map(|bmi| round_half_up(bmi, 2)))
        .collect()
}

/// Rounds to `decimals` places, halves going away from zero.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    value.signum() * (value.abs() * factor + 0.5).floor() / factor
}
