use healthycoder_model::activity::ActivityRating;

use crate::{Error, Result};

/// Minutes credited for each workout session.
pub const WORKOUT_DURATION_MINUTES: i32 = 45;
const DAYS_PER_WEEK: f64 = 7.0;

const BAD_BELOW: f64 = 20.0;
const GOOD_ABOVE: f64 = 40.0;

/// Average minutes of activity per day over a week.
///
/// Every workout session counts as [`WORKOUT_DURATION_MINUTES`] on top of the
/// cardio minutes. Negative inputs are rejected.
pub fn average_daily_minutes(
    weekly_cardio_minutes: i32,
    weekly_workout_sessions: i32,
) -> Result<f64> {
    if weekly_cardio_minutes < 0 {
        return Err(Error::InvalidArgument(format!(
            "weekly cardio minutes must not be negative, got {}",
            weekly_cardio_minutes
        )));
    }
    if weekly_workout_sessions < 0 {
        return Err(Error::InvalidArgument(format!(
            "weekly workout sessions must not be negative, got {}",
            weekly_workout_sessions
        )));
    }

    let total_minutes = weekly_cardio_minutes as f64
        + weekly_workout_sessions as f64 * WORKOUT_DURATION_MINUTES as f64;
    Ok(total_minutes / DAYS_PER_WEEK)
}

/// Rates weekly exercise: under 20 minutes a day is bad, 20 to 40 inclusive
/// is average, anything above is good.
pub fn rate_activity_level(
    weekly_cardio_minutes: i32,
    weekly_workout_sessions: i32,
) -> Result<ActivityRating> {
    let average = average_daily_minutes(weekly_cardio_minutes, weekly_workout_sessions)?;

    Ok(if average < BAD_BELOW {
        ActivityRating::Bad
    } else if average <= GOOD_ABOVE {
        ActivityRating::Average
    } else {
        ActivityRating::Good
    })
}
