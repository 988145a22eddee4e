use std::time::{Duration, Instant};

use healthycoder_calc::{activity, bmi};
use healthycoder_model::{activity::ActivityRating, person::Person};

#[test]
fn worst_bmi_of_10000_people_within_50_ms() {
    let people: Vec<_> = (0..10000)
        .map(|i| Person::new(1.0 + i as f64, 10.0 + i as f64))
        .collect();

    let start = Instant::now();
    let worst = bmi::find_worst_bmi(&people).unwrap();
    let elapsed = start.elapsed();

    assert!(worst.is_some());
    assert!(elapsed < Duration::from_millis(50), "took {:?}", elapsed);
}

#[test]
fn worst_bmi_matches_scores() {
    let people = vec![
        Person::new(1.80, 60.0),
        Person::new(1.82, 98.0),
        Person::new(1.82, 64.7),
    ];

    let scores = bmi::compute_bmi_scores(&people).unwrap();
    let worst = bmi::find_worst_bmi(&people).unwrap().unwrap();
    let worst_score = bmi::round_half_up(bmi::person_bmi(worst).unwrap(), 2);

    assert_eq!(scores.iter().cloned().fold(f64::MIN, f64::max), worst_score);
}

#[test]
fn activity_rating_displays_as_lowercase() {
    let rating = activity::rate_activity_level(45, 1).unwrap();

    assert_eq!(rating, ActivityRating::Bad);
    assert_eq!(rating.to_string(), "bad");
}
