use healthycoder_calc::bmi;
use healthycoder_loader::{
    report::Report,
    source::{FileSource, InlineSource, MockPersonSource, PersonSource},
    LoaderError,
};
use healthycoder_model::person::Person;

const DIET_RECOMMENDED_INPUT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/data/diet-recommended-input-data.csv"
);
const CODERS_INPUT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/coders.csv");

#[test]
fn diet_recommended_for_inline_table() {
    let source = InlineSource::new("89.0, 1.72\n95.0, 1.75\n110.0, 1.78");

    for (i, person) in source.load().unwrap().into_iter().enumerate() {
        assert_eq!(
            bmi::is_diet_recommended(person.weight(), person.height()),
            Ok(true),
            "Test case #{}",
            i
        );
    }
}

#[test]
fn diet_recommended_for_file_table() {
    let people = FileSource::new(DIET_RECOMMENDED_INPUT, 1).load().unwrap();

    assert_eq!(people.len(), 3);
    for (i, person) in people.into_iter().enumerate() {
        assert_eq!(
            bmi::is_diet_recommended(person.weight(), person.height()),
            Ok(true),
            "Test case #{}",
            i
        );
    }
}

#[test]
fn report_from_file() {
    let report = Report::build(&FileSource::new(CODERS_INPUT, 1)).unwrap();

    assert_eq!(
        report.entries.iter().map(|e| e.bmi).collect::<Vec<_>>(),
        vec![18.52, 29.59, 19.53]
    );
    assert_eq!(report.worst, Some(Person::new(1.82, 98.0)));
    assert_eq!(report.diet_recommended_count(), 1);
}

#[test]
fn report_surfaces_zero_height() {
    let mut source = MockPersonSource::new();
    source
        .expect_load()
        .times(1)
        .returning(|| Ok(vec![Person::new(1.80, 60.0), Person::new(0.0, 60.0)]));

    let result = Report::build(&source);

    assert!(matches!(
        result,
        Err(LoaderError::Calc(healthycoder_calc::Error::DivisionByZero))
    ));
}

#[test]
fn report_serializes_to_json() {
    let mut source = MockPersonSource::new();
    source
        .expect_load()
        .returning(|| Ok(vec![Person::new(1.82, 98.0)]));

    let report = Report::build(&source).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "entries": [{
                "person": {"height": 1.82, "weight": 98.0},
                "bmi": 29.59,
                "diet_recommended": true
            }],
            "worst": {"height": 1.82, "weight": 98.0}
        })
    );
}
