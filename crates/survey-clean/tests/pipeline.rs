//! Pipeline-level tests: deduplication, filtering, idempotence.

use proptest::prelude::*;

use survey_clean::{clean, clean_with_stats};
use survey_model::{AGE, Dataset, GENDER, LUNG_CANCER, Record, SurveyError};

fn dataset(rows: &[[&str; 3]]) -> Dataset {
    let mut dataset = Dataset::new(vec![
        GENDER.to_string(),
        LUNG_CANCER.to_string(),
        AGE.to_string(),
    ]);
    for row in rows {
        dataset.push_record(Record::new(row.iter().map(|cell| cell.to_string()).collect()));
    }
    dataset
}

#[test]
fn end_to_end_scenario() {
    let input = dataset(&[
        ["M", "YES", "45"],
        ["m", "yes", "45"],
        ["female", "no", "150"],
        ["?", "unsure", "30"],
    ]);
    let cleaned = clean(&input).expect("clean dataset");
    assert_eq!(cleaned.shape(), (2, 3));
    assert_eq!(cleaned.records[0].values, vec!["Male", "Yes", "45"]);
    assert_eq!(cleaned.records[1].values, vec!["Other", "Unknown", "30"]);
}

#[test]
fn spelling_variants_collapse_into_one_row() {
    // Identical except for the raw gender spelling; normalization runs first,
    // so the second row becomes an exact duplicate of the first.
    let input = dataset(&[["male", "no", "60"], ["M", "no", "60"]]);
    let cleaned = clean(&input).expect("clean dataset");
    assert_eq!(cleaned.records.len(), 1);
    assert_eq!(cleaned.records[0].values, vec!["Male", "No", "60"]);
}

#[test]
fn keeps_first_occurrence_in_stable_order() {
    let input = dataset(&[
        ["f", "no", "30"],
        ["m", "yes", "40"],
        ["F", "no", "30"],
        ["m", "no", "50"],
    ]);
    let cleaned = clean(&input).expect("clean dataset");
    let genders: Vec<&str> = cleaned
        .records
        .iter()
        .map(|record| record.cell(0))
        .collect();
    assert_eq!(genders, vec!["Female", "Male", "Male"]);
    assert_eq!(cleaned.records[0].cell(2), "30");
}

#[test]
fn drops_boundary_missing_and_malformed_ages() {
    let input = dataset(&[
        ["m", "yes", "0"],
        ["m", "yes", "120"],
        ["m", "yes", ""],
        ["m", "yes", "old"],
        ["m", "yes", "119"],
        ["m", "yes", "1"],
    ]);
    let (cleaned, stats) = clean_with_stats(&input).expect("clean dataset");
    assert_eq!(cleaned.records.len(), 2);
    assert_eq!(stats.invalid_ages_removed, 4);
    assert_eq!(stats.duplicates_removed, 0);
}

#[test]
fn passthrough_columns_survive_untouched() {
    let mut input = Dataset::new(vec![
        "SMOKING".to_string(),
        GENDER.to_string(),
        LUNG_CANCER.to_string(),
        AGE.to_string(),
    ]);
    input.push_record(Record::new(vec![
        "2".to_string(),
        "m".to_string(),
        "yes".to_string(),
        "45".to_string(),
    ]));
    let cleaned = clean(&input).expect("clean dataset");
    assert_eq!(cleaned.records[0].values, vec!["2", "Male", "Yes", "45"]);
}

#[test]
fn missing_required_column_is_a_schema_error() {
    let mut input = Dataset::new(vec![GENDER.to_string(), AGE.to_string()]);
    input.push_record(Record::new(vec!["m".to_string(), "45".to_string()]));
    let error = clean(&input).expect_err("expect schema error");
    match error {
        SurveyError::MissingColumn { column } => assert_eq!(column, LUNG_CANCER),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn input_dataset_is_not_mutated() {
    let input = dataset(&[["m", "yes", "45"], ["m", "yes", "45"]]);
    let before = input.clone();
    let _ = clean(&input).expect("clean dataset");
    assert_eq!(input, before);
}

#[test]
fn removal_counts_add_up() {
    let input = dataset(&[
        ["M", "YES", "45"],
        ["m", "yes", "45"],
        ["female", "no", "150"],
        ["?", "unsure", "30"],
    ]);
    let (_, stats) = clean_with_stats(&input).expect("clean dataset");
    assert_eq!(stats.rows_in, 4);
    assert_eq!(stats.rows_out, 2);
    assert_eq!(stats.duplicates_removed, 1);
    assert_eq!(stats.invalid_ages_removed, 1);
}

fn raw_gender() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("m".to_string()),
        Just("M".to_string()),
        Just("male".to_string()),
        Just("F".to_string()),
        Just("female".to_string()),
        Just("".to_string()),
        "[a-z]{0,6}",
    ]
}

fn raw_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("yes".to_string()),
        Just("NO".to_string()),
        Just("no, yes".to_string()),
        Just("unsure".to_string()),
        "[a-z ]{0,8}",
    ]
}

fn raw_age() -> impl Strategy<Value = String> {
    prop_oneof![
        (-10i32..200).prop_map(|age| age.to_string()),
        Just("".to_string()),
        Just("old".to_string()),
    ]
}

proptest! {
    // Cleaning is a fixed point: canonical labels re-normalize to themselves
    // and no new duplicates or invalid ages can appear.
    #[test]
    fn clean_is_idempotent(rows in prop::collection::vec((raw_gender(), raw_status(), raw_age()), 0..20)) {
        let mut input = Dataset::new(vec![
            GENDER.to_string(),
            LUNG_CANCER.to_string(),
            AGE.to_string(),
        ]);
        for (gender, status, age) in rows {
            input.push_record(Record::new(vec![gender, status, age]));
        }
        let once = clean(&input).expect("first clean");
        let twice = clean(&once).expect("second clean");
        prop_assert_eq!(once, twice);
    }
}
