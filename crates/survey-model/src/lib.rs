pub mod dataset;
pub mod enums;
pub mod error;

pub use dataset::{AGE, Dataset, GENDER, LUNG_CANCER, REQUIRED_COLUMNS, Record};
pub use enums::{CancerStatus, Gender};
pub use error::{Result, SurveyError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_serializes() {
        let mut dataset = Dataset::new(vec![GENDER.to_string(), AGE.to_string()]);
        dataset.push_record(Record::new(vec!["F".to_string(), "62".to_string()]));
        let json = serde_json::to_string(&dataset).expect("serialize dataset");
        let round: Dataset = serde_json::from_str(&json).expect("deserialize dataset");
        assert_eq!(round, dataset);
    }
}
