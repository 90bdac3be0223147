//! The cleaning pipeline: normalize, deduplicate, filter.

use std::collections::BTreeSet;

use tracing::debug;

use survey_model::{AGE, Dataset, GENDER, LUNG_CANCER, Result};

use crate::normalize::{normalize_cancer_status, normalize_gender};
use crate::validate::admissible_age;

/// Counts of what the pipeline removed, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub rows_in: usize,
    pub rows_out: usize,
    pub duplicates_removed: usize,
    pub invalid_ages_removed: usize,
}

/// Clean a survey dataset.
///
/// Stages, in order:
/// 1. Rewrite every `GENDER` and `LUNG_CANCER` cell with its canonical label.
///    This runs before deduplication so rows differing only in raw spelling
///    collapse into exact duplicates.
/// 2. Drop exact duplicates (all cells equal), keeping the first occurrence.
/// 3. Drop rows whose `AGE` is missing, non-numeric, or outside (0, 120).
///
/// The input dataset is borrowed immutably and never modified; a new
/// `Dataset` is returned. Fails only when a required column is absent.
pub fn clean(dataset: &Dataset) -> Result<Dataset> {
    let (cleaned, _) = clean_with_stats(dataset)?;
    Ok(cleaned)
}

/// [`clean`], also returning removal counts for the summary report.
pub fn clean_with_stats(dataset: &Dataset) -> Result<(Dataset, CleanStats)> {
    let gender_idx = dataset.require_column(GENDER)?;
    let cancer_idx = dataset.require_column(LUNG_CANCER)?;
    let age_idx = dataset.require_column(AGE)?;

    let mut stats = CleanStats {
        rows_in: dataset.records.len(),
        ..CleanStats::default()
    };

    let mut cleaned = Dataset::new(dataset.columns.clone());
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    for record in &dataset.records {
        let mut record = record.clone();
        if let Some(cell) = record.values.get_mut(gender_idx) {
            *cell = normalize_gender(cell).as_str().to_string();
        }
        if let Some(cell) = record.values.get_mut(cancer_idx) {
            *cell = normalize_cancer_status(cell).as_str().to_string();
        }
        if !seen.insert(record.values.clone()) {
            stats.duplicates_removed += 1;
            continue;
        }
        if admissible_age(record.cell(age_idx)).is_none() {
            stats.invalid_ages_removed += 1;
            continue;
        }
        cleaned.push_record(record);
    }
    stats.rows_out = cleaned.records.len();
    debug!(
        rows_in = stats.rows_in,
        rows_out = stats.rows_out,
        duplicates_removed = stats.duplicates_removed,
        invalid_ages_removed = stats.invalid_ages_removed,
        "dataset cleaned"
    );
    Ok((cleaned, stats))
}
