//! Read-only data-quality diagnostics.
//!
//! Everything here inspects a dataset without changing it; the same
//! functions run before cleaning (raw values, invalid rows present) and
//! after (canonical values, invalid rows gone).

use std::collections::BTreeMap;

use survey_clean::admissible_age;
use survey_model::{AGE, CancerStatus, Dataset, GENDER, Gender, LUNG_CANCER, Result};

/// Label used for empty cells in frequency tables.
pub const MISSING_LABEL: &str = "(missing)";

/// One frequency-table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub label: String,
    pub count: usize,
}

/// Per-column missing-cell counts, in column order, restricted to columns
/// that actually have missing values.
pub fn missing_value_counts(dataset: &Dataset) -> Vec<(String, usize)> {
    let mut counts = Vec::new();
    for (idx, column) in dataset.columns.iter().enumerate() {
        let missing = dataset
            .records
            .iter()
            .filter(|record| record.is_missing(idx))
            .count();
        if missing > 0 {
            counts.push((column.clone(), missing));
        }
    }
    counts
}

/// Frequency table for one column, missing cells included under
/// [`MISSING_LABEL`]. Ordered count-descending, then by label, so output is
/// deterministic.
pub fn value_counts(dataset: &Dataset, column: &str) -> Result<Vec<ValueCount>> {
    let idx = dataset.require_column(column)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in dataset.records.iter() {
        let cell = record.cell(idx).trim();
        let label = if cell.is_empty() {
            MISSING_LABEL.to_string()
        } else {
            cell.to_string()
        };
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut ordered: Vec<ValueCount> = counts
        .into_iter()
        .map(|(label, count)| ValueCount { label, count })
        .collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    Ok(ordered)
}

/// Indices of records whose `AGE` cell is missing, non-numeric, or outside
/// the admissible (0, 120) range.
pub fn invalid_age_rows(dataset: &Dataset) -> Result<Vec<usize>> {
    let idx = dataset.require_column(AGE)?;
    Ok(dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| admissible_age(record.cell(idx)).is_none())
        .map(|(row, _)| row)
        .collect())
}

/// Counts per canonical gender over a cleaned dataset, in fixed variant
/// order. Matching on the enum keeps the chart exhaustive over the domain.
pub fn canonical_gender_counts(dataset: &Dataset) -> Result<Vec<(Gender, usize)>> {
    let idx = dataset.require_column(GENDER)?;
    let mut counts = [(Gender::Male, 0usize), (Gender::Female, 0), (Gender::Other, 0)];
    for record in &dataset.records {
        let gender: Gender = record
            .cell(idx)
            .parse()
            .unwrap_or(Gender::Other);
        match gender {
            Gender::Male => counts[0].1 += 1,
            Gender::Female => counts[1].1 += 1,
            Gender::Other => counts[2].1 += 1,
        }
    }
    Ok(counts.to_vec())
}

/// Counts per canonical cancer status over a cleaned dataset.
pub fn canonical_cancer_counts(dataset: &Dataset) -> Result<Vec<(CancerStatus, usize)>> {
    let idx = dataset.require_column(LUNG_CANCER)?;
    let mut counts = [
        (CancerStatus::Yes, 0usize),
        (CancerStatus::No, 0),
        (CancerStatus::Unknown, 0),
    ];
    for record in &dataset.records {
        let status: CancerStatus = record
            .cell(idx)
            .parse()
            .unwrap_or(CancerStatus::Unknown);
        match status {
            CancerStatus::Yes => counts[0].1 += 1,
            CancerStatus::No => counts[1].1 += 1,
            CancerStatus::Unknown => counts[2].1 += 1,
        }
    }
    Ok(counts.to_vec())
}

/// Snapshot of the data-quality signals the reporter prints.
#[derive(Debug, Clone)]
pub struct DatasetProfile {
    pub rows: usize,
    pub columns: usize,
    pub missing: Vec<(String, usize)>,
    pub gender_counts: Vec<ValueCount>,
    pub cancer_counts: Vec<ValueCount>,
    pub invalid_age_rows: Vec<usize>,
}

impl DatasetProfile {
    /// Collect the full profile in one pass over the dataset. Fails only
    /// when a required column is absent.
    pub fn collect(dataset: &Dataset) -> Result<Self> {
        let (rows, columns) = dataset.shape();
        Ok(Self {
            rows,
            columns,
            missing: missing_value_counts(dataset),
            gender_counts: value_counts(dataset, GENDER)?,
            cancer_counts: value_counts(dataset, LUNG_CANCER)?,
            invalid_age_rows: invalid_age_rows(dataset)?,
        })
    }
}
