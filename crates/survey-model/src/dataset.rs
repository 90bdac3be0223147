#![deny(unsafe_code)]

use crate::error::{Result, SurveyError};

/// Column holding the raw or canonical gender value.
pub const GENDER: &str = "GENDER";
/// Column holding the raw or canonical lung-cancer status.
pub const LUNG_CANCER: &str = "LUNG_CANCER";
/// Column holding the subject age in years.
pub const AGE: &str = "AGE";

/// Columns the cleaning pipeline inspects; all others pass through untouched.
pub const REQUIRED_COLUMNS: [&str; 3] = [GENDER, LUNG_CANCER, AGE];

/// One survey row. Cells are stored positionally in column order; an empty
/// string (after ingest trimming) represents a missing value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Cell at the given column index, empty string when the row is short.
    pub fn cell(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    /// True when the cell is absent or blank.
    pub fn is_missing(&self, index: usize) -> bool {
        self.cell(index).trim().is_empty()
    }
}

/// An ordered, fully materialized survey table. Row order is preserved
/// through every stage so diagnostics stay reproducible.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// (rows, columns), mirroring the usual dataframe shape convention.
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.columns.len())
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Index of a required column, or a schema error naming it.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| SurveyError::MissingColumn {
                column: name.to_string(),
            })
    }
}
