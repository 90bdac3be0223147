use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, Writer};
use tracing::debug;

use survey_model::{Dataset, Record};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a survey CSV into a [`Dataset`].
///
/// The first non-blank row is taken as the header. Cells are trimmed and
/// stripped of BOM markers; fully blank rows are skipped; short rows are
/// padded with empty cells so every record has one cell per column.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        bail!("empty csv: {}", path.display());
    }
    let columns: Vec<String> = raw_rows[0].iter().map(|value| normalize_header(value)).collect();
    let mut dataset = Dataset::new(columns);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(dataset.columns.len());
        for idx in 0..dataset.columns.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        dataset.push_record(Record::new(row));
    }
    debug!(
        path = %path.display(),
        rows = dataset.records.len(),
        columns = dataset.columns.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Write a [`Dataset`] as CSV with the same column structure it was read
/// with. Any io or encoding failure surfaces with the output path attached.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&dataset.columns)
        .with_context(|| format!("write header: {}", path.display()))?;
    for record in &dataset.records {
        writer
            .write_record(&record.values)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(
        path = %path.display(),
        rows = dataset.records.len(),
        "dataset written"
    );
    Ok(())
}
