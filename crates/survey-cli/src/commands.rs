use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use survey_clean::clean_with_stats;
use survey_ingest::{read_dataset, write_dataset};
use survey_model::AGE;
use survey_report::DatasetProfile;

use survey_cli::logging::redact_value;

use crate::cli::{CleanArgs, InspectArgs};
use crate::summary::{print_charts, print_cleaned_report, print_raw_report};
use crate::types::CleanResult;

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();

    // Stage 1: Ingest
    let ingest_start = Instant::now();
    let dataset = read_dataset(&args.input)?;
    let (rows, columns) = dataset.shape();
    info!(
        rows,
        columns,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // Stage 2: Pre-clean diagnostics
    let profile = DatasetProfile::collect(&dataset).context("profile raw dataset")?;
    log_invalid_age_rows(&dataset, &profile);
    print_raw_report(&dataset, &profile);

    // Stage 3: Clean
    let clean_start = Instant::now();
    let (cleaned, stats) = clean_with_stats(&dataset).context("clean dataset")?;
    info!(
        rows_in = stats.rows_in,
        rows_out = stats.rows_out,
        duplicates_removed = stats.duplicates_removed,
        invalid_ages_removed = stats.invalid_ages_removed,
        duration_ms = clean_start.elapsed().as_millis(),
        "clean complete"
    );

    // Stage 4: Post-clean diagnostics
    let cleaned_profile = DatasetProfile::collect(&cleaned).context("profile cleaned dataset")?;
    print_cleaned_report(&cleaned, &cleaned_profile);

    // Stage 5: Output
    let output = if args.dry_run {
        None
    } else {
        let path = output_path(args);
        write_dataset(&path, &cleaned)?;
        info!(output = %path.display(), rows = cleaned.records.len(), "output written");
        Some(path)
    };

    // Stage 6: Charts
    if !args.no_charts {
        print_charts(&cleaned).context("render charts")?;
    }

    Ok(CleanResult {
        input: args.input.clone(),
        output,
        stats,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();

    let dataset = read_dataset(&args.input)?;
    let profile = DatasetProfile::collect(&dataset).context("profile dataset")?;
    log_invalid_age_rows(&dataset, &profile);
    print_raw_report(&dataset, &profile);
    Ok(())
}

fn output_path(args: &CleanArgs) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| args.input.with_file_name("cleaned_dataset.csv"))
}

/// Debug-log the offending AGE cells. Cell values are personal data and stay
/// redacted unless --log-data was passed.
fn log_invalid_age_rows(dataset: &survey_model::Dataset, profile: &DatasetProfile) {
    let Some(age_idx) = dataset.column_index(AGE) else {
        return;
    };
    for &row in &profile.invalid_age_rows {
        if let Some(record) = dataset.records.get(row) {
            debug!(row, age = redact_value(record.cell(age_idx)), "invalid age");
        }
    }
}
