//! Diagnostic report and summary printing.

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

use survey_model::{Dataset, GENDER, LUNG_CANCER, Result};
use survey_report::{
    DatasetProfile, cancer_chart, frequency_table, gender_chart, missing_table, preview_table,
    render_side_by_side, rows_table,
};

use crate::types::CleanResult;

const PREVIEW_ROWS: usize = 5;

/// Pre-clean diagnostics: preview, missing values, raw frequency tables, and
/// the rows with out-of-range ages.
pub fn print_raw_report(dataset: &Dataset, profile: &DatasetProfile) {
    println!(
        "Initial shape: {} rows x {} columns",
        profile.rows, profile.columns
    );
    println!("\nFirst {PREVIEW_ROWS} rows:");
    println!("{}", preview_table(dataset, PREVIEW_ROWS));
    println!("\nMissing values per column:");
    println!("{}", missing_table(&profile.missing));
    println!("\nRaw value counts:");
    let gender = frequency_table(GENDER, &profile.gender_counts);
    let cancer = frequency_table(LUNG_CANCER, &profile.cancer_counts);
    print!("{}", render_side_by_side(&gender, &cancer));
    if profile.invalid_age_rows.is_empty() {
        println!("\nNo rows with invalid ages (outside 0-120).");
    } else {
        println!(
            "\nRows with invalid ages (outside 0-120): {}",
            profile.invalid_age_rows.len()
        );
        println!("{}", rows_table(dataset, &profile.invalid_age_rows));
    }
}

/// Post-clean diagnostics: new shape, canonical frequency tables, and the
/// confirmation that no out-of-range ages remain.
pub fn print_cleaned_report(dataset: &Dataset, profile: &DatasetProfile) {
    println!(
        "\nAfter cleaning: {} rows x {} columns",
        profile.rows, profile.columns
    );
    println!("\nCanonical value counts:");
    let gender = frequency_table(GENDER, &profile.gender_counts);
    let cancer = frequency_table(LUNG_CANCER, &profile.cancer_counts);
    print!("{}", render_side_by_side(&gender, &cancer));
    if profile.invalid_age_rows.is_empty() {
        println!("\nNo invalid ages remain.");
    } else {
        println!(
            "\nInvalid ages remaining: {}",
            profile.invalid_age_rows.len()
        );
    }
}

/// The two distribution charts, side by side.
pub fn print_charts(dataset: &Dataset) -> Result<()> {
    let gender = gender_chart(dataset)?;
    let cancer = cancer_chart(dataset)?;
    println!("\nDistributions:");
    print!("{}", render_side_by_side(&gender, &cancer));
    Ok(())
}

/// Final run summary table.
pub fn print_summary(result: &CleanResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Duplicates removed"),
        header_cell("Invalid ages removed"),
    ]);
    survey_report::render::apply_table_style(&mut table);
    for index in 0..4 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.add_row(vec![
        Cell::new(result.stats.rows_in),
        Cell::new(result.stats.rows_out),
        removal_cell(result.stats.duplicates_removed),
        removal_cell(result.stats.invalid_ages_removed),
    ]);
    println!();
    println!("{table}");
    match &result.output {
        Some(path) => println!("Cleaned dataset saved as {}", path.display()),
        None => println!("Dry run: no output written."),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn removal_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
