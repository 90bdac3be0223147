//! Comfy-table rendering of diagnostics.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::Dataset;

use crate::diagnostics::ValueCount;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub(crate) fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub(crate) fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// First `limit` rows of the dataset, all columns.
pub fn preview_table(dataset: &Dataset, limit: usize) -> Table {
    let mut table = Table::new();
    let mut header: Vec<Cell> = vec![header_cell("#")];
    header.extend(dataset.columns.iter().map(|column| header_cell(column)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (row, record) in dataset.records.iter().take(limit).enumerate() {
        let mut cells: Vec<Cell> = vec![dim_cell(row)];
        cells.extend(record.values.iter().map(Cell::new));
        table.add_row(cells);
    }
    table
}

/// Missing-cell counts per column; one dimmed "none" row when clean.
pub fn missing_table(missing: &[(String, usize)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    if missing.is_empty() {
        table.add_row(vec![dim_cell("(none)"), dim_cell(0)]);
        return table;
    }
    for (column, count) in missing {
        table.add_row(vec![
            Cell::new(column),
            Cell::new(*count).fg(Color::Yellow),
        ]);
    }
    table
}

/// Frequency table for one column.
pub fn frequency_table(column: &str, counts: &[ValueCount]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(column), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in counts {
        table.add_row(vec![Cell::new(&entry.label), Cell::new(entry.count)]);
    }
    table
}

/// Full listing of the given rows, for the out-of-range-age report.
pub fn rows_table(dataset: &Dataset, rows: &[usize]) -> Table {
    let mut table = Table::new();
    let mut header: Vec<Cell> = vec![header_cell("Row")];
    header.extend(dataset.columns.iter().map(|column| header_cell(column)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for &row in rows {
        let Some(record) = dataset.records.get(row) else {
            continue;
        };
        let mut cells: Vec<Cell> = vec![Cell::new(row).fg(Color::Red)];
        cells.extend(record.values.iter().map(Cell::new));
        table.add_row(cells);
    }
    table
}
