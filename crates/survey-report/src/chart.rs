//! Terminal bar charts for the cleaned dataset.
//!
//! Two categorical count charts, one per canonical column, rendered as
//! comfy-table tables with a unicode block bar scaled to the largest count.
//! Purely presentational.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_model::{Dataset, Result};

use crate::diagnostics::{canonical_cancer_counts, canonical_gender_counts};
use crate::render::header_cell;

const BAR_WIDTH: usize = 32;

fn bar(count: usize, max: usize) -> String {
    if count == 0 || max == 0 {
        return String::new();
    }
    // Every non-zero count gets at least one block.
    let length = ((count * BAR_WIDTH) / max).max(1);
    "█".repeat(length)
}

fn count_chart(title: &str, counts: &[(&str, usize)], color: Color) -> Table {
    let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(title),
        header_cell("Count"),
        header_cell(""),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Disabled);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (label, count) in counts {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(count),
            Cell::new(bar(*count, max)).fg(color),
        ]);
    }
    table
}

/// Gender distribution chart over canonical labels.
pub fn gender_chart(dataset: &Dataset) -> Result<Table> {
    let counts = canonical_gender_counts(dataset)?;
    let rows: Vec<(&str, usize)> = counts
        .iter()
        .map(|(gender, count)| (gender.as_str(), *count))
        .collect();
    Ok(count_chart("Gender", &rows, Color::Green))
}

/// Lung-cancer status distribution chart over canonical labels.
pub fn cancer_chart(dataset: &Dataset) -> Result<Table> {
    let counts = canonical_cancer_counts(dataset)?;
    let rows: Vec<(&str, usize)> = counts
        .iter()
        .map(|(status, count)| (status.as_str(), *count))
        .collect();
    Ok(count_chart("Lung Cancer", &rows, Color::Red))
}

/// Join two rendered tables line by line so they print side by side.
pub fn render_side_by_side(left: &Table, right: &Table) -> String {
    let left_rendered = left.to_string();
    let right_rendered = right.to_string();
    let left_lines: Vec<&str> = left_rendered.lines().collect();
    let right_lines: Vec<&str> = right_rendered.lines().collect();
    let left_width = left_lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let height = left_lines.len().max(right_lines.len());
    let mut output = String::new();
    for row in 0..height {
        let left_line = left_lines.get(row).copied().unwrap_or("");
        let right_line = right_lines.get(row).copied().unwrap_or("");
        let padding = left_width.saturating_sub(left_line.chars().count());
        output.push_str(left_line);
        output.push_str(&" ".repeat(padding + 2));
        output.push_str(right_line);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_max() {
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar(5, 10).chars().count(), BAR_WIDTH / 2);
        // Small but non-zero counts still show up.
        assert_eq!(bar(1, 1000).chars().count(), 1);
    }

    #[test]
    fn side_by_side_keeps_both_tables() {
        let mut left = Table::new();
        left.set_header(vec!["L"]);
        left.add_row(vec!["a"]);
        let mut right = Table::new();
        right.set_header(vec!["R"]);
        right.add_row(vec!["b"]);
        let rendered = render_side_by_side(&left, &right);
        assert!(rendered.contains('L'));
        assert!(rendered.contains('R'));
        let widths: Vec<usize> = rendered
            .lines()
            .map(|line| line.trim_end().len())
            .collect();
        assert!(widths.iter().all(|width| *width > 0));
    }
}
