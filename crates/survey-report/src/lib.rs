//! Diagnostics and presentation for survey datasets: missing-value and
//! frequency profiling, invalid-age listings, and the two count charts.

pub mod chart;
pub mod diagnostics;
pub mod render;

pub use chart::{cancer_chart, gender_chart, render_side_by_side};
pub use diagnostics::{
    DatasetProfile, MISSING_LABEL, ValueCount, canonical_cancer_counts, canonical_gender_counts,
    invalid_age_rows, missing_value_counts, value_counts,
};
pub use render::{frequency_table, missing_table, preview_table, rows_table};
