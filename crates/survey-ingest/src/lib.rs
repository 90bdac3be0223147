//! CSV ingestion and output for survey datasets.

pub mod csv_table;

pub use csv_table::{read_dataset, write_dataset};
