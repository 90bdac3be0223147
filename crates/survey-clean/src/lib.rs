//! Cleaning core for the health-survey dataset: categorical normalization,
//! age validation, and the normalize → dedup → filter pipeline.

pub mod normalize;
pub mod pipeline;
pub mod validate;

pub use normalize::{normalize_cancer_status, normalize_gender};
pub use pipeline::{CleanStats, clean, clean_with_stats};
pub use validate::{admissible_age, is_valid_age};
