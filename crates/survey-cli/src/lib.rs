//! Shared CLI infrastructure for the survey cleaner.

pub mod logging;
