use std::path::PathBuf;

use survey_clean::CleanStats;

#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// None on --dry-run.
    pub output: Option<PathBuf>,
    pub stats: CleanStats,
}
