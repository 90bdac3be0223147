//! Categorical value normalization.
//!
//! Both functions are total: any input, including empty cells, resolves to a
//! canonical fallback (`Other` / `Unknown`) rather than an error. This keeps
//! the pipeline free of data-dependent failures.

use survey_model::{CancerStatus, Gender};

/// Map a raw gender value to its canonical label.
///
/// Matching is exact after trimming and lowercasing: "m"/"male" and
/// "f"/"female" are the only recognized spellings. Everything else, from
/// misspellings to numerics to blank cells, becomes `Other`.
pub fn normalize_gender(raw: &str) -> Gender {
    let folded = raw.trim().to_lowercase();
    match folded.as_str() {
        "m" | "male" => Gender::Male,
        "f" | "female" => Gender::Female,
        _ => Gender::Other,
    }
}

/// Map a raw lung-cancer status to its canonical label.
///
/// Exact canonical labels short-circuit to themselves; everything else is a
/// substring match after trimming and lowercasing: "yes" anywhere wins, then
/// "no" anywhere, then `Unknown`. The yes check runs first, so a value
/// containing both ("no, yes") resolves to `Yes`.
pub fn normalize_cancer_status(raw: &str) -> CancerStatus {
    let folded = raw.trim().to_lowercase();
    // Exact canonical labels map to themselves before the substring rules
    // run: "unknown" contains "no", so a pure substring match would turn the
    // canonical Unknown label into No on a second pass.
    match folded.as_str() {
        "yes" => return CancerStatus::Yes,
        "no" => return CancerStatus::No,
        "unknown" => return CancerStatus::Unknown,
        _ => {}
    }
    if folded.contains("yes") {
        CancerStatus::Yes
    } else if folded.contains("no") {
        CancerStatus::No
    } else {
        CancerStatus::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_exact_matches() {
        for raw in ["m", "M", " male ", "MALE"] {
            assert_eq!(normalize_gender(raw), Gender::Male, "raw: {raw:?}");
        }
        for raw in ["f", "Female", "  F  "] {
            assert_eq!(normalize_gender(raw), Gender::Female, "raw: {raw:?}");
        }
    }

    #[test]
    fn gender_fallback() {
        for raw in ["", "unknown", "x", "mal e", "1", "nan"] {
            assert_eq!(normalize_gender(raw), Gender::Other, "raw: {raw:?}");
        }
    }

    #[test]
    fn cancer_status_substring_matches() {
        for raw in ["yes", "Yes", "YES please", "  yes  "] {
            assert_eq!(normalize_cancer_status(raw), CancerStatus::Yes, "raw: {raw:?}");
        }
        for raw in ["no", "NO", "definitely not, no"] {
            assert_eq!(normalize_cancer_status(raw), CancerStatus::No, "raw: {raw:?}");
        }
        for raw in ["", "maybe", "unsure", "nan"] {
            assert_eq!(
                normalize_cancer_status(raw),
                CancerStatus::Unknown,
                "raw: {raw:?}"
            );
        }
    }

    #[test]
    fn cancer_status_yes_precedes_no() {
        // A value containing both tokens resolves to Yes: the yes check runs
        // first and that ordering is part of the contract.
        assert_eq!(normalize_cancer_status("no, yes"), CancerStatus::Yes);
        assert_eq!(normalize_cancer_status("not sure, yes"), CancerStatus::Yes);
    }

    #[test]
    fn canonical_labels_are_fixed_points() {
        for status in [CancerStatus::Yes, CancerStatus::No, CancerStatus::Unknown] {
            assert_eq!(normalize_cancer_status(status.as_str()), status);
        }
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(normalize_gender(gender.as_str()), gender);
        }
    }
}
