//! Type-safe enumerations for the canonical categorical values.
//!
//! Raw survey exports carry free-text spellings of gender and lung-cancer
//! status. After cleaning, every cell holds one of the canonical labels
//! defined here, so downstream consumers (reporting, charting) can match
//! exhaustively instead of comparing strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical gender label.
///
/// Anything that is not an exact "m"/"male" or "f"/"female" match after
/// trimming and lowercasing collapses into `Other` — the normalizer never
/// fails on unexpected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    /// Fallback for empty, missing, numeric, or unrecognized values.
    Other,
}

impl Gender {
    /// Returns the canonical label as written into the cleaned dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a canonical label back into a `Gender` (case-insensitive).
    /// Only accepts the three canonical labels; raw survey values go through
    /// the normalizer instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            "OTHER" => Ok(Gender::Other),
            _ => Err(format!("Unknown canonical gender: {s}")),
        }
    }
}

/// Canonical lung-cancer status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CancerStatus {
    Yes,
    No,
    /// Fallback when neither "yes" nor "no" appears in the raw value.
    Unknown,
}

impl CancerStatus {
    /// Returns the canonical label as written into the cleaned dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            CancerStatus::Yes => "Yes",
            CancerStatus::No => "No",
            CancerStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CancerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CancerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YES" => Ok(CancerStatus::Yes),
            "NO" => Ok(CancerStatus::No),
            "UNKNOWN" => Ok(CancerStatus::Unknown),
            _ => Err(format!("Unknown canonical cancer status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_str() {
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("FEMALE".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("other".parse::<Gender>().unwrap(), Gender::Other);
        assert!("man".parse::<Gender>().is_err());
    }

    #[test]
    fn test_cancer_status_from_str() {
        assert_eq!("Yes".parse::<CancerStatus>().unwrap(), CancerStatus::Yes);
        assert_eq!("NO".parse::<CancerStatus>().unwrap(), CancerStatus::No);
        assert_eq!(
            "unknown".parse::<CancerStatus>().unwrap(),
            CancerStatus::Unknown
        );
        assert!("maybe".parse::<CancerStatus>().is_err());
    }

    #[test]
    fn test_labels_round_trip() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), gender);
        }
        for status in [CancerStatus::Yes, CancerStatus::No, CancerStatus::Unknown] {
            assert_eq!(status.as_str().parse::<CancerStatus>().unwrap(), status);
        }
    }
}
