//! Age admissibility checks.

/// True iff the age is biologically plausible: strictly between 0 and 120.
/// Both bounds are exclusive, so 0 and 120 themselves are rejected.
pub fn is_valid_age(age: f64) -> bool {
    age > 0.0 && age < 120.0
}

/// Parse a raw age cell and return it only when admissible.
///
/// Missing, non-numeric, and NaN values all come back as `None` so the
/// pipeline can drop the row without ever panicking on a bad cell.
pub fn admissible_age(raw: &str) -> Option<f64> {
    let age = raw.trim().parse::<f64>().ok()?;
    if age.is_nan() || !is_valid_age(age) {
        return None;
    }
    Some(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_law() {
        assert!(!is_valid_age(0.0));
        assert!(!is_valid_age(120.0));
        assert!(is_valid_age(1.0));
        assert!(is_valid_age(119.0));
        assert!(!is_valid_age(-5.0));
    }

    #[test]
    fn parses_numeric_ages() {
        assert_eq!(admissible_age("45"), Some(45.0));
        assert_eq!(admissible_age(" 62.5 "), Some(62.5));
    }

    #[test]
    fn rejects_missing_and_malformed() {
        assert_eq!(admissible_age(""), None);
        assert_eq!(admissible_age("forty"), None);
        assert_eq!(admissible_age("NaN"), None);
        assert_eq!(admissible_age("150"), None);
        assert_eq!(admissible_age("0"), None);
        assert_eq!(admissible_age("-5"), None);
    }
}
