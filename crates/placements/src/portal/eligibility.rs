/// CGPA gate for a job posting, inclusive at the boundary. A missing value on
/// either side fails closed to "not eligible" rather than erroring.
///
/// The check is informational: an ineligible student can still apply, the
/// submission just carries a warning.
pub fn is_eligible(student_cgpa: Option<f64>, minimum_cgpa: Option<f64>) -> bool {
    match (student_cgpa, minimum_cgpa) {
        (Some(student), Some(minimum)) => student >= minimum,
        _ => false,
    }
}

/// Coerce free text to a CGPA value. Empty or non-numeric input yields `None`.
pub fn parse_cgpa(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Text-input variant of [`is_eligible`] for CLI and form values.
pub fn is_eligible_raw(student_cgpa: &str, minimum_cgpa: &str) -> bool {
    is_eligible(parse_cgpa(student_cgpa), parse_cgpa(minimum_cgpa))
}
