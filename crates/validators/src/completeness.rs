use crate::report::MIN_DESCRIPTION_CHARS;

/// How far along a report is, from 0.0 to 1.0.
///
/// Half comes from having a location and half from the description length,
/// capped at the minimum length. Only drives the progress bar on the form.
pub fn report_completeness(location: &str, description: &str) -> f64 {
    let location_part = if location.trim().is_empty() { 0.0 } else { 0.5 };

    let description_chars = if description.trim().is_empty() {
        0
    } else {
        description.chars().count().min(MIN_DESCRIPTION_CHARS)
    };
    let description_part = 0.5 * description_chars as f64 / MIN_DESCRIPTION_CHARS as f64;

    location_part + description_part
}
