use models::ReportInput;
use thiserror::Error;

/// Shortest description accepted for a report, in characters
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Reason a report was turned away. The message is shown to the resident as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please specify a location for the issue.")]
    MissingLocation,
    #[error("Please provide a detailed description (at least 20 characters).")]
    DescriptionTooShort,
}

/// Decide whether a report may be submitted.
///
/// Rules are checked in order and the first failure is returned: the location
/// must not be blank, then the description must not be blank and must have at
/// least [`MIN_DESCRIPTION_CHARS`] characters. The length is the raw character
/// count, surrounding whitespace included.
pub fn validate_report(location: &str, description: &str) -> Result<(), ValidationError> {
    if location.trim().is_empty() {
        return Err(ValidationError::MissingLocation);
    }

    if description.trim().is_empty() || description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooShort);
    }

    Ok(())
}

pub fn validate_input(input: &ReportInput) -> Result<(), ValidationError> {
    validate_report(&input.location, &input.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATION_MSG: &str = "Please specify a location for the issue.";
    const DESCRIPTION_MSG: &str =
        "Please provide a detailed description (at least 20 characters).";

    #[test]
    fn test_missing_location() {
        let err = validate_report("", "irrelevant").unwrap_err();
        assert_eq!(err, ValidationError::MissingLocation);
        assert_eq!(err.to_string(), LOCATION_MSG);
    }

    #[test]
    fn test_location_checked_before_description() {
        for location in ["", " ", "\t\n", "   "] {
            for description in ["", "short", "There is a large pothole here"] {
                assert_eq!(
                    validate_report(location, description),
                    Err(ValidationError::MissingLocation),
                    "location {:?}, description {:?}",
                    location,
                    description
                );
            }
        }
    }

    #[test]
    fn test_short_description() {
        let err = validate_report("Main St", "too short").unwrap_err();
        assert_eq!(err, ValidationError::DescriptionTooShort);
        assert_eq!(err.to_string(), DESCRIPTION_MSG);
    }

    #[test]
    fn test_empty_description() {
        assert_eq!(
            validate_report("Main St", ""),
            Err(ValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn test_whitespace_description_fails_even_when_long() {
        let blank = " ".repeat(25);
        assert_eq!(
            validate_report("Main St", &blank),
            Err(ValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn test_valid_report() {
        assert_eq!(
            validate_report("Main St", "There is a large pothole here"),
            Ok(())
        );
    }

    #[test]
    fn test_description_length_boundary() {
        let exactly = "a".repeat(MIN_DESCRIPTION_CHARS);
        let one_short = "a".repeat(MIN_DESCRIPTION_CHARS - 1);
        assert_eq!(validate_report("Main St", &exactly), Ok(()));
        assert_eq!(
            validate_report("Main St", &one_short),
            Err(ValidationError::DescriptionTooShort)
        );
    }

    #[test]
    fn test_length_counts_untrimmed_characters() {
        // 17 visible characters, padded with spaces
        let padded = " broken bench seat ";
        assert_eq!(padded.chars().count(), 19);
        assert!(validate_report("Park", padded).is_err());
        assert_eq!(validate_report("Park", " broken bench seat  "), Ok(()));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 19 characters but more than 20 bytes
        let accented = "ééééééééééééééééééé";
        assert_eq!(accented.chars().count(), 19);
        assert!(accented.len() > MIN_DESCRIPTION_CHARS);
        assert!(validate_report("Rue Centrale", accented).is_err());
    }

    #[test]
    fn test_validation_is_repeatable() {
        let input = ReportInput::new("Main St", "too short");
        assert_eq!(validate_input(&input), validate_input(&input));

        let input = ReportInput::new("Main St", "There is a large pothole here");
        assert_eq!(validate_input(&input), Ok(()));
        assert_eq!(validate_input(&input), Ok(()));
    }
}
