// Report submission handling
use models::{IssueId, ReportInput};
use repository::{IssueRepository, RepositoryError};
use thiserror::Error;
use validators::{validate_input, ValidationError};

/// Why a submitted report did not end up in the store
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Could not save the issue: {0}")]
    Store(#[from] RepositoryError),
}

/// Validate a report and, if it passes, hand it to the issue store.
///
/// Nothing is written when validation fails. Used by both the form's submit
/// button and the `report` command.
pub fn submit_report<R>(repository: &mut R, input: ReportInput) -> Result<IssueId, SubmitError>
where
    R: IssueRepository + ?Sized,
{
    if let Err(e) = validate_input(&input) {
        logging::warning(&format!("Report rejected: {}", e));
        return Err(e.into());
    }

    let location = input.location.trim().to_string();
    match repository.add(input) {
        Ok(id) => {
            logging::info(&format!("Issue {} reported at '{}'", id.short(), location));
            Ok(id)
        }
        Err(e) => {
            logging::error(&format!("Failed to store issue at '{}': {}", location, e));
            Err(e.into())
        }
    }
}
