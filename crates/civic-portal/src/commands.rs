// Non-interactive commands behind the CLI subcommands
use models::{Issue, IssueId, ReportInput};
use repository::{IssueRepository, RepositoryError};
use ui::{submit_report, SubmitError};
use validators::{validate_report, ValidationError};

/// Validate and store a report given on the command line
pub fn report(
    repository: &mut dyn IssueRepository,
    location: &str,
    description: &str,
) -> Result<IssueId, SubmitError> {
    submit_report(repository, ReportInput::new(location, description))
}

/// Validate a report without storing it
pub fn check(location: &str, description: &str) -> Result<(), ValidationError> {
    validate_report(location, description)
}

/// One line per issue: short id, status, time, location and summary
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{}  {:<11}  {}  {}: {}",
        issue.id.short(),
        issue.status.label(),
        issue.reported_at.format("%Y-%m-%d %H:%M"),
        issue.location.trim(),
        issue.summary()
    )
}

/// Listing lines for every stored issue, oldest first
pub fn list(repository: &dyn IssueRepository) -> Result<Vec<String>, RepositoryError> {
    Ok(repository.list()?.iter().map(format_issue_line).collect())
}
