// repository crate
//
// Storage for reported issues. The UI and CLI only talk to the
// IssueRepository trait, so the backing store can be swapped freely.

mod error;
mod json_file;
mod memory;

pub use error::RepositoryError;
pub use json_file::JsonFileIssueRepository;
pub use memory::InMemoryIssueRepository;

use models::{Issue, IssueId, ReportInput};

/// A store of reported issues
pub trait IssueRepository {
    /// Persist an accepted report as a new open issue and return its id.
    ///
    /// The store does not validate; callers are expected to have run the
    /// report through the validators first.
    fn add(&mut self, report: ReportInput) -> Result<IssueId, RepositoryError>;

    /// All stored issues in the order they were added
    fn list(&self) -> Result<Vec<Issue>, RepositoryError>;
}

impl<R: IssueRepository + ?Sized> IssueRepository for Box<R> {
    fn add(&mut self, report: ReportInput) -> Result<IssueId, RepositoryError> {
        (**self).add(report)
    }

    fn list(&self) -> Result<Vec<Issue>, RepositoryError> {
        (**self).list()
    }
}
