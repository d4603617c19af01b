use crate::{IssueRepository, RepositoryError};
use models::{Issue, IssueId, ReportInput};

/// Keeps issues in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryIssueRepository {
    issues: Vec<Issue>,
}

impl InMemoryIssueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl IssueRepository for InMemoryIssueRepository {
    fn add(&mut self, report: ReportInput) -> Result<IssueId, RepositoryError> {
        let issue = Issue::from_report(report);
        let id = issue.id;
        self.issues.push(issue);
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Issue>, RepositoryError> {
        Ok(self.issues.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::IssueStatus;

    #[test]
    fn test_add_then_list_in_order() {
        let mut repo = InMemoryIssueRepository::new();
        let first = repo
            .add(ReportInput::new("Main St", "There is a large pothole here"))
            .unwrap();
        let second = repo
            .add(ReportInput::new("Elm Park", "Overflowing bins near the playground"))
            .unwrap();

        assert_ne!(first, second);

        let issues = repo.list().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].id, first);
        assert_eq!(issues[0].location, "Main St");
        assert_eq!(issues[1].id, second);
        assert!(issues.iter().all(|i| i.status == IssueStatus::Open));
    }

    #[test]
    fn test_starts_empty() {
        let repo = InMemoryIssueRepository::new();
        assert!(repo.is_empty());
        assert!(repo.list().unwrap().is_empty());
    }
}
