use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The (location, description) pair a resident submits from the report form.
///
/// A report input only lives for one submission attempt. It is turned into an
/// [`Issue`] by the issue store once it has passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportInput {
    pub location: String,
    pub description: String,
}

impl ReportInput {
    pub fn new(location: impl Into<String>, description: impl Into<String>) -> Self {
        ReportInput {
            location: location.into(),
            description: description.into(),
        }
    }
}

/// Identifier assigned to an issue by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(Uuid);

impl IssueId {
    pub fn new() -> Self {
        IssueId(Uuid::new_v4())
    }

    /// First eight hex characters, enough to tell issues apart on screen
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for IssueId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a reported issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In progress",
            IssueStatus::Resolved => "Resolved",
        }
    }
}

/// A persisted municipal issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub location: String,
    pub description: String,
    pub reported_at: DateTime<Local>,
    pub status: IssueStatus,
}

impl Issue {
    /// Build a freshly reported issue from an accepted report
    pub fn from_report(report: ReportInput) -> Self {
        Issue {
            id: IssueId::new(),
            location: report.location,
            description: report.description,
            reported_at: Local::now(),
            status: IssueStatus::Open,
        }
    }

    /// First non-blank line of the description, used in compact listings
    pub fn summary(&self) -> &str {
        self.description
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}
