use crate::{IssueRepository, RepositoryError};
use models::{Issue, IssueId, ReportInput};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Stores issues as a pretty-printed JSON array in a single file.
///
/// The file is read on every call, so several portal instances pointed at the
/// same path see each other's reports. A missing file is an empty store.
/// Writes go through a sibling temp file that is renamed into place, and a
/// file that fails to parse is never written over.
#[derive(Debug, Clone)]
pub struct JsonFileIssueRepository {
    path: PathBuf,
}

impl JsonFileIssueRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileIssueRepository { path: path.into() }
    }

    fn load(&self) -> Result<Vec<Issue>, RepositoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RepositoryError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| RepositoryError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, issues: &[Issue]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RepositoryError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(issues).map_err(RepositoryError::Encode)?;

        let temp_path = self.path.with_extension("json.tmp");
        write_synced(&temp_path, json.as_bytes())
            .map_err(|e| RepositoryError::io(&temp_path, e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(RepositoryError::io(&self.path, e));
        }

        Ok(())
    }
}

// Write and flush to disk, so a crash never leaves a half-written file to rename
fn write_synced(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

impl IssueRepository for JsonFileIssueRepository {
    fn add(&mut self, report: ReportInput) -> Result<IssueId, RepositoryError> {
        let mut issues = self.load()?;
        let issue = Issue::from_report(report);
        let id = issue.id;
        issues.push(issue);
        self.save(&issues)?;

        logging::debug(&format!(
            "Stored issue {} in {}",
            id.short(),
            self.path.display()
        ));
        Ok(id)
    }

    fn list(&self) -> Result<Vec<Issue>, RepositoryError> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let repo = JsonFileIssueRepository::new(dir.path().join("issues.json"));
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_reports_survive_reopening() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("issues.json");

        let mut repo = JsonFileIssueRepository::new(&path);
        let first = repo
            .add(ReportInput::new("Main St", "There is a large pothole here"))
            .unwrap();
        let second = repo
            .add(ReportInput::new("Library", "The front ramp handrail is loose"))
            .unwrap();

        let reopened = JsonFileIssueRepository::new(&path);
        let issues = reopened.list().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].id, first);
        assert_eq!(issues[1].id, second);
        assert_eq!(issues[1].description, "The front ramp handrail is loose");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_reported_and_left_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("issues.json");
        fs::write(&path, "{ not json").unwrap();

        let mut repo = JsonFileIssueRepository::new(&path);
        assert!(matches!(
            repo.list(),
            Err(RepositoryError::Corrupt { .. })
        ));
        assert!(matches!(
            repo.add(ReportInput::new("Main St", "There is a large pothole here")),
            Err(RepositoryError::Corrupt { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        // A non-empty directory where the store file should be cannot be
        // replaced by a rename
        let path = dir.path().join("issues.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let repo = JsonFileIssueRepository::new(&path);
        let result = repo.save(&[]);

        assert!(matches!(result, Err(RepositoryError::Io { .. })));
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_file_format_is_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("issues.json");
        let mut repo = JsonFileIssueRepository::new(&path);
        repo.add(ReportInput::new("Main St", "There is a large pothole here"))
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["location"], "Main St");
        assert_eq!(entries[0]["status"], "open");
        assert!(entries[0]["reported_at"].is_string());
    }
}
