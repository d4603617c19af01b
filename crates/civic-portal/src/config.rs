// Where reported issues are kept
use repository::{InMemoryIssueRepository, IssueRepository, JsonFileIssueRepository};
use std::path::PathBuf;

/// Environment variable naming the issue store file
pub const STORE_ENV_VAR: &str = "CIVIC_PORTAL_STORE";

const STORE_FILE_NAME: &str = "issues.json";

/// The issue store a run should use
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    File(PathBuf),
    Ephemeral,
}

/// `<data_local_dir>/civic-portal/issues.json`, or `./issues.json` when the
/// platform has no data directory
pub fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("civic-portal").join(STORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
}

/// Pick the store from the command line. `store` already carries the
/// environment override when the flag was not given.
pub fn resolve_store(store: Option<PathBuf>, ephemeral: bool) -> StoreChoice {
    if ephemeral {
        StoreChoice::Ephemeral
    } else {
        StoreChoice::File(store.unwrap_or_else(default_store_path))
    }
}

pub fn open_repository(choice: &StoreChoice) -> Box<dyn IssueRepository> {
    match choice {
        StoreChoice::File(path) => {
            logging::debug(&format!("Using issue store {}", path.display()));
            Box::new(JsonFileIssueRepository::new(path.clone()))
        }
        StoreChoice::Ephemeral => {
            logging::debug("Using in-memory issue store; reports will not be saved");
            Box::new(InMemoryIssueRepository::new())
        }
    }
}
