use civic_portal_lib::{
    commands,
    config::{open_repository, resolve_store, StoreChoice},
};
use tempfile::tempdir;
use ui::SubmitError;

const POTHOLE: &str = "There is a large pothole here";

#[test]
fn test_report_then_list_from_file_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("issues.json");
    let store = resolve_store(Some(path.clone()), false);
    assert_eq!(store, StoreChoice::File(path.clone()));

    let mut repository = open_repository(&store);
    let id = commands::report(&mut *repository, "Main St", POTHOLE).unwrap();

    // A fresh handle reads what the first one wrote
    let reopened = open_repository(&store);
    let lines = commands::list(&*reopened).unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with(&id.short()));
    assert!(lines[0].contains("Open"));
    assert!(lines[0].contains("Main St: There is a large pothole here"));
}

#[test]
fn test_rejected_report_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("issues.json");
    let mut repository = open_repository(&StoreChoice::File(path.clone()));

    let err = commands::report(&mut *repository, "", "irrelevant").unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(err.to_string(), "Please specify a location for the issue.");
    assert!(!path.exists());

    let err = commands::report(&mut *repository, "Main St", "too short").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please provide a detailed description (at least 20 characters)."
    );
    assert!(commands::list(&*repository).unwrap().is_empty());
}

#[test]
fn test_ephemeral_store_forgets_between_handles() {
    let store = resolve_store(None, true);
    let mut repository = open_repository(&store);
    commands::report(&mut *repository, "Main St", POTHOLE).unwrap();
    assert_eq!(commands::list(&*repository).unwrap().len(), 1);

    let other = open_repository(&store);
    assert!(commands::list(&*other).unwrap().is_empty());
}

#[test]
fn test_check_scenarios() {
    assert_eq!(
        commands::check("", "irrelevant").unwrap_err().to_string(),
        "Please specify a location for the issue."
    );
    assert_eq!(
        commands::check("Main St", "too short")
            .unwrap_err()
            .to_string(),
        "Please provide a detailed description (at least 20 characters)."
    );
    assert!(commands::check("Main St", POTHOLE).is_ok());
}
