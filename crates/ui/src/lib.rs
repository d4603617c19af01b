// Terminal UI crate for civic-portal
//
// This crate is organized into several modules:
// - app: Contains the App state and the TUI entry point
// - models: Menu descriptors and report form state
// - components: Reusable widgets (buttons, text fields, progress bar)
// - handlers: Report submission glue between the UI and the issue store
// - utils: Layout helpers
// - views: Rendering code

pub mod app;
pub mod components;
pub mod handlers;
pub mod models;
pub mod utils;
pub mod views;

pub use app::run_portal_tui;
pub use handlers::report::{submit_report, SubmitError};
