// Event handlers that reach outside the UI
pub mod report;
