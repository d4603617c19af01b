// validators crate

mod completeness;
mod report;

pub use completeness::report_completeness;
pub use report::{validate_input, validate_report, ValidationError, MIN_DESCRIPTION_CHARS};
