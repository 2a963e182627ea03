//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Unified output formatting (text, JSON)
//! - Report rendering and the failure log
//! - Consistent error handling and exit codes

pub mod exit_code;
pub mod format;
pub mod output;
pub mod report;

pub use exit_code::ExitCode;
pub use format::{ErrorDetails, JsonResponse, OutputFormat, ResponseMeta};
pub use output::OutputManager;
pub use report::{
    ProjectReport, project_name, render_json, render_text, report_file_name, write_failure_log,
};
