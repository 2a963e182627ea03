//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - every discovered file parsed
//! - `1`: General error - unspecified failure
//! - `4`: At least one file failed to parse (the rest were still analyzed)
//! - `5`: File I/O error
//! - `6`: Configuration error

use crate::error::IndexError;
use crate::indexing::BatchReport;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Failed to parse files (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Exit code for a finished batch: `ParseError` if any file failed.
    pub fn from_report(report: &BatchReport) -> Self {
        if report.failure_count() > 0 {
            ExitCode::ParseError
        } else {
            ExitCode::Success
        }
    }

    /// Convert an `IndexError` to the appropriate exit code.
    pub fn from_error(error: &IndexError) -> Self {
        match error {
            IndexError::FileRead { .. } | IndexError::FileWrite { .. } => ExitCode::IoError,
            IndexError::ConfigError { .. } => ExitCode::ConfigError,
            IndexError::General(_) => ExitCode::GeneralError,
        }
    }

    /// Check if this exit code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }
}
