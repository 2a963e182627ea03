//! Output management for CLI commands.
//!
//! Handles formatting and display for different output formats,
//! providing a unified interface for text and JSON output.

use crate::display::tables::create_summary_table;
use crate::error::IndexError;
use crate::indexing::BatchReport;
use crate::io::exit_code::ExitCode;
use crate::io::format::{JsonResponse, OutputFormat, ResponseMeta};
use crate::io::report::{ProjectReport, render_text};
use std::io::{self, Write};

/// Manages output formatting and display.
pub struct OutputManager {
    format: OutputFormat,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl OutputManager {
    /// Create a new output manager with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager for testing with custom writers.
    #[cfg(test)]
    pub fn new_with_writers(
        format: OutputFormat,
        stdout: Box<dyn Write>,
        stderr: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            stdout,
            stderr,
        }
    }

    /// Output an analyzed batch.
    ///
    /// JSON mode wraps the project report in a response envelope; text mode
    /// prints every unit followed by a summary table. Failed files go to
    /// stderr in text mode and into the payload in JSON mode.
    pub fn analysis(&mut self, project: &ProjectReport<'_>, batch: &BatchReport) -> io::Result<ExitCode> {
        let code = ExitCode::from_report(batch);

        match self.format {
            OutputFormat::Json => {
                let meta = ResponseMeta::now(batch.elapsed.as_millis() as u64);
                let response = if code.is_success() {
                    JsonResponse::success(project)
                } else {
                    JsonResponse::partial(project, batch.failure_count())
                };
                let response = response.with_meta(meta);
                writeln!(self.stdout, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                write!(self.stdout, "{}", render_text(&batch.units))?;
                writeln!(self.stdout, "{}", create_summary_table(&project.project_name, batch))?;
                for failure in batch.failures() {
                    writeln!(
                        self.stderr,
                        "Failed: {}: {}",
                        failure.file_path.display(),
                        failure.error_message.as_deref().unwrap_or("unknown error")
                    )?;
                }
            }
        }
        Ok(code)
    }

    /// Output an error with suggestions.
    pub fn error(&mut self, error: &IndexError) -> io::Result<ExitCode> {
        match self.format {
            OutputFormat::Json => {
                let response = JsonResponse::from_error(error);
                writeln!(self.stderr, "{}", serde_json::to_string_pretty(&response)?)?;
            }
            OutputFormat::Text => {
                writeln!(self.stderr, "Error: {error}")?;
                for suggestion in error.recovery_suggestions() {
                    writeln!(self.stderr, "  Suggestion: {suggestion}")?;
                }
            }
        }
        Ok(ExitCode::from_error(error))
    }

    /// Output informational message (text mode only).
    ///
    /// In JSON mode, messages are suppressed to avoid polluting the JSON output.
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if matches!(self.format, OutputFormat::Text) {
            writeln!(self.stderr, "{message}")?;
        }
        Ok(())
    }
}
