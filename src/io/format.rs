//! Format definitions for CLI output.
//!
//! Provides the output format switch and the JSON envelope every JSON
//! response is wrapped in.

use crate::error::IndexError;
use crate::io::exit_code::ExitCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    Text,
    /// JSON for tool integration
    Json,
}

impl FromStr for OutputFormat {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(IndexError::ConfigError {
                reason: format!("unknown output format '{other}', expected 'text' or 'json'"),
            }),
        }
    }
}

/// Standard JSON response format.
///
/// Provides consistent structure for both success and error responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonResponse<T = serde_json::Value>
where
    T: Serialize,
{
    /// Status: "success", "partial" or "error"
    pub status: String,

    /// Result code (e.g., "OK", "PARSE_ERROR")
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Actual data payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error details and suggestions (only for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,

    /// Exit code for shell scripts
    pub exit_code: u8,

    /// Metadata (execution time, version, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

/// Error details for JSON responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Recovery suggestions
    pub suggestions: Vec<String>,
}

/// Response metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Version of the tool
    pub version: String,
    /// Timestamp of the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Execution time in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ResponseMeta {
    /// Metadata stamped with the crate version and the current time
    pub fn now(execution_time_ms: u64) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Some(format_utc_timestamp()),
            execution_time_ms: Some(execution_time_ms),
        }
    }
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    /// Create a success response with data.
    pub fn success(data: T) -> Self {
        Self {
            status: "success".to_string(),
            code: "OK".to_string(),
            message: "Operation completed successfully".to_string(),
            data: Some(data),
            error: None,
            exit_code: ExitCode::Success as u8,
            meta: None,
        }
    }

    /// Create a response for a batch where some files failed to parse.
    ///
    /// The data is still complete for every file that did parse.
    pub fn partial(data: T, failed: usize) -> Self {
        Self {
            status: "partial".to_string(),
            code: "PARSE_ERROR".to_string(),
            message: format!("{failed} file(s) failed to parse"),
            data: Some(data),
            error: None,
            exit_code: ExitCode::ParseError as u8,
            meta: None,
        }
    }

    /// Add metadata to the response.
    pub fn with_meta(mut self, meta: ResponseMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl JsonResponse<serde_json::Value> {
    /// Create an error response from IndexError.
    pub fn from_error(error: &IndexError) -> Self {
        Self {
            status: "error".to_string(),
            code: error.status_code(),
            message: error.to_string(),
            data: None,
            error: Some(ErrorDetails {
                suggestions: error
                    .recovery_suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
            exit_code: ExitCode::from_error(error) as u8,
            meta: None,
        }
    }
}

/// Format current time as UTC timestamp string.
///
/// Returns a string in the format "YYYY-MM-DD HH:MM:SS UTC".
///
/// # Example
/// ```
/// use classdeps::io::format::format_utc_timestamp;
///
/// let timestamp = format_utc_timestamp();
/// assert!(timestamp.ends_with(" UTC"));
/// ```
pub fn format_utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
