//! Error types for the class dependency analyzer
//!
//! This module provides structured error types using thiserror for better
//! error handling and actionable error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for analysis operations
#[derive(Error, Debug)]
pub enum IndexError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    /// General errors for cases where we need to preserve existing behavior
    #[error("{0}")]
    General(String),
}

impl IndexError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::FileWrite { .. } => vec![
                "Check that the target directory exists and is writable",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'classdeps init --force' to regenerate the settings file",
            ],
            Self::General(_) => vec![],
        }
    }
}

/// Structural errors raised while parsing a token stream
///
/// The lexer never fails, so every parse error points at a token the
/// parser did not expect at that position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Failed to parse code at line {line}, column {column}: {reason}")]
    Syntax {
        line: u32,
        column: u32,
        reason: String,
    },

    #[error("Unexpected end of input at line {line} while looking for {expected}")]
    UnexpectedEof { line: u32, expected: String },
}

impl ParseError {
    /// Line of the offending token
    pub fn line(&self) -> u32 {
        match self {
            Self::Syntax { line, .. } | Self::UnexpectedEof { line, .. } => *line,
        }
    }
}

/// Result type alias for analysis operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
