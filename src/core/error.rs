//! Error types and error handling for the docscope engine.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for docscope operations
pub type Result<T> = std::result::Result<T, DocsError>;

/// Main error type for the docscope engine
#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Unknown scope: '{scope}'. Valid scopes: {}", .valid.join(", "))]
    UnknownScope { scope: String, valid: Vec<String> },

    #[error("Docs file not found: {0}")]
    FileNotFound(String),

    #[error(
        "Unable to find header '{header}' at {} in scope '{scope}'",
        level_desc(.level)
    )]
    HeaderNotFound {
        header: String,
        level: Option<usize>,
        scope: String,
    },

    #[error("start_line {start_line} is beyond end of file (file has {total_lines} lines)")]
    StartLineOutOfRange {
        start_line: usize,
        total_lines: usize,
    },

    #[error("end_line {end_line} must be >= start_line {start_line}")]
    EndBeforeStart { start_line: usize, end_line: i64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

fn level_desc(level: &Option<usize>) -> String {
    match level {
        Some(l) => format!("level {l}"),
        None => "any level".to_string(),
    }
}

impl DocsError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocsError::FileNotFound(_) | DocsError::HeaderNotFound { .. }
        )
    }

    /// Check if this is a line range error (caller can self-correct)
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            DocsError::StartLineOutOfRange { .. } | DocsError::EndBeforeStart { .. }
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocsError::UnknownScope { .. } | DocsError::ConfigError(_)
        )
    }
}
