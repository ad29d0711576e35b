//! MCP-specific error types

use crate::mcp::protocol::{
    DOC_NOT_FOUND, HEADER_NOT_FOUND, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST,
    LINE_OUT_OF_RANGE, PARSE_ERROR,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Tool error (code {0}): {1}")]
    ToolError(i32, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// JSON-RPC error code and message for this error
    pub fn to_rpc(&self) -> (i32, String) {
        match self {
            McpError::ParseError(msg) => (PARSE_ERROR, msg.clone()),
            McpError::InvalidRequest(msg) => (INVALID_REQUEST, msg.clone()),
            McpError::InvalidParams(msg) => (INVALID_PARAMS, msg.clone()),
            McpError::InternalError(msg) => (INTERNAL_ERROR, msg.clone()),
            McpError::ToolError(code, msg) => (*code, msg.clone()),
            McpError::Io(e) => (INTERNAL_ERROR, format!("I/O error: {e}")),
            McpError::Json(e) => (INTERNAL_ERROR, format!("JSON error: {e}")),
        }
    }
}

impl From<crate::core::error::DocsError> for McpError {
    fn from(err: crate::core::error::DocsError) -> Self {
        use crate::core::error::DocsError;
        match err {
            DocsError::UnknownScope { .. } => McpError::InvalidParams(err.to_string()),
            DocsError::FileNotFound(_) => McpError::ToolError(DOC_NOT_FOUND, err.to_string()),
            DocsError::HeaderNotFound { .. } => {
                McpError::ToolError(HEADER_NOT_FOUND, err.to_string())
            }
            DocsError::StartLineOutOfRange { .. } | DocsError::EndBeforeStart { .. } => {
                McpError::ToolError(LINE_OUT_OF_RANGE, err.to_string())
            }
            DocsError::ConfigError(s) => {
                McpError::InvalidParams(format!("Configuration error: {s}"))
            }
            DocsError::IoError(e) => McpError::InternalError(format!("I/O error: {e}")),
            DocsError::TomlError(e) => {
                McpError::InternalError(format!("Configuration parse error: {e}"))
            }
        }
    }
}
