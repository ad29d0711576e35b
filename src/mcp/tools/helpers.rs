//! Helper functions for MCP tools

use super::handler::text_content;
use crate::mcp::error::McpError;
use crate::mcp::protocol::ToolResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Deserialize tool arguments, reporting failures as invalid params
pub fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    // Tools without arguments may be called with `null`
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args).map_err(|e| McpError::InvalidParams(e.to_string()))
}

/// Serialize a result as pretty-printed JSON text content
pub fn json_content<T: Serialize>(value: &T) -> Result<ToolResult, McpError> {
    Ok(text_content(serde_json::to_string_pretty(value)?))
}

/// Replace a missing or non-positive count with a default
pub fn positive_or(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(v) if v > 0 => usize::try_from(v).unwrap_or(usize::MAX),
        _ => default,
    }
}
