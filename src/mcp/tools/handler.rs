//! Tool handler trait and shared execution helpers

use crate::mcp::error::McpError;
use crate::mcp::protocol::{ContentBlock, ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::Value;

/// Trait for MCP tool implementations
///
/// Each tool (search_docs, list_scopes, etc.) implements this trait
/// to provide schema and execution logic.
#[async_trait]
pub trait McpToolHandler: Send + Sync {
    /// Tool name (e.g., "search_docs")
    fn name(&self) -> &str;

    /// Tool schema for tools/list
    fn schema(&self) -> ToolSchema;

    /// Execute tool with arguments
    async fn execute(&self, args: Value) -> Result<ToolResult, McpError>;
}

/// Wrap plain text in a tool result
pub fn text_content(text: String) -> ToolResult {
    ToolResult {
        content: vec![ContentBlock::Text { text }],
    }
}

/// Run blocking engine work off the async reactor
///
/// The engine reads files synchronously; large scopes would otherwise
/// stall the stdin loop.
pub async fn run_blocking<T, F>(work: F) -> Result<T, McpError>
where
    F: FnOnce() -> Result<T, McpError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| McpError::InternalError(format!("Tool task failed: {e}")))?
}
