//! Get server info tool handler
//!
//! Returns version and build information about the running docscope-mcp server.

use super::handler::{text_content, McpToolHandler};
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema, PROTOCOL_VERSION};
use async_trait::async_trait;
use serde_json::{json, Value};

const TOOLS: &[(&str, &str)] = &[
    ("list_scopes", "List documentation scopes"),
    ("search_docs", "Substring search within a scope (stop-early, unranked)"),
    ("get_doc_section", "Read a file slice by line numbers"),
    ("get_doc_section_by_header", "Read the section under a Markdown heading"),
    ("list_doc_files", "List the Markdown files of a scope"),
    ("get_last_update_metadata", "Newest modification time across the corpus"),
    ("get_server_info", "Show server version (this tool)"),
    ("show_docs_config", "Show current configuration"),
];

pub struct GetServerInfoHandler;

impl Default for GetServerInfoHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GetServerInfoHandler {
    pub fn new() -> Self {
        Self
    }

    fn format_info(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let rust_version = env!("CARGO_PKG_RUST_VERSION");

        let mut output = String::from("# docscope MCP Server Information\n\n");

        output.push_str("## Version\n");
        output.push_str(&format!("- **Version:** {version}\n"));
        output.push_str(&format!("- **Rust Version:** {rust_version}\n\n"));

        output.push_str("## Server Details\n");
        output.push_str("- **Name:** docscope-mcp\n");
        output.push_str("- **Description:** Markdown documentation search and retrieval\n");
        output.push_str(&format!("- **Protocol:** MCP {PROTOCOL_VERSION}\n\n"));

        output.push_str("## Available Tools\n");
        for (name, summary) in TOOLS {
            output.push_str(&format!("- {name}: {summary}\n"));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for GetServerInfoHandler {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_server_info".to_string(),
            description: "Get version information about the running docscope-mcp server: \
                         server version, protocol version and available tools."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        Ok(text_content(self.format_info()))
    }
}
