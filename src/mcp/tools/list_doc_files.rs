//! List doc files tool handler

use super::handler::{run_blocking, McpToolHandler};
use super::helpers::{json_content, parse_args};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct ListArgs {
    scope: String,
}

pub struct ListDocFilesHandler {
    services: Arc<Services>,
}

impl ListDocFilesHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ListDocFilesHandler {
    fn name(&self) -> &str {
        "list_doc_files"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_doc_files".to_string(),
            description: "List the Markdown files of a scope as paths relative to the \
                         repository root, sorted and without duplicates."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "scope": {
                        "type": "string",
                        "description": "Scope to list (see list_scopes)"
                    }
                },
                "required": ["scope"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: ListArgs = parse_args(args)?;

        let services = Arc::clone(&self.services);
        let files = run_blocking(move || {
            services.list_files(&args.scope).map_err(McpError::from)
        })
        .await?;

        let relative: Vec<&str> = files.iter().map(|f| f.relative.as_str()).collect();
        json_content(&relative)
    }
}
