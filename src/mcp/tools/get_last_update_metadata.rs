//! Corpus last-updated tool handler

use super::handler::{run_blocking, McpToolHandler};
use super::helpers::json_content;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetLastUpdateMetadataHandler {
    services: Arc<Services>,
}

impl GetLastUpdateMetadataHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetLastUpdateMetadataHandler {
    fn name(&self) -> &str {
        "get_last_update_metadata"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_last_update_metadata".to_string(),
            description: "Report when the documentation was last modified: the newest \
                         Markdown file across all scopes by filesystem modification time. \
                         Returns repo_root, last_modified_iso (UTC), last_modified_unix and \
                         last_modified_file. Does not require git."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        let services = Arc::clone(&self.services);
        let report = run_blocking(move || services.last_updated().map_err(McpError::from)).await?;
        json_content(&report)
    }
}
