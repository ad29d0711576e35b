//! List scopes tool handler

use super::handler::McpToolHandler;
use super::helpers::json_content;
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ListScopesHandler {
    services: Arc<Services>,
}

impl ListScopesHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for ListScopesHandler {
    fn name(&self) -> &str {
        "list_scopes"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_scopes".to_string(),
            description: "Return all available documentation scopes in configuration order. \
                         A scope is a named set of Markdown files (e.g. 'unified', 'api', \
                         'guides'). Pass one of these names to search_docs, list_doc_files \
                         or get_doc_section_by_header."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        }
    }

    async fn execute(&self, _args: Value) -> Result<ToolResult, McpError> {
        json_content(&self.services.list_scopes())
    }
}
