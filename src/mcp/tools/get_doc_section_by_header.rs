//! Header-addressed section tool handler

use super::handler::{run_blocking, McpToolHandler};
use super::helpers::{json_content, parse_args, positive_or};
use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct HeaderArgs {
    header: String,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    header_level: Option<usize>,
    #[serde(default)]
    max_lines: Option<i64>,
}

pub struct GetDocSectionByHeaderHandler {
    services: Arc<Services>,
}

impl GetDocSectionByHeaderHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetDocSectionByHeaderHandler {
    fn name(&self) -> &str {
        "get_doc_section_by_header"
    }

    fn schema(&self) -> ToolSchema {
        let config = &self.services.config;
        ToolSchema {
            name: "get_doc_section_by_header".to_string(),
            description: "Return the documentation section under a Markdown heading. The \
                         section runs from the heading to the next heading of the same or \
                         higher level (sub-headings are included) and is truncated to \
                         max_lines. Candidate files are shortlisted with a text search for \
                         the header, then the first exact (case-insensitive) heading match wins."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "header": {
                        "type": "string",
                        "description": "Heading text without '#' characters (e.g. 'Vision')"
                    },
                    "scope": {
                        "type": "string",
                        "description": "Scope to search (see list_scopes)",
                        "default": config.search.default_scope
                    },
                    "header_level": {
                        "type": "integer",
                        "description": "Exact heading level to require (2 means '## Header'). Omit to accept any level.",
                        "minimum": 1
                    },
                    "max_lines": {
                        "type": "integer",
                        "description": "Maximum section length in lines",
                        "default": config.sections.header_max_lines
                    }
                },
                "required": ["header"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: HeaderArgs = parse_args(args)?;
        let config = &self.services.config;

        let scope = args
            .scope
            .unwrap_or_else(|| config.search.default_scope.clone());
        let max_lines = positive_or(args.max_lines, config.sections.header_max_lines);

        let services = Arc::clone(&self.services);
        let slice = run_blocking(move || {
            services
                .section_by_header(&args.header, &scope, args.header_level, max_lines)
                .map_err(McpError::from)
        })
        .await?;

        json_content(&slice)
    }
}
