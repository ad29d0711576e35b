//! Line-range section tool handler

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
struct SectionArgs {
    file: String,
    start_line: i64,
    #[serde(default)]
    end_line: Option<i64>,
    #[serde(default)]
    max_lines: Option<i64>,
}

pub struct GetDocSectionHandler {
    services: Arc<Services>,
}

impl GetDocSectionHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for GetDocSectionHandler {
    fn name(&self) -> &str {
        "get_doc_section"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_doc_section".to_string(),
            description: "Return a slice of a documentation file by 1-based inclusive line \
                         numbers. Without end_line a window of max_lines lines is returned. \
                         The reported end_line is clamped to the file length."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "file": {
                        "type": "string",
                        "description": "Path relative to the repository root (e.g. 'openai-docs-unified.md')"
                    },
                    "start_line": {
                        "type": "integer",
                        "description": "First line to include (1-based). Values below 1 are treated as 1."
                    },
                    "end_line": {
                        "type": "integer",
                        "description": "Last line to include (1-based, inclusive). Optional."
                    },
                    "max_lines": {
                        "type": "integer",
                        "description": "Window size used when end_line is omitted",
                        "default": self.services.config.sections.max_lines
                    }
                },
                "required": ["file", "start_line"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SectionArgs = parse_args(args)?;
        let max_lines = positive_or(args.max_lines, self.services.config.sections.max_lines);

        let services = Arc::clone(&self.services);
        let slice = run_blocking(move || {
            services
                .read_section(&args.file, args.start_line, args.end_line, max_lines)
                .map_err(McpError::from)
        })
        .await?;

        json_content(&slice)
    }
}
