//! Search docs tool handler

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
struct SearchArgs {
    query: String,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    limit: Option<i64>,
}

pub struct SearchDocsHandler {
    services: Arc<Services>,
}

impl SearchDocsHandler {
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl McpToolHandler for SearchDocsHandler {
    fn name(&self) -> &str {
        "search_docs"
    }

    fn schema(&self) -> ToolSchema {
        let search = &self.services.config.search;
        ToolSchema {
            name: "search_docs".to_string(),
            description: "Case-insensitive substring search over the Markdown files of a scope. \
                         Returns matching lines as {file, line, snippet} with 1-based line \
                         numbers, ordered by file path then line. Results are NOT ranked: \
                         scanning stops once `limit` hits are collected, so later files may \
                         not be reached. Use get_doc_section to read around a hit."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Free-text search string. Empty queries return no results."
                    },
                    "scope": {
                        "type": "string",
                        "description": "Scope to search (see list_scopes)",
                        "default": search.default_scope
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of matches. Non-positive values use the default.",
                        "default": search.default_limit
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let args: SearchArgs = parse_args(args)?;
        let search = &self.services.config.search;

        let scope = args.scope.unwrap_or_else(|| search.default_scope.clone());
        let limit = positive_or(args.limit, search.default_limit);
        let query = args.query.trim().to_string();

        let services = Arc::clone(&self.services);
        let hits = run_blocking(move || {
            services
                .search(&scope, &query, limit as i64)
                .map_err(McpError::from)
        })
        .await?;

        json_content(&hits)
    }
}
