//! Show docs config tool handler
//!
//! Returns the effective configuration of the running docscope-mcp server.

use super::handler::{text_content, McpToolHandler};
use crate::core::config::Config;
use crate::mcp::error::McpError;
use crate::mcp::protocol::{ToolResult, ToolSchema};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ShowDocsConfigHandler {
    config: Arc<Config>,
}

impl ShowDocsConfigHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn format_config(&self) -> String {
        let docs = &self.config.docs;
        let search = &self.config.search;
        let sections = &self.config.sections;

        let mut output = String::from("# docscope MCP Configuration\n\n");

        output.push_str("## Docs\n");
        output.push_str(&format!(
            "- **Repo Root:** {}\n",
            docs.repo_root.display()
        ));
        output.push_str(&format!(
            "- **Extensions:** {}\n",
            docs.extensions.join(", ")
        ));
        output.push_str(&format!(
            "- **Scopes:** {}\n\n",
            self.config.scope_names().join(", ")
        ));

        output.push_str("## Search\n");
        output.push_str(&format!("- **Default Scope:** {}\n", search.default_scope));
        output.push_str(&format!("- **Default Limit:** {}\n", search.default_limit));
        output.push_str(&format!("- **Fallback Limit:** {}\n", search.fallback_limit));
        output.push_str(&format!(
            "- **Header Candidates:** {}\n\n",
            search.header_candidates
        ));

        output.push_str("## Sections\n");
        output.push_str(&format!("- **Max Lines:** {}\n", sections.max_lines));
        output.push_str(&format!(
            "- **Header Max Lines:** {}\n",
            sections.header_max_lines
        ));

        output
    }

    fn format_config_detailed(&self) -> String {
        let mut output = self.format_config();

        output.push_str("\n## Scope Paths\n");
        for scope in &self.config.docs.scopes {
            let paths: Vec<String> = scope
                .paths
                .iter()
                .map(|p| format!("`{}`", p.display()))
                .collect();
            output.push_str(&format!("- **{}:** {}\n", scope.name, paths.join(", ")));
        }

        output
    }
}

#[async_trait]
impl McpToolHandler for ShowDocsConfigHandler {
    fn name(&self) -> &str {
        "show_docs_config"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "show_docs_config".to_string(),
            description: "Show the configuration of the running docscope-mcp server: \
                         repository root, scopes, search defaults and section limits."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "detailed": {
                        "type": "boolean",
                        "description": "Also list the paths of every scope",
                        "default": false
                    }
                },
                "required": []
            }),
        }
    }

    async fn execute(&self, args: Value) -> Result<ToolResult, McpError> {
        let detailed = args
            .get("detailed")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let text = if detailed {
            self.format_config_detailed()
        } else {
            self.format_config()
        };

        Ok(text_content(text))
    }
}
