//! Tool registry for managing MCP tools

use super::handler::McpToolHandler;
use crate::mcp::protocol::ToolSchema;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for all available MCP tools
///
/// Tool schemas are listed in name order so `tools/list` output is
/// stable across runs.
pub struct ToolRegistry {
    handlers: HashMap<String, Arc<dyn McpToolHandler>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a tool handler, replacing any handler with the same name
    pub fn register(&mut self, handler: Arc<dyn McpToolHandler>) {
        let name = handler.name().to_string();
        if self.handlers.insert(name.clone(), handler).is_some() {
            tracing::warn!("Tool '{}' registered twice, keeping the latest", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpToolHandler>> {
        self.handlers.get(name)
    }

    /// All tool schemas, sorted by tool name
    pub fn list(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .handlers
            .values()
            .map(|handler| handler.schema())
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
