//! MCP protocol method handlers

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::tools::{
    GetDocSectionByHeaderHandler, GetDocSectionHandler, GetLastUpdateMetadataHandler,
    GetServerInfoHandler, ListDocFilesHandler, ListScopesHandler, SearchDocsHandler,
    ShowDocsConfigHandler, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = ToolRegistry::new();

        registry.register(Arc::new(ListScopesHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(SearchDocsHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetDocSectionHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetDocSectionByHeaderHandler::new(Arc::clone(
            &services,
        ))));
        registry.register(Arc::new(ListDocFilesHandler::new(Arc::clone(&services))));
        registry.register(Arc::new(GetLastUpdateMetadataHandler::new(Arc::clone(
            &services,
        ))));
        registry.register(Arc::new(GetServerInfoHandler::new()));
        registry.register(Arc::new(ShowDocsConfigHandler::new(Arc::clone(
            &services.config,
        ))));

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params {
            Some(Value::Null) | None => InitializeParams::default(),
            Some(v) => serde_json::from_value(v)
                .map_err(|e| McpError::InvalidParams(format!("Invalid initialize params: {e}")))?,
        };

        match &params.client_info {
            Some(client) => info!(
                "Client initialized: {} {}",
                client.name,
                client.version.as_deref().unwrap_or("")
            ),
            None => info!("Client initialized"),
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: "docscope-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        // Notification, nothing is written back
        Ok(JsonRpcResponse::empty())
    }

    /// Handle notifications/cancelled
    ///
    /// Tool calls run to completion, so there is nothing to cancel.
    pub async fn handle_cancelled(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        debug!("Cancellation notice ignored: {:?}", request.params);
        Ok(JsonRpcResponse::empty())
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(JsonRpcResponse::success(request.id, json!({ "tools": tools })))
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params_value = match request.params.clone() {
            Some(v) => v,
            None => {
                return Ok(JsonRpcResponse::error(
                    request.id,
                    INVALID_PARAMS,
                    "Missing params".to_string(),
                ));
            }
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(JsonRpcResponse::error(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let handler = match self.tool_registry.get(&params.name) {
            Some(h) => h,
            None => {
                return Ok(JsonRpcResponse::error(
                    request.id,
                    INVALID_REQUEST,
                    format!("Tool not found: {}", params.name),
                ));
            }
        };

        debug!("Calling tool {}", params.name);

        match handler.execute(params.arguments).await {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id,
                serde_json::to_value(result)?,
            )),
            Err(e) => {
                let (code, message) = e.to_rpc();
                debug!("Tool {} failed ({}): {}", params.name, code, message);
                Ok(JsonRpcResponse::error(request.id, code, message))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }
}
