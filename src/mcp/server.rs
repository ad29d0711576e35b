//! MCP server implementation

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info};

pub struct McpServer {
    transport: StdioTransport,
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            transport: StdioTransport::new(),
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    /// Run the MCP server until stdin closes or Ctrl+C
    pub async fn run(&mut self) -> Result<(), McpError> {
        info!("Starting docscope MCP server");

        let stdin = tokio::io::stdin();
        let mut reader = BufReader::new(stdin).lines();

        let mut shutdown = tokio::spawn(async {
            tokio::signal::ctrl_c().await.ok();
        });

        loop {
            tokio::select! {
                line = reader.next_line() => {
                    match line? {
                        Some(line) if !line.trim().is_empty() => {
                            self.process_and_respond(&line).await?;
                        }
                        None => break, // EOF
                        _ => continue,
                    }
                }

                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        info!("MCP server shutting down");
        Ok(())
    }

    async fn process_and_respond(&mut self, line: &str) -> Result<(), McpError> {
        debug!("Received: {}", line);

        let response = match process_message(&self.handlers, line).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error processing message: {}", e);
                let (code, message) = e.to_rpc();
                JsonRpcResponse::error(None, code, message)
            }
        };

        self.transport.send_response(response).await
    }
}

/// Parse one JSON-RPC line and route it to its handler
pub async fn process_message(
    handlers: &ProtocolHandlers,
    line: &str,
) -> Result<JsonRpcResponse, McpError> {
    let request: JsonRpcRequest =
        serde_json::from_str(line).map_err(|e| McpError::ParseError(e.to_string()))?;

    match request.method.as_str() {
        "initialize" => handlers.handle_initialize(request).await,
        "initialized" | "notifications/initialized" => handlers.handle_initialized(request).await,
        "notifications/cancelled" => handlers.handle_cancelled(request).await,
        "tools/list" => handlers.handle_tools_list(request).await,
        "tools/call" => handlers.handle_tools_call(request).await,
        "ping" => handlers.handle_ping(request).await,
        _ if request.id.is_none() => {
            debug!("Ignoring unknown notification: {}", request.method);
            Ok(JsonRpcResponse::empty())
        }
        _ => Ok(JsonRpcResponse::error(
            request.id,
            METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )),
    }
}
