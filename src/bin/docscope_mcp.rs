//! docscope MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes the documentation search and
//! retrieval operations as tools for MCP clients.

use docscope::core::config::Config;
use docscope::core::logging::init_logging;
use docscope::core::services::Services;
use docscope::mcp::McpServer;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Logs go to stderr; stdout is the protocol channel
    init_logging("docscope=info");

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    let services = match Services::new(config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("Failed to initialize services: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Serving {} scope(s) from {:?}",
        services.scopes.names().len(),
        services.scopes.repo_root()
    );

    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
