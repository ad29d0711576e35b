//! MCP (Model Context Protocol) server module
//!
//! A JSON-RPC 2.0 server over stdio that exposes the docscope
//! operations as MCP tools. Tool results are the engine's data
//! structures serialized as JSON text.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

// Re-export main types
pub use error::McpError;
pub use handlers::ProtocolHandlers;
pub use server::{process_message, McpServer};
pub use tools::{McpToolHandler, ToolRegistry};
