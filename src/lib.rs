//! docscope - Read-only search and retrieval over Markdown documentation
//!
//! Groups a local Markdown corpus into named scopes and answers
//! free-text line searches, line-range slices, header-addressed
//! sections and corpus metadata queries. Every answer is computed
//! fresh from disk; there is no index to keep in sync.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg, logging
//!   - scope (scope registry)
//!   - corpus (file walking, enumeration, last-updated metadata)
//!   - search (stop-early line search)
//!   - sections (line ranges, header sections)
//!   - services (unified service container)
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - server, tools, protocol
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting

// Core domain logic (protocol-agnostic)
pub mod core;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{DocsError, Result};
pub use core::services::Services;
pub use core::types::*;
