//! Core domain logic (protocol-agnostic)
//!
//! This module contains all retrieval logic that is independent
//! of the MCP and CLI adapters.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **logging**: tracing subscriber setup
//! - **scope**: Scope name to root mapping
//! - **corpus**: File walking, scope enumeration, last-updated metadata
//! - **search**: Stop-early case-insensitive line search
//! - **sections**: Line-range and header-delimited section extraction
//! - **services**: Unified service container

pub mod config;
pub mod corpus;
pub mod error;
pub mod logging;
pub mod scope;
pub mod search;
pub mod sections;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocsError, Result};
pub use services::Services;
