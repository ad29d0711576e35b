//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names match MCP tool names (underscores become hyphens in CLI).

pub mod completions;
pub mod config;
pub mod files;
pub mod metadata;
pub mod scopes;
pub mod search;
pub mod section;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use files::FilesArgs;
pub use metadata::MetadataArgs;
pub use scopes::ScopesArgs;
pub use search::SearchArgs;
pub use section::{HeaderArgs, SectionArgs};
