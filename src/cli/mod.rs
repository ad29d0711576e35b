//! CLI adapter for docscope
//!
//! Provides a command-line interface to the documentation search and
//! retrieval operations. This module is parallel to `mcp/` - both depend
//! on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      mcp/        |      |      cli/        |
//! | (stdio adapter)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docscope - Markdown documentation search
///
/// Search a local Markdown corpus grouped into scopes, and read sections
/// by line range or by heading.
#[derive(Parser, Debug)]
#[command(name = "docscope")]
#[command(version)]
#[command(about = "Search and read local Markdown documentation", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Repository root that scope paths are relative to
    #[arg(long, global = true, env = "DOCSCOPE_REPO_ROOT")]
    pub repo_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match MCP tool names (underscores become hyphens).
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List documentation scopes
    #[command(name = "list-scopes")]
    ListScopes(commands::ScopesArgs),

    /// Case-insensitive substring search within a scope
    #[command(name = "search-docs")]
    SearchDocs(commands::SearchArgs),

    /// Read a file slice by line numbers
    #[command(name = "get-doc-section")]
    GetDocSection(commands::SectionArgs),

    /// Read the section under a Markdown heading
    #[command(name = "get-doc-section-by-header")]
    GetDocSectionByHeader(commands::HeaderArgs),

    /// List the Markdown files of a scope
    #[command(name = "list-doc-files")]
    ListDocFiles(commands::FilesArgs),

    /// Show the most recently modified documentation file
    #[command(name = "get-last-update-metadata")]
    GetLastUpdateMetadata(commands::MetadataArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  docscope completions bash > ~/.local/share/bash-completion/completions/docscope
    ///   zsh:   docscope completions zsh > ~/.zfunc/_docscope
    ///   fish:  docscope completions fish > ~/.config/fish/completions/docscope.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Completions need no configuration
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        other => other,
    };

    let mut config = Config::load()?;
    if let Some(root) = cli.repo_root {
        config.docs.repo_root = root;
    }
    config.log_config();

    let services = Arc::new(Services::new(config)?);

    match command {
        Commands::ListScopes(args) => commands::scopes::execute(args, &services, cli.format),
        Commands::SearchDocs(args) => commands::search::execute(args, &services, cli.format),
        Commands::GetDocSection(args) => commands::section::execute(args, &services, cli.format),
        Commands::GetDocSectionByHeader(args) => {
            commands::section::execute_by_header(args, &services, cli.format)
        }
        Commands::ListDocFiles(args) => commands::files::execute(args, &services, cli.format),
        Commands::GetLastUpdateMetadata(args) => {
            commands::metadata::execute(args, &services, cli.format)
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => Ok(()), // handled above
    }
}
