//! Show-config command - show the effective configuration

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show each scope's configured paths
    #[arg(long, short = 'a')]
    pub all: bool,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    pub repo_root: String,
    #[serde(flatten)]
    pub config: &'a crate::core::config::Config,
}

/// Execute the show-config command
pub fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        repo_root: services.scopes.repo_root().to_string_lossy().into_owned(),
        config,
    };

    match format {
        OutputFormat::Human => {
            println!("{}", colors::label("Configuration:"));
            println!("  config_file: {}", response.config_file);
            println!("  repo_root: {}", response.repo_root);
            println!("  extensions: {:?}", config.docs.extensions);
            println!("  scopes: {}", config.scope_names().join(", "));
            if args.all {
                for scope in &config.docs.scopes {
                    let paths: Vec<String> = scope
                        .paths
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect();
                    println!("    {}: {}", colors::scope(&scope.name), paths.join(", "));
                }
            }
            println!("  search:");
            println!("    default_scope: {}", config.search.default_scope);
            println!("    default_limit: {}", config.search.default_limit);
            println!("    fallback_limit: {}", config.search.fallback_limit);
            println!("    header_candidates: {}", config.search.header_candidates);
            println!("  sections:");
            println!("    max_lines: {}", config.sections.max_lines);
            println!("    header_max_lines: {}", config.sections.header_max_lines);
        }
        OutputFormat::Json => {
            print_json(&response)?;
        }
    }

    Ok(())
}
