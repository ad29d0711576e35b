//! List-scopes command - show configured documentation scopes

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list-scopes command
#[derive(Args, Debug)]
pub struct ScopesArgs {
    /// Also show each scope's root paths
    #[arg(long, short = 'p')]
    pub paths: bool,
}

#[derive(Debug, Serialize)]
pub struct ScopeEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
}

/// Execute the list-scopes command
pub fn execute(
    args: ScopesArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<ScopeEntry> = services
        .scopes
        .scopes()
        .iter()
        .map(|scope| ScopeEntry {
            name: scope.name.clone(),
            paths: args.paths.then(|| {
                scope
                    .roots
                    .iter()
                    .map(|root| services.scopes.relative_path(root))
                    .collect()
            }),
        })
        .collect();

    match format {
        OutputFormat::Human => {
            let default_scope = &services.config.search.default_scope;
            for entry in &entries {
                let marker = if &entry.name == default_scope {
                    colors::dim(" (default)").to_string()
                } else {
                    String::new()
                };
                println!("{}{}", colors::scope(&entry.name), marker);
                for path in entry.paths.iter().flatten() {
                    println!("    {}", colors::file_path(path));
                }
            }
        }
        OutputFormat::Json => {
            if args.paths {
                print_json(&entries)?;
            } else {
                print_json(&services.list_scopes())?;
            }
        }
    }

    Ok(())
}
