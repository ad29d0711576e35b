//! Search-docs command - substring search within a scope

use crate::cli::output::{colors, print_json, truncate_line};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

const MAX_SNIPPET_CHARS: usize = 120;

/// Arguments for the search-docs command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive substring)
    pub query: String,

    /// Scope to search (defaults to the configured default scope)
    #[arg(long, short = 's')]
    pub scope: Option<String>,

    /// Maximum number of hits; values <= 0 use the configured default
    #[arg(long, short = 'k', allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Only show distinct file paths
    #[arg(long)]
    pub files_only: bool,
}

/// Execute the search-docs command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let search = &services.config.search;
    let scope = args
        .scope
        .clone()
        .unwrap_or_else(|| search.default_scope.clone());
    let limit = match args.limit {
        Some(l) if l > 0 => l,
        _ => search.default_limit as i64,
    };
    let query = args.query.trim();

    let hits = services.search(&scope, query, limit)?;

    match format {
        OutputFormat::Human => {
            if hits.is_empty() {
                println!(
                    "No matches for '{}' in scope '{}'",
                    colors::label(query),
                    colors::scope(&scope)
                );
            } else if args.files_only {
                let mut last: Option<&str> = None;
                for hit in &hits {
                    if last != Some(hit.file.as_str()) {
                        println!("{}", colors::file_path(&hit.file));
                        last = Some(hit.file.as_str());
                    }
                }
            } else {
                println!(
                    "Found {} match(es) in '{}':\n",
                    colors::number(&hits.len().to_string()),
                    colors::scope(&scope)
                );
                for hit in &hits {
                    println!(
                        "{}:{}  {}",
                        colors::file_path(&hit.file),
                        colors::line_number(&hit.line.to_string()),
                        truncate_line(&hit.snippet, MAX_SNIPPET_CHARS)
                    );
                }
            }
        }
        OutputFormat::Json => {
            print_json(&hits)?;
        }
    }

    Ok(())
}
