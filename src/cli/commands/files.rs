//! List-doc-files command - list the Markdown files of a scope

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the list-doc-files command
#[derive(Args, Debug)]
pub struct FilesArgs {
    /// Scope to list
    pub scope: String,

    /// Print absolute paths instead of repository-relative ones
    #[arg(long)]
    pub absolute: bool,
}

/// Execute the list-doc-files command
pub fn execute(
    args: FilesArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = services.list_files(&args.scope)?;

    let paths: Vec<String> = files
        .iter()
        .map(|f| {
            if args.absolute {
                f.absolute.to_string_lossy().into_owned()
            } else {
                f.relative.clone()
            }
        })
        .collect();

    match format {
        OutputFormat::Human => {
            if paths.is_empty() {
                println!(
                    "No Markdown files in scope '{}'",
                    colors::scope(&args.scope)
                );
            } else {
                for path in &paths {
                    println!("{}", colors::file_path(path));
                }
                println!(
                    "\n{} file(s) in '{}'",
                    colors::number(&paths.len().to_string()),
                    colors::scope(&args.scope)
                );
            }
        }
        OutputFormat::Json => {
            print_json(&paths)?;
        }
    }

    Ok(())
}
