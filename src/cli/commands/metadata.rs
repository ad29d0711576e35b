//! Get-last-update-metadata command - newest modification in the corpus

use crate::cli::output::{colors, format_relative_time, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-last-update-metadata command
#[derive(Args, Debug)]
pub struct MetadataArgs {}

/// Execute the get-last-update-metadata command
pub fn execute(
    _args: MetadataArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = services.last_updated()?;

    match format {
        OutputFormat::Human => {
            let age = chrono::DateTime::parse_from_rfc3339(&report.last_modified_iso)
                .map(|dt| format_relative_time(&dt.with_timezone(&chrono::Utc)))
                .unwrap_or_default();

            println!("{} {}", colors::label("Repo root:    "), report.repo_root);
            println!(
                "{} {}",
                colors::label("Last modified:"),
                colors::file_path(&report.last_modified_file)
            );
            println!(
                "{} {} {}",
                colors::label("Timestamp:    "),
                report.last_modified_iso,
                colors::dim(&format!("({age})"))
            );
        }
        OutputFormat::Json => {
            print_json(&report)?;
        }
    }

    Ok(())
}
