//! Section commands - read a file slice by line range or by heading

use crate::cli::output::{colors, print_json, print_numbered};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SectionSlice;
use clap::Args;
use std::sync::Arc;

/// Arguments for the get-doc-section command
#[derive(Args, Debug)]
pub struct SectionArgs {
    /// File path relative to the repository root
    pub file: String,

    /// First line to include (1-based)
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub start_line: i64,

    /// Last line to include (1-based, inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub end_line: Option<i64>,

    /// Window size when --end-line is omitted
    #[arg(long)]
    pub max_lines: Option<usize>,
}

/// Arguments for the get-doc-section-by-header command
#[derive(Args, Debug)]
pub struct HeaderArgs {
    /// Heading text without '#' characters
    pub header: String,

    /// Scope to search (defaults to the configured default scope)
    #[arg(long, short = 's')]
    pub scope: Option<String>,

    /// Require this heading level (2 means '## Header')
    #[arg(long, short = 'l')]
    pub level: Option<usize>,

    /// Maximum section length in lines
    #[arg(long)]
    pub max_lines: Option<usize>,
}

/// Execute the get-doc-section command
pub fn execute(
    args: SectionArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let slice = services.read_section(
        &args.file,
        args.start_line,
        args.end_line,
        args.max_lines.unwrap_or(0),
    )?;
    print_slice(&slice, format)
}

/// Execute the get-doc-section-by-header command
pub fn execute_by_header(
    args: HeaderArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let scope = args
        .scope
        .clone()
        .unwrap_or_else(|| services.config.search.default_scope.clone());

    let slice = services.section_by_header(
        &args.header,
        &scope,
        args.level,
        args.max_lines.unwrap_or(0),
    )?;
    print_slice(&slice, format)
}

fn print_slice(slice: &SectionSlice, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                colors::file_path(&slice.file),
                colors::dim(&format!(
                    "(lines {}-{}, {} line(s))",
                    slice.start_line, slice.end_line, slice.line_count
                ))
            );
            println!();
            print_numbered(&slice.content, slice.start_line);
        }
        OutputFormat::Json => {
            print_json(slice)?;
        }
    }
    Ok(())
}
