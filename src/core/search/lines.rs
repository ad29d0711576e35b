//! Case-insensitive line matching within a single file.

use crate::core::error::Result;
use crate::core::types::SearchHit;
use std::fs;
use std::path::Path;

/// Read a file as text, replacing invalid UTF-8 sequences
///
/// Callers split the result with `str::lines`, so only `\n` and `\r\n`
/// end a line; a lone `\r`, form feed or Unicode line separator does not.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Find every line of `text` containing `needle`
///
/// `needle` must already be lowercased. Lines are reported top to bottom
/// with 1-based numbers and trimmed snippets.
pub fn match_lines(text: &str, needle: &str, file: &str) -> Vec<SearchHit> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(needle))
        .map(|(idx, line)| SearchHit {
            file: file.to_string(),
            line: idx + 1,
            snippet: line.trim().to_string(),
        })
        .collect()
}

/// Search one file for a lowercased needle
pub fn search_in_file(path: &Path, needle: &str, file: &str) -> Result<Vec<SearchHit>> {
    let text = read_lossy(path)?;
    Ok(match_lines(&text, needle, file))
}
