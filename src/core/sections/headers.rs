//! Header-addressed section extraction.
//!
//! A heading is a line that, after leading whitespace, starts with one
//! or more `#` characters followed by visible text. The level is the
//! number of `#` characters and is not capped at 6, so malformed
//! headings such as `####### Deep` still delimit sections.

use crate::core::scope::ScopeRegistry;
use crate::core::search::read_lossy;
use crate::core::types::SectionSlice;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(#+)(.*)$").unwrap());

/// A heading located in a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeadingMatch {
    /// 0-based line index
    index: usize,
    level: usize,
}

/// Parse a heading line into its level and trimmed text
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let caps = HEADING_PATTERN.captures(line)?;
    let level = caps.get(1)?.as_str().len();
    let text = caps.get(2)?.as_str().trim();
    if text.is_empty() {
        None
    } else {
        Some((level, text))
    }
}

/// Find the first heading whose text equals `header` (case-insensitive)
/// and, when given, whose level equals `level`
fn find_heading(lines: &[&str], header: &str, level: Option<usize>) -> Option<HeadingMatch> {
    let target = header.trim().to_lowercase();

    lines.iter().enumerate().find_map(|(index, line)| {
        let (found_level, text) = parse_heading(line)?;
        if level.is_some_and(|l| l != found_level) {
            return None;
        }
        (text.to_lowercase() == target).then_some(HeadingMatch {
            index,
            level: found_level,
        })
    })
}

/// Exclusive end index of the section opened by `heading`
fn section_end(lines: &[&str], heading: HeadingMatch) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(heading.index + 1)
        .find_map(|(idx, line)| match parse_heading(line) {
            Some((level, _)) if level <= heading.level => Some(idx),
            _ => None,
        })
        .unwrap_or(lines.len())
}

/// Extract the section under `header` from already-split lines
///
/// Returns `None` when no heading matches. The section runs from the
/// heading line up to the next heading of the same or shallower level,
/// truncated to `max_lines`.
pub fn extract_section(
    lines: &[&str],
    file: &str,
    header: &str,
    level: Option<usize>,
    max_lines: usize,
) -> Option<SectionSlice> {
    let heading = find_heading(lines, header, level)?;
    let end = section_end(lines, heading).min(heading.index.saturating_add(max_lines));
    let included = &lines[heading.index..end];

    Some(SectionSlice {
        file: file.to_string(),
        start_line: heading.index + 1,
        end_line: end,
        content: included.join("\n"),
        line_count: included.len(),
    })
}

/// Extract a header section from a file on disk
///
/// Unreadable or missing files yield `None` so that a bad candidate
/// does not abort the scan of the remaining ones.
pub fn extract_from_file(
    registry: &ScopeRegistry,
    path: &Path,
    header: &str,
    level: Option<usize>,
    max_lines: usize,
) -> Option<SectionSlice> {
    if !path.is_file() {
        return None;
    }

    let text = match read_lossy(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Skipping unreadable candidate {:?}: {}", path, e);
            return None;
        }
    };
    let lines: Vec<&str> = text.lines().collect();

    extract_section(
        &lines,
        &registry.relative_path(path),
        header,
        level,
        max_lines,
    )
}
