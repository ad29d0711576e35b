//! Core data types for the docscope engine.
//!
//! Every value here is recomputed from disk per query and never
//! mutated after construction.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A Markdown file belonging to a scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// Resolved absolute path (identity, used for deduplication)
    pub absolute: PathBuf,

    /// Path relative to the repository root (external representation)
    pub relative: String,
}

/// A single line matching a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Relative path of the file containing the hit
    pub file: String,

    /// 1-based line number
    pub line: usize,

    /// Matching line with surrounding whitespace trimmed
    pub snippet: String,
}

/// A contiguous, 1-based inclusive range of lines from a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSlice {
    pub file: String,
    pub start_line: usize,
    pub end_line: usize,

    /// Newline-joined text of the included lines
    pub content: String,

    /// Number of included lines
    pub line_count: usize,
}

/// "Last updated" information for the whole corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastUpdated {
    /// Absolute path to the repository root
    pub repo_root: String,

    /// RFC 3339 timestamp in UTC
    pub last_modified_iso: String,

    /// Seconds since the UNIX epoch
    pub last_modified_unix: f64,

    /// Relative path of the most recently modified file
    pub last_modified_file: String,
}
