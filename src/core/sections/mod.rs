//! Section retrieval: line-range slices and header-delimited sections.

mod headers;
mod slicer;

pub use headers::{extract_from_file, extract_section};
pub use slicer::read_section;

use crate::core::config::SectionsConfig;
use crate::core::error::{DocsError, Result};
use crate::core::scope::ScopeRegistry;
use crate::core::search::SearchService;
use crate::core::types::SectionSlice;
use std::collections::HashSet;
use std::sync::Arc;

/// Section retrieval service
pub struct SectionService {
    scopes: Arc<ScopeRegistry>,
    search: Arc<SearchService>,
    max_lines: usize,
    header_max_lines: usize,
    header_candidates: usize,
}

impl SectionService {
    pub fn new(
        scopes: Arc<ScopeRegistry>,
        search: Arc<SearchService>,
        sections: &SectionsConfig,
        header_candidates: usize,
    ) -> Self {
        Self {
            scopes,
            search,
            max_lines: sections.max_lines,
            header_max_lines: sections.header_max_lines,
            header_candidates,
        }
    }

    /// Read a line range; `max_lines == 0` selects the configured window
    pub fn read_section(
        &self,
        file: &str,
        start_line: i64,
        end_line: Option<i64>,
        max_lines: usize,
    ) -> Result<SectionSlice> {
        let max_lines = if max_lines == 0 {
            self.max_lines
        } else {
            max_lines
        };
        read_section(&self.scopes, file, start_line, end_line, max_lines)
    }

    /// Find the section under a Markdown heading within a scope
    ///
    /// Candidate files come from a capped line search for the header
    /// text. Each distinct candidate is tried once, in first-hit order,
    /// and the first successful extraction is returned. There is no
    /// fallback scan beyond the candidates.
    pub fn section_by_header(
        &self,
        header: &str,
        scope: &str,
        level: Option<usize>,
        max_lines: usize,
    ) -> Result<SectionSlice> {
        let max_lines = if max_lines == 0 {
            self.header_max_lines
        } else {
            max_lines
        };

        let candidates = self
            .search
            .search(scope, header, self.header_candidates as i64)?;

        let mut tried = HashSet::new();
        for hit in &candidates {
            if !tried.insert(hit.file.as_str()) {
                continue;
            }

            let path = self.scopes.resolve_file(&hit.file);
            if let Some(slice) = extract_from_file(&self.scopes, &path, header, level, max_lines) {
                tracing::debug!(
                    "Header '{}' found in {} at line {}",
                    header,
                    slice.file,
                    slice.start_line
                );
                return Ok(slice);
            }
        }

        Err(DocsError::HeaderNotFound {
            header: header.to_string(),
            level,
            scope: scope.to_string(),
        })
    }
}
