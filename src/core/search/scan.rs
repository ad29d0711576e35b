//! Stop-early substring search over a scope.
//!
//! Files are visited in the enumerator's sorted order and scanning halts
//! as soon as the collected hit count reaches the limit. Results are not
//! ranked: a later file with better matches can be starved once the cap
//! is hit.

use super::lines::search_in_file;
use crate::core::corpus::list_files;
use crate::core::error::Result;
use crate::core::scope::ScopeRegistry;
use crate::core::types::SearchHit;
use std::sync::Arc;
use std::time::Instant;

/// Line search service
pub struct SearchService {
    scopes: Arc<ScopeRegistry>,
    fallback_limit: usize,
}

impl SearchService {
    /// Create a new search service
    ///
    /// `fallback_limit` replaces a non-positive limit.
    pub fn new(scopes: Arc<ScopeRegistry>, fallback_limit: usize) -> Self {
        Self {
            scopes,
            fallback_limit,
        }
    }

    /// Search a scope for lines containing `query` (case-insensitive)
    ///
    /// The scope is validated first. An empty or whitespace-only query
    /// yields no hits. Files that cannot be read are skipped.
    pub fn search(&self, scope: &str, query: &str, limit: i64) -> Result<Vec<SearchHit>> {
        self.scopes.resolve_paths(scope)?;

        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let limit = self.effective_limit(limit);
        let needle = query.to_lowercase();
        let start = Instant::now();

        let files = list_files(&self.scopes, scope)?;
        let mut hits = Vec::new();
        let mut scanned = 0usize;

        for file in &files {
            scanned += 1;
            match search_in_file(&file.absolute, &needle, &file.relative) {
                Ok(found) => hits.extend(found),
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {}: {}", file.relative, e);
                    continue;
                }
            }

            if hits.len() >= limit {
                break;
            }
        }

        hits.truncate(limit);

        tracing::debug!(
            "Search '{}' in scope '{}': {} hits, {}/{} files scanned in {}ms",
            query,
            scope,
            hits.len(),
            scanned,
            files.len(),
            start.elapsed().as_millis()
        );

        Ok(hits)
    }

    /// Normalize a caller-supplied limit
    pub fn effective_limit(&self, limit: i64) -> usize {
        if limit <= 0 {
            self.fallback_limit
        } else {
            usize::try_from(limit).unwrap_or(usize::MAX)
        }
    }
}
