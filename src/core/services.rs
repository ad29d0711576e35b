//! Unified service container for docscope
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::corpus;
use crate::core::error::Result;
use crate::core::scope::ScopeRegistry;
use crate::core::search::SearchService;
use crate::core::sections::SectionService;
use crate::core::types::{DocumentFile, LastUpdated, SearchHit, SectionSlice};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Scope name to root mapping
    pub scopes: Arc<ScopeRegistry>,

    /// Stop-early line search
    pub search: Arc<SearchService>,

    /// Line-range and header section retrieval
    pub sections: Arc<SectionService>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let scopes = Arc::new(ScopeRegistry::from_config(&config.docs)?);

        let search = Arc::new(SearchService::new(
            Arc::clone(&scopes),
            config.search.fallback_limit,
        ));

        let sections = Arc::new(SectionService::new(
            Arc::clone(&scopes),
            Arc::clone(&search),
            &config.sections,
            config.search.header_candidates,
        ));

        Ok(Self {
            config: Arc::new(config),
            scopes,
            search,
            sections,
        })
    }

    /// Scope names in configuration order
    pub fn list_scopes(&self) -> Vec<String> {
        self.scopes.names()
    }

    pub fn search(&self, scope: &str, query: &str, limit: i64) -> Result<Vec<SearchHit>> {
        self.search.search(scope, query, limit)
    }

    pub fn read_section(
        &self,
        file: &str,
        start_line: i64,
        end_line: Option<i64>,
        max_lines: usize,
    ) -> Result<SectionSlice> {
        self.sections
            .read_section(file, start_line, end_line, max_lines)
    }

    pub fn section_by_header(
        &self,
        header: &str,
        scope: &str,
        level: Option<usize>,
        max_lines: usize,
    ) -> Result<SectionSlice> {
        self.sections
            .section_by_header(header, scope, level, max_lines)
    }

    /// Files of a scope, sorted by relative path
    pub fn list_files(&self, scope: &str) -> Result<Vec<DocumentFile>> {
        corpus::list_files(&self.scopes, scope)
    }

    /// Most recent modification across all scopes
    pub fn last_updated(&self) -> Result<LastUpdated> {
        corpus::last_updated(&self.scopes)
    }
}
