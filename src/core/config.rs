//! Configuration management for the docscope engine.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The loaded value is immutable and shared by reference with every
//! component.

use crate::core::error::{DocsError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
}

/// Documentation corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocsConfig {
    /// Fixed repository root; every external file identity is relative to it
    #[serde(default = "default_repo_root")]
    pub repo_root: PathBuf,

    /// File suffixes treated as Markdown (without the leading dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Ordered scope definitions
    #[serde(default = "default_scopes")]
    pub scopes: Vec<ScopeConfig>,
}

/// A named scope and its root locations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScopeConfig {
    pub name: String,

    /// Files or directories, relative to `repo_root` unless absolute
    pub paths: Vec<PathBuf>,
}

impl ScopeConfig {
    pub fn new(name: &str, paths: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            paths: paths.iter().map(PathBuf::from).collect(),
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Scope used by tool surfaces when the caller names none
    #[serde(default = "default_scope")]
    pub default_scope: String,

    /// Result limit used by tool surfaces when the caller gives none
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Limit substituted by the engine for a non-positive limit
    #[serde(default = "default_fallback_limit")]
    pub fallback_limit: usize,

    /// Hits gathered to shortlist files for header lookup
    #[serde(default = "default_header_candidates")]
    pub header_candidates: usize,
}

/// Section retrieval configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SectionsConfig {
    /// Window size for line-range reads without an explicit end
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Cap on the length of a header-delimited section
    #[serde(default = "default_header_max_lines")]
    pub header_max_lines: usize,
}

// Default value functions
fn default_repo_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_scopes() -> Vec<ScopeConfig> {
    vec![
        ScopeConfig::new("unified", &["openai-docs-unified.md"]),
        ScopeConfig::new("api", &["openai-docs-api-reference"]),
        ScopeConfig::new("guides", &["openai-docs-guides"]),
        ScopeConfig::new("python", &["openai-python-docs"]),
        ScopeConfig::new("node", &["openai-node-js-docs"]),
        ScopeConfig::new("agents", &["openai-agents-python-docs"]),
        ScopeConfig::new("cookbook", &["openai-cookbook"]),
    ]
}

fn default_scope() -> String {
    "unified".to_string()
}

fn default_limit() -> usize {
    10
}

fn default_fallback_limit() -> usize {
    20
}

fn default_header_candidates() -> usize {
    8
}

fn default_max_lines() -> usize {
    120
}

fn default_header_max_lines() -> usize {
    200
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            repo_root: default_repo_root(),
            extensions: default_extensions(),
            scopes: default_scopes(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_scope: default_scope(),
            default_limit: default_limit(),
            fallback_limit: default_fallback_limit(),
            header_candidates: default_header_candidates(),
        }
    }
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            max_lines: default_max_lines(),
            header_max_lines: default_header_max_lines(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DocsError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Configuration rooted at `repo_root` with the given scopes and
    /// default settings for everything else.
    pub fn with_scopes(repo_root: impl Into<PathBuf>, scopes: Vec<ScopeConfig>) -> Self {
        let mut config = Self::default();
        config.docs.repo_root = repo_root.into();
        if let Some(first) = scopes.first() {
            config.search.default_scope = first.name.clone();
        }
        config.docs.scopes = scopes;
        config
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. DOCSCOPE_CONFIG env var
    /// 2. XDG config file (~/.config/docscope/config.toml)
    /// 3. Local ./docscope.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("DOCSCOPE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("docscope.toml").exists() {
                Self::from_file("docscope.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(root) = env::var("DOCSCOPE_REPO_ROOT") {
            if !root.trim().is_empty() {
                self.docs.repo_root = PathBuf::from(root);
            }
        }
        if let Ok(scope) = env::var("DOCSCOPE_DEFAULT_SCOPE") {
            if !scope.trim().is_empty() {
                self.search.default_scope = scope.trim().to_string();
            }
        }
        if let Ok(limit) = env::var("DOCSCOPE_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(limit) = env::var("DOCSCOPE_FALLBACK_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.fallback_limit = l;
            }
        }
        if let Ok(candidates) = env::var("DOCSCOPE_HEADER_CANDIDATES") {
            if let Ok(c) = candidates.parse() {
                self.search.header_candidates = c;
            }
        }
        if let Ok(max_lines) = env::var("DOCSCOPE_MAX_LINES") {
            if let Ok(m) = max_lines.parse() {
                self.sections.max_lines = m;
            }
        }
        if let Ok(max_lines) = env::var("DOCSCOPE_HEADER_MAX_LINES") {
            if let Ok(m) = max_lines.parse() {
                self.sections.header_max_lines = m;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.docs.scopes.is_empty() {
            return Err(DocsError::ConfigError(
                "At least one scope must be configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for scope in &self.docs.scopes {
            if scope.name.trim().is_empty() {
                return Err(DocsError::ConfigError(
                    "Scope names must be non-empty".to_string(),
                ));
            }
            if !seen.insert(scope.name.as_str()) {
                return Err(DocsError::ConfigError(format!(
                    "Duplicate scope name: {}",
                    scope.name
                )));
            }
            if scope.paths.is_empty() {
                return Err(DocsError::ConfigError(format!(
                    "Scope '{}' has no paths",
                    scope.name
                )));
            }
        }

        if !seen.contains(self.search.default_scope.as_str()) {
            return Err(DocsError::ConfigError(format!(
                "Default scope '{}' is not a configured scope",
                self.search.default_scope
            )));
        }

        if self.docs.extensions.is_empty()
            || self.docs.extensions.iter().any(|e| e.trim().is_empty())
        {
            return Err(DocsError::ConfigError(
                "Markdown extensions must be non-empty".to_string(),
            ));
        }

        if self.search.default_limit == 0 || self.search.fallback_limit == 0 {
            return Err(DocsError::ConfigError(
                "Search limits must be non-zero".to_string(),
            ));
        }

        if self.search.header_candidates == 0 {
            return Err(DocsError::ConfigError(
                "Header candidate count must be non-zero".to_string(),
            ));
        }

        if self.sections.max_lines == 0 || self.sections.header_max_lines == 0 {
            return Err(DocsError::ConfigError(
                "Section line caps must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Scope names in configuration order
    pub fn scope_names(&self) -> Vec<String> {
        self.docs.scopes.iter().map(|s| s.name.clone()).collect()
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Repo root: {:?}", self.docs.repo_root);
        tracing::info!("  Extensions: {:?}", self.docs.extensions);
        tracing::info!("  Scopes: {}", self.scope_names().join(", "));
        tracing::info!("  Default scope: {}", self.search.default_scope);
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Fallback limit: {}", self.search.fallback_limit);
        tracing::info!("  Header candidates: {}", self.search.header_candidates);
        tracing::info!("  Section window: {} lines", self.sections.max_lines);
        tracing::info!(
            "  Header section cap: {} lines",
            self.sections.header_max_lines
        );
    }
}
