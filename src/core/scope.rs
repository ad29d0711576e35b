//! Scope registry.
//!
//! Maps scope names to their root locations (single files or directory
//! trees). Built once from [`DocsConfig`] and read-only afterwards.

use crate::core::config::DocsConfig;
use crate::core::error::{DocsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A named scope with its resolved root locations
#[derive(Debug, Clone)]
pub struct Scope {
    pub name: String,

    /// Absolute root paths in configuration order
    pub roots: Vec<PathBuf>,
}

/// Immutable mapping from scope name to root paths
#[derive(Debug, Clone)]
pub struct ScopeRegistry {
    repo_root: PathBuf,
    scopes: Vec<Scope>,
    extensions: Vec<String>,
}

impl ScopeRegistry {
    /// Build the registry from configuration
    ///
    /// The repository root is canonicalized when it exists so that
    /// resolved file paths can be expressed relative to it.
    pub fn from_config(docs: &DocsConfig) -> Result<Self> {
        let repo_root = fs::canonicalize(&docs.repo_root)
            .or_else(|_| std::path::absolute(&docs.repo_root))?;

        if docs.scopes.is_empty() {
            return Err(DocsError::ConfigError(
                "At least one scope must be configured".to_string(),
            ));
        }

        let mut scopes: Vec<Scope> = Vec::with_capacity(docs.scopes.len());
        for scope in &docs.scopes {
            if scope.paths.is_empty() {
                return Err(DocsError::ConfigError(format!(
                    "Scope '{}' has no paths",
                    scope.name
                )));
            }
            if scopes.iter().any(|s| s.name == scope.name) {
                return Err(DocsError::ConfigError(format!(
                    "Duplicate scope name: {}",
                    scope.name
                )));
            }
            scopes.push(Scope {
                name: scope.name.clone(),
                roots: scope.paths.iter().map(|p| repo_root.join(p)).collect(),
            });
        }

        let extensions = docs
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();

        tracing::debug!(
            "Scope registry built: {} scopes under {:?}",
            scopes.len(),
            repo_root
        );

        Ok(Self {
            repo_root,
            scopes,
            extensions,
        })
    }

    /// Scope names in configuration order
    pub fn names(&self) -> Vec<String> {
        self.scopes.iter().map(|s| s.name.clone()).collect()
    }

    /// All scopes in configuration order
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Check whether a scope name is recognized
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s.name == scope)
    }

    /// Resolve a scope to its ordered root paths
    pub fn resolve_paths(&self, scope: &str) -> Result<&[PathBuf]> {
        self.scopes
            .iter()
            .find(|s| s.name == scope)
            .map(|s| s.roots.as_slice())
            .ok_or_else(|| DocsError::UnknownScope {
                scope: scope.to_string(),
                valid: self.names(),
            })
    }

    /// The fixed repository root (absolute)
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Markdown suffixes (without the leading dot)
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// External representation of a path: relative to the repository
    /// root when inside it, the path itself otherwise.
    pub fn relative_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.repo_root) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.to_string_lossy().into_owned(),
            Err(_) => path.to_string_lossy().into_owned(),
        }
    }

    /// Resolve a caller-supplied file path against the repository root
    /// unless it is already absolute.
    pub fn resolve_file(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.repo_root.join(path)
        }
    }
}
