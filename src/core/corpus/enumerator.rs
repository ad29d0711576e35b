//! Scope file enumeration.

use super::walker::FileWalker;
use crate::core::error::Result;
use crate::core::scope::ScopeRegistry;
use crate::core::types::DocumentFile;
use std::collections::HashSet;
use std::fs;

/// List the Markdown files of a scope
///
/// Files are deduplicated by resolved absolute path (overlapping roots
/// may reach the same file) and sorted by their relative path string so
/// repeated calls return the same order. Missing roots contribute
/// nothing; an empty list is not an error.
pub fn list_files(registry: &ScopeRegistry, scope: &str) -> Result<Vec<DocumentFile>> {
    let roots = registry.resolve_paths(scope)?;
    let walker = FileWalker::new(registry.extensions().to_vec());

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for root in roots {
        for path in walker.collect_root(root) {
            let resolved = fs::canonicalize(&path).unwrap_or(path);
            if seen.insert(resolved.clone()) {
                files.push(DocumentFile {
                    relative: registry.relative_path(&resolved),
                    absolute: resolved,
                });
            }
        }
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));

    tracing::debug!("Scope '{}' resolved to {} files", scope, files.len());

    Ok(files)
}
