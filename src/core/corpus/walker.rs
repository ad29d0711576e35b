//! File system walker for Markdown roots.
//!
//! Traverses directory trees in a stable (file-name sorted) order and
//! keeps files whose suffix is one of the configured Markdown
//! extensions. Walk errors (permission denied, broken links) are
//! logged and skipped, never fatal.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File system walker with suffix-based filtering
#[derive(Debug, Clone)]
pub struct FileWalker {
    /// Accepted suffixes, without the leading dot (e.g. "md")
    extensions: Vec<String>,
}

impl FileWalker {
    pub fn new(extensions: Vec<String>) -> Self {
        Self { extensions }
    }

    /// Collect the Markdown files reachable from a scope root
    ///
    /// A root that is itself a Markdown file yields just that file; a
    /// directory yields every Markdown file beneath it at any depth; a
    /// missing root yields nothing.
    pub fn collect_root(&self, root: &Path) -> Vec<PathBuf> {
        if root.is_file() {
            if self.matches(root) {
                vec![root.to_path_buf()]
            } else {
                tracing::debug!("Skipping non-Markdown root: {:?}", root);
                Vec::new()
            }
        } else if root.is_dir() {
            self.collect_files(root)
        } else {
            tracing::debug!("Skipping missing root: {:?}", root);
            Vec::new()
        }
    }

    /// Collect all matching files from a directory
    pub fn collect_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();

                    // Symlinked files count, symlinked directories are not descended
                    if !path.is_file() {
                        continue;
                    }

                    if self.matches(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        files
    }

    /// Check if a path carries one of the accepted suffixes
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|m| m == ext))
            .unwrap_or(false)
    }
}
