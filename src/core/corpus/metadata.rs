//! Corpus "last updated" reporting.
//!
//! Walks every root of every scope and reports the Markdown file with
//! the most recent modification time. Works without git.

use super::walker::FileWalker;
use crate::core::error::Result;
use crate::core::scope::ScopeRegistry;
use crate::core::types::LastUpdated;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Report the most recently modified file across all scopes
///
/// Ties keep the first file encountered (scope order, then root order,
/// then walk order). With nothing to inspect the repository root's own
/// modification time is reported.
pub fn last_updated(registry: &ScopeRegistry) -> Result<LastUpdated> {
    let walker = FileWalker::new(registry.extensions().to_vec());

    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for scope in registry.scopes() {
        for root in &scope.roots {
            let candidates = if root.is_file() {
                // A file root counts whatever its suffix
                vec![root.clone()]
            } else if root.is_dir() {
                walker.collect_files(root)
            } else {
                continue;
            };

            for path in candidates {
                let mtime = match fs::metadata(&path).and_then(|m| m.modified()) {
                    Ok(t) => t,
                    Err(e) => {
                        tracing::debug!("Skipping unreadable file {:?}: {}", path, e);
                        continue;
                    }
                };

                let newer = match &latest {
                    Some((best, _)) => mtime > *best,
                    None => true,
                };
                if newer {
                    latest = Some((mtime, path));
                }
            }
        }
    }

    let (mtime, path) = match latest {
        Some(found) => found,
        None => {
            let root = registry.repo_root();
            tracing::debug!("No documents found, falling back to repo root {:?}", root);
            (fs::metadata(root)?.modified()?, root.to_path_buf())
        }
    };

    Ok(build_report(registry, mtime, &path))
}

fn build_report(registry: &ScopeRegistry, mtime: SystemTime, path: &Path) -> LastUpdated {
    let timestamp: DateTime<Utc> = mtime.into();
    let unix = match mtime.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    };

    LastUpdated {
        repo_root: registry.repo_root().to_string_lossy().into_owned(),
        last_modified_iso: timestamp.to_rfc3339_opts(SecondsFormat::Micros, false),
        last_modified_unix: unix,
        last_modified_file: registry.relative_path(path),
    }
}
