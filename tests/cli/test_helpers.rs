//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - A standard documentation repository laid out like the default scopes
//! - Arc<Services> wrappers matching CLI execute() signatures

use crate::common::{create_test_services, DocsRepo};
use docscope::core::services::Services;
use std::sync::Arc;

/// Create test services over the standard repository
///
/// The returned repository must be kept alive for the duration of the test.
pub fn create_cli_test_services() -> (Arc<Services>, DocsRepo) {
    let repo = DocsRepo::standard();
    let services = create_test_services(repo.path());
    (services, repo)
}

/// Create test services over a repository holding only `files`
pub fn create_cli_services_with(files: &[(&str, &str)]) -> (Arc<Services>, DocsRepo) {
    let repo = DocsRepo::with_files(files);
    let services = create_test_services(repo.path());
    (services, repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cli_test_services() {
        let (services, repo) = create_cli_test_services();

        assert!(repo.path().join("openai-docs-unified.md").exists());
        assert_eq!(services.config.search.default_scope, "unified");
    }

    #[test]
    fn test_create_cli_services_with() {
        let (services, repo) = create_cli_services_with(&[("openai-docs-guides/a.md", "# A")]);

        assert!(repo.path().join("openai-docs-guides/a.md").exists());
        assert_eq!(services.list_files("guides").unwrap().len(), 1);
    }
}
