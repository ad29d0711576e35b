// Test helper functions

use docscope::core::config::Config;
use docscope::core::services::Services;
use std::path::Path;
use std::sync::Arc;

/// Configuration with the default scopes rooted at `root`
#[allow(dead_code)] // Used in integration tests
pub fn test_config(root: &Path) -> Config {
    let mut config = Config::default();
    config.docs.repo_root = root.to_path_buf();
    config
}

/// Services over the default scopes rooted at `root`
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(root: &Path) -> Arc<Services> {
    Arc::new(Services::new(test_config(root)).expect("Failed to build services"))
}

/// Write a file of `n` numbered lines ("line 1" .. "line n")
#[allow(dead_code)] // Used in integration tests
pub fn write_numbered(root: &Path, rel: &str, n: usize) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    let body: Vec<String> = (1..=n).map(|i| format!("line {i}")).collect();
    std::fs::write(path, body.join("\n")).expect("Failed to write file");
}
