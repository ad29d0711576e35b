// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Combined single-file corpus, as produced by the offline build step
#[allow(dead_code)] // Used in integration tests
pub const UNIFIED_DOC: &str = "# OpenAI Docs (Unified)

---
# openai-docs-guides/vision.md
## Vision
Learn how to use vision capabilities.
### Quickstart
Send an image URL.
## Audio
Speech to text.

---
# openai-docs-api-reference/chat.md
## Chat Completions
Create a chat completion.";

/// On-disk documentation repository laid out like the default scopes
#[allow(dead_code)] // Used in integration tests
pub struct DocsRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl DocsRepo {
    /// Repository matching the default scope layout
    ///
    /// The cookbook folder is deliberately absent.
    #[allow(dead_code)] // Used in integration tests
    pub fn standard() -> Self {
        Self::with_files(&[
            ("openai-docs-unified.md", UNIFIED_DOC),
            (
                "openai-docs-api-reference/chat.md",
                "# Chat Completions\nCreate a chat completion.\n## Parameters\nmodel: string\n## Response\nA chat completion object.\n",
            ),
            (
                "openai-docs-api-reference/embeddings.md",
                "# Embeddings\nCreate an embedding vector.\n",
            ),
            (
                "openai-docs-guides/vision.md",
                "# Vision\nImages as input.\n## Quickstart\nSend an image URL.\n",
            ),
            (
                "openai-docs-guides/nested/audio.md",
                "# Audio\nTranscription and speech.\n",
            ),
            ("openai-docs-guides/notes.txt", "vision notes, not markdown\n"),
            (
                "openai-python-docs/README.md",
                "# OpenAI Python\nInstall with pip.\n",
            ),
            (
                "openai-node-js-docs/README.md",
                "# OpenAI Node\nInstall with npm.\n",
            ),
            (
                "openai-agents-python-docs/index.md",
                "# Agents SDK\nBuild agents with tools.\n",
            ),
        ])
    }

    /// Repository whose guides folder holds `count` files with `hits_per_file`
    /// matching lines each
    #[allow(dead_code)] // Used in integration tests
    pub fn many_hits(count: usize, hits_per_file: usize) -> Self {
        let mut owned = Vec::new();
        for i in 0..count {
            let mut body = format!("# Page {i}\n");
            for j in 0..hits_per_file {
                body.push_str(&format!("token line {j}\nfiller\n"));
            }
            owned.push((format!("openai-docs-guides/page_{i:03}.md"), body));
        }
        owned.push(("openai-docs-unified.md".to_string(), "# Unified\n".to_string()));

        let refs: Vec<(&str, &str)> = owned
            .iter()
            .map(|(p, c)| (p.as_str(), c.as_str()))
            .collect();
        Self::with_files(&refs)
    }

    /// Create a repository with custom files
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut paths = Vec::new();

        for (path, content) in files {
            let file_path = dir.path().join(path);
            if let Some(parent) = file_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create parent dir");
            }
            std::fs::write(&file_path, content).expect("Failed to write file");
            paths.push(file_path);
        }

        Self { dir, files: paths }
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
