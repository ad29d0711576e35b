// Integration tests for lossy decoding and line terminators
//
// Documentation files are not guaranteed to be valid UTF-8. Invalid byte
// sequences must be replaced rather than failing the whole operation.

use crate::common::{create_test_services, DocsRepo};
use std::fs;

#[test]
fn test_search_survives_invalid_utf8() {
    let repo = DocsRepo::with_files(&[]);
    let dir = repo.path().join("openai-docs-guides");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("broken.md"), b"# Title\nbad \xff\xfe bytes needle\n").unwrap();
    let services = create_test_services(repo.path());

    let hits = services.search("guides", "needle", 10).unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].line, 2);
    assert!(hits[0].snippet.contains('\u{FFFD}'));
}

#[test]
fn test_read_section_invalid_utf8() {
    let repo = DocsRepo::with_files(&[]);
    fs::write(repo.path().join("broken.md"), b"ok\n\xc3\x28 half\nend").unwrap();
    let services = create_test_services(repo.path());

    let slice = services.read_section("broken.md", 1, None, 0).unwrap();

    assert_eq!(slice.line_count, 3);
    assert_eq!(slice.end_line, 3);
}

#[test]
fn test_crlf_line_endings() {
    let repo = DocsRepo::with_files(&[(
        "openai-docs-guides/windows.md",
        "# Windows\r\nfirst\r\n## Next\r\nsecond\r\n",
    )]);
    let services = create_test_services(repo.path());

    let slice = services
        .section_by_header("Windows", "guides", Some(1), 0)
        .unwrap();
    assert_eq!(slice.line_count, 4);
    assert!(!slice.content.contains('\r'));

    let hits = services.search("guides", "first", 10).unwrap();
    assert_eq!(hits[0].snippet, "first");
}

#[test]
fn test_multibyte_snippets() {
    let repo = DocsRepo::with_files(&[(
        "openai-docs-guides/intl.md",
        "# Über\nDie Größe der Antwort 🚀\n",
    )]);
    let services = create_test_services(repo.path());

    let hits = services.search("guides", "GRÖSSE", 10).unwrap();
    assert!(hits.is_empty());

    let hits = services.search("guides", "größe", 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].snippet, "Die Größe der Antwort 🚀");

    let slice = services
        .section_by_header("über", "guides", None, 0)
        .unwrap();
    assert_eq!(slice.start_line, 1);
}
